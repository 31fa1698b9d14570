//! Shared test fixtures and helpers

#![allow(dead_code)]

use std::str::FromStr;

use dns_models::{DomainConfig, Nameserver, Record};
use hickory_proto::rr::{Name, RData, Record as WireRecord};

pub const ZONE: &str = "example.com";

/// Assert that an `Option` is `Some` and unwrap it (fail the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fail the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Record types covered by the encode/decode round-trip.
#[derive(Debug, Clone, Copy)]
pub enum RoundTripType {
    A,
    Aaaa,
    Cname,
    Ns,
    Mx,
    Txt,
    Soa,
}

pub const ROUND_TRIP_TYPES: [RoundTripType; 7] = [
    RoundTripType::A,
    RoundTripType::Aaaa,
    RoundTripType::Cname,
    RoundTripType::Ns,
    RoundTripType::Mx,
    RoundTripType::Txt,
    RoundTripType::Soa,
];

/// A representative record of the given type in [`ZONE`].
pub fn sample_record(record_type: RoundTripType) -> Record {
    match record_type {
        RoundTripType::A => Record::new("A", "www", ZONE, "192.0.2.1").with_ttl(3600),
        RoundTripType::Aaaa => Record::new("AAAA", "www", ZONE, "2001:db8::1"),
        RoundTripType::Cname => Record::new("CNAME", "blog", ZONE, "www.example.com."),
        RoundTripType::Ns => Record::new("NS", "sub", ZONE, "ns1.example.net."),
        RoundTripType::Mx => {
            Record::new("MX", "@", ZONE, "mail.example.com.").with_priority(10)
        }
        RoundTripType::Txt => Record::new(
            "TXT",
            "_dmarc",
            ZONE,
            "v=DMARC1; p=reject; rua=mailto:dmarc@example.com",
        ),
        RoundTripType::Soa => Record::new(
            "SOA",
            "@",
            ZONE,
            "ns1.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 300",
        ),
    }
}

/// A zone with a few records, registrar and provider references.
pub fn sample_domain() -> DomainConfig {
    let mut dc = DomainConfig::new(ZONE);
    dc.registrar = "none".to_string();
    dc.dns_providers.insert("cloudflare".to_string(), -1);
    dc.metadata.insert("owner".to_string(), "ops".to_string());
    dc.records = ROUND_TRIP_TYPES.iter().map(|t| sample_record(*t)).collect();
    dc.nameservers = Nameserver::from_names(["ns1.example.net", "ns2.example.net"]);
    dc.keep_unknown = true;
    dc
}

/// Build a wire record, returning `None` if `owner` is not a valid name.
pub fn wire(owner: &str, ttl: u32, rdata: RData) -> Option<WireRecord> {
    let name = Name::from_str(owner).ok()?;
    Some(WireRecord::from_rdata(name, ttl, rdata))
}
