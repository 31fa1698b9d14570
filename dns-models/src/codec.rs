//! Conversion between [`Record`] and wire-level resource records
//!
//! Encoding goes through an explicit per-type table. A record that cannot be
//! encoded is a bug earlier in the pipeline, so encode errors are fatal.
//! Decoding tolerates wire data it does not understand: unknown payload types
//! produce a recoverable [`ModelError::UnimplementedRecordType`].

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SOA, SRV, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record as WireRecord, RecordType};

use crate::error::{ModelError, Result};
use crate::names::APEX;
use crate::record::{DEFAULT_TTL, Record};
use crate::utils::log_sanitizer::{record_for_log, truncate_for_log};

impl Record {
    /// Encode this record as a wire-level resource record.
    ///
    /// The owner name is the FQDN with a trailing dot, the class is IN, and a
    /// `ttl` of `0` becomes [`DEFAULT_TTL`].
    pub fn to_rr(&self) -> Result<WireRecord> {
        let rdtype = RecordType::from_str(&self.record_type.to_ascii_uppercase()).map_err(|_| {
            log::error!("No such DNS type as {:?}", self.record_type);
            ModelError::UnknownRecordType {
                record_type: self.record_type.clone(),
            }
        })?;

        if self.name().is_empty() || self.name_fqdn().is_empty() {
            return Err(self.malformed("record has no owner name".to_string()));
        }
        let owner = Name::from_ascii(format!("{}.", self.name_fqdn()))
            .map_err(|e| self.malformed(format!("invalid owner name: {e}")))?;
        let ttl = if self.ttl == 0 { DEFAULT_TTL } else { self.ttl };

        let rdata = match rdtype {
            RecordType::A => {
                let ip: Ipv4Addr = self.parse_target("IPv4 address")?;
                RData::A(A(ip))
            }
            RecordType::AAAA => {
                let ip: Ipv6Addr = self.parse_target("IPv6 address")?;
                RData::AAAA(AAAA(ip))
            }
            RecordType::CNAME => RData::CNAME(CNAME(self.parse_name(&self.target)?)),
            RecordType::NS => RData::NS(NS(self.parse_name(&self.target)?)),
            RecordType::PTR => RData::PTR(PTR(self.parse_name(&self.target)?)),
            RecordType::MX => RData::MX(MX::new(self.priority, self.parse_name(&self.target)?)),
            // Stored verbatim as one segment; quoting is the wire format's job.
            RecordType::TXT => RData::TXT(TXT::new(vec![self.target.clone()])),
            RecordType::SOA => RData::SOA(self.soa_rdata()?),
            RecordType::SRV => RData::SRV(self.srv_rdata()?),
            other => return Err(self.malformed(format!("no wire encoder for type {other}"))),
        };

        log::debug!("Encoded {} {} {rdtype}", self.name_fqdn(), ttl);

        let mut rr = WireRecord::from_rdata(owner, ttl, rdata);
        rr.set_dns_class(DNSClass::IN);
        Ok(rr)
    }

    /// Decode a wire-level resource record belonging to the zone `origin`.
    ///
    /// Owner names are lowercased; all names stay in their ASCII (punycode)
    /// form. The TTL is taken as-is. SOA payloads are
    /// flattened to their seven fields joined by spaces, and TXT segments are
    /// joined by a single space, which loses the segment boundaries.
    pub fn from_rr(rr: &WireRecord, origin: &str) -> Result<Self> {
        let record_type = rr.record_type().to_string();
        let owner = rr.name().to_ascii().to_ascii_lowercase();

        let mut priority = 0;
        let target = match rr.data() {
            RData::A(a) => a.0.to_string(),
            RData::AAAA(aaaa) => aaaa.0.to_string(),
            RData::CNAME(cname) => cname.0.to_ascii(),
            RData::NS(ns) => ns.0.to_ascii(),
            RData::MX(mx) => {
                priority = mx.preference();
                mx.exchange().to_ascii()
            }
            RData::SOA(soa) => format!(
                "{} {} {} {} {} {} {}",
                soa.mname().to_ascii(),
                soa.rname().to_ascii(),
                soa.serial(),
                soa.refresh().cast_unsigned(),
                soa.retry().cast_unsigned(),
                soa.expire().cast_unsigned(),
                soa.minimum()
            ),
            RData::TXT(txt) => txt
                .txt_data()
                .iter()
                .map(|segment| String::from_utf8_lossy(segment))
                .collect::<Vec<_>>()
                .join(" "),
            other => {
                return Err(ModelError::UnimplementedRecordType {
                    record_type,
                    detail: format!("{owner} {}", truncate_for_log(&other.to_string())),
                });
            }
        };

        let mut record = Self::new(record_type, APEX, origin, target)
            .with_ttl(rr.ttl())
            .with_priority(priority);
        record.set_label_from_fqdn(&owner, origin);

        log::debug!(
            "Decoded {} {} {}",
            record.name_fqdn(),
            record.record_type,
            truncate_for_log(&record.target)
        );
        Ok(record)
    }

    fn malformed(&self, detail: String) -> ModelError {
        let record = record_for_log(self);
        log::error!("Wire encoding rejected record {record}: {detail}");
        ModelError::MalformedRecord { record, detail }
    }

    fn parse_target<T: FromStr>(&self, what: &str) -> Result<T> {
        self.target
            .parse()
            .map_err(|_| self.malformed(format!("target is not a valid {what}")))
    }

    fn parse_name(&self, text: &str) -> Result<Name> {
        Name::from_ascii(text).map_err(|e| self.malformed(format!("invalid name '{text}': {e}")))
    }

    fn parse_field<T: FromStr>(&self, field: &str, what: &str) -> Result<T> {
        field
            .parse()
            .map_err(|_| self.malformed(format!("invalid {what} '{field}'")))
    }

    /// `mname rname serial refresh retry expire minimum`
    ///
    /// The interval fields are unsigned in text and reinterpreted as the
    /// signed 32-bit values the wire type stores.
    fn soa_rdata(&self) -> Result<SOA> {
        let fields: Vec<&str> = self.target.split_whitespace().collect();
        let [mname, rname, serial, refresh, retry, expire, minimum] = fields[..] else {
            return Err(self.malformed(format!(
                "SOA target needs 7 fields, got {}",
                fields.len()
            )));
        };
        Ok(SOA::new(
            self.parse_name(mname)?,
            self.parse_name(rname)?,
            self.parse_field(serial, "serial")?,
            self.parse_field::<u32>(refresh, "refresh")?.cast_signed(),
            self.parse_field::<u32>(retry, "retry")?.cast_signed(),
            self.parse_field::<u32>(expire, "expire")?.cast_signed(),
            self.parse_field(minimum, "minimum")?,
        ))
    }

    /// `priority weight port target`
    fn srv_rdata(&self) -> Result<SRV> {
        let fields: Vec<&str> = self.target.split_whitespace().collect();
        let [priority, weight, port, target] = fields[..] else {
            return Err(self.malformed(format!(
                "SRV target needs 4 fields, got {}",
                fields.len()
            )));
        };
        Ok(SRV::new(
            self.parse_field(priority, "priority")?,
            self.parse_field(weight, "weight")?,
            self.parse_field(port, "port")?,
            self.parse_name(target)?,
        ))
    }
}

/// Decode a batch of wire records, e.g. the result of a zone transfer.
///
/// Recoverable failures are logged and the record is skipped; any other error
/// aborts the batch.
pub fn records_from_rrs<'a, I>(rrs: I, origin: &str) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = &'a WireRecord>,
{
    let mut records = Vec::new();
    for rr in rrs {
        match Record::from_rr(rr, origin) {
            Ok(record) => records.push(record),
            Err(e) if e.is_recoverable() => {
                log::warn!("Skipping record in zone {origin}: {e}");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(records)
}
