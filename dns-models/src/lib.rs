//! # dns-models
//!
//! A provider-agnostic DNS record model, with conversion to and from
//! wire-level resource records ([`hickory_proto::rr::Record`]).
//!
//! ## Overview
//!
//! - [`Record`] — one normalized resource record. Its short name (`"www"`,
//!   `"@"`) and fully-qualified name (`"www.example.com"`) are always set
//!   together.
//! - [`Record::to_rr`] / [`Record::from_rr`] — the codec. Encoding failures are
//!   fatal; decoding failures on unsupported wire types are recoverable.
//! - [`RecordKey`] / [`group`] — stable `(type, name)` grouping for diffing.
//! - [`DomainConfig`] / [`DnsConfig`] — zones plus registrar and provider
//!   references, with [`DnsConfig::find_domain`] and
//!   [`DomainConfig::has_record_type_name`].
//! - [`DomainConfig::copy`] / [`Record::copy`] — fully detached snapshots.
//! - [`coerce_to_ip`] — reads an address from a JSON number or string.
//! - [`Correction`] — a described, run-once unit of work.
//!
//! ## Usage
//!
//! ```rust
//! use dns_models::{DEFAULT_TTL, Record};
//!
//! # fn main() -> dns_models::Result<()> {
//! let record = Record::new("MX", "@", "example.com", "mail.example.com.").with_priority(10);
//! let rr = record.to_rr()?;
//! assert_eq!(rr.ttl(), DEFAULT_TTL);
//!
//! let back = Record::from_rr(&rr, "example.com")?;
//! assert_eq!(back.name(), "@");
//! assert_eq!(back.priority, 10);
//! assert_eq!(back.target, "mail.example.com.");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, ModelError>`](ModelError).
//! [`ModelError::is_fatal`] and [`ModelError::is_recoverable`] tell callers
//! whether to abort or to log and skip.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Record payloads are truncated in log lines.

mod address;
mod codec;
mod copy;
mod correction;
mod domain;
mod error;
mod grouping;
mod names;
mod record;
mod utils;

pub use error::{ModelError, Result};

pub use address::{coerce_to_ip, uint_to_ip};
pub use codec::records_from_rrs;
pub use correction::{Correction, CorrectionError, CorrectionResult};
pub use domain::{DnsConfig, DnsProviderConfig, DomainConfig, Nameserver, RegistrarConfig};
pub use grouping::{RecordKey, group};
pub use names::{APEX, full_name_to_relative, normalize_domain_name, relative_to_full_name};
pub use record::{DEFAULT_TTL, Original, Record};

pub use utils::log_sanitizer;
