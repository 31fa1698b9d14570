//! Unified error type for the record model

use serde::Serialize;
use thiserror::Error;

/// Error type for record conversion, lookup and copy operations.
///
/// Variants fall into three groups:
///
/// - **Fatal**: [`UnknownRecordType`](Self::UnknownRecordType) and
///   [`MalformedRecord`](Self::MalformedRecord). An already-invalid record
///   reached the encoder; the enclosing operation should abort.
/// - **Recoverable**: [`UnimplementedRecordType`](Self::UnimplementedRecordType)
///   and [`InvalidAddress`](Self::InvalidAddress). The caller should log,
///   skip the offending value and keep going.
/// - **Structural**: [`Copy`](Self::Copy), [`InvalidRecord`](Self::InvalidRecord)
///   and [`Serialization`](Self::Serialization).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ModelError {
    /// The record type is not a DNS type known to the wire library.
    #[error("No such DNS type: {record_type}")]
    UnknownRecordType { record_type: String },

    /// The record could not be turned into a wire record (bad target, bad owner
    /// name, or a type without a wire encoder).
    #[error("Malformed record '{record}': {detail}")]
    MalformedRecord { record: String, detail: String },

    /// A wire record of a type the decoder does not handle.
    #[error("Unimplemented zone record type={record_type} ({detail})")]
    UnimplementedRecordType { record_type: String, detail: String },

    /// A value that cannot be read as an IP address.
    #[error("Invalid address ({received}): {detail}")]
    InvalidAddress { received: String, detail: String },

    /// Deep copy failed; no partial copy is returned.
    #[error("Copy error: {0}")]
    Copy(String),

    /// A record violates the label/target invariants.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Structured text could not be parsed or produced.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ModelError {
    /// Whether the caller may skip the offending value and continue.
    ///
    /// Returning `true` means a `warn` log level is appropriate, `false` means
    /// `error`. **Update this method when adding variants.**
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnimplementedRecordType { .. } | Self::InvalidAddress { .. }
        )
    }

    /// Whether the error means an invalid record reached the encoder.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownRecordType { .. } | Self::MalformedRecord { .. }
        )
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Convenience type alias for `Result<T, ModelError>`.
pub type Result<T> = std::result::Result<T, ModelError>;
