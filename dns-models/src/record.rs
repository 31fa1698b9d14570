//! The normalized DNS record

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::copy::copy_obj;
use crate::error::{ModelError, Result};
use crate::grouping::RecordKey;
use crate::names::{APEX, full_name_to_relative, normalize_domain_name, relative_to_full_name};

/// TTL substituted at encode time for records whose `ttl` is `0`.
pub const DEFAULT_TTL: u32 = 300;

fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// Opaque handle to the provider-native object a record was built from.
///
/// Used only by diffing code to match a record back to its provider object.
/// Cloning a [`Record`] shares the handle; [`Record::copy`] drops it.
#[derive(Clone)]
pub struct Original(Arc<dyn Any + Send + Sync>);

impl Original {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the provider object if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Original {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Original(..)")
    }
}

/// A single DNS resource record.
///
/// The short name and the fully-qualified name are private and always set
/// together through [`set_label`](Self::set_label) or
/// [`set_label_from_fqdn`](Self::set_label_from_fqdn), so they cannot drift
/// apart.
///
/// Name-valued targets (CNAME, NS, MX, PTR, SRV) are stored fully qualified,
/// with a trailing dot.
#[derive(Clone, Serialize, Deserialize)]
pub struct Record {
    /// Record type mnemonic (`"A"`, `"MX"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    name: String,
    /// Record payload as text.
    pub target: String,
    /// TTL in seconds; `0` means [`DEFAULT_TTL`].
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ttl: u32,
    /// Provider-specific attributes. Never wire-encoded.
    #[serde(rename = "meta", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    // Empty when deserialized without it; the zone re-derives it.
    #[serde(rename = "namefqdn", default, skip_serializing_if = "String::is_empty")]
    name_fqdn: String,
    /// MX preference. Ignored by other types.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub priority: u16,
    /// Provider-native object, see [`Original`].
    #[serde(skip)]
    pub original: Option<Original>,
}

impl Record {
    /// Create a record named `label` within `origin`.
    pub fn new(
        record_type: impl Into<String>,
        label: &str,
        origin: &str,
        target: impl Into<String>,
    ) -> Self {
        let mut record = Self {
            record_type: record_type.into(),
            name: String::new(),
            target: target.into(),
            ttl: 0,
            metadata: BTreeMap::new(),
            name_fqdn: String::new(),
            priority: 0,
            original: None,
        };
        record.set_label(label, origin);
        record
    }

    /// Set the TTL in seconds.
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the MX preference.
    #[must_use]
    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    /// Add one provider-specific attribute.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Short name (`"@"` at the apex).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified name without a trailing dot.
    pub fn name_fqdn(&self) -> &str {
        &self.name_fqdn
    }

    /// Set the short name and derive the FQDN from `origin`.
    ///
    /// An empty label means the apex.
    pub fn set_label(&mut self, short: &str, origin: &str) {
        let short = short.trim_end_matches('.');
        self.name = if short.is_empty() {
            APEX.to_string()
        } else {
            short.to_string()
        };
        self.name_fqdn = relative_to_full_name(&self.name, origin);
    }

    /// Set the FQDN and derive the short name relative to `origin`.
    pub fn set_label_from_fqdn(&mut self, fqdn: &str, origin: &str) {
        self.name_fqdn = normalize_domain_name(fqdn);
        self.name = full_name_to_relative(&self.name_fqdn, origin);
    }

    /// Grouping key for this record.
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.record_type, &self.name)
    }

    /// Check the record's shape against the zone `origin`.
    pub fn validate(&self, origin: &str) -> Result<()> {
        if self.record_type.is_empty() {
            return Err(ModelError::InvalidRecord(format!(
                "record '{}' has no type",
                self.name
            )));
        }
        if self.target.is_empty() {
            return Err(ModelError::InvalidRecord(format!(
                "{} record '{}' has no target",
                self.record_type, self.name
            )));
        }
        if self.name.is_empty() || self.name.ends_with('.') {
            return Err(ModelError::InvalidRecord(format!(
                "invalid short name '{}'",
                self.name
            )));
        }

        let zone = normalize_domain_name(origin);
        if !zone.is_empty() {
            let suffix = format!(".{zone}").to_ascii_lowercase();
            let lowered = self.name.to_ascii_lowercase();
            if lowered == zone.to_ascii_lowercase() || lowered.ends_with(&suffix) {
                return Err(ModelError::InvalidRecord(format!(
                    "short name '{}' is qualified with the zone '{zone}'",
                    self.name
                )));
            }
        }

        let expected = relative_to_full_name(&self.name, origin);
        if self.name_fqdn.ends_with('.') || !self.name_fqdn.eq_ignore_ascii_case(&expected) {
            return Err(ModelError::InvalidRecord(format!(
                "name '{}' and FQDN '{}' disagree (expected '{expected}')",
                self.name, self.name_fqdn
            )));
        }
        Ok(())
    }

    /// Detached snapshot of this record. The [`Original`] handle is dropped.
    pub fn copy(&self) -> Result<Self> {
        copy_obj(self)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.record_type == other.record_type
            && self.name == other.name
            && self.name_fqdn == other.name_fqdn
            && self.target == other.target
            && self.ttl == other.ttl
            && self.priority == other.priority
            && self.metadata == other.metadata
    }
}

impl Eq for Record {}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("record_type", &self.record_type)
            .field("name", &self.name)
            .field("name_fqdn", &self.name_fqdn)
            .field("target", &self.target)
            .field("ttl", &self.ttl)
            .field("priority", &self.priority)
            .field("metadata", &self.metadata)
            .field("original", &self.original)
            .finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.record_type, self.name_fqdn, self.target, self.ttl
        )?;
        if self.record_type == "MX" {
            write!(f, " priority={}", self.priority)?;
        }
        for (k, v) in &self.metadata {
            write!(f, " {k}={v}")?;
        }
        Ok(())
    }
}
