//! Zones, registrars and providers

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::copy::copy_obj;
use crate::error::Result;
use crate::grouping::{RecordKey, group};
use crate::record::Record;

/// Top-level DNS configuration: every registrar, provider and zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsConfig {
    /// Registrar accounts, referenced by [`DomainConfig::registrar`].
    #[serde(default)]
    pub registrars: Vec<RegistrarConfig>,
    /// Provider accounts, referenced by [`DomainConfig::dns_providers`].
    #[serde(default)]
    pub dns_providers: Vec<DnsProviderConfig>,
    /// Managed zones, in declaration order.
    #[serde(default)]
    pub domains: Vec<DomainConfig>,
}

impl DnsConfig {
    /// Parse a configuration from its JSON form.
    ///
    /// Record FQDNs are re-derived from each domain's name, so records in the
    /// input only need their short name.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        for domain in &mut config.domains {
            domain.normalize_names();
        }
        log::debug!(
            "Loaded config: {} registrars, {} providers, {} domains",
            config.registrars.len(),
            config.dns_providers.len(),
            config.domains.len()
        );
        Ok(config)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// First domain whose name equals `name` exactly.
    ///
    /// No normalization is applied: case and trailing dots must match.
    pub fn find_domain(&self, name: &str) -> Option<&DomainConfig> {
        self.domains.iter().find(|d| d.name == name)
    }

    /// Mutable variant of [`find_domain`](Self::find_domain).
    pub fn find_domain_mut(&mut self, name: &str) -> Option<&mut DomainConfig> {
        self.domains.iter_mut().find(|d| d.name == name)
    }
}

/// A registrar account referenced by domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Account name that domains refer to.
    pub name: String,
    /// Registrar kind, e.g. `"NONE"` or `"GANDI_V5"`.
    #[serde(rename = "type")]
    pub registrar_type: String,
    /// Registrar-specific settings, kept as raw JSON.
    #[serde(rename = "meta", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A DNS provider account referenced by domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsProviderConfig {
    /// Account name that domains refer to.
    pub name: String,
    /// Provider kind, e.g. `"CLOUDFLAREAPI"`.
    #[serde(rename = "type")]
    pub provider_type: String,
    /// Provider-specific settings, kept as raw JSON.
    #[serde(rename = "meta", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// An authoritative nameserver for a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameserver {
    /// FQDN without a trailing dot.
    pub name: String,
    /// Provider-specific glue, often empty.
    #[serde(default)]
    pub target: String,
}

impl Nameserver {
    /// Build nameservers from plain names, with empty targets.
    pub fn from_names<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|name| Self {
                name: name.into(),
                target: String::new(),
            })
            .collect()
    }
}

/// One zone and everything needed to reconcile it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Apex name, no trailing dot.
    pub name: String,
    /// Name of a [`RegistrarConfig`].
    #[serde(default)]
    pub registrar: String,
    /// Provider name -> weight.
    #[serde(rename = "dnsProviders", default)]
    pub dns_providers: HashMap<String, i32>,
    /// Zone-level settings for providers.
    #[serde(rename = "meta", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Desired records.
    #[serde(default)]
    pub records: Vec<Record>,
    /// Desired delegation, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<Nameserver>,
    /// Leave records that exist only at the provider untouched.
    #[serde(rename = "keepunknown", default)]
    pub keep_unknown: bool,
}

impl DomainConfig {
    /// Empty zone named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registrar: String::new(),
            dns_providers: HashMap::new(),
            metadata: BTreeMap::new(),
            records: Vec::new(),
            nameservers: Vec::new(),
            keep_unknown: false,
        }
    }

    /// Whether a record with exactly this type and short name exists.
    pub fn has_record_type_name(&self, record_type: &str, name: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.record_type == record_type && r.name() == name)
    }

    /// Records grouped by `(type, name)`, in input order within each group.
    pub fn grouped_records(&self) -> HashMap<RecordKey, Vec<&Record>> {
        group(&self.records)
    }

    /// Re-derive every record's FQDN from its short name and this zone.
    pub fn normalize_names(&mut self) {
        let origin = self.name.clone();
        for record in &mut self.records {
            let short = record.name().to_string();
            record.set_label(&short, &origin);
        }
    }

    /// Validate every record against this zone.
    pub fn validate(&self) -> Result<()> {
        self.records.iter().try_for_each(|r| r.validate(&self.name))
    }

    /// Detached snapshot of this zone.
    ///
    /// Nothing is shared with `self`; provider [`Original`](crate::Original)
    /// handles on the records are dropped.
    pub fn copy(&self) -> Result<Self> {
        copy_obj(self)
    }
}
