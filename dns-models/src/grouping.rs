//! Record keys and grouping

use std::collections::HashMap;

use crate::record::Record;

/// `(type, short name)` pair identifying a record set.
///
/// Several records may share one key, e.g. multiple A records for one name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    /// Record type mnemonic, compared verbatim.
    pub record_type: String,
    /// Short name, `"@"` at the apex.
    pub name: String,
}

impl RecordKey {
    pub fn new(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.record_type)
    }
}

/// Group records by [`RecordKey`].
///
/// Within a group, records keep their input order. Nothing is deduplicated,
/// sorted or checked for consistency.
pub fn group<'a, I>(records: I) -> HashMap<RecordKey, Vec<&'a Record>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut grouped: HashMap<RecordKey, Vec<&'a Record>> = HashMap::new();
    for record in records {
        grouped.entry(record.key()).or_default().push(record);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("A", "www", "example.com", "1.1.1.1"),
            Record::new("MX", "@", "example.com", "mx1.example.com.").with_priority(10),
            Record::new("A", "www", "example.com", "2.2.2.2").with_ttl(60),
            Record::new("AAAA", "www", "example.com", "2001:db8::1"),
            Record::new("A", "www", "example.com", "1.1.1.1"),
        ]
    }

    #[test]
    fn groups_by_type_and_name() {
        let records = sample();
        let grouped = group(&records);
        assert_eq!(grouped.len(), 3);

        let a = &grouped[&RecordKey::new("A", "www")];
        let targets: Vec<&str> = a.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, ["1.1.1.1", "2.2.2.2", "1.1.1.1"]);
        // Conflicting TTLs are passed through.
        assert_eq!(a[1].ttl, 60);
    }

    #[test]
    fn grouping_is_stable() {
        let records = sample();
        assert_eq!(group(&records), group(&records));
    }

    #[test]
    fn empty_input() {
        let records: Vec<Record> = Vec::new();
        assert!(group(&records).is_empty());
    }

    #[test]
    fn key_display() {
        assert_eq!(RecordKey::new("MX", "@").to_string(), "@ MX");
    }
}
