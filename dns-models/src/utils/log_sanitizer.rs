//! Log sanitization utilities
//!
//! Keeps long record payloads (DKIM keys, SPF chains, SOA strings) from being
//! written whole into error and debug logs, while leaving enough of the record
//! to tell which one it was.

use crate::record::Record;

/// Maximum number of payload bytes to include in log output.
const TRUNCATE_LIMIT: usize = 128;

/// Longest prefix of `s` that fits in `limit` bytes without splitting a char.
fn payload_prefix(s: &str, limit: usize) -> &str {
    let end = (0..=limit.min(s.len()))
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    &s[..end]
}

/// Truncate a record payload for logging.
///
/// Payloads within the limit are returned unchanged; longer ones keep their
/// first `TRUNCATE_LIMIT` bytes followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!("{}... [{} bytes]", payload_prefix(s, TRUNCATE_LIMIT), s.len())
    }
}

/// `type owner payload` for a log line, with only the payload truncated.
pub fn record_for_log(record: &Record) -> String {
    format!(
        "{} {} {}",
        record.record_type,
        record.name_fqdn(),
        truncate_for_log(&record.target)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payload_unchanged() {
        assert_eq!(truncate_for_log("v=spf1 -all"), "v=spf1 -all");
    }

    #[test]
    fn payload_at_limit_unchanged() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_dkim_key_truncated() {
        let key = format!("v=DKIM1; k=rsa; p={}", "A".repeat(400));
        let result = truncate_for_log(&key);
        assert!(result.starts_with("v=DKIM1; k=rsa; p=AAAA"));
        assert!(result.ends_with(&format!("... [{} bytes]", key.len())));
        assert!(result.len() < key.len());
    }

    #[test]
    fn multibyte_boundary_respected() {
        // 'é' is 2 bytes; byte 127 falls inside the 64th one.
        let s = format!("x{}", "é".repeat(100));
        let result = truncate_for_log(&s);
        assert_eq!(result, format!("x{}... [201 bytes]", "é".repeat(63)));
    }

    #[test]
    fn record_keeps_type_and_owner() {
        let key = format!("v=DKIM1; p={}", "B".repeat(300));
        let r = Record::new("TXT", "mail._domainkey", "example.com", key.clone());
        let line = record_for_log(&r);
        assert!(line.starts_with("TXT mail._domainkey.example.com v=DKIM1; p=BBB"));
        assert!(line.ends_with(&format!("... [{} bytes]", key.len())));
    }
}
