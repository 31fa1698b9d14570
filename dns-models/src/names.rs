//! Domain name helpers shared by the record model and the codec

/// Short name used for the zone apex.
pub const APEX: &str = "@";

/// Strip trailing dots from a domain name.
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Convert a fully-qualified name into a name relative to `origin`.
///
/// - `"www.example.com."` + `"example.com"` -> `"www"`
/// - `"example.com"` + `"example.com."` -> `"@"`
/// - `"other.net."` + `"example.com"` -> `"other.net"`
///
/// The suffix comparison ignores ASCII case; the returned label keeps the case
/// of `full_name`.
pub fn full_name_to_relative(full_name: &str, origin: &str) -> String {
    let full = full_name.trim_end_matches('.');
    let zone = origin.trim_end_matches('.');

    if full.is_empty() || full == APEX {
        return APEX.to_string();
    }
    if zone.is_empty() {
        return full.to_string();
    }
    if full.eq_ignore_ascii_case(zone) {
        return APEX.to_string();
    }

    // "label" + "." + zone
    if full.len() > zone.len() + 1 {
        let split = full.len() - zone.len();
        if full.is_char_boundary(split)
            && full.as_bytes()[split - 1] == b'.'
            && full[split..].eq_ignore_ascii_case(zone)
        {
            return full[..split - 1].to_string();
        }
    }

    full.to_string()
}

/// Convert a relative name into a fully-qualified name without a trailing dot.
///
/// - `"www"` + `"example.com"` -> `"www.example.com"`
/// - `"@"` + `"example.com."` -> `"example.com"`
pub fn relative_to_full_name(relative_name: &str, origin: &str) -> String {
    let zone = normalize_domain_name(origin);

    if relative_name == APEX || relative_name.is_empty() {
        zone
    } else if zone.is_empty() {
        normalize_domain_name(relative_name)
    } else {
        format!("{relative_name}.{zone}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_from_subdomain() {
        assert_eq!(full_name_to_relative("www.example.com.", "example.com"), "www");
        assert_eq!(
            full_name_to_relative("a.b.example.com", "example.com."),
            "a.b"
        );
    }

    #[test]
    fn relative_apex() {
        assert_eq!(full_name_to_relative("example.com.", "example.com"), "@");
        assert_eq!(full_name_to_relative("EXAMPLE.com", "example.com."), "@");
        assert_eq!(full_name_to_relative("", "example.com"), "@");
    }

    #[test]
    fn relative_case_insensitive_suffix() {
        assert_eq!(full_name_to_relative("WWW.Example.COM.", "example.com"), "WWW");
    }

    #[test]
    fn relative_outside_origin_keeps_full_name() {
        assert_eq!(full_name_to_relative("other.net.", "example.com"), "other.net");
        // Suffix match must fall on a label boundary.
        assert_eq!(
            full_name_to_relative("notexample.com.", "example.com"),
            "notexample.com"
        );
    }

    #[test]
    fn relative_with_root_origin() {
        assert_eq!(full_name_to_relative("www.example.com.", "."), "www.example.com");
    }

    #[test]
    fn full_from_relative() {
        assert_eq!(relative_to_full_name("www", "example.com"), "www.example.com");
        assert_eq!(relative_to_full_name("@", "example.com."), "example.com");
        assert_eq!(relative_to_full_name("", "example.com"), "example.com");
        assert_eq!(relative_to_full_name("www", ""), "www");
    }
}
