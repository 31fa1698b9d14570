//! IP address coercion for loosely-typed config values

use std::net::{IpAddr, Ipv4Addr};

use serde_json::Value;

use crate::error::{ModelError, Result};

/// Unpack a big-endian `u32` into an IPv4 address.
pub fn uint_to_ip(packed: u32) -> Ipv4Addr {
    Ipv4Addr::from(packed)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read an IP address from a config value.
///
/// Accepts an integer in `u32` range (packed IPv4, network byte order) or an
/// IPv4/IPv6 literal string.
pub fn coerce_to_ip(value: &Value) -> Result<IpAddr> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(|v| IpAddr::V4(uint_to_ip(v)))
            .ok_or_else(|| ModelError::InvalidAddress {
                received: "number".to_string(),
                detail: format!("{n} is not a packed IPv4 address"),
            }),
        Value::String(s) => s.parse().map_err(|_| ModelError::InvalidAddress {
            received: "string".to_string(),
            detail: format!("{s} is not a valid ip address"),
        }),
        other => Err(ModelError::InvalidAddress {
            received: json_type_name(other).to_string(),
            detail: format!("cannot convert type {} to ip", json_type_name(other)),
        }),
    }
}
