//! Utility modules.

/// Log sanitization for record payloads.
pub mod log_sanitizer;
