//! Input normalisation helpers for host names and community strings.
//!
//! Every user-supplied string passes through one of these functions before
//! reaching the external tools, ensuring a single canonical representation
//! (trimmed, bounded, restricted character set).

use crate::constants::MAX_INPUT_LENGTH;

/// Normalise a target host name or address: trim whitespace and validate.
///
/// Accepts hostnames, FQDNs, and IPv4/IPv6 literals. Returns an error if
/// the result is empty, too long, or carries characters that no hostname
/// or address uses.
pub fn normalize_host(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("cannot be empty".to_string());
    }

    if trimmed.len() > MAX_INPUT_LENGTH {
        return Err(format!("exceeds {} characters", MAX_INPUT_LENGTH));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' || c == ':')
    {
        return Err(format!(
            "'{}' contains invalid characters (allowed: A-Z, 0-9, '.', '-', '_', ':')",
            trimmed
        ));
    }

    Ok(trimmed.to_string())
}

/// Normalise a community string: trim whitespace and validate.
///
/// Community strings may carry symbols, so only whitespace and control
/// characters are rejected.
pub fn normalize_community(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("cannot be empty".to_string());
    }

    if trimmed.len() > MAX_INPUT_LENGTH {
        return Err(format!("exceeds {} characters", MAX_INPUT_LENGTH));
    }

    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("contains whitespace or control characters".to_string());
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_host_accepts_names_and_addresses() {
        assert_eq!(normalize_host("web01").unwrap(), "web01");
        assert_eq!(normalize_host("web01.example.com").unwrap(), "web01.example.com");
        assert_eq!(normalize_host("  web01  ").unwrap(), "web01");
        assert_eq!(normalize_host("192.0.2.10").unwrap(), "192.0.2.10");
        assert_eq!(normalize_host("2001:db8::10").unwrap(), "2001:db8::10");
    }

    #[test]
    fn normalize_host_rejects_bad_input() {
        assert!(normalize_host("").is_err());
        assert!(normalize_host("   ").is_err());
        assert!(normalize_host("web 01").is_err());
        assert!(normalize_host("web01;rm").is_err());
        assert!(normalize_host(&"a".repeat(300)).is_err());
    }

    #[test]
    fn normalize_community_trims_and_validates() {
        assert_eq!(normalize_community("public").unwrap(), "public");
        assert_eq!(normalize_community("  r3ad-0nly!  ").unwrap(), "r3ad-0nly!");
        assert!(normalize_community("").is_err());
        assert!(normalize_community("has space").is_err());
        assert!(normalize_community("has\ttab").is_err());
        assert!(normalize_community(&"a".repeat(300)).is_err());
    }
}
