//! Probe target and query value types.
//!
//! SECURITY: The community string is a shared secret; `Community`
//! implements `Drop` to clear it and never reveals it through `Debug`.

use std::fmt;

/// Read-access community string for SNMP protocol version 1
///
/// SECURITY: This type never implements Display or Debug in a way that
/// reveals the secret.
pub struct Community(String);

impl Clone for Community {
    fn clone(&self) -> Self {
        Community(self.0.clone())
    }
}

impl Community {
    /// Create a new community string
    pub fn new(value: impl Into<String>) -> Self {
        Community(value.into())
    }

    /// Get the community as a string slice
    ///
    /// Use this sparingly and only when building the query-tool argv.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for Community {
    fn drop(&mut self) {
        // Zero the memory
        // SAFETY: We own this String and are zeroing it before drop
        unsafe {
            let bytes = self.0.as_bytes_mut();
            for byte in bytes {
                std::ptr::write_volatile(byte, 0);
            }
        }
    }
}

impl fmt::Debug for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SECURITY: Never reveal the community content
        write!(f, "Community(*** {} bytes ***)", self.0.len())
    }
}

/// One probe target: a host plus the community used to query it
///
/// Created once from resolved configuration; immutable afterward.
#[derive(Clone, Debug)]
pub struct Target {
    host: String,
    community: Community,
}

impl Target {
    /// Create a new target
    pub fn new(host: impl Into<String>, community: Community) -> Self {
        Target {
            host: host.into(),
            community,
        }
    }

    /// Get the host name or address
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the community string
    pub fn community(&self) -> &Community {
        &self.community
    }
}

/// One scalar MIB query and how to classify its response
///
/// Three fixed instances are defined in [`crate::constants::QUERY_SPECS`];
/// they are never mutated. `expect_marker` is matched case-insensitively
/// against each response line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySpec {
    /// Short human name, used in diagnostics only
    pub name: &'static str,
    /// Dotted numeric object identifier
    pub oid: &'static str,
    /// Type marker expected somewhere in a successful response
    pub expect_marker: &'static str,
    /// Identifier-plus-advice text for the failure message
    pub failure_advice: &'static str,
}

impl QuerySpec {
    /// Message stored when the response carried the expected marker
    pub fn success_message(&self, host: &str) -> String {
        format!("response from {} on {}", host, self.oid)
    }

    /// Message surfaced when the response did not carry the marker
    pub fn failure_message(&self, host: &str) -> String {
        format!("no response from {} on {}", host, self.failure_advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::QUERY_SPECS;

    #[test]
    fn test_community_debug_no_leak() {
        let community = Community::new("s3cret-community");
        let debug_output = format!("{:?}", community);
        assert!(!debug_output.contains("s3cret"));
        assert!(debug_output.contains("16 bytes"));
    }

    #[test]
    fn test_target_debug_no_leak() {
        let target = Target::new("web01", Community::new("s3cret"));
        let debug_output = format!("{:?}", target);
        assert!(debug_output.contains("web01"));
        assert!(!debug_output.contains("s3cret"));
    }

    #[test]
    fn test_target_accessors() {
        let target = Target::new("web01", Community::new("public"));
        assert_eq!(target.host(), "web01");
        assert_eq!(target.community().as_str(), "public");
    }

    #[test]
    fn test_query_spec_messages() {
        let spec = &QUERY_SPECS[0];
        assert_eq!(
            spec.success_message("web01"),
            "response from web01 on 1.3.6.1.2.1.25.1.1.0"
        );
        assert_eq!(
            spec.failure_message("web01"),
            "no response from web01 on host-resources MIB 1.3.6.1.2.1.25.1.1.0"
        );
    }

    #[test]
    fn test_vendor_spec_messages_carry_advice() {
        let vendor = &QUERY_SPECS[1];
        let message = vendor.failure_message("web01");
        assert!(message.starts_with("no response from web01 on 1.3.6.1.4.1.2.6.191.1.2.1.0."));
        assert!(message.contains("vendor system MIB"));

        let perf = &QUERY_SPECS[2];
        let message = perf.failure_message("web01");
        assert!(
            message.starts_with("no response from web01 on 1.3.6.1.4.1.2.3.1.2.2.2.1.1.1.1.1.")
        );
        assert!(message.contains("performance agent daemon"));
    }
}
