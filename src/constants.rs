//! # Application-Wide Constants
//!
//! Centralized configuration values used throughout mibprobe.
//!
//! Constants are defined here (rather than scattered across modules) to
//! keep a single source of truth: grep for a constant name and you find
//! its definition plus every use.

use crate::models::QuerySpec;

// ============================================================================
// Report Line
// ============================================================================

/// Check name prefixed to the single report line.
///
/// The downstream monitoring supervisor keys its display on this token,
/// so it must stay stable across releases.
pub const CHECK_NAME: &str = "HOSTMIB";

// ============================================================================
// Configuration Defaults
// ============================================================================

/// Community string used when none is supplied.
///
/// `public` is the conventional read-only community for SNMP version 1.
pub const DEFAULT_COMMUNITY: &str = "public";

/// Host used when the local machine name cannot be determined.
pub const FALLBACK_HOST: &str = "localhost";

/// Maximum accepted length for user-supplied host and community strings.
///
/// DNS hostnames are limited to 253 characters (RFC 1035); 255 gives a
/// small buffer and matches common validation.
pub const MAX_INPUT_LENGTH: usize = 255;

// ============================================================================
// Reachability Probe
// ============================================================================

/// Number of echo requests sent per reachability check.
///
/// Four probes make the packet-loss percentage land on 0/25/50/75/100,
/// which is what the output classifier keys on.
pub const PING_PROBE_COUNT: u32 = 4;

/// Per-probe reply timeout passed to `ping` (seconds).
pub const PING_TIMEOUT_SECS: u32 = 1;

// ============================================================================
// SNMP Query Tool
// ============================================================================

/// Candidate install paths for the external `snmpget` binary, probed in
/// order. The first path that exists is selected.
pub const SNMPGET_CANDIDATE_PATHS: &[&str] = &[
    "/usr/bin/snmpget",
    "/usr/local/bin/snmpget",
    "/opt/freeware/bin/snmpget",
    "/usr/sbin/snmpget",
];

/// SNMP protocol version passed to every query (`-v`).
pub const SNMP_PROTOCOL_VERSION: &str = "1";

/// Retry count passed to every query (`-r`). Retries are the query tool's
/// job; this crate never retries on its own.
pub const SNMP_RETRIES: u32 = 2;

/// Per-attempt timeout passed to every query (`-t`, seconds).
pub const SNMP_TIMEOUT_SECS: u32 = 5;

// ============================================================================
// Monitored MIB Regions
// ============================================================================

/// Host-resources system uptime (HOST-RESOURCES-MIB::hrSystemUptime.0).
pub const HOST_RESOURCES_UPTIME_OID: &str = "1.3.6.1.2.1.25.1.1.0";

/// Vendor system branch scalar.
pub const VENDOR_SYSTEM_OID: &str = "1.3.6.1.4.1.2.6.191.1.2.1.0";

/// Vendor performance-agent branch scalar.
pub const PERF_AGENT_OID: &str = "1.3.6.1.4.1.2.3.1.2.2.2.1.1.1.1.1";

/// The three scalar queries run against every target, in pipeline order.
///
/// The pipeline halts at the first spec whose response lacks its marker,
/// so later entries are only reached when everything before them answered.
pub const QUERY_SPECS: [QuerySpec; 3] = [
    QuerySpec {
        name: "host-resources uptime",
        oid: HOST_RESOURCES_UPTIME_OID,
        expect_marker: "Timeticks",
        failure_advice: "host-resources MIB 1.3.6.1.2.1.25.1.1.0",
    },
    QuerySpec {
        name: "vendor system",
        oid: VENDOR_SYSTEM_OID,
        expect_marker: "INTEGER",
        failure_advice: "1.3.6.1.4.1.2.6.191.1.2.1.0. This is the vendor \
                         system MIB. Confirm the agent configuration exposes \
                         this branch.",
    },
    QuerySpec {
        name: "performance agent",
        oid: PERF_AGENT_OID,
        expect_marker: "INTEGER",
        failure_advice: "1.3.6.1.4.1.2.3.1.2.2.2.1.1.1.1.1. This is the \
                         performance-agent MIB. Confirm the performance agent \
                         daemon is running.",
    },
];
