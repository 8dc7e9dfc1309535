//! Error types for mibprobe
//!
//! All error types use thiserror. Every setup failure folds into a single
//! UNKNOWN report line; the `Display` text of these variants is exactly
//! what the supervisor sees after the severity label.

/// Failures that prevent the pipeline from starting
///
/// These are environment or configuration problems (severity UNKNOWN),
/// as opposed to a reachable host whose agent does not answer
/// (severity CRITICAL, handled in `core::probes`).
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("cannot find snmp query tool")]
    QueryToolMissing,

    #[error("snmp query tool {0} is not executable")]
    QueryToolNotExecutable(String),

    #[error("invalid target host: {0}")]
    InvalidHost(String),

    #[error("invalid community string: {0}")]
    InvalidCommunity(String),
}
