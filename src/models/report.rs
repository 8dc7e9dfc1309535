//! Severity vocabulary and per-stage probe results.
//!
//! The severity codes match what monitoring supervisors expect from a
//! check plugin: OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3.

use crate::constants::CHECK_NAME;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome severity of a check stage
///
/// `Warning` is reserved for interface compatibility with the supervisor;
/// no current stage produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Process exit code reported to the supervisor
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    /// Label used on the report line
    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of one check stage
///
/// The pipeline halts and surfaces the result as soon as a stage returns
/// anything other than `Ok`. Messages are always a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub severity: Severity,
    pub message: String,
}

impl ProbeResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Unknown,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.severity == Severity::Ok
    }

    /// The single line written to stdout for this result
    pub fn report_line(&self) -> String {
        format!("{} {} -- {}", CHECK_NAME, self.severity, self.message)
    }
}
