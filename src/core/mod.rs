//! Core check logic (collaborator-agnostic)
//!
//! CRITICAL: This module MUST NOT invoke subprocesses directly. All tool
//! access goes through the `ProbeSession` trait so the pipeline can run
//! against mock sessions in tests.

pub mod probes;
pub mod session;

// Test utilities for mock sessions (tests only)
#[cfg(test)]
pub mod mock_session;

pub use probes::{mib_probe, reachability_probe, run_pipeline};
pub use session::ProbeSession;
