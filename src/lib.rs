//! mibprobe - host reachability and SNMP MIB health probe
//!
//! Core library exposing the probe pipeline and its collaborators.

// Public modules
pub mod cli;
pub mod constants;
pub mod core;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod platform;
pub mod utils;

// Re-export commonly used types
pub use crate::cli::{Cli, Config};
pub use crate::core::{run_pipeline, ProbeSession};
pub use crate::models::{Community, ProbeResult, QuerySpec, Severity, Target};
pub use crate::utils::SetupError;
