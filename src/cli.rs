//! Command-line surface and configuration resolution.
//!
//! Accepts either two positional arguments (community, host) or named
//! flags; missing values fall back to defaults silently. `--help` and
//! `--version` are handled by clap and terminate with success.

use crate::constants::{DEFAULT_COMMUNITY, FALLBACK_HOST};
use crate::logger;
use crate::models::{Community, Target};
use crate::normalize::{normalize_community, normalize_host};
use crate::utils::SetupError;
use clap::Parser;

/// Command-line interface definition for the host MIB probe.
#[derive(Debug, Parser)]
#[command(name = "mibprobe")]
#[command(about = "Check host reachability and SNMP MIB responsiveness")]
#[command(version)]
pub struct Cli {
    /// Community string (positional form)
    #[arg(value_name = "COMMUNITY")]
    pub community_arg: Option<String>,

    /// Target host (positional form)
    #[arg(value_name = "HOST")]
    pub host_arg: Option<String>,

    /// Community string for SNMP read access [default: public]
    #[arg(short = 'C', long = "community", value_name = "STRING")]
    pub community: Option<String>,

    /// Host name or address to probe [default: local machine name]
    #[arg(short = 'H', long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Enable verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Resolved probe configuration
#[derive(Debug)]
pub struct Config {
    pub target: Target,
    pub verbose: bool,
}

impl Cli {
    /// Resolve the final configuration.
    ///
    /// Precedence per field: named flag, then positional, then default.
    /// Absent values are never an error; supplied values must normalize.
    pub fn resolve(self) -> Result<Config, SetupError> {
        let community = match self.community.or(self.community_arg) {
            Some(raw) => normalize_community(&raw).map_err(SetupError::InvalidCommunity)?,
            None => {
                logger::log_debug(&format!(
                    "no community supplied, using default \"{}\"",
                    DEFAULT_COMMUNITY
                ));
                DEFAULT_COMMUNITY.to_string()
            }
        };

        let host = match self.host.or(self.host_arg) {
            Some(raw) => normalize_host(&raw).map_err(SetupError::InvalidHost)?,
            None => {
                let host = local_host_name();
                logger::log_debug(&format!("no host supplied, probing \"{}\"", host));
                host
            }
        };

        Ok(Config {
            target: Target::new(host, Community::new(community)),
            verbose: self.verbose,
        })
    }
}

/// Name of the local machine, falling back to `localhost` when the
/// lookup fails or yields an empty string.
fn local_host_name() -> String {
    hostname::get()
        .ok()
        .map(|name| name.to_string_lossy().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_HOST.to_string())
}
