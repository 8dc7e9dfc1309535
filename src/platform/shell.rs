//! Subprocess-backed probe session
//!
//! Resolves the external `snmpget` binary once per invocation, then drives
//! `ping` and `snmpget` as child processes, capturing stdout and stderr
//! merged. Exit status is deliberately ignored: the failure signatures the
//! classifier keys on live in the output text, and `ping` exits non-zero
//! for conditions the pipeline treats as reachable (partial loss).

use crate::constants::{
    PING_PROBE_COUNT, PING_TIMEOUT_SECS, SNMPGET_CANDIDATE_PATHS, SNMP_PROTOCOL_VERSION,
    SNMP_RETRIES, SNMP_TIMEOUT_SECS,
};
use crate::core::ProbeSession;
use crate::logger;
use crate::models::Target;
use crate::utils::SetupError;
use std::path::{Path, PathBuf};
use tokio::process::Command;

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path)
            .map(|meta| meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.exists()
    }
}

/// Select the query tool from an ordered candidate list.
///
/// The first path that exists wins; a selected path the current user
/// cannot execute is an error, not a reason to keep searching.
pub fn resolve_query_tool<P: AsRef<Path>>(candidates: &[P]) -> Result<PathBuf, SetupError> {
    for candidate in candidates {
        let path = candidate.as_ref();
        if path.exists() {
            if is_executable(path) {
                return Ok(path.to_path_buf());
            }
            return Err(SetupError::QueryToolNotExecutable(
                path.display().to_string(),
            ));
        }
    }
    Err(SetupError::QueryToolMissing)
}

/// Locate `snmpget` on the known install paths
pub fn resolve_snmpget() -> Result<PathBuf, SetupError> {
    resolve_query_tool(SNMPGET_CANDIDATE_PATHS)
}

/// Run a child process and capture stdout and stderr merged into one text.
async fn run_merged(program: &Path, args: &[&str]) -> Result<String, String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| format!("failed to launch {}: {}", program.display(), e))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&stderr);
    }

    Ok(text)
}

/// Probe session backed by the system `ping` and the resolved `snmpget`
pub struct ShellProbeSession {
    target: Target,
    snmpget: PathBuf,
}

impl ShellProbeSession {
    /// Resolve the query tool and bind a session to the target.
    ///
    /// Resolution happens here, before any network activity: when no
    /// usable tool exists the invocation fails without a single probe
    /// being sent.
    pub fn connect(target: Target) -> Result<Self, SetupError> {
        let snmpget = resolve_snmpget()?;
        logger::log_debug(&format!("using snmp query tool at {}", snmpget.display()));
        Ok(Self { target, snmpget })
    }
}

#[async_trait::async_trait]
impl ProbeSession for ShellProbeSession {
    fn host(&self) -> &str {
        self.target.host()
    }

    async fn ping(&self) -> Result<String, String> {
        let count = PING_PROBE_COUNT.to_string();
        let timeout = PING_TIMEOUT_SECS.to_string();
        run_merged(
            Path::new("ping"),
            &[
                "-c",
                count.as_str(),
                "-W",
                timeout.as_str(),
                self.target.host(),
            ],
        )
        .await
    }

    async fn snmp_get(&self, oid: &str) -> Result<String, String> {
        let retries = SNMP_RETRIES.to_string();
        let timeout = SNMP_TIMEOUT_SECS.to_string();
        run_merged(
            &self.snmpget,
            &[
                "-v",
                SNMP_PROTOCOL_VERSION,
                "-c",
                self.target.community().as_str(),
                "-r",
                retries.as_str(),
                "-t",
                timeout.as_str(),
                self.target.host(),
                oid,
            ],
        )
        .await
    }
}
