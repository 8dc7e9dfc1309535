//! Probe session abstraction over the external reachability and query tools.
//!
//! This trait allows testing without live hosts by supporting mock
//! implementations. The real subprocess-backed implementation is in
//! `src/platform/`.

/// Session trait for abstraction over real/mock tool invocations
///
/// Both operations return the tool's captured output (stdout and stderr
/// merged) regardless of exit status; failure signatures live in the text
/// and classification happens in `core::probes`. An `Err` means the tool
/// could not be launched at all.
#[async_trait::async_trait]
pub trait ProbeSession: Send + Sync {
    /// Host name or address this session targets
    fn host(&self) -> &str;

    /// Send a small fixed number of echo requests to the target
    async fn ping(&self) -> Result<String, String>;

    /// Query one scalar value by dotted numeric object identifier
    async fn snmp_get(&self, oid: &str) -> Result<String, String>;
}
