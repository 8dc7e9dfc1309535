//! Mock probe session for testing without live hosts
//!
//! Returns canned output matching what real `ping` and `snmpget` runs
//! produce, so classification and pipeline logic can be exercised against
//! every failure signature without touching the network.

use super::session::ProbeSession;
use crate::constants::{HOST_RESOURCES_UPTIME_OID, PERF_AGENT_OID, VENDOR_SYSTEM_OID};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock probe session with canned tool output
pub struct MockProbeSession {
    host: String,
    ping_outcome: Result<String, String>,
    responses: HashMap<String, Result<String, String>>,
    queried: Mutex<Vec<String>>,
}

fn ping_summary(host: &str, transmitted: u32, received: u32, loss_pct: u32) -> String {
    format!(
        "PING {host} (192.0.2.10) 56(84) bytes of data.\n\
         64 bytes from 192.0.2.10: icmp_seq=1 ttl=62 time=0.512 ms\n\
         \n\
         --- {host} ping statistics ---\n\
         {transmitted} packets transmitted, {received} received, {loss_pct}% packet loss, time 3004ms\n\
         rtt min/avg/max/mdev = 0.398/0.471/0.512/0.049 ms\n"
    )
}

fn timeout_response(host: &str) -> String {
    format!("Timeout: No Response from {host}.\n")
}

impl MockProbeSession {
    fn new(host: &str, ping_outcome: Result<String, String>) -> Self {
        Self {
            host: host.to_string(),
            ping_outcome,
            responses: HashMap::new(),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Healthy target: clean ping, all three MIB regions answering
    pub fn healthy(host: &str) -> Self {
        Self::new(host, Ok(ping_summary(host, 4, 4, 0)))
            .with_response(
                HOST_RESOURCES_UPTIME_OID,
                "HOST-RESOURCES-MIB::hrSystemUptime.0 = Timeticks: (8605640) 23:54:16.40\n",
            )
            .with_response(
                VENDOR_SYSTEM_OID,
                "SNMPv2-SMI::enterprises.2.6.191.1.2.1.0 = INTEGER: 2\n",
            )
            .with_response(
                PERF_AGENT_OID,
                "SNMPv2-SMI::enterprises.2.3.1.2.2.2.1.1.1.1.1 = INTEGER: 1\n",
            )
    }

    /// Target dropping half the probes but otherwise healthy
    pub fn flaky(host: &str) -> Self {
        let ping = Ok(ping_summary(host, 4, 2, 50));
        Self {
            ping_outcome: ping,
            ..Self::healthy(host)
        }
    }

    /// Target dropping every probe (100% packet loss)
    pub fn unreachable(host: &str) -> Self {
        Self::new(host, Ok(ping_summary(host, 4, 0, 100)))
    }

    /// Host name that does not resolve (Linux phrasing)
    pub fn unresolvable(host: &str) -> Self {
        Self::new(
            host,
            Ok(format!("ping: {host}: Name or service not known\n")),
        )
    }

    /// Target with no route from this machine
    pub fn no_route(host: &str) -> Self {
        Self::new(host, Ok("ping: connect: No route to host\n".to_string()))
    }

    /// Reachable target whose SNMP agent never answers
    pub fn silent_agent(host: &str) -> Self {
        Self::new(host, Ok(ping_summary(host, 4, 4, 0)))
    }

    /// Override the canned response for one object identifier
    pub fn with_response(mut self, oid: &str, output: &str) -> Self {
        self.responses.insert(oid.to_string(), Ok(output.to_string()));
        self
    }

    /// Make one query time out instead of answering
    pub fn with_silent_oid(mut self, oid: &str) -> Self {
        self.responses
            .insert(oid.to_string(), Ok(timeout_response(&self.host)));
        self
    }

    /// Object identifiers queried so far, in order
    pub fn queried_oids(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ProbeSession for MockProbeSession {
    fn host(&self) -> &str {
        &self.host
    }

    async fn ping(&self) -> Result<String, String> {
        self.ping_outcome.clone()
    }

    async fn snmp_get(&self, oid: &str) -> Result<String, String> {
        self.queried.lock().unwrap().push(oid.to_string());
        self.responses
            .get(oid)
            .cloned()
            .unwrap_or_else(|| Ok(timeout_response(&self.host)))
    }
}
