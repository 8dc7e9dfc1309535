//! Check stages for the host health pipeline
//!
//! Each stage takes a `ProbeSession` and returns a `ProbeResult`; the
//! pipeline driver folds over the stages in fixed order and short-circuits
//! on the first non-OK result. No stage writes to stdout.
//!
//! Classification is pure text scanning: tool output is consumed line by
//! line and matched case-insensitively against known signatures, the same
//! way the external tools are consumed everywhere else in this crate.

use super::session::ProbeSession;
use crate::constants::QUERY_SPECS;
use crate::logger;
use crate::models::{ProbeResult, QuerySpec};

/// Summary-line signature for a target that answered nothing
const TOTAL_LOSS_SIGNATURE: &str = "100% packet loss";

/// Resolver-failure phrasings across platforms: BSD/AIX report the host
/// `NOT FOUND`, older Linux prints `unknown host`, current iputils prints
/// `Name or service not known`.
const RESOLVE_SIGNATURES: &[&str] = &["not found", "unknown host", "name or service not known"];

/// Routing-failure signature
const ROUTE_SIGNATURE: &str = "no route to host";

/// Classify captured reachability-tool output for `host`.
///
/// Every line is consumed before the outcome is evaluated, since failure
/// signatures may appear on any line of multi-line tool output. Partial
/// packet loss (25/50/75%) is still a reachable host.
pub fn classify_ping_output(host: &str, output: &str) -> ProbeResult {
    let mut total_loss = false;
    let mut unresolved = false;
    let mut unroutable = false;

    for line in output.lines() {
        let lower = line.to_lowercase();
        if lower.contains(TOTAL_LOSS_SIGNATURE) {
            total_loss = true;
        }
        if RESOLVE_SIGNATURES.iter().any(|sig| lower.contains(sig)) {
            unresolved = true;
        }
        if lower.contains(ROUTE_SIGNATURE) {
            unroutable = true;
        }
    }

    if total_loss {
        ProbeResult::unknown(format!("no reply from {}", host))
    } else if unresolved {
        ProbeResult::unknown(format!("could not resolve hostname {}", host))
    } else if unroutable {
        ProbeResult::unknown(format!(
            "could not find a route to {} - check routing tables",
            host
        ))
    } else {
        ProbeResult::ok(format!("reply from {}", host))
    }
}

/// Classify captured query-tool output against one query spec.
///
/// The last line carrying the expected type marker wins; query tools
/// sometimes emit several lines and only the most recent hit is retained.
pub fn classify_query_output(host: &str, spec: &QuerySpec, output: &str) -> ProbeResult {
    let marker = spec.expect_marker.to_lowercase();
    let mut last_hit: Option<&str> = None;

    for line in output.lines() {
        if line.to_lowercase().contains(&marker) {
            last_hit = Some(line);
        }
    }

    match last_hit {
        Some(line) => {
            logger::log_debug(&format!("{} probe answered: {}", spec.name, line.trim()));
            ProbeResult::ok(spec.success_message(host))
        }
        None => ProbeResult::critical(spec.failure_message(host)),
    }
}

/// Stage 1: verify the target answers echo requests at all.
pub async fn reachability_probe(session: &dyn ProbeSession) -> ProbeResult {
    match session.ping().await {
        Ok(output) => classify_ping_output(session.host(), &output),
        Err(err) => {
            logger::log_warn(&format!("reachability tool failed to run: {}", err));
            ProbeResult::unknown(format!("no reply from {}", session.host()))
        }
    }
}

/// Stages 2-4: issue one scalar query and classify the response.
pub async fn mib_probe(session: &dyn ProbeSession, spec: &QuerySpec) -> ProbeResult {
    logger::log_debug(&format!("querying {} ({})", spec.oid, spec.name));
    match session.snmp_get(spec.oid).await {
        Ok(output) => classify_query_output(session.host(), spec, &output),
        Err(err) => {
            logger::log_warn(&format!("query tool failed to run: {}", err));
            ProbeResult::critical(spec.failure_message(session.host()))
        }
    }
}

/// Run the full check sequence against one target.
///
/// Reachability first, then the three MIB probes in fixed order, halting
/// at the first non-OK result. The returned result is the only one the
/// caller ever reports.
pub async fn run_pipeline(session: &dyn ProbeSession) -> ProbeResult {
    let result = reachability_probe(session).await;
    if !result.is_ok() {
        return result;
    }
    logger::log_debug(&format!("{} is reachable", session.host()));

    let mut result = result;
    for spec in &QUERY_SPECS {
        result = mib_probe(session, spec).await;
        if !result.is_ok() {
            return result;
        }
    }

    result
}
