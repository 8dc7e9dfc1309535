//! mibprobe binary entry point.
//!
//! Composition root: parse the CLI, resolve configuration, run the check
//! pipeline against the real subprocess-backed session, then print exactly
//! one status line to stdout and exit with the severity code the
//! monitoring supervisor expects.

use clap::Parser;
use mibprobe::cli::Cli;
use mibprobe::core::run_pipeline;
use mibprobe::logger;
use mibprobe::models::ProbeResult;
use mibprobe::platform::ShellProbeSession;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(err) => report(ProbeResult::unknown(err.to_string())),
    };

    logger::log_info(&format!("probing {}", config.target.host()));

    let result = match ShellProbeSession::connect(config.target) {
        Ok(session) => run_pipeline(&session).await,
        Err(err) => ProbeResult::unknown(err.to_string()),
    };

    report(result)
}

/// Emit the single report line and terminate with the severity exit code.
fn report(result: ProbeResult) -> ! {
    println!("{}", result.report_line());
    std::process::exit(result.severity.exit_code());
}
