//! check-ipsec-sa: probe one Juniper IPsec SA over SNMP.
//!
//! Boundary only: argument handling, tracing setup, and the single
//! print-and-exit. The decision logic lives in the library.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use check_ipsec_sa::cli::{ProbeArgs, USAGE};
use check_ipsec_sa::{ServiceState, SnmpBulkWalk, run_check};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match ProbeArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        // One usage line on stdout, CRITICAL exit, no network call.
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::from(ServiceState::Critical.exit_code());
        }
    };

    init_tracing();

    let outcome = run_check(&SnmpBulkWalk, &args).await;
    println!("{}", outcome.message);
    ExitCode::from(outcome.state.exit_code())
}

/// Diagnostics go to stderr so stdout stays a single status line.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("check_ipsec_sa=warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
