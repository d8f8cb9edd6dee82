//! SA state parsing and the probe's single check operation.
//!
//! Everything here is pure apart from the injected [`BulkWalk`]
//! collaborator, so the full decision table is unit-testable without a
//! child process. The binary only prints [`Outcome::message`] and exits
//! with [`ServiceState::exit_code`].

use tracing::{debug, warn};

use crate::cli::ProbeArgs;
use crate::error::{Error, Result};
use crate::oid;
use crate::query::BulkWalk;

/// Security Association state as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaState {
    /// The SA is established and ready for traffic.
    Active,
    /// The agent reported a status other than active.
    NotActive,
}

/// Nagios service state with its process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Critical,
}

impl ServiceState {
    /// Process exit code understood by Nagios-compatible schedulers.
    pub const fn exit_code(self) -> u8 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Critical => 2,
        }
    }
}

/// Terminal result of one invocation: one status line, one exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: ServiceState,
    pub message: String,
}

impl Outcome {
    /// SA established; the tunnel is usable.
    pub fn active(tunnel: &str) -> Self {
        Self {
            state: ServiceState::Ok,
            message: format!("OK SA for IPSec Tunnel {tunnel} is ready for active use"),
        }
    }

    /// The agent answered, but the SA is not up.
    pub fn not_active(tunnel: &str) -> Self {
        Self {
            state: ServiceState::Critical,
            message: format!("CRITICAL SA for IPSec Tunnel {tunnel} is not active"),
        }
    }

    /// The walk produced no usable value, most likely because the
    /// gateway is not an index in the device's SA table.
    pub fn not_configured(tunnel: &str) -> Self {
        Self {
            state: ServiceState::Critical,
            message: format!(
                "An error occured, perhaps IKE Gateway for {tunnel} is not configured on that device"
            ),
        }
    }

    /// The external client could not be run at all.
    pub fn query_failed() -> Self {
        Self {
            state: ServiceState::Critical,
            message: "Something bad happened".to_owned(),
        }
    }
}

/// Interpret the raw walk output as an SA status value.
///
/// The `-Ovq` output convention leaves a single bare integer, possibly
/// with surrounding whitespace. `1` means active, any other integer
/// means the SA exists in some non-active state. Anything else, empty
/// output and multi-line responses included, is unparseable.
pub fn parse_sa_state(raw: &str) -> Result<SaState> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(1) => Ok(SaState::Active),
        Ok(_) => Ok(SaState::NotActive),
        Err(_) => Err(Error::unparseable(trimmed)),
    }
}

/// Run the whole check: build the OID, walk it, judge the response.
///
/// Every failure mode collapses into an [`Outcome`] here; callers never
/// see an error, only a status line and an exit code.
pub async fn run_check<W: BulkWalk>(walker: &W, args: &ProbeArgs) -> Outcome {
    let oid = oid::sa_status_oid(&args.gateway);

    let raw = match walker
        .walk(args.snmp_version, &args.community, &args.host, &oid)
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, host = %args.host, "SNMP walk could not run");
            return Outcome::query_failed();
        }
    };

    match parse_sa_state(&raw) {
        Ok(SaState::Active) => Outcome::active(&args.tunnel),
        Ok(SaState::NotActive) => Outcome::not_active(&args.tunnel),
        Err(err) => {
            debug!(error = %err, gateway = %args.gateway, "no usable SA status in response");
            Outcome::not_configured(&args.tunnel)
        }
    }
}
