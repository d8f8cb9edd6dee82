//! Common test fixtures: a scripted walk collaborator and canned args.

use std::sync::Mutex;

use check_ipsec_sa::cli::ProbeArgs;
use check_ipsec_sa::{BoxFuture, BulkWalk, Error, Result, SnmpVersion};

/// V2c read-only community used across scenarios.
pub const COMMUNITY_RO: &str = "public";

/// Arguments matching the documented end-to-end scenarios.
pub fn hq_tunnel_args() -> ProbeArgs {
    ProbeArgs {
        snmp_version: SnmpVersion::V2c,
        community: COMMUNITY_RO.to_owned(),
        host: "10.0.0.5".to_owned(),
        gateway: "10.0.0.1".to_owned(),
        tunnel: "HQ-Tunnel".to_owned(),
    }
}

/// One recorded invocation of the scripted collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub version: SnmpVersion,
    pub community: String,
    pub host: String,
    pub oid: String,
}

enum Script {
    Output(String),
    LaunchFailure,
}

/// Collaborator that replays a canned response and records every query.
///
/// The call log doubles as proof of non-invocation for the usage path.
pub struct ScriptedWalk {
    script: Script,
    calls: Mutex<Vec<RecordedQuery>>,
}

impl ScriptedWalk {
    /// Replay `output` as the walk's captured stdout.
    pub fn returning(output: &str) -> Self {
        Self {
            script: Script::Output(output.to_owned()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every walk as if the external binary were not installed.
    pub fn failing_to_launch() -> Self {
        Self {
            script: Script::LaunchFailure,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queries observed so far.
    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl BulkWalk for ScriptedWalk {
    fn walk<'a>(
        &'a self,
        version: SnmpVersion,
        community: &'a str,
        host: &'a str,
        oid: &'a str,
    ) -> BoxFuture<'a, Result<String>> {
        self.calls.lock().unwrap().push(RecordedQuery {
            version,
            community: community.to_owned(),
            host: host.to_owned(),
            oid: oid.to_owned(),
        });
        let result = match &self.script {
            Script::Output(output) => Ok(output.clone()),
            Script::LaunchFailure => Err(Error::launch(
                "snmpbulkwalk",
                std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            )),
        };
        Box::pin(async move { result })
    }
}
