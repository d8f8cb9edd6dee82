//! External SNMP walk collaborator.
//!
//! The SNMP exchange is delegated to the net-snmp `snmpbulkwalk`
//! binary. [`BulkWalk`] is the seam between the probe's decision logic
//! and that external process; tests substitute a scripted
//! implementation so the parse policy can be exercised without
//! spawning anything.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};
use crate::version::SnmpVersion;

/// Name of the external SNMP walk binary.
pub const SNMPBULKWALK: &str = "snmpbulkwalk";

/// Type alias for boxed async return type (dyn-compatible).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One SNMP bulk-walk against a single OID, yielding raw stdout.
pub trait BulkWalk {
    /// Run the walk and return whatever the client printed.
    ///
    /// Fails only when the client cannot be invoked at all. A walk that
    /// runs but resolves nothing returns its (typically empty) output
    /// for the caller's parse policy to judge.
    fn walk<'a>(
        &'a self,
        version: SnmpVersion,
        community: &'a str,
        host: &'a str,
        oid: &'a str,
    ) -> BoxFuture<'a, Result<String>>;
}

/// Argument vector for the external client.
///
/// `-Ovq` requests bare values only, no OID prefixes and no type
/// annotations; the parse policy depends on that output convention.
pub fn snmpbulkwalk_args(
    version: SnmpVersion,
    community: &str,
    host: &str,
    oid: &str,
) -> [String; 5] {
    [
        format!("-v{}", version.as_flag()),
        format!("-c{community}"),
        host.to_owned(),
        oid.to_owned(),
        "-Ovq".to_owned(),
    ]
}

/// Production collaborator spawning the net-snmp binary.
///
/// No timeout is applied to the child; a hung walk hangs the
/// invocation, and the monitoring scheduler owns the kill policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnmpBulkWalk;

impl BulkWalk for SnmpBulkWalk {
    fn walk<'a>(
        &'a self,
        version: SnmpVersion,
        community: &'a str,
        host: &'a str,
        oid: &'a str,
    ) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            let args = snmpbulkwalk_args(version, community, host, oid);
            debug!(%host, %oid, %version, "running {}", SNMPBULKWALK);

            let output = Command::new(SNMPBULKWALK)
                .args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(|source| Error::launch(SNMPBULKWALK, source))?;

            // The verdict comes from stdout alone; a failed walk prints
            // nothing there and falls through to the parse policy.
            if !output.status.success() {
                debug!(
                    status = %output.status,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "{} exited non-zero",
                    SNMPBULKWALK
                );
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        })
    }
}
