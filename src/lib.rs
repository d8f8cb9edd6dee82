//! Nagios-style probe for Juniper IPsec SA status.
//!
//! Checks whether one IPsec Security Association on a Juniper router is
//! active by querying the device's SNMP agent for a vendor-specific OID
//! indexed by the remote IKE gateway address. The SNMP exchange itself
//! is delegated to the external net-snmp `snmpbulkwalk` binary; this
//! crate builds the OID, runs the walk, parses the single scalar
//! result, and maps it to a status line plus a Nagios exit code.
//!
//! The decision logic lives in [`check`] behind the [`query::BulkWalk`]
//! seam so it can be exercised without spawning a process; the
//! `check-ipsec-sa` binary is boundary-only.

pub mod check;
pub mod cli;
pub mod error;
pub mod oid;
pub mod query;
pub mod version;

pub use check::{Outcome, SaState, ServiceState, run_check};
pub use error::{Error, Result};
pub use query::{BoxFuture, BulkWalk, SnmpBulkWalk};
pub use version::SnmpVersion;
