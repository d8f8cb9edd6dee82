//! Juniper IPsec SA status OID construction.
//!
//! The probe addresses exactly one column of one vendor table, so OIDs
//! are plain dotted strings handed to the external walk client; there
//! is no arc-level OID type here.

/// SA status column of the Juniper IPsec VPN monitoring MIB
/// (enterprise 2636), up to the table index. The instance is completed
/// by the remote IKE gateway address: address type 1 (IPv4), length 4,
/// then the four address octets as arcs.
pub const SA_STATUS_PREFIX: &str = ".1.3.6.1.4.1.2636.3.52.1.2.3.1.14.1.4.";

/// Instance OID for the SA negotiated with `gateway`.
///
/// The gateway is appended verbatim. A value that is not a dotted-quad
/// IPv4 address yields an OID that resolves to nothing on the agent,
/// which the caller reports as the gateway not being configured.
pub fn sa_status_oid(gateway: &str) -> String {
    format!("{SA_STATUS_PREFIX}{gateway}")
}
