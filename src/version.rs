//! SNMP version enumeration.

use clap::ValueEnum;

/// SNMP protocol version, as understood by the external walk client.
///
/// Only the community-based versions are modeled: the probe carries a
/// community string and nothing else, so SNMPv3 (which needs USM
/// credentials) cannot be expressed through its argument surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SnmpVersion {
    /// SNMPv1 (RFC 1157)
    #[value(name = "1")]
    V1,
    /// SNMPv2c (RFC 1901)
    #[default]
    #[value(name = "2c")]
    V2c,
}

impl SnmpVersion {
    /// Token appended to `-v` when invoking the external client.
    pub const fn as_flag(self) -> &'static str {
        match self {
            SnmpVersion::V1 => "1",
            SnmpVersion::V2c => "2c",
        }
    }
}

impl std::fmt::Display for SnmpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnmpVersion::V1 => write!(f, "SNMPv1"),
            SnmpVersion::V2c => write!(f, "SNMPv2c"),
        }
    }
}
