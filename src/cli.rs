//! Command-line argument surface.
//!
//! Five required positional arguments, nothing else. Argument errors
//! are reported by the binary as a single usage line on stdout, since
//! Nagios-compatible schedulers capture only the first line of plugin
//! output.

use clap::Parser;

use crate::version::SnmpVersion;

/// Usage line printed in place of clap's multi-line error output.
pub const USAGE: &str = "Usage: check-ipsec-sa [SNMPversion] [SNMPcommunity] [SNMPHost (IP or FQDN)] [IP of IKE Gateway] [descriptive name of IPSec Tunnel]";

/// Probe one Juniper IPsec SA over SNMP.
#[derive(Debug, Parser)]
#[command(name = "check-ipsec-sa", version, about)]
pub struct ProbeArgs {
    /// SNMP protocol version: 1 or 2c.
    #[arg(value_name = "SNMPversion")]
    pub snmp_version: SnmpVersion,

    /// Community string.
    #[arg(value_name = "SNMPcommunity")]
    pub community: String,

    /// Router to query, IP address or FQDN.
    #[arg(value_name = "SNMPhost")]
    pub host: String,

    /// Remote IKE gateway address, used verbatim as the SA table index.
    #[arg(value_name = "IKEgateway")]
    pub gateway: String,

    /// Descriptive tunnel name for the status line.
    #[arg(value_name = "tunnelname")]
    pub tunnel: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_full_invocation() {
        let args = ProbeArgs::try_parse_from([
            "check-ipsec-sa",
            "2c",
            "public",
            "10.0.0.5",
            "10.0.0.1",
            "HQ-Tunnel",
        ])
        .unwrap();
        assert_eq!(args.snmp_version, SnmpVersion::V2c);
        assert_eq!(args.community, "public");
        assert_eq!(args.host, "10.0.0.5");
        assert_eq!(args.gateway, "10.0.0.1");
        assert_eq!(args.tunnel, "HQ-Tunnel");
    }

    #[test]
    fn test_missing_arguments_rejected() {
        let err =
            ProbeArgs::try_parse_from(["check-ipsec-sa", "2c", "public", "10.0.0.5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_version_token_rejected() {
        let err = ProbeArgs::try_parse_from([
            "check-ipsec-sa",
            "4",
            "public",
            "10.0.0.5",
            "10.0.0.1",
            "HQ-Tunnel",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_usage_names_all_arguments() {
        assert!(USAGE.starts_with("Usage: check-ipsec-sa"));
        for placeholder in [
            "SNMPversion",
            "SNMPcommunity",
            "SNMPHost",
            "IKE Gateway",
            "IPSec Tunnel",
        ] {
            assert!(USAGE.contains(placeholder), "missing {placeholder}");
        }
    }
}
