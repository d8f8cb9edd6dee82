//! Error types for check-ipsec-sa.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.

/// Result type alias using the probe's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Probe error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The external SNMP client process could not be started.
    #[error("failed to launch {command}: {source}")]
    Launch {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The captured walk output was not a single integer value.
    ///
    /// Covers empty output (OID not present on the agent, walk failed
    /// before producing a value) as well as non-numeric or multi-line
    /// responses.
    #[error("unparseable SNMP response: {output:?}")]
    Unparseable { output: Box<str> },
}

impl Error {
    /// Create a launch error for the named external command.
    pub fn launch(command: &'static str, source: std::io::Error) -> Self {
        Self::Launch { command, source }
    }

    /// Create an unparseable-response error from the captured output.
    pub fn unparseable(output: impl Into<Box<str>>) -> Self {
        Self::Unparseable {
            output: output.into(),
        }
    }
}
