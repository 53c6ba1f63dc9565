use std::io;

use thiserror::Error;

/// Failure to parse the port list that follows `:` in a range expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortParseError {
    #[error("invalid port '{0}': not a number")]
    NonNumeric(String),
    #[error("invalid port range '{0}': more than one '-'")]
    MultipleHyphens(String),
    #[error("invalid port '{0}': must be between 0 and 65535")]
    OutOfRange(String),
}

/// Reasons a range expression expands to nothing.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("malformed address '{0}'")]
    MalformedAddress(String),
    #[error("invalid prefix '{0}': must be between 0 and 32")]
    InvalidPrefix(String),
    #[error("could not resolve '{host}'")]
    Resolution {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("'{0}' has no IPv4 address")]
    NoIpv4Address(String),
    #[error(transparent)]
    Ports(#[from] PortParseError),
}
