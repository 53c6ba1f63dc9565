//! # Port Set Model
//!
//! Parses port lists such as `22,80,8000-8010` into an ordered list of ports.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::PortParseError;

/// An ordered list of ports without repeats.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortSet(Vec<u16>);

impl PortSet {
    pub fn ports(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for PortSet {
    type Err = PortParseError;

    /// Parses a comma separated list of ports and `low-high` ranges.
    ///
    /// A reversed range (`500-498`) is swapped into ascending order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ports: Vec<u16> = Vec::new();
        let mut seen: HashSet<u16> = HashSet::new();

        for token in s.split(',') {
            let (low, high) = parse_token(token)?;
            for port in low..=high {
                if seen.insert(port) {
                    ports.push(port);
                }
            }
        }

        Ok(Self(ports))
    }
}

impl fmt::Display for PortSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(u16::to_string).collect();
        write!(f, "{}", joined.join(","))
    }
}

fn parse_token(token: &str) -> Result<(u16, u16), PortParseError> {
    let parts: Vec<&str> = token.split('-').collect();
    match parts.as_slice() {
        [single] => {
            let port = parse_port(single, token)?;
            Ok((port, port))
        }
        [low, high] => {
            let low = parse_port(low, token)?;
            let high = parse_port(high, token)?;
            Ok((low.min(high), low.max(high)))
        }
        _ => Err(PortParseError::MultipleHyphens(token.to_string())),
    }
}

fn parse_port(s: &str, token: &str) -> Result<u16, PortParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortParseError::NonNumeric(token.to_string()));
    }
    s.parse::<u16>()
        .map_err(|_| PortParseError::OutOfRange(token.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
