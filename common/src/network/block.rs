//! # Network Block Model
//!
//! A network block is an IPv4 network address plus a prefix length, the
//! numeric form of CIDR notation such as `192.168.1.0/24`.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::ExpandError;

/// A contiguous block of IPv4 addresses, always stored by its network address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Builds the block containing `ip` with the given prefix length.
    ///
    /// Host bits of `ip` are cleared, so `192.168.0.2/24` becomes `192.168.0.0/24`.
    pub fn new(ip: Ipv4Addr, prefix: u8) -> Result<Self, ExpandError> {
        let network = Ipv4Network::new(ip, prefix)
            .map_err(|_| ExpandError::InvalidPrefix(prefix.to_string()))?;

        Ok(Self {
            addr: network.network(),
            prefix,
        })
    }

    pub fn network(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix))
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl FromStr for NetworkBlock {
    type Err = ExpandError;

    /// Parses a literal `a.b.c.d/p`. Hostnames are not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(ExpandError::MalformedAddress(s.to_string()));
        };

        let ip = parse_ipv4(ip_str)?;
        let prefix = parse_prefix(prefix_str)?;

        Self::new(ip, prefix)
    }
}

/// Parses a strict dotted-quad address: four decimal octets, no leading zeros.
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, ExpandError> {
    s.parse::<Ipv4Addr>()
        .map_err(|_| ExpandError::MalformedAddress(s.to_string()))
}

/// Parses a prefix length in `0..=32`. Only ASCII digits are allowed, so `+8` is rejected.
pub fn parse_prefix(s: &str) -> Result<u8, ExpandError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExpandError::InvalidPrefix(s.to_string()));
    }

    match s.parse::<u8>() {
        Ok(prefix) if prefix <= 32 => Ok(prefix),
        _ => Err(ExpandError::InvalidPrefix(s.to_string())),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
