//! # Range Expression Parser
//!
//! Parses the range expressions accepted on the command line:
//! * A single host: `192.168.1.5` or `gateway.lan` (treated as `/32`).
//! * A CIDR block: `192.168.1.0/24` or `gateway.lan/24`.
//! * Either of the above followed by ports: `10.0.0.1/30:22,80,8000-8010`.

use std::net::Ipv4Addr;

use cidr_common::error::ExpandError;
use cidr_common::network::block::{self, NetworkBlock};
use cidr_common::network::ports::PortSet;
use tracing::debug;

use crate::resolver::HostResolver;

/// Prefix applied when an expression has no `/`.
pub const HOST_PREFIX: u8 = 32;

/// Result of parsing one range expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRange {
    /// One block per resolved address, in resolution order.
    pub blocks: Vec<NetworkBlock>,
    /// Ports to append to every expanded address.
    pub ports: Option<PortSet>,
}

/// Parses `expr`, resolving a hostname through `resolver` when needed.
pub fn parse_range(expr: &str, resolver: &dyn HostResolver) -> Result<ParsedRange, ExpandError> {
    let (range_str, ports) = match expr.split_once(':') {
        Some((range_str, port_str)) => (range_str, Some(port_str.parse::<PortSet>()?)),
        None => (expr, None),
    };

    let (host_str, prefix) = match range_str.split_once('/') {
        Some((host_str, prefix_str)) => (host_str, block::parse_prefix(prefix_str)?),
        None => (range_str, HOST_PREFIX),
    };

    let blocks: Vec<NetworkBlock> = resolve_host(host_str, resolver)?
        .into_iter()
        .map(|ip| NetworkBlock::new(ip, prefix))
        .collect::<Result<_, _>>()?;

    Ok(ParsedRange { blocks, ports })
}

/// Turns the part before `/` into one or more addresses.
///
/// Anything made only of digits and dots is a numeric literal and must parse
/// as one; it is never handed to the resolver.
fn resolve_host(host: &str, resolver: &dyn HostResolver) -> Result<Vec<Ipv4Addr>, ExpandError> {
    if is_numeric_literal(host) {
        return Ok(vec![block::parse_ipv4(host)?]);
    }

    if !is_hostname(host) {
        return Err(ExpandError::MalformedAddress(host.to_string()));
    }

    debug!("Resolving hostname {host}");
    let ips: Vec<Ipv4Addr> = resolver
        .resolve(host)
        .map_err(|source| ExpandError::Resolution {
            host: host.to_string(),
            source,
        })?;

    if ips.is_empty() {
        return Err(ExpandError::NoIpv4Address(host.to_string()));
    }
    Ok(ips)
}

fn is_numeric_literal(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Accepts DNS style names whose last label is not purely numeric.
fn is_hostname(s: &str) -> bool {
    let valid_chars = s
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));
    if s.is_empty() || !valid_chars {
        return false;
    }

    let top_label: &str = s.trim_end_matches('.').rsplit('.').next().unwrap_or("");
    !top_label.is_empty() && !top_label.bytes().all(|b| b.is_ascii_digit())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
