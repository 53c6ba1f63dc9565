use std::collections::{HashMap, HashSet};
use std::io;
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

use tracing::debug;

/// Defines the contract for turning a hostname into IPv4 addresses.
pub trait HostResolver {
    /// Returns the IPv4 addresses of `host` in resolution order.
    ///
    /// An empty list is a valid answer for a host with only IPv6 records.
    fn resolve(&self, host: &str) -> io::Result<Vec<Ipv4Addr>>;
}

/// Resolves through the operating system (`getaddrinfo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<Ipv4Addr>> {
        let mut seen: HashSet<Ipv4Addr> = HashSet::new();
        let ips: Vec<Ipv4Addr> = (host, 0)
            .to_socket_addrs()?
            .filter_map(|addr| match addr.ip() {
                IpAddr::V4(ipv4_addr) => Some(ipv4_addr),
                IpAddr::V6(_) => None,
            })
            .filter(|ip| seen.insert(*ip))
            .collect();

        debug!("Resolved {host} to {} IPv4 address(es)", ips.len());
        Ok(ips)
    }
}

/// Refuses every lookup. Used when DNS is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl HostResolver for NoResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<Ipv4Addr>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("hostname resolution is disabled, cannot resolve {host}"),
        ))
    }
}

/// Answers lookups from a fixed table.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<Ipv4Addr>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: &str, ips: &[Ipv4Addr]) -> Self {
        self.hosts.insert(host.to_ascii_lowercase(), ips.to_vec());
        self
    }
}

impl HostResolver for StaticResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<Ipv4Addr>> {
        self.hosts
            .get(&host.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("unknown host {host}")))
    }
}

impl<R: HostResolver + ?Sized> HostResolver for Box<R> {
    fn resolve(&self, host: &str) -> io::Result<Vec<Ipv4Addr>> {
        (**self).resolve(host)
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
