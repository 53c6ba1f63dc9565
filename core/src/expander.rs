use std::fmt;
use std::vec;

use cidr_common::config::Config;
use cidr_common::error::ExpandError;
use cidr_common::network::block::NetworkBlock;
use tracing::debug;

use crate::enumerator::Addresses;
use crate::parser::{self, ParsedRange};
use crate::resolver::{HostResolver, NoResolver, SystemResolver};

/// Expands range expressions using a configurable hostname resolver.
pub struct Expander {
    resolver: Box<dyn HostResolver>,
}

impl Expander {
    pub fn new(resolver: impl HostResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Picks the resolver according to `cfg.no_dns`.
    pub fn from_config(cfg: &Config) -> Self {
        if cfg.no_dns {
            Self::new(NoResolver)
        } else {
            Self::new(SystemResolver)
        }
    }

    pub fn parse(&self, expr: &str) -> Result<ParsedRange, ExpandError> {
        parser::parse_range(expr, self.resolver.as_ref())
    }

    /// Expands `expr` lazily, reporting why it failed.
    pub fn try_expand(&self, expr: &str) -> Result<Expansion, ExpandError> {
        Ok(Expansion::new(self.parse(expr)?))
    }

    /// Expands `expr` into every address (or `address:ports`) string.
    ///
    /// Malformed expressions, bad port lists and failed lookups all give an
    /// empty list. Use [`Expander::try_expand`] to see the reason.
    ///
    /// Output follows [`crate::enumerator`]: increasing for /8 and longer
    /// prefixes, wrapping through `0.x.x.x` for shorter ones.
    pub fn expand(&self, expr: &str) -> Vec<String> {
        match self.try_expand(expr) {
            Ok(expansion) => expansion.collect(),
            Err(e) => {
                debug!(range = %expr, "expands to nothing: {e}");
                Vec::new()
            }
        }
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(SystemResolver)
    }
}

impl fmt::Debug for Expander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander").finish_non_exhaustive()
    }
}

/// Lazy sequence of output strings for one parsed range.
///
/// Blocks are walked in resolution order; each address is rendered on its
/// own, or as `address:p1,p2,...` when a port set was given.
#[derive(Debug, Clone)]
pub struct Expansion {
    blocks: vec::IntoIter<NetworkBlock>,
    current: Option<Addresses>,
    ports: Option<String>,
}

impl Expansion {
    fn new(parsed: ParsedRange) -> Self {
        Self {
            blocks: parsed.blocks.into_iter(),
            current: None,
            ports: parsed.ports.map(|ports| ports.to_string()),
        }
    }

    fn render(&self, ip: std::net::Ipv4Addr) -> String {
        match &self.ports {
            Some(ports) => format!("{ip}:{ports}"),
            None => ip.to_string(),
        }
    }
}

impl Iterator for Expansion {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ip) = self.current.as_mut().and_then(Iterator::next) {
                return Some(self.render(ip));
            }
            let block = self.blocks.next()?;
            self.current = Some(Addresses::new(&block));
        }
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
