//! # Address Enumerator
//!
//! Walks a network block from its network address to its broadcast address
//! by counting on the four octets with carry.
//!
//! The carry out of the second octet happens when it reaches 255, not 256.
//! Blocks that cross that boundary skip the `x.255.*.*` addresses and keep
//! counting into the next first octet. Output at that boundary must stay as is.
//!
//! The first octet wraps from 255 back to 0. Only blocks shorter than /8 get
//! that far: a /0 walk revisits `0.x.x.x` near its end, so output is not
//! strictly increasing there.

use std::iter::FusedIterator;
use std::net::Ipv4Addr;

use cidr_common::network::block::NetworkBlock;
use tracing::trace;

/// Lazy iterator over the addresses of a [`NetworkBlock`].
#[derive(Debug, Clone)]
pub struct Addresses {
    octets: [u8; 4],
    remaining: u64,
    started: bool,
}

impl Addresses {
    pub fn new(block: &NetworkBlock) -> Self {
        trace!("Enumerating {} ({} addresses)", block, block.size());
        Self {
            octets: block.network().octets(),
            remaining: block.size(),
            started: false,
        }
    }

    fn advance(&mut self) {
        let mut o: [u16; 4] = self.octets.map(u16::from);

        o[3] += 1;
        if o[3] > 255 {
            o[3] = 0;
            o[2] += 1;
        }
        if o[2] > 255 {
            o[2] = 0;
            o[1] += 1;
        }
        if o[1] >= 255 {
            o[1] = 0;
            o[0] += 1;
        }

        // First octet wraps past 255.
        self.octets = o.map(|octet| octet as u8);
    }
}

impl Iterator for Addresses {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        self.remaining -= 1;

        Some(Ipv4Addr::from(self.octets))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Addresses {}

/// Convenience wrapper returning the dotted-decimal strings of a block.
pub fn enumerate(block: &NetworkBlock) -> impl Iterator<Item = String> {
    Addresses::new(block).map(|ip| ip.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
