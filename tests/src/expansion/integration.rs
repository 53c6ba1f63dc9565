#![cfg(test)]
use std::net::Ipv4Addr;

use cidr_common::error::{ExpandError, PortParseError};
use cidr_core::Expander;
use cidr_core::resolver::{NoResolver, StaticResolver};

const BASE_IP: &str = "192.168.0.2";

fn expander() -> Expander {
    Expander::new(
        StaticResolver::new()
            .with_host("gateway.lan", &[Ipv4Addr::new(192, 168, 0, 1)])
            .with_host(
                "cluster.lan",
                &[Ipv4Addr::new(10, 1, 0, 7), Ipv4Addr::new(10, 2, 0, 7)],
            ),
    )
}

/// Every prefix from /32 down to /12 yields 2^(32-p) addresses.
#[test]
fn expansion_length_per_prefix() {
    let expander = expander();
    for prefix in 12..=32u32 {
        let count = expander.expand(&format!("{BASE_IP}/{prefix}")).len() as u64;
        assert_eq!(count, 1u64 << (32 - prefix), "wrong size for /{prefix}");
    }
}

#[test]
fn expansion_length_of_slash_8() {
    let count = expander()
        .try_expand(&format!("{BASE_IP}/8"))
        .expect("valid block")
        .count();
    assert_eq!(count, 16_777_216);
}

#[test]
fn host_without_prefix_matches_slash_32() {
    let expander = expander();
    let bare = expander.expand(BASE_IP);
    assert_eq!(bare, vec![BASE_IP.to_string()]);
    assert_eq!(bare, expander.expand(&format!("{BASE_IP}/32")));
}

#[test]
fn expansion_starts_at_network_and_increases() {
    let expander = expander();
    for prefix in [16u32, 20, 24, 28, 30, 31] {
        let ips: Vec<u32> = expander
            .expand(&format!("{BASE_IP}/{prefix}"))
            .iter()
            .map(|ip| u32::from(ip.parse::<Ipv4Addr>().unwrap()))
            .collect();

        let mask = u32::MAX << (32 - prefix);
        assert_eq!(ips[0], u32::from(Ipv4Addr::new(192, 168, 0, 2)) & mask);
        assert!(ips.windows(2).all(|w| w[0] < w[1]), "/{prefix} not increasing");
    }
}

#[test]
fn malformed_inputs_expand_to_nothing() {
    let expander = expander();
    for expr in [
        "192.168.0.2/",
        "255.256.256.255/24",
        "255.abc.256.255/24",
        "255.122.25/24",
        "1.2.3.4.5",
        "10.0.0.1/33",
        "unknown.lan/24",
        "1.10.2.5:80-x",
        "1.10.2.5:1-2-3",
    ] {
        assert!(expander.expand(expr).is_empty(), "{expr} should be empty");
    }
}

#[test]
fn port_errors_are_distinguishable() {
    let expander = expander();
    assert!(matches!(
        expander.try_expand("1.10.2.5:abc"),
        Err(ExpandError::Ports(PortParseError::NonNumeric(_)))
    ));
    assert!(matches!(
        expander.try_expand("1.10.2.5:1-2-3"),
        Err(ExpandError::Ports(PortParseError::MultipleHyphens(_)))
    ));
}

#[test]
fn reversed_port_range_is_ascending() {
    assert_eq!(
        expander().expand("1.10.2.5:500-498"),
        vec!["1.10.2.5:498,499,500"]
    );
}

#[test]
fn block_with_ports_repeats_the_port_list() {
    let ports = "490,491,492,493,494,495,496,497,498,499,500";
    assert_eq!(
        expander().expand("1.10.2.5/31:500-490"),
        vec![format!("1.10.2.4:{ports}"), format!("1.10.2.5:{ports}")]
    );
}

#[test]
fn hostnames_expand_each_address_in_order() {
    assert_eq!(
        expander().expand("cluster.lan/31"),
        vec!["10.1.0.6", "10.1.0.7", "10.2.0.6", "10.2.0.7"]
    );
    assert_eq!(expander().expand("gateway.lan"), vec!["192.168.0.1"]);
}

#[test]
fn hostnames_are_skipped_without_dns() {
    let expander = Expander::new(NoResolver);
    assert!(expander.expand("gateway.lan/30").is_empty());
}

#[test]
fn expansion_is_idempotent() {
    let expander = expander();
    let first = expander.expand("10.20.30.40/26:22,80");
    let second = expander.expand("10.20.30.40/26:22,80");
    assert_eq!(first.len(), 64);
    assert_eq!(first, second);
}
