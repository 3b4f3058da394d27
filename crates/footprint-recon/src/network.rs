//! Private/public network classification.

use footprint_core::NetworkClass;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Classify an address given as text; anything unparseable is `Unknown`
#[must_use]
pub fn classify_network(ip: &str) -> NetworkClass {
    ip.trim()
        .parse::<IpAddr>()
        .map_or(NetworkClass::Unknown, classify_addr)
}

/// Classify a parsed address
#[must_use]
pub fn classify_addr(ip: IpAddr) -> NetworkClass {
    let local = match ip.to_canonical() {
        IpAddr::V4(v4) => is_local_v4(v4),
        IpAddr::V6(v6) => is_local_v6(v6),
    };

    if local {
        NetworkClass::Private
    } else {
        NetworkClass::Public
    }
}

fn is_local_v4(ip: Ipv4Addr) -> bool {
    ip.is_private() || ip.is_loopback() || ip.is_link_local()
}

fn is_local_v6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    // fc00::/7 unique local, fe80::/10 link-local
    ip.is_loopback() || (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
}
