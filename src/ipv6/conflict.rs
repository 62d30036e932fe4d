//! IPv6 multi-CIDR conflict detection.

use crate::ipv6::{contains, parse_cidr};
use itertools::Itertools;

/// Check a set of CIDR blocks for pairwise overlap.
///
/// Same representative-point policy as the IPv4 scan: network address when
/// the block has one, first host for `/127` and `/128` blocks; conflict is
/// bidirectional containment. Invalid entries are skipped.
pub fn is_conflict(cidrs: &[&str]) -> bool {
    let blocks: Vec<(&str, String)> = cidrs
        .iter()
        .filter_map(|cidr| {
            let subnet = parse_cidr(cidr).ok()?;
            Some((*cidr, subnet.network_address.unwrap_or(subnet.first_host)))
        })
        .collect();

    blocks.iter().tuple_combinations().any(|(a, b)| {
        let hit = contains(b.0, &a.1) || contains(a.0, &b.1);
        if hit {
            log::debug!("CIDR {} conflicts with {}", a.0, b.0);
        }
        hit
    })
}
