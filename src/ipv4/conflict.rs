//! IPv4 multi-CIDR conflict detection.

use crate::ipv4::{contains, parse_cidr};
use itertools::Itertools;

/// Check a set of CIDR blocks for pairwise overlap.
///
/// Each block is represented by its network address, or its first host for
/// `/31` and `/32` blocks; two blocks conflict when either representative
/// falls inside the other block. Invalid entries are skipped, and fewer
/// than two valid blocks can never conflict. Pairwise scan, fine for the
/// expected tens of entries.
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
