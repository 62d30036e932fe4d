//! Derived CIDR block information.

use serde::{Deserialize, Serialize};

/// Fields derived from an `address/prefix` pair.
///
/// `network_address` and `broadcast_address` are only meaningful for blocks
/// with at least four addresses; the 2-address and 1-address blocks report
/// them as `None` and use the full block as host range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidrInfo {
    /// Prefix length of the block.
    pub cidr_mask: u8,
    /// Total number of addresses (`2^(W-p)`; the whole 128-bit space
    /// saturates to `u128::MAX`).
    pub ip_count: u128,
    /// Number of usable host addresses under the uniform host policy.
    pub usable_count: u128,
    /// Subnet mask text (dotted for IPv4, hextet form for IPv6).
    pub subnet_mask: String,
    /// Address with all host bits cleared (None when `p >= W-1`).
    pub network_address: Option<String>,
    /// Address with all host bits set (None when `p >= W-1`).
    pub broadcast_address: Option<String>,
    /// First usable host address.
    pub first_host: String,
    /// Last usable host address.
    pub last_host: String,
}

/// Decimal, hexadecimal and binary renderings of an IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinHex {
    pub decimal: u32,
    pub hex: String,
    pub binary: String,
}

/// IPv4-mapped IPv6 text forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv6Format {
    /// Mapped form with an embedded dotted quad, e.g. `::ffff:192.168.1.1`.
    pub mapped: String,
    /// Full eight-hextet expansion.
    pub expanded: String,
    /// Canonical compressed form.
    pub compressed: String,
}
