//! IPv4 text validation and private-range lookup.

use crate::models::AddressRange;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Default grammar, leading zeros inside an octet accepted.
    static ref IPV4_RE: Regex = Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}$"
    )
    .expect("Invalid Regex");

    /// Strict grammar, leading zeros rejected.
    static ref IPV4_STRICT_RE: Regex = Regex::new(
        r"^(1\d{2}|2[0-4]\d|25[0-5]|[1-9]\d|[1-9])(\.(1\d{2}|2[0-4]\d|25[0-5]|[1-9]\d|\d)){3}$"
    )
    .expect("Invalid Regex");

    /// Private, loopback and link-local IPv4 ranges.
    static ref PRIVATE_RANGES: Vec<AddressRange> = [
        ("10.0.0.0", "10.255.255.255"),
        ("127.0.0.0", "127.255.255.255"),
        ("172.16.0.0", "172.31.255.255"),
        ("169.254.0.0", "169.254.255.255"),
        ("192.168.0.0", "192.168.255.255"),
    ]
    .iter()
    .map(|(start, end)| {
        AddressRange::from_text(start, end).expect("Invalid private range table")
    })
    .collect();
}

/// Validate an IPv4 address string.
///
/// `strict` disallows leading zeros within an octet.
pub fn is_valid_ip(ip: &str, strict: bool) -> bool {
    if strict {
        IPV4_STRICT_RE.is_match(ip)
    } else {
        IPV4_RE.is_match(ip)
    }
}

/// Whether an IPv4 address falls in a private, loopback or link-local range.
pub fn is_private(ip: &str) -> bool {
    if !is_valid_ip(ip, false) {
        return false;
    }
    PRIVATE_RANGES.iter().any(|range| range.contains(ip))
}
