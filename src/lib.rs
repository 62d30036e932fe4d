//! IPv4/IPv6 address and CIDR arithmetic utilities.
//!
//! Pure-function toolkit: text/numeric conversion, syntax and mask
//! validation, CIDR boundary computation, IPv6 canonical forms and
//! multi-CIDR conflict detection. Every operation is a pure function of its
//! inputs; nothing here does I/O or holds state between calls.
//!
//! - [`ipv4`] - operations over the 32-bit address space
//! - [`ipv6`] - operations over the 128-bit address space
//! - [`models`] - shared value types
//!
//! The functions at the crate root are family-agnostic: they try the IPv4
//! interpretation of their input first and fall back to IPv6.

pub mod error;
pub mod ipv4;
pub mod ipv6;
pub mod models;

pub use error::{IpError, Result};
pub use models::{Address, AddressRange, BinHex, CidrInfo, Family, Ipv6Format};

/// Convert an address string of either family to its numeric form.
pub fn ip2long(ip: &str) -> Result<Address> {
    Address::parse(ip)
}

/// Convert a numeric address back to text.
pub fn long2ip(ip: Address) -> String {
    ip.to_text()
}

/// Validate an address string of either family.
pub fn is_valid_ip(ip: &str) -> bool {
    ipv4::is_valid_ip(ip, false) || ipv6::is_valid_ip(ip)
}

/// Validate CIDR text of either family.
pub fn is_cidr(cidr: &str) -> bool {
    ipv4::is_cidr(cidr) || ipv6::is_cidr(cidr)
}

/// Verify that an address is within a CIDR block of the same family.
pub fn contains(cidr: &str, ip: &str) -> bool {
    ipv4::contains(cidr, ip) || ipv6::contains(cidr, ip)
}

/// Check a mixed set of CIDR blocks for overlap within each family.
///
/// Blocks of different families never conflict with each other.
pub fn is_conflict(cidrs: &[&str]) -> bool {
    ipv4::is_conflict(cidrs) || ipv6::is_conflict(cidrs)
}

/// Verify that two address strings denote the same address.
///
/// Addresses of different families are never equal.
pub fn is_equal(ip1: &str, ip2: &str) -> bool {
    match (Address::parse(ip1), Address::parse(ip2)) {
        (Ok(addr1), Ok(addr2)) => addr1 == addr2,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_ip2long() {
        assert_eq!(ip2long("192.168.0.1").unwrap(), Address::V4(3232235521));
        assert_eq!(ip2long("::ffff:9999").unwrap(), Address::V6(4294941081));
        assert!(ip2long("999.1.1.1").is_err());
    }

    #[test]
    fn test_dispatch_long2ip() {
        assert_eq!(long2ip(Address::V4(3232235521)), "192.168.0.1");
        assert_eq!(long2ip(Address::V6(4294941081)), "::ffff:9999");
    }

    #[test]
    fn test_dispatch_is_valid_ip() {
        assert!(is_valid_ip("192.168.1.99"));
        assert!(is_valid_ip("f16c:f7ec:cfa2:e1c5:9a3c:cb08:801f:36b8"));
        assert!(!is_valid_ip("999.168.1.99"));
        assert!(!is_valid_ip("1:::1"));
    }

    #[test]
    fn test_dispatch_is_cidr() {
        assert!(is_cidr("192.168.1.0/24"));
        assert!(is_cidr("2001:db8::1/64"));
        assert!(!is_cidr("192.168.1.0/34"));
        assert!(!is_cidr("287.168.1.0/24"));
    }

    #[test]
    fn test_dispatch_contains() {
        assert!(contains("192.168.1.0/24", "192.168.1.5"));
        assert!(!contains("192.168.1.0/24", "192.168.2.5"));
        assert!(contains("2001:db8::1/64", "2001:db8::11"));
        assert!(!contains("2001:db8::1/128", "2001:db8::11"));
        // cross-family never matches
        assert!(!contains("192.168.1.0/24", "2001:db8::1"));
    }

    #[test]
    fn test_dispatch_is_conflict() {
        assert!(!is_conflict(&["192.168.1.0/24", "192.168.0.0/24"]));
        assert!(!is_conflict(&["192.168.1.0/24", "2001:db8::1/122"]));
        assert!(is_conflict(&["2001:db8::1/120", "2001:db8::1/122"]));
        assert!(is_conflict(&[
            "192.168.1.0/24",
            "192.168.1.0/28",
            "2001:db8::1/122"
        ]));
    }

    #[test]
    fn test_dispatch_is_equal() {
        assert!(is_equal("192.168.1.10", "192.168.01.10"));
        assert!(is_equal("::ffff", "0:0:0:0:0:0:0:ffff"));
        assert!(!is_equal("192.168.1.10", "192.168.1.11"));
        // an IPv4-mapped form and the dotted quad are different families
        assert!(!is_equal("::ffff:192.168.0.1", "192.168.0.1"));
    }
}
