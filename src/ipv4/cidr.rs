//! IPv4 CIDR boundary computation and membership tests.

use crate::error::{IpError, Result};
use crate::ipv4::mask::{mask_value, Mask, MAX_LENGTH};
use crate::ipv4::{ip2long, is_valid_ip, long2ip, to_mask_length, to_subnet_mask};
use crate::models::{AddressRange, CidrInfo};

/// Parse `address/prefix` text into its derived block fields.
///
/// The host-range policy: blocks with `prefix < 31` reserve the network and
/// broadcast addresses; `/31` and `/32` blocks have no distinct network or
/// broadcast address and every address is usable.
pub fn parse_cidr(cidr: &str) -> Result<CidrInfo> {
    let (ip, mask) = cidr
        .trim()
        .split_once('/')
        .ok_or_else(|| IpError::InvalidFormat(format!("invalid CIDR format: {cidr}")))?;
    let prefix: u8 = mask
        .parse()
        .map_err(|_| IpError::InvalidFormat(format!("invalid prefix length: {mask}")))?;
    if prefix > MAX_LENGTH {
        return Err(IpError::InvalidFormat(format!(
            "prefix length too long: {prefix}"
        )));
    }

    let long = ip2long(ip)?;
    let host_bits = MAX_LENGTH - prefix;
    let network = if prefix == 0 {
        0
    } else {
        (long >> host_bits) << host_bits
    };
    let ip_count = 1u64 << host_bits;
    let broadcast = network | (ip_count - 1) as u32;

    let multi_host = prefix < MAX_LENGTH - 1;
    Ok(CidrInfo {
        cidr_mask: prefix,
        ip_count: u128::from(ip_count),
        usable_count: u128::from(if multi_host { ip_count - 2 } else { ip_count }),
        subnet_mask: to_subnet_mask(prefix)?,
        network_address: multi_host.then(|| long2ip(network)),
        broadcast_address: multi_host.then(|| long2ip(broadcast)),
        first_host: long2ip(if multi_host { network + 1 } else { network }),
        last_host: long2ip(if multi_host { broadcast - 1 } else { broadcast }),
    })
}

/// Parse an address plus dotted mask text into its derived block fields.
pub fn parse_subnet(ip: &str, mask: &str) -> Result<CidrInfo> {
    let length = to_mask_length(mask)?;
    parse_cidr(&format!("{ip}/{length}"))
}

/// Verify that an IPv4 address is within the CIDR block.
///
/// For `/31` and `/32` the host range is the whole block; otherwise the
/// block spans network through broadcast address.
pub fn contains(cidr: &str, ip: &str) -> bool {
    let Ok(subnet) = parse_cidr(cidr) else {
        return false;
    };

    let range = match (&subnet.network_address, &subnet.broadcast_address) {
        (Some(network), Some(broadcast)) => AddressRange::from_text(network, broadcast),
        _ => AddressRange::from_text(&subnet.first_host, &subnet.last_host),
    };
    match range {
        Ok(range) => range.contains(ip),
        Err(_) => false,
    }
}

/// Validate CIDR text by attempting to parse it.
pub fn is_cidr(cidr: &str) -> bool {
    parse_cidr(cidr).is_ok()
}

/// Verify that two IPv4 addresses fall in the same subnet under a mask.
pub fn is_same_subnet<'a>(ip1: &str, ip2: &str, mask: impl Into<Mask<'a>>) -> bool {
    if !is_valid_ip(ip1, false) || !is_valid_ip(ip2, false) {
        return false;
    }
    let Ok(mask_long) = mask_value(mask.into()) else {
        return false;
    };

    // Both inputs validated above; parse failures cannot occur here.
    let (Ok(long1), Ok(long2)) = (ip2long(ip1), ip2long(ip2)) else {
        return false;
    };
    (long1 & mask_long) == (long2 & mask_long)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_24() {
        let subnet = parse_cidr("192.168.0.1/24").unwrap();
        assert_eq!(subnet.cidr_mask, 24);
        assert_eq!(subnet.ip_count, 256);
        assert_eq!(subnet.usable_count, 254);
        assert_eq!(subnet.subnet_mask, "255.255.255.0");
        assert_eq!(subnet.network_address.as_deref(), Some("192.168.0.0"));
        assert_eq!(subnet.broadcast_address.as_deref(), Some("192.168.0.255"));
        assert_eq!(subnet.first_host, "192.168.0.1");
        assert_eq!(subnet.last_host, "192.168.0.254");
    }

    #[test]
    fn test_parse_cidr_whole_space() {
        let subnet = parse_cidr("192.168.1.0/0").unwrap();
        assert_eq!(subnet.cidr_mask, 0);
        assert_eq!(subnet.ip_count, 4294967296);
        assert_eq!(subnet.usable_count, 4294967294);
        assert_eq!(subnet.subnet_mask, "0.0.0.0");
        assert_eq!(subnet.network_address.as_deref(), Some("0.0.0.0"));
        assert_eq!(
            subnet.broadcast_address.as_deref(),
            Some("255.255.255.255")
        );
        assert_eq!(subnet.first_host, "0.0.0.1");
        assert_eq!(subnet.last_host, "255.255.255.254");
    }

    #[test]
    fn test_parse_cidr_1() {
        let subnet = parse_cidr("192.168.1.0/1").unwrap();
        assert_eq!(subnet.ip_count, 2147483648);
        assert_eq!(subnet.usable_count, 2147483646);
        assert_eq!(subnet.subnet_mask, "128.0.0.0");
        assert_eq!(subnet.network_address.as_deref(), Some("128.0.0.0"));
        assert_eq!(
            subnet.broadcast_address.as_deref(),
            Some("255.255.255.255")
        );
        assert_eq!(subnet.first_host, "128.0.0.1");
        assert_eq!(subnet.last_host, "255.255.255.254");
    }

    #[test]
    fn test_parse_cidr_small_blocks() {
        let subnet = parse_cidr("192.168.1.0/31").unwrap();
        assert_eq!(subnet.cidr_mask, 31);
        assert_eq!(subnet.ip_count, 2);
        assert_eq!(subnet.usable_count, 2);
        assert_eq!(subnet.subnet_mask, "255.255.255.254");
        assert_eq!(subnet.network_address, None);
        assert_eq!(subnet.broadcast_address, None);
        assert_eq!(subnet.first_host, "192.168.1.0");
        assert_eq!(subnet.last_host, "192.168.1.1");

        let subnet = parse_cidr("192.168.1.7/32").unwrap();
        assert_eq!(subnet.ip_count, 1);
        assert_eq!(subnet.usable_count, 1);
        assert_eq!(subnet.network_address, None);
        assert_eq!(subnet.broadcast_address, None);
        assert_eq!(subnet.first_host, "192.168.1.7");
        assert_eq!(subnet.last_host, "192.168.1.7");
    }

    #[test]
    fn test_parse_cidr_invalid() {
        assert!(parse_cidr("192.168.1/33").is_err());
        assert!(parse_cidr("259.168.1.0/24").is_err());
        assert!(parse_cidr("192.168.1.0/-1").is_err());
        assert!(parse_cidr("192.168.1.0/33").is_err());
        assert!(parse_cidr("192.168.1.s/24").is_err());
        assert!(parse_cidr("192.168.1.0").is_err());
        assert!(parse_cidr("192.168.1.0/").is_err());
    }

    #[test]
    fn test_parse_subnet() {
        let subnet = parse_subnet("192.168.0.1", "255.255.255.0").unwrap();
        assert_eq!(subnet.cidr_mask, 24);
        assert_eq!(subnet.ip_count, 256);
        assert_eq!(subnet.usable_count, 254);
        assert_eq!(subnet.network_address.as_deref(), Some("192.168.0.0"));
        assert_eq!(subnet.first_host, "192.168.0.1");
        assert_eq!(subnet.last_host, "192.168.0.254");

        assert!(parse_subnet("192.168.0.1", "1.255.255.0").is_err());
        assert!(parse_subnet("192.168.0.300", "255.255.255.0").is_err());
    }

    #[test]
    fn test_contains() {
        assert!(contains("192.168.1.0/24", "192.168.1.5"));
        assert!(contains("192.168.1.0/24", "192.168.1.0"));
        assert!(contains("192.168.1.0/24", "192.168.1.255"));
        assert!(!contains("192.168.1.0/24", "192.168.2.5"));
        assert!(contains("192.168.1.0/31", "192.168.1.1"));
        assert!(!contains("192.168.1.0/31", "192.168.1.2"));
        assert!(contains("192.168.1.7/32", "192.168.1.7"));
        assert!(!contains("192.168.1.7/32", "192.168.1.8"));
        assert!(!contains("192.168.1.0/24", "not-an-ip"));
        assert!(!contains("192.168.1.0/24", "2001:db8::1"));
        assert!(!contains("bad/24", "192.168.1.5"));
    }

    #[test]
    fn test_is_cidr() {
        assert!(is_cidr("192.168.1.0/24"));
        assert!(is_cidr("0.0.0.0/0"));
        assert!(!is_cidr("192.168.1.0/34"));
        assert!(!is_cidr("287.168.1.0/24"));
        assert!(!is_cidr("192.168.1.0"));
    }

    #[test]
    fn test_is_same_subnet() {
        assert!(is_same_subnet("192.168.1.10", "192.168.1.100", 24));
        assert!(!is_same_subnet("192.168.1.10", "192.168.1.100", 32));
        assert!(is_same_subnet(
            "192.168.1.10",
            "192.168.1.100",
            "255.255.255.0"
        ));
        assert!(!is_same_subnet(
            "192.168.1.10",
            "192.168.2.100",
            "255.255.255.0"
        ));
        assert!(!is_same_subnet("192.168.1.310", "192.168.1.100", 24));
        assert!(!is_same_subnet("192.168.1.10", "192.168.1.100", 33));
        assert!(!is_same_subnet(
            "192.168.1.10",
            "192.168.1.100",
            "255.0.255.0"
        ));
    }

    #[test]
    fn test_bound_ordering() {
        for cidr in ["10.1.2.3/8", "192.168.0.1/24", "172.16.5.5/30", "1.2.3.4/0"] {
            let subnet = parse_cidr(cidr).unwrap();
            let network = ip2long(subnet.network_address.as_deref().unwrap()).unwrap();
            let first = ip2long(&subnet.first_host).unwrap();
            let last = ip2long(&subnet.last_host).unwrap();
            let broadcast = ip2long(subnet.broadcast_address.as_deref().unwrap()).unwrap();
            assert!(network <= first);
            assert!(first <= last);
            assert!(last <= broadcast);
        }
    }
}
