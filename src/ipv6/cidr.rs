//! IPv6 CIDR boundary computation and membership tests.

use crate::error::{IpError, Result};
use crate::ipv6::mask::{mask_value, Mask, MAX_LENGTH};
use crate::ipv6::{ip2long, long2ip, to_subnet_mask};
use crate::models::{AddressRange, CidrInfo};

/// Parse `address/prefix` text into its derived block fields.
///
/// Uses the same host-range policy as the IPv4 path: blocks with
/// `prefix < 127` reserve the network and broadcast addresses; `/127` and
/// `/128` blocks have no distinct network or broadcast address.
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
    let host_bits = u32::from(MAX_LENGTH - prefix);
    let network = if prefix == 0 {
        0
    } else {
        (long >> host_bits) << host_bits
    };
    // 2^128 does not fit u128; the whole-space count saturates
    let ip_count = if prefix == 0 {
        u128::MAX
    } else {
        1u128 << host_bits
    };
    let broadcast = if prefix == 0 {
        u128::MAX
    } else {
        network | (ip_count - 1)
    };

    let multi_host = prefix < MAX_LENGTH - 1;
    Ok(CidrInfo {
        cidr_mask: prefix,
        ip_count,
        usable_count: if multi_host { ip_count - 2 } else { ip_count },
        subnet_mask: to_subnet_mask(prefix)?,
        network_address: multi_host.then(|| long2ip(network)),
        broadcast_address: multi_host.then(|| long2ip(broadcast)),
        first_host: long2ip(if multi_host { network + 1 } else { network }),
        last_host: long2ip(if multi_host { broadcast - 1 } else { broadcast }),
    })
}

/// Parse an address plus hextet mask text into its derived block fields.
pub fn parse_subnet(ip: &str, mask: &str) -> Result<CidrInfo> {
    let length = crate::ipv6::to_mask_length(mask)?;
    parse_cidr(&format!("{ip}/{length}"))
}

/// Verify that an IPv6 address is within the CIDR block.
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

/// Verify that two IPv6 addresses fall in the same subnet under a mask.
pub fn is_same_subnet<'a>(ip1: &str, ip2: &str, mask: impl Into<Mask<'a>>) -> bool {
    let (Ok(long1), Ok(long2)) = (ip2long(ip1), ip2long(ip2)) else {
        return false;
    };
    let Ok(mask_long) = mask_value(mask.into()) else {
        return false;
    };
    (long1 & mask_long) == (long2 & mask_long)
}
