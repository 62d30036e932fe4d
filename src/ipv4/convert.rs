//! IPv4 text/numeric conversion.

use crate::error::{IpError, Result};
use crate::ipv4::is_valid_ip;
use crate::ipv6;
use crate::models::{BinHex, Ipv6Format};

/// Convert an IPv4 address string to its 32-bit value.
///
/// Accepts leading zeros within an octet (`192.168.00.01`), matching the
/// default validation grammar.
pub fn ip2long(ip: &str) -> Result<u32> {
    if !is_valid_ip(ip, false) {
        return Err(IpError::InvalidFormat(format!("invalid IPv4 address: {ip}")));
    }

    let mut long: u32 = 0;
    for part in ip.split('.') {
        let octet: u32 = part
            .parse()
            .map_err(|_| IpError::InvalidFormat(format!("invalid IPv4 octet: {part}")))?;
        long = (long << 8) | octet;
    }
    Ok(long)
}

/// Convert a 32-bit value to dotted decimal text.
pub fn long2ip(ip: u32) -> String {
    let octets = ip.to_be_bytes();
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// Decimal, hexadecimal and binary renderings of an IPv4 address.
pub fn to_bin_hex(ip: &str) -> Result<BinHex> {
    let long = ip2long(ip)?;
    Ok(BinHex {
        decimal: long,
        hex: format!("{long:#010x}"),
        binary: format!("{long:032b}"),
    })
}

/// IPv4-mapped IPv6 text forms of an IPv4 address.
pub fn to_ipv6_format(ip: &str) -> Result<Ipv6Format> {
    let long = ip2long(ip)?;
    let mapped = format!("::ffff:{}", long2ip(long));
    Ok(Ipv6Format {
        expanded: ipv6::expanded_form(&mapped)?,
        compressed: ipv6::compressed_form(&mapped)?,
        mapped,
    })
}

/// Equality operand, either address text or a 32-bit value.
#[derive(Debug, Clone, Copy)]
pub enum IpOperand<'a> {
    Text(&'a str),
    Long(u32),
}

impl<'a> From<&'a str> for IpOperand<'a> {
    fn from(ip: &'a str) -> Self {
        IpOperand::Text(ip)
    }
}

impl From<u32> for IpOperand<'static> {
    fn from(ip: u32) -> Self {
        IpOperand::Long(ip)
    }
}

/// Verify that two IPv4 addresses are equal, in either text or numeric form.
pub fn is_equal<'a, 'b>(
    ip1: impl Into<IpOperand<'a>>,
    ip2: impl Into<IpOperand<'b>>,
) -> bool {
    fn value(op: IpOperand) -> Option<u32> {
        match op {
            IpOperand::Text(ip) => ip2long(ip).ok(),
            IpOperand::Long(long) => Some(long),
        }
    }

    match (value(ip1.into()), value(ip2.into())) {
        (Some(long1), Some(long2)) => long1 == long2,
        _ => false,
    }
}
