//! IPv6 text/numeric conversion.

use crate::error::{IpError, Result};
use crate::ipv6::form::{compress_groups, expanded_form};

/// Convert an IPv6 address string to its 128-bit value.
pub fn ip2long(ip: &str) -> Result<u128> {
    let expanded = expanded_form(ip)?;

    let mut long: u128 = 0;
    for group in expanded.split(':') {
        let hextet = u16::from_str_radix(group, 16)
            .map_err(|_| IpError::InvalidFormat(format!("invalid hextet: {group}")))?;
        long = (long << 16) | u128::from(hextet);
    }
    Ok(long)
}

/// Convert a 128-bit value to canonical compressed text.
pub fn long2ip(ip: u128) -> String {
    let groups: [u16; 8] = std::array::from_fn(|i| (ip >> (112 - i * 16)) as u16);
    compress_groups(&groups)
}

/// Equality operand, either address text or a 128-bit value.
#[derive(Debug, Clone, Copy)]
pub enum IpOperand<'a> {
    Text(&'a str),
    Long(u128),
}

impl<'a> From<&'a str> for IpOperand<'a> {
    fn from(ip: &'a str) -> Self {
        IpOperand::Text(ip)
    }
}

impl From<u128> for IpOperand<'static> {
    fn from(ip: u128) -> Self {
        IpOperand::Long(ip)
    }
}

/// Verify that two IPv6 addresses are equal, in either text or numeric form.
pub fn is_equal<'a, 'b>(
    ip1: impl Into<IpOperand<'a>>,
    ip2: impl Into<IpOperand<'b>>,
) -> bool {
    fn value(op: IpOperand) -> Option<u128> {
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
