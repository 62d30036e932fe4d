//! IPv6 subnet mask validation and conversion.

use crate::error::{IpError, Result};
use crate::ipv6::{ip2long, long2ip};

/// Maximum prefix length for IPv6 (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// Subnet mask argument, either a prefix length or hextet mask text.
#[derive(Debug, Clone, Copy)]
pub enum Mask<'a> {
    Length(u8),
    Text(&'a str),
}

impl From<u8> for Mask<'static> {
    fn from(len: u8) -> Self {
        Mask::Length(len)
    }
}

impl<'a> From<&'a str> for Mask<'a> {
    fn from(mask: &'a str) -> Self {
        Mask::Text(mask)
    }
}

/// Convert a prefix length to its 128-bit mask value.
pub fn prefix_to_mask(len: u8) -> Result<u128> {
    if len > MAX_LENGTH {
        return Err(IpError::InvalidFormat(format!(
            "prefix length too long: {len}"
        )));
    }
    if len == 0 {
        return Ok(0);
    }
    let right_len = MAX_LENGTH - len;
    Ok((u128::MAX >> right_len) << right_len)
}

/// A mask value is legal when its bits form a run of ones then zeros.
fn is_contiguous(mask: u128) -> bool {
    mask.leading_ones() + mask.trailing_zeros() == 128
}

/// Resolve either mask form to its 128-bit value, checking contiguity.
pub(crate) fn mask_value(mask: Mask) -> Result<u128> {
    match mask {
        Mask::Length(len) => prefix_to_mask(len),
        Mask::Text(text) => {
            let long = ip2long(text)?;
            if is_contiguous(long) {
                Ok(long)
            } else {
                Err(IpError::InvalidFormat(format!(
                    "non-contiguous subnet mask: {text}"
                )))
            }
        }
    }
}

/// Verify a subnet mask in either form.
pub fn is_valid_mask<'a>(mask: impl Into<Mask<'a>>) -> bool {
    mask_value(mask.into()).is_ok()
}

/// Convert a prefix length to compressed hextet mask text.
pub fn to_subnet_mask(len: u8) -> Result<String> {
    Ok(long2ip(prefix_to_mask(len)?))
}

/// Convert hextet mask text to a prefix length.
pub fn to_mask_length(mask: &str) -> Result<u8> {
    let long = mask_value(Mask::Text(mask))?;
    Ok(long.count_ones() as u8)
}

/// Bitwise inverse of a subnet mask, as compressed hextet text.
pub fn to_inverse_mask<'a>(mask: impl Into<Mask<'a>>) -> Result<String> {
    let long = mask_value(mask.into())?;
    Ok(long2ip(!long))
}
