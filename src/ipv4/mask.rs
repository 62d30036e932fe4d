//! IPv4 subnet mask validation and conversion.

use crate::error::{IpError, Result};
use crate::ipv4::{ip2long, long2ip};

/// Maximum prefix length for IPv4 (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Subnet mask argument, either a prefix length or dotted mask text.
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

/// Convert a prefix length to its 32-bit mask value.
pub fn prefix_to_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(IpError::InvalidFormat(format!(
            "prefix length too long: {len}"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// A mask value is legal when its bits form a run of ones then zeros.
fn is_contiguous(mask: u32) -> bool {
    mask.leading_ones() + mask.trailing_zeros() == 32
}

/// Resolve either mask form to its 32-bit value, checking contiguity.
pub(crate) fn mask_value(mask: Mask) -> Result<u32> {
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

/// Convert a prefix length to dotted mask text.
pub fn to_subnet_mask(len: u8) -> Result<String> {
    Ok(long2ip(prefix_to_mask(len)?))
}

/// Convert dotted mask text to a prefix length.
pub fn to_mask_length(mask: &str) -> Result<u8> {
    let long = mask_value(Mask::Text(mask))?;
    Ok(long.count_ones() as u8)
}

/// Bitwise inverse of a subnet mask, as dotted text.
pub fn to_inverse_mask<'a>(mask: impl Into<Mask<'a>>) -> Result<String> {
    let long = mask_value(mask.into())?;
    Ok(long2ip(!long))
}
