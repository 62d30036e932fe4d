//! Validated inclusive address range.

use crate::error::{IpError, Result};
use crate::models::Address;

/// An inclusive `[start, end]` pair of same-family addresses.
///
/// Construction goes through checked factories only; an inverted or
/// mixed-family pair is rejected with [`IpError::InvalidRange`]. Instances
/// are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    start: Address,
    end: Address,
}

impl AddressRange {
    /// Build a range from two numeric addresses.
    pub fn from_long(start: Address, end: Address) -> Result<AddressRange> {
        if start.family() != end.family() {
            return Err(IpError::InvalidRange(
                "start and end must be the same family".to_string(),
            ));
        }
        if end < start {
            return Err(IpError::InvalidRange(
                "end must be greater than or equal to start".to_string(),
            ));
        }
        Ok(AddressRange { start, end })
    }

    /// Build a range from two address strings.
    pub fn from_text(start: &str, end: &str) -> Result<AddressRange> {
        let start = Address::parse(start)
            .map_err(|_| IpError::InvalidRange(format!("invalid start address: {start}")))?;
        let end = Address::parse(end)
            .map_err(|_| IpError::InvalidRange(format!("invalid end address: {end}")))?;
        AddressRange::from_long(start, end)
    }

    /// Numeric bounds of the range.
    pub fn bounds(&self) -> (Address, Address) {
        (self.start, self.end)
    }

    /// Text bounds of the range.
    pub fn to_text(&self) -> (String, String) {
        (self.start.to_text(), self.end.to_text())
    }

    /// Number of addresses in the range.
    ///
    /// The whole 128-bit space holds one more address than `u128` can count;
    /// that single case saturates to `u128::MAX`.
    pub fn ip_count(&self) -> u128 {
        match (self.start, self.end) {
            (Address::V4(s), Address::V6(e)) | (Address::V6(e), Address::V4(s)) => {
                unreachable!("mixed-family range rejected at construction: {s}/{e}")
            }
            (Address::V4(s), Address::V4(e)) => u128::from(e - s) + 1,
            (Address::V6(s), Address::V6(e)) => (e - s).saturating_add(1),
        }
    }

    /// Whether the numeric address falls inside the range.
    ///
    /// An address of the other family is never contained.
    pub fn contains_value(&self, addr: Address) -> bool {
        match (self.start, self.end, addr) {
            (Address::V4(s), Address::V4(e), Address::V4(v)) => v >= s && v <= e,
            (Address::V6(s), Address::V6(e), Address::V6(v)) => v >= s && v <= e,
            _ => false,
        }
    }

    /// Whether the address string falls inside the range.
    pub fn contains(&self, ip: &str) -> bool {
        match Address::parse(ip) {
            Ok(addr) => self.contains_value(addr),
            Err(_) => false,
        }
    }
}
