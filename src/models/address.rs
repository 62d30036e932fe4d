//! Family-tagged IP address value.
//!
//! [`Address`] carries the fixed-width integer form of an address together
//! with its family, resolved once at construction instead of by runtime
//! type inspection at every call site.

use crate::error::{IpError, Result};
use crate::{ipv4, ipv6};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address family discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

/// An IP address as a fixed-width unsigned integer tagged with its family.
///
/// Invariants hold by construction: a `V4` value fits 32 bits and a `V6`
/// value fits 128 bits. Values are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    V4(u32),
    V6(u128),
}

impl Address {
    /// Parse an address string, trying IPv4 first and IPv6 second.
    pub fn parse(ip: &str) -> Result<Address> {
        let ip = ip.trim();
        if let Ok(long) = ipv4::ip2long(ip) {
            return Ok(Address::V4(long));
        }
        if let Ok(long) = ipv6::ip2long(ip) {
            return Ok(Address::V6(long));
        }
        Err(IpError::InvalidFormat(format!("invalid IP address: {ip}")))
    }

    /// The family this address belongs to.
    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    /// The 32-bit value, if this is an IPv4 address.
    pub fn as_v4(&self) -> Option<u32> {
        match self {
            Address::V4(long) => Some(*long),
            Address::V6(_) => None,
        }
    }

    /// The 128-bit value, if this is an IPv6 address.
    pub fn as_v6(&self) -> Option<u128> {
        match self {
            Address::V4(_) => None,
            Address::V6(long) => Some(*long),
        }
    }

    /// Render as dotted decimal (V4) or canonical compressed form (V6).
    pub fn to_text(&self) -> String {
        match self {
            Address::V4(long) => ipv4::long2ip(*long),
            Address::V6(long) => ipv6::long2ip(*long),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl FromStr for Address {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Address> {
        Address::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}
