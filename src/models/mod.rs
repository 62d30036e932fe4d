//! Shared value types for the toolkit.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Address`] - family-tagged numeric IP address
//! - [`AddressRange`] - validated inclusive address range
//! - [`CidrInfo`] - fields derived from a CIDR block

mod address;
mod cidr;
mod range;

// Re-export public types
pub use address::{Address, Family};
pub use cidr::{BinHex, CidrInfo, Ipv6Format};
pub use range::AddressRange;
