//! IPv4 address arithmetic.
//!
//! Operations over the 32-bit address space:
//! - [`convert`] - text/numeric conversion and derived renderings
//! - [`validate`] - syntax validation and private-range lookup
//! - [`mask`] - subnet mask validity and conversion
//! - [`cidr`] - CIDR boundary computation and membership
//! - [`conflict`] - pairwise overlap detection

mod cidr;
mod conflict;
mod convert;
mod mask;
mod validate;

// Re-export public functions
pub use cidr::{contains, is_cidr, is_same_subnet, parse_cidr, parse_subnet};
pub use conflict::is_conflict;
pub use convert::{ip2long, is_equal, long2ip, to_bin_hex, to_ipv6_format, IpOperand};
pub use mask::{
    is_valid_mask, prefix_to_mask, to_inverse_mask, to_mask_length, to_subnet_mask, Mask,
    MAX_LENGTH,
};
pub use validate::{is_private, is_valid_ip};
