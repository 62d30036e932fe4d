//! IPv6 address arithmetic.
//!
//! Operations over the 128-bit address space:
//! - [`convert`] - text/numeric conversion
//! - [`validate`] - syntax validation
//! - [`form`] - canonical expansion and compression
//! - [`mask`] - subnet mask validity and conversion
//! - [`cidr`] - CIDR boundary computation and membership
//! - [`conflict`] - pairwise overlap detection

mod cidr;
mod conflict;
mod convert;
mod form;
mod mask;
mod validate;

// Re-export public functions
pub use cidr::{contains, is_cidr, is_same_subnet, parse_cidr, parse_subnet};
pub use conflict::is_conflict;
pub use convert::{ip2long, is_equal, long2ip, IpOperand};
pub use form::{compressed_form, expanded_form};
pub use mask::{
    is_valid_mask, prefix_to_mask, to_inverse_mask, to_mask_length, to_subnet_mask, Mask,
    MAX_LENGTH,
};
pub use validate::is_valid_ip;
