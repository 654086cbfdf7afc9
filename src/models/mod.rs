//! Subnet arithmetic core.
//!
//! Pure functions and values, no I/O:
//! - [`parse`] - dotted-quad address parsing
//! - [`compute`] - derive a [`SubnetInfo`] from an address and prefix length
//! - [`classify`] - legacy [`NetworkClass`] of an address

mod class;
mod error;
mod ipv4;
mod subnet_info;

// Re-export public types
pub use class::{classify, NetworkClass};
pub use error::{ParseErrorKind, SubnetError};
pub use ipv4::{
    address_count, binary_octets, broadcast_addr, get_cidr_mask, network_addr, parse,
    validate_prefix, MAX_LENGTH,
};
pub use subnet_info::{compute, compute_text, SubnetInfo};
