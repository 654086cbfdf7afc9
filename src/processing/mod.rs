//! Caller-side processing around the arithmetic core:
//! - [`ranges`] - listing same-sized ranges in the last octet
//! - [`session`] - last valid result while input is edited
//! - [`input`] - request lines and JSON batch files

mod input;
mod ranges;
mod session;

// Re-export public functions
pub use input::{default_prefix_for, parse_batch, read_batch, split_request, Request};
pub use ranges::{enumerate_subnets, SubnetRanges, SubnetRangesIter, DEFAULT_RANGE_UPPER_BOUND};
pub use session::Session;
