// cargo watch -x 'fmt' -x 'test'

//! IPv4 subnet calculator.
//!
//! - [`models`] - pure subnet arithmetic: [`models::parse`],
//!   [`models::compute`], [`models::classify`]
//! - [`processing`] - range listing, edit sessions and request input
//! - [`output`] - terminal, CSV and explanation texts

pub mod cli;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{classify, compute, parse, NetworkClass, SubnetError, SubnetInfo};
pub use processing::enumerate_subnets;
