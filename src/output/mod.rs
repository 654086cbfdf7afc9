//! Output formatting for subnet results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//! - [`explain`] - How each value was derived

mod csv;
mod explain;
mod terminal;

pub use csv::{render_csv, subnet_print};
pub use explain::{explain, Topic};
pub use terminal::{format_field, format_optional, print_ranges, print_report, render_report};
