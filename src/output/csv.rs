//! CSV output formatting for subnet results.

use crate::models::SubnetInfo;
use super::terminal::{format_field, format_optional};

const CSV_HEADER: &str = r#" "cnt",         "address", "prefix",       "subnet_mask",         "network",       "broadcast",      "first_usable",       "last_usable",      "hosts", "class""#;

/// Render results as CSV, header first.
pub fn render_csv(results: &[SubnetInfo]) -> Vec<String> {
    let mut rows = Vec::with_capacity(results.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for (i, info) in results.iter().enumerate() {
        rows.push(csv_row(i + 1, info));
    }
    rows
}

/// Print results as CSV to stdout.
pub fn subnet_print(results: &[SubnetInfo]) {
    log::info!("# Got result count = {}", results.len());
    for row in render_csv(results) {
        println!("{row}");
    }
}

/// Format a single CSV row.
fn csv_row(j: usize, info: &SubnetInfo) -> String {
    format!(
        "{j},{address},{prefix},{mask},{network},{broadcast},{first},{last},{hosts},{class}",
        j = format_field(j, 6),
        address = format_field(info.address, 17),
        prefix = format_field(info.prefix_length, 8),
        mask = format_field(info.subnet_mask, 18),
        network = format_field(info.network_address, 18),
        broadcast = format_field(info.broadcast_address, 18),
        first = format_field(format_optional(info.first_usable), 18),
        last = format_field(format_optional(info.last_usable), 18),
        hosts = format_field(info.usable_host_count, 12),
        class = format_field(info.network_class, 7),
    )
}
