//! Terminal output utilities.
//!
//! Provides formatting helpers and the colored report for one result.

use crate::models::{binary_octets, SubnetInfo};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Text for an optional address, `none` when the host range is empty.
pub fn format_optional(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Build the labelled report lines for a result.
pub fn render_report(info: &SubnetInfo) -> Vec<String> {
    let label = |s: &str| format!("{s:<12}").bright_black().to_string();
    let value = |s: String| format!("{s:<18}").blue().bold().to_string();
    let bits = |a: Ipv4Addr| binary_octets(u32::from(a)).magenta().to_string();

    let class = match info.default_prefix_for_class {
        Some(prefix) => format!("{} (default /{prefix})", info.network_class),
        None => format!("{} ({})", info.network_class, info.network_class.description()),
    };

    vec![
        format!(
            "{}{}{}",
            label("Address:"),
            value(info.address.to_string()),
            bits(info.address)
        ),
        format!(
            "{}{}{}",
            label("Netmask:"),
            value(format!("{} = /{}", info.subnet_mask, info.prefix_length)),
            bits(info.subnet_mask)
        ),
        format!(
            "{}{}{}",
            label("Wildcard:"),
            value(info.wildcard_mask().to_string()),
            bits(info.wildcard_mask())
        ),
        format!(
            "{}{}{}",
            label("Network:"),
            value(info.to_string()),
            bits(info.network_address)
        ),
        format!(
            "{}{}{}",
            label("Broadcast:"),
            value(info.broadcast_address.to_string()),
            bits(info.broadcast_address)
        ),
        format!("{}{}", label("HostMin:"), value(format_optional(info.first_usable))),
        format!("{}{}", label("HostMax:"), value(format_optional(info.last_usable))),
        format!("{}{}", label("Hosts:"), value(info.usable_host_count.to_string())),
        format!("{}{}", label("Class:"), value(class)),
    ]
}

/// Print the report for a result to stdout.
pub fn print_report(info: &SubnetInfo) {
    log::debug!("print_report({info})");
    for line in render_report(info) {
        println!("{line}");
    }
}

/// Print the sibling ranges of a result to stdout.
pub fn print_ranges(info: &SubnetInfo) {
    let ranges = info.sibling_ranges();
    println!(
        "{} blocks of {} addresses:",
        "Ranges".on_blue(),
        ranges.block_size()
    );
    for (start, end) in ranges {
        let line = format!("  {start} - {end}");
        if info.contains(start) {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::compute;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None), "none");
        assert_eq!(format_optional(Some(Ipv4Addr::new(10, 0, 0, 1))), "10.0.0.1");
    }

    #[test]
    fn test_render_report() {
        colored::control::set_override(false);
        let info = compute(Ipv4Addr::new(172, 16, 5, 5), 31).unwrap();
        let lines = render_report(&info);
        assert_eq!(lines.len(), 9);
        assert!(lines[1].contains("255.255.255.254 = /31"));
        assert!(lines[3].contains("172.16.5.4/31"));
        assert!(lines[5].contains("none"));
        assert!(lines[7].contains('0'));
        assert!(lines[8].contains("B (default /16)"));

        let info = compute(Ipv4Addr::new(240, 1, 1, 1), 8).unwrap();
        assert!(render_report(&info)[8].contains("E (reserved)"));
    }
}
