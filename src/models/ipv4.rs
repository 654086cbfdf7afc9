//! IPv4 address parsing and mask arithmetic.
//!
//! All helpers work on plain `u32` values so the results can be reused by
//! [`SubnetInfo`](super::SubnetInfo) without repeated conversions.

use super::error::{ParseErrorKind, SubnetError};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-quad IPv4 address such as `192.168.1.10`.
///
/// Exactly four parts are required, each made of decimal digits with a value
/// of 0 to 255. Whitespace around the whole string is ignored.
///
/// # Examples
/// ```
/// use subnet_calc::models::parse;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse("10.0.0.1").unwrap(), Ipv4Addr::new(10, 0, 0, 1));
/// assert!(parse("192.168.1.256").is_err());
/// ```
pub fn parse(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 4 {
        return Err(SubnetError::parse(
            text,
            ParseErrorKind::SegmentCount(parts.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(text, part)?;
    }
    log::trace!("parse({text}) -> {octets:?}");
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(input: &str, part: &str) -> Result<u8, SubnetError> {
    // str::parse accepts a leading '+', so check the digits ourselves
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::parse(
            input,
            ParseErrorKind::NonNumeric(part.to_string()),
        ));
    }
    part.parse::<u8>()
        .map_err(|_| SubnetError::parse(input, ParseErrorKind::OctetOutOfRange(part.to_string())))
}

/// Check a prefix length given as any integer and narrow it to `u8`.
pub fn validate_prefix<T>(len: T) -> Result<u8, SubnetError>
where
    T: TryInto<i64> + Copy,
{
    let wide: i64 = len.try_into().unwrap_or(i64::MAX);
    match u8::try_from(wide) {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(SubnetError::InvalidPrefix(wide)),
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    let len = validate_prefix(len)?;
    if len == 0 {
        Ok(0)
    } else {
        Ok(u32::MAX << (MAX_LENGTH - len))
    }
}

/// Network address for a given IP and mask.
pub fn network_addr(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask)
}

/// Broadcast address for a given IP and mask.
pub fn broadcast_addr(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Number of addresses in a block with the given prefix, including the
/// network and broadcast addresses.
pub fn address_count(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Render a 32-bit value as four dot separated groups of 8 bits.
pub fn binary_octets(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}
