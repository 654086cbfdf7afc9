//! Derived subnet values for an address and prefix length.

use super::class::{classify, NetworkClass};
use super::error::SubnetError;
use super::ipv4::{
    address_count, binary_octets, broadcast_addr, get_cidr_mask, network_addr, parse,
    validate_prefix, MAX_LENGTH,
};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Everything derived from one `(address, prefix_length)` input.
///
/// Built with [`compute`] and never changed afterwards; a new input gives a
/// new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubnetInfo {
    /// Address as entered.
    pub address: Ipv4Addr,
    pub prefix_length: u8,
    pub subnet_mask: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// `None` for /31 and /32, which have no usable hosts.
    pub first_usable: Option<Ipv4Addr>,
    /// `None` for /31 and /32, which have no usable hosts.
    pub last_usable: Option<Ipv4Addr>,
    pub usable_host_count: u32,
    pub network_class: NetworkClass,
    pub default_prefix_for_class: Option<u8>,
}

/// Compute the subnet values for `address` with `prefix_length` bits of
/// network.
///
/// Fails only when the prefix is outside 0..=32.
///
/// # Examples
/// ```
/// use subnet_calc::models::compute;
/// use std::net::Ipv4Addr;
/// let info = compute(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
/// assert_eq!(info.network_address, Ipv4Addr::new(192, 168, 1, 0));
/// assert_eq!(info.usable_host_count, 254);
/// ```
pub fn compute<T>(address: Ipv4Addr, prefix_length: T) -> Result<SubnetInfo, SubnetError>
where
    T: TryInto<i64> + Copy,
{
    let prefix_length = validate_prefix(prefix_length)?;
    let mask = get_cidr_mask(prefix_length)?;
    let network_address = network_addr(address, mask);
    let broadcast_address = broadcast_addr(address, mask);

    let usable_host_count = address_count(prefix_length).saturating_sub(2) as u32;
    let (first_usable, last_usable) = if usable_host_count > 0 {
        (
            Some(Ipv4Addr::from(u32::from(network_address) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast_address) - 1)),
        )
    } else {
        (None, None)
    };

    let (network_class, default_prefix_for_class) = classify(address);

    let info = SubnetInfo {
        address,
        prefix_length,
        subnet_mask: Ipv4Addr::from(mask),
        network_address,
        broadcast_address,
        first_usable,
        last_usable,
        usable_host_count,
        network_class,
        default_prefix_for_class,
    };
    log::debug!("compute({address}/{prefix_length}) -> {info}");
    Ok(info)
}

/// Parse the address text and compute in one step.
pub fn compute_text<T>(address: &str, prefix_length: T) -> Result<SubnetInfo, SubnetError>
where
    T: TryInto<i64> + Copy,
{
    compute(parse(address)?, prefix_length)
}

impl SubnetInfo {
    /// Inverse of the subnet mask.
    pub fn wildcard_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!u32::from(self.subnet_mask))
    }

    /// Bits left for hosts, `32 - prefix_length`.
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix_length
    }

    /// Size of the block including network and broadcast addresses.
    pub fn address_count(&self) -> u64 {
        address_count(self.prefix_length)
    }

    /// Subnet mask as binary, e.g. `11111111.11111111.11111111.00000000`.
    pub fn binary_subnet_mask(&self) -> String {
        binary_octets(u32::from(self.subnet_mask))
    }

    /// How many blocks of this size fit in the last octet, 0 when the block
    /// is larger than one octet.
    pub fn subnets_in_last_octet(&self) -> u32 {
        if self.host_bits() <= 8 {
            256 >> self.host_bits()
        } else {
            0
        }
    }

    pub fn has_usable_hosts(&self) -> bool {
        self.usable_host_count > 0
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.network_address <= addr && addr <= self.broadcast_address
    }

    /// Same address with the classful default prefix, `None` for class D/E.
    pub fn with_default_prefix(&self) -> Option<SubnetInfo> {
        let prefix = self.default_prefix_for_class?;
        compute(self.address, prefix).ok()
    }
}

impl fmt::Display for SubnetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_address, self.prefix_length)
    }
}

impl FromStr for SubnetInfo {
    type Err = SubnetError;

    /// Parse `a.b.c.d/p`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s.trim().split_once('/').ok_or_else(|| {
            SubnetError::parse(
                s,
                super::error::ParseErrorKind::NonNumeric(s.trim().to_string()),
            )
        })?;
        let prefix: i64 = prefix
            .trim()
            .parse()
            .map_err(|_| SubnetError::InvalidPrefix(i64::MAX))?;
        compute_text(addr, prefix)
    }
}
