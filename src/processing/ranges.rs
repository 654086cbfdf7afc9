//! Listing of same-sized subnet ranges next to a network.
//!
//! Only the last octet is stepped through, so the listing is meaningful for
//! prefixes of /24 and longer. Bigger blocks give a single range.

use crate::models::SubnetInfo;
use std::net::Ipv4Addr;

/// Upper bound (exclusive) for the offset within the last octet.
pub const DEFAULT_RANGE_UPPER_BOUND: u32 = 255;

/// Lazy sequence of `(start, end)` address pairs.
///
/// The value is `Copy`, every call to [`SubnetRanges::iter`] starts again from
/// the first range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetRanges {
    base: u32,
    block_size: u64,
    upper_bound: u32,
}

/// Enumerate blocks of `block_size` addresses, starting at the first three
/// octets of `network_address`, for offsets below `upper_bound`.
///
/// # Examples
/// ```
/// use subnet_calc::processing::enumerate_subnets;
/// use std::net::Ipv4Addr;
/// let ranges: Vec<_> = enumerate_subnets(Ipv4Addr::new(10, 0, 0, 64), 64, 255).iter().collect();
/// assert_eq!(ranges.len(), 4);
/// assert_eq!(ranges[1], (Ipv4Addr::new(10, 0, 0, 64), Ipv4Addr::new(10, 0, 0, 127)));
/// ```
pub fn enumerate_subnets(
    network_address: Ipv4Addr,
    block_size: u64,
    upper_bound: u32,
) -> SubnetRanges {
    SubnetRanges {
        base: u32::from(network_address) & 0xFFFF_FF00,
        block_size,
        upper_bound,
    }
}

impl SubnetRanges {
    pub fn iter(&self) -> SubnetRangesIter {
        SubnetRangesIter {
            ranges: *self,
            offset: 0,
        }
    }

    pub fn block_size(&self) -> u64 {
        self.block_size
    }
}

impl IntoIterator for SubnetRanges {
    type Item = (Ipv4Addr, Ipv4Addr);
    type IntoIter = SubnetRangesIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &SubnetRanges {
    type Item = (Ipv4Addr, Ipv4Addr);
    type IntoIter = SubnetRangesIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`SubnetRanges`].
#[derive(Debug, Clone)]
pub struct SubnetRangesIter {
    ranges: SubnetRanges,
    offset: u64,
}

impl Iterator for SubnetRangesIter {
    type Item = (Ipv4Addr, Ipv4Addr);

    fn next(&mut self) -> Option<Self::Item> {
        let SubnetRanges {
            base,
            block_size,
            upper_bound,
        } = self.ranges;
        if block_size == 0 || self.offset >= upper_bound as u64 {
            return None;
        }

        let start = base as u64 + self.offset;
        if start > u32::MAX as u64 {
            return None;
        }
        let end = (start + block_size - 1).min(u32::MAX as u64);
        self.offset += block_size;

        Some((Ipv4Addr::from(start as u32), Ipv4Addr::from(end as u32)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let SubnetRanges {
            block_size,
            upper_bound,
            ..
        } = self.ranges;
        if block_size == 0 || self.offset >= upper_bound as u64 {
            return (0, Some(0));
        }
        let remaining = (upper_bound as u64 - self.offset).div_ceil(block_size);
        (0, Some(remaining as usize))
    }
}

impl SubnetInfo {
    /// Ranges of this block size in the last octet of the network.
    pub fn sibling_ranges(&self) -> SubnetRanges {
        enumerate_subnets(
            self.network_address,
            self.address_count(),
            DEFAULT_RANGE_UPPER_BOUND,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::compute;

    #[test]
    fn test_ranges_for_26() {
        let info = compute(Ipv4Addr::new(192, 168, 1, 70), 26).unwrap();
        let ranges: Vec<_> = info.sibling_ranges().iter().collect();
        assert_eq!(
            ranges,
            vec![
                (Ipv4Addr::new(192, 168, 1, 0), Ipv4Addr::new(192, 168, 1, 63)),
                (Ipv4Addr::new(192, 168, 1, 64), Ipv4Addr::new(192, 168, 1, 127)),
                (Ipv4Addr::new(192, 168, 1, 128), Ipv4Addr::new(192, 168, 1, 191)),
                (Ipv4Addr::new(192, 168, 1, 192), Ipv4Addr::new(192, 168, 1, 255)),
            ]
        );
    }

    #[test]
    fn test_ranges_restartable() {
        let ranges = enumerate_subnets(Ipv4Addr::new(10, 0, 0, 0), 32, 255);
        let first: Vec<_> = ranges.iter().collect();
        let second: Vec<_> = ranges.into_iter().collect();
        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ranges_24_and_32() {
        let info = compute(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
        let ranges: Vec<_> = info.sibling_ranges().iter().collect();
        assert_eq!(
            ranges,
            vec![(Ipv4Addr::new(192, 168, 1, 0), Ipv4Addr::new(192, 168, 1, 255))]
        );

        let info = compute(Ipv4Addr::new(192, 168, 1, 10), 32).unwrap();
        let ranges = info.sibling_ranges();
        assert_eq!(ranges.iter().count(), 255);
        assert_eq!(
            ranges.iter().last().unwrap(),
            (Ipv4Addr::new(192, 168, 1, 254), Ipv4Addr::new(192, 168, 1, 254))
        );
    }

    #[test]
    fn test_ranges_large_block_is_single() {
        let info = compute(Ipv4Addr::new(10, 0, 0, 1), 8).unwrap();
        let ranges: Vec<_> = info.sibling_ranges().iter().collect();
        assert_eq!(
            ranges,
            vec![(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 255, 255, 255))]
        );

        let info = compute(Ipv4Addr::new(200, 0, 0, 1), 0).unwrap();
        let ranges: Vec<_> = info.sibling_ranges().iter().collect();
        assert_eq!(ranges, vec![(Ipv4Addr::UNSPECIFIED, Ipv4Addr::BROADCAST)]);
    }

    #[test]
    fn test_ranges_zero_block() {
        let ranges = enumerate_subnets(Ipv4Addr::new(10, 0, 0, 0), 0, 255);
        assert_eq!(ranges.iter().next(), None);
        assert_eq!(ranges.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_ranges_end_saturates() {
        let ranges = enumerate_subnets(Ipv4Addr::new(255, 255, 255, 200), 1024, 255);
        assert_eq!(
            ranges.iter().collect::<Vec<_>>(),
            vec![(Ipv4Addr::new(255, 255, 255, 0), Ipv4Addr::BROADCAST)]
        );
    }
}
