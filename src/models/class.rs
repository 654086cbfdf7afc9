//! Legacy classful address classification.
//!
//! The class only looks at the first octet of an address and ignores any
//! prefix actually in use.

use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Classful network class of an IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkClass {
    A,
    B,
    C,
    /// Multicast, 224-239.
    D,
    /// Reserved, 240-255.
    E,
}

impl NetworkClass {
    /// Class for a given first octet.
    pub fn of_octet(octet: u8) -> Self {
        match octet {
            0..=127 => NetworkClass::A,
            128..=191 => NetworkClass::B,
            192..=223 => NetworkClass::C,
            224..=239 => NetworkClass::D,
            240..=255 => NetworkClass::E,
        }
    }

    /// Classful default prefix, only defined for A, B and C.
    pub fn default_prefix(self) -> Option<u8> {
        match self {
            NetworkClass::A => Some(8),
            NetworkClass::B => Some(16),
            NetworkClass::C => Some(24),
            NetworkClass::D | NetworkClass::E => None,
        }
    }

    /// Inclusive first-octet range covered by the class.
    pub fn first_octet_range(self) -> (u8, u8) {
        match self {
            NetworkClass::A => (0, 127),
            NetworkClass::B => (128, 191),
            NetworkClass::C => (192, 223),
            NetworkClass::D => (224, 239),
            NetworkClass::E => (240, 255),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NetworkClass::A | NetworkClass::B | NetworkClass::C => "unicast",
            NetworkClass::D => "multicast",
            NetworkClass::E => "reserved",
        }
    }

    pub fn all() -> [NetworkClass; 5] {
        [
            NetworkClass::A,
            NetworkClass::B,
            NetworkClass::C,
            NetworkClass::D,
            NetworkClass::E,
        ]
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
            NetworkClass::D => "D",
            NetworkClass::E => "E",
        };
        f.write_str(letter)
    }
}

impl Serialize for NetworkClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Classify an address by its first octet.
///
/// # Examples
/// ```
/// use subnet_calc::models::{classify, NetworkClass};
/// use std::net::Ipv4Addr;
/// assert_eq!(classify(Ipv4Addr::new(200, 1, 1, 1)), (NetworkClass::C, Some(24)));
/// assert_eq!(classify(Ipv4Addr::new(240, 1, 1, 1)), (NetworkClass::E, None));
/// ```
pub fn classify(address: Ipv4Addr) -> (NetworkClass, Option<u8>) {
    let class = NetworkClass::of_octet(address.octets()[0]);
    (class, class.default_prefix())
}
