//! Explanations of how each value was derived.
//!
//! Plain text versions of the teaching notes shown next to every result.

use crate::models::{NetworkClass, SubnetInfo};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Value to explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    AddressClass,
    NetworkAddress,
    Broadcast,
    FirstAddress,
    LastAddress,
    SubnetMask,
    NumHosts,
}

impl Topic {
    pub fn all() -> [Topic; 7] {
        [
            Topic::AddressClass,
            Topic::NetworkAddress,
            Topic::Broadcast,
            Topic::FirstAddress,
            Topic::LastAddress,
            Topic::SubnetMask,
            Topic::NumHosts,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Topic::AddressClass => "class",
            Topic::NetworkAddress => "network",
            Topic::Broadcast => "broadcast",
            Topic::FirstAddress => "first",
            Topic::LastAddress => "last",
            Topic::SubnetMask => "mask",
            Topic::NumHosts => "hosts",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::all()
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown topic '{s}', expected one of: {}",
                    Topic::all().iter().join(", ")
                )
            })
    }
}

/// Explanation text for one topic.
pub fn explain(topic: Topic, info: &SubnetInfo) -> String {
    match topic {
        Topic::AddressClass => explain_class(info),
        Topic::NetworkAddress => explain_network(info),
        Topic::Broadcast => format!(
            "A broadcast address is the address at which all devices connected to a network \
             receive data packets.\n\n\
             It follows from the network address, which is {network}: the broadcast is the last \
             address in the network, here {broadcast}.",
            network = info.network_address,
            broadcast = info.broadcast_address,
        ),
        Topic::FirstAddress => match info.first_usable {
            Some(first) => format!(
                "The first usable address is the network address plus one.\n\n\
                 First usable address in this case is {first}."
            ),
            None => no_hosts(info),
        },
        Topic::LastAddress => match info.last_usable {
            Some(last) => format!(
                "The last usable address is the broadcast address minus one.\n\n\
                 Last usable address in this case is {last}."
            ),
            None => no_hosts(info),
        },
        Topic::SubnetMask => format!(
            "A subnet mask is a 32-bit value with one-bits for the network part and zero-bits \
             for the host part of an address. For /{prefix} it looks like this in binary:\n\n\
             {binary}\n\n\
             Converting this binary number to decimal gives the subnet mask {mask}.",
            prefix = info.prefix_length,
            binary = info.binary_subnet_mask(),
            mask = info.subnet_mask,
        ),
        Topic::NumHosts => format!(
            "The number of hosts in a network is 2^BL - 2, where BL is the number of bits left \
             when the prefix ({prefix}) is subtracted from 32.\n\n\
             BL = 32 - {prefix} = {bits}\n\n\
             Two is subtracted because the network and broadcast addresses cannot be used by \
             hosts (the count never goes below zero):\n\n\
             2^{bits} - 2 = {hosts}",
            prefix = info.prefix_length,
            bits = info.host_bits(),
            hosts = info.usable_host_count,
        ),
    }
}

fn explain_class(info: &SubnetInfo) -> String {
    let rules = NetworkClass::all()
        .iter()
        .map(|class| {
            let (lo, hi) = class.first_octet_range();
            format!("  {lo} - {hi}: class {class}")
        })
        .join("\n");
    let default = match info.default_prefix_for_class {
        Some(prefix) => format!("Its classful default prefix is /{prefix}."),
        None => format!(
            "Class {} is {} and has no default prefix.",
            info.network_class,
            info.network_class.description()
        ),
    };
    format!(
        "The address class is determined by the value of the first octet:\n\n{rules}\n\n\
         Since the first octet is {octet}, the class is {class}. {default}",
        octet = info.address.octets()[0],
        class = info.network_class,
    )
}

fn explain_network(info: &SubnetInfo) -> String {
    let bits = info.host_bits();
    let ranges = info
        .sibling_ranges()
        .iter()
        .map(|(start, end)| format!("  {start} - {end}"))
        .join("\n");
    format!(
        "The network address is determined by the prefix, /{prefix} in this case. The maximum \
         prefix is /32, which leaves {bits} bits free.\n\n\
         With {bits} free bits there are 2^{bits} - 2 = {hosts} available addresses, two being \
         reserved for the network and broadcast addresses. The network address, {network}, is \
         the address with all free bits set to zero.\n\n\
         Blocks of this size fit {subnets} times in the last octet. Subnet range(s):\n\n{ranges}",
        prefix = info.prefix_length,
        hosts = info.usable_host_count,
        network = info.network_address,
        subnets = info.subnets_in_last_octet(),
    )
}

fn no_hosts(info: &SubnetInfo) -> String {
    format!(
        "A /{prefix} network has {count} address(es) and no usable host range, \
         so there is no first or last usable address.",
        prefix = info.prefix_length,
        count = info.address_count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::compute_text;

    #[test]
    fn test_topic_from_str() {
        assert_eq!("mask".parse::<Topic>().unwrap(), Topic::SubnetMask);
        assert_eq!("Hosts".parse::<Topic>().unwrap(), Topic::NumHosts);
        let err = "nope".parse::<Topic>().unwrap_err();
        assert!(err.contains("class, network, broadcast"), "{err}");
    }

    #[test]
    fn test_explain_class() {
        let info = compute_text("200.1.1.1", 24).unwrap();
        let text = explain(Topic::AddressClass, &info);
        assert!(text.contains("192 - 223: class C"));
        assert!(text.contains("first octet is 200, the class is C"));
        assert!(text.contains("/24"));

        let info = compute_text("240.1.1.1", 24).unwrap();
        let text = explain(Topic::AddressClass, &info);
        assert!(text.contains("Class E is reserved"));
    }

    #[test]
    fn test_explain_network_ranges() {
        let info = compute_text("192.168.1.70", 26).unwrap();
        let text = explain(Topic::NetworkAddress, &info);
        assert!(text.contains("leaves 6 bits free"));
        assert!(text.contains("2^6 - 2 = 62"));
        assert!(text.contains("fit 4 times"));
        assert!(text.contains("192.168.1.64 - 192.168.1.127"));
    }

    #[test]
    fn test_explain_hosts_and_mask() {
        let info = compute_text("10.0.0.1", 8).unwrap();
        assert!(explain(Topic::NumHosts, &info).contains("2^24 - 2 = 16777214"));
        assert!(explain(Topic::SubnetMask, &info).contains("11111111.00000000.00000000.00000000"));
    }

    #[test]
    fn test_explain_no_usable_hosts() {
        let info = compute_text("172.16.5.5", 31).unwrap();
        let text = explain(Topic::FirstAddress, &info);
        assert!(text.contains("no usable host range"));
        assert_eq!(text, explain(Topic::LastAddress, &info));

        let info = compute_text("172.16.5.5", 30).unwrap();
        assert!(explain(Topic::LastAddress, &info).contains("172.16.5.6"));
    }
}
