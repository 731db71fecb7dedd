//! # IP/CIDR Target Matcher
//!
//! Matches a target (a single address or a CIDR network) against the
//! addresses collected for the host. A plain address target requires
//! exact membership in the host's address list; a network target
//! requires any host address of the same family to fall inside the
//! subnet.

use crate::error::TargetError;
use log::warn;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Host-side address facts, collected elsewhere and passed in.
#[derive(Debug, Clone, Default)]
pub struct HostAddrs {
    pub ipv4: Vec<Ipv4Addr>,
    pub ipv6: Vec<Ipv6Addr>,
}

/// Parsed IP/CIDR target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IpTarget {
    Addr(IpAddr),
    Net { addr: IpAddr, prefix: u8 },
}

impl IpTarget {
    fn parse(target: &str) -> Result<Self, TargetError> {
        if let Ok(addr) = target.parse::<IpAddr>() {
            return Ok(IpTarget::Addr(addr));
        }

        let invalid = || TargetError::InvalidIpTarget {
            target: target.to_string(),
        };

        let (addr_part, prefix_part) = target.split_once('/').ok_or_else(invalid)?;
        let addr: IpAddr = addr_part.parse().map_err(|_| invalid())?;
        let prefix: u8 = prefix_part.parse().map_err(|_| invalid())?;

        let max_prefix = match addr {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if prefix > max_prefix {
            return Err(invalid());
        }

        Ok(IpTarget::Net { addr, prefix })
    }
}

/// True if the IP/CIDR target selects this host.
pub fn matches(target: &str, addrs: &HostAddrs) -> Result<bool, TargetError> {
    let parsed = IpTarget::parse(target).map_err(|e| {
        warn!("invalid IP/CIDR target: {}", target);
        e
    })?;

    Ok(match parsed {
        IpTarget::Addr(IpAddr::V4(addr)) => addrs.ipv4.contains(&addr),
        IpTarget::Addr(IpAddr::V6(addr)) => addrs.ipv6.contains(&addr),
        IpTarget::Net {
            addr: IpAddr::V4(net),
            prefix,
        } => addrs
            .ipv4
            .iter()
            .any(|&host| in_subnet_v4(host, net, prefix)),
        IpTarget::Net {
            addr: IpAddr::V6(net),
            prefix,
        } => addrs
            .ipv6
            .iter()
            .any(|&host| in_subnet_v6(host, net, prefix)),
    })
}

fn in_subnet_v4(host: Ipv4Addr, net: Ipv4Addr, prefix: u8) -> bool {
    if prefix == 0 {
        return true;
    }
    let mask = u32::MAX << (32 - u32::from(prefix));
    (u32::from(host) & mask) == (u32::from(net) & mask)
}

fn in_subnet_v6(host: Ipv6Addr, net: Ipv6Addr, prefix: u8) -> bool {
    if prefix == 0 {
        return true;
    }
    let mask = u128::MAX << (128 - u32::from(prefix));
    (u128::from(host) & mask) == (u128::from(net) & mask)
}
