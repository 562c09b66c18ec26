//! # Walk Target Model
//!
//! Turns user input into a typed CIDR block. The enumerator itself only
//! accepts validated blocks; everything textual is handled here.
//!
//! Accepted forms:
//! * A CIDR block (e.g., `192.168.1.0/24`, `2001:db8::/120`).
//! * A single host (e.g., `10.0.0.5`), treated as a full-length prefix.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;
use tracing::trace;

use crate::error::{Error, Result};
use crate::network::address::Address;
use crate::network::cidr::Cidr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    V4(Cidr<Ipv4Addr>),
    V6(Cidr<Ipv6Addr>),
}

impl Target {
    pub fn prefix(&self) -> u8 {
        match self {
            Target::V4(cidr) => cidr.prefix(),
            Target::V6(cidr) => cidr.prefix(),
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(target) = parse_host(s) {
            return Ok(target);
        }

        parse_cidr(s)
    }
}

impl TryFrom<IpNetwork> for Target {
    type Error = Error;

    fn try_from(net: IpNetwork) -> Result<Self> {
        match net {
            IpNetwork::V4(v4) => Ok(Target::V4(Cidr::new(v4.ip(), v4.prefix())?)),
            IpNetwork::V6(v6) => Ok(Target::V6(Cidr::new(v6.ip(), v6.prefix())?)),
        }
    }
}

fn host_block<A: Address>(addr: A) -> Result<Cidr<A>> {
    Cidr::new(addr, A::BITS)
}

/// Parses a single address into a one-host block.
fn parse_host(s: &str) -> Option<Target> {
    match s.parse::<IpAddr>().ok()? {
        IpAddr::V4(v4) => host_block(v4).ok().map(Target::V4),
        IpAddr::V6(v6) => host_block(v6).ok().map(Target::V6),
    }
}

/// Parses CIDR notation like "192.168.1.0/24".
///
/// The address and prefix are checked separately first so the error names
/// the part that is wrong; the final parse goes through `ipnetwork`.
fn parse_cidr(s: &str) -> Result<Target> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        return Err(Error::InvalidAddress(s.to_string()));
    };

    let ip: IpAddr = ip_str
        .parse()
        .map_err(|_| Error::InvalidAddress(ip_str.to_string()))?;

    let bits: u8 = match ip {
        IpAddr::V4(_) => <Ipv4Addr as Address>::BITS,
        IpAddr::V6(_) => <Ipv6Addr as Address>::BITS,
    };

    let prefix: u8 = prefix_str
        .parse()
        .map_err(|_| Error::InvalidAddress(format!("invalid prefix in '{s}'")))?;

    if prefix > bits {
        return Err(Error::InvalidPrefixLength { prefix, bits });
    }

    let net: IpNetwork = s
        .parse()
        .map_err(|e| Error::InvalidAddress(format!("{s}: {e}")))?;

    trace!("Parsed {s} as {net}");
    Target::try_from(net)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
