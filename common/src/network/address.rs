//! # Address-Space Codec
//!
//! Lossless conversion between typed addresses and their big-endian integer
//! value. Both families share `u128` as the integer carrier so range math can
//! be written once.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, Result};

/// A fixed-width network address with an integer form.
///
/// Ordering and equality of the implementing types already match their
/// integer ordering, which the enumerator relies on.
pub trait Address:
    Copy + Ord + Eq + FromStr + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Width of the address space in bits.
    const BITS: u8;

    /// Big-endian integer value of the address.
    fn to_bits(self) -> u128;

    /// Builds an address from the low `BITS` bits of `value`.
    ///
    /// Higher bits are discarded. Callers must have checked the value with
    /// [`from_integer`] or derived it from an already validated range.
    fn from_bits_truncating(value: u128) -> Self;
}

impl Address for Ipv4Addr {
    const BITS: u8 = 32;

    fn to_bits(self) -> u128 {
        u32::from(self) as u128
    }

    fn from_bits_truncating(value: u128) -> Self {
        Ipv4Addr::from(value as u32)
    }
}

impl Address for Ipv6Addr {
    const BITS: u8 = 128;

    fn to_bits(self) -> u128 {
        u128::from(self)
    }

    fn from_bits_truncating(value: u128) -> Self {
        Ipv6Addr::from(value)
    }
}

/// The all-ones value of a `bits`-wide address space.
pub fn max_integer(bits: u8) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

pub fn to_integer<A: Address>(addr: A) -> u128 {
    addr.to_bits()
}

/// Parses textual input and returns its integer form.
pub fn parse_integer<A: Address>(text: &str) -> Result<u128> {
    let addr: A = text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAddress(text.to_string()))?;
    Ok(addr.to_bits())
}

/// Converts an integer back into an address of family `A`.
pub fn from_integer<A: Address>(value: u128) -> Result<A> {
    if value > max_integer(A::BITS) {
        return Err(Error::OutOfRange {
            value,
            bits: A::BITS,
        });
    }
    Ok(A::from_bits_truncating(value))
}

/// Same as [`from_integer`] with the width chosen at runtime.
///
/// Only 32 and 128 bit widths name an address family.
pub fn from_integer_with_bits(value: u128, bits: u8) -> Result<IpAddr> {
    match bits {
        32 => from_integer::<Ipv4Addr>(value).map(IpAddr::V4),
        128 => from_integer::<Ipv6Addr>(value).map(IpAddr::V6),
        other => Err(Error::InvalidAddress(format!(
            "no address family is {other} bits wide"
        ))),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
