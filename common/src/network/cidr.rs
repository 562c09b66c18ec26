use std::fmt;

use crate::error::{Error, Result};
use crate::network::address::{self, Address};

/// Mask with the leading `prefix` bits of a `bits`-wide address set.
///
/// Only called with a prefix already checked by [`Cidr::new`].
pub(crate) fn netmask(bits: u8, prefix: u8) -> u128 {
    let host_bits: u8 = bits - prefix;
    address::max_integer(bits) & !address::max_integer(host_bits)
}

/// A CIDR block: a base address plus a prefix length.
///
/// The range is derived on demand: `start` clears every host bit of the
/// base, `end` sets them all, so `start <= end` holds for any valid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr<A: Address> {
    base: A,
    prefix: u8,
}

impl<A: Address> Cidr<A> {
    pub fn new(base: A, prefix: u8) -> Result<Self> {
        if prefix > A::BITS {
            return Err(Error::InvalidPrefixLength {
                prefix,
                bits: A::BITS,
            });
        }
        Ok(Self { base, prefix })
    }

    /// The address the block was built from, host bits untouched.
    pub fn base(&self) -> A {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u128 {
        netmask(A::BITS, self.prefix)
    }

    /// Integer value of the network address.
    pub fn start(&self) -> u128 {
        self.base.to_bits() & self.mask()
    }

    /// Integer value of the broadcast (last) address.
    pub fn end(&self) -> u128 {
        self.start() | (!self.mask() & address::max_integer(A::BITS))
    }

    pub fn network(&self) -> A {
        A::from_bits_truncating(self.start())
    }

    pub fn broadcast(&self) -> A {
        A::from_bits_truncating(self.end())
    }

    /// Number of addresses in the block.
    ///
    /// `None` only for an IPv6 `/0`, whose 2^128 addresses do not fit `u128`.
    pub fn size(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(A::BITS - self.prefix))
    }

    pub fn contains(&self, addr: A) -> bool {
        let value: u128 = addr.to_bits();
        value >= self.start() && value <= self.end()
    }
}

impl<A: Address> fmt::Display for Cidr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix)
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
