//! Error types shared by every `netwalk` crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Prefix length does not fit the address family.
    #[error("invalid prefix length /{prefix}: must be between 0 and {bits}")]
    InvalidPrefixLength { prefix: u8, bits: u8 },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// An integer does not fit the address space. Reaching this from range
    /// arithmetic is a bug, not a caller mistake.
    #[error("integer {value} is out of range for a {bits}-bit address")]
    OutOfRange { value: u128, bits: u8 },

    #[error("enumeration must be started from within a tokio runtime")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, Error>;
