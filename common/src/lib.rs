//! Shared building blocks for `netwalk`.
//!
//! * [`network::address`] converts addresses to and from their integer form.
//! * [`network::cidr`] derives the inclusive range covered by a CIDR block.
//! * [`network::target`] parses human-readable notation into typed blocks.

pub mod config;
pub mod error;
pub mod network;

pub use error::{Error, Result};
