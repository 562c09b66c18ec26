//! Lazy, cancellable enumeration of the addresses inside a CIDR block.
//!
//! [`enumerate`] validates its input synchronously and hands back an
//! [`AddressStream`]. A background task feeds the stream one address at a
//! time, so memory use stays constant no matter how large the block is.

pub mod enumerator;

pub use enumerator::{AddressStream, Termination, enumerate, enumerate_block};
