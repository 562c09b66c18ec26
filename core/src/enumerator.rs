//! # Range Enumerator
//!
//! Every [`AddressStream`] is backed by exactly one producer task. The
//! producer owns the cursor and offers one address at a time over a
//! single-slot channel, waiting on the handoff and on cancellation in the
//! same `select!` so neither can starve the other.
//!
//! The terminal check runs *before* the cursor is incremented. A block that
//! ends at the top of the address space (e.g. `255.255.255.255`) therefore
//! never wraps around.

use netwalk_common::network::address::{self, Address};
use netwalk_common::network::cidr::Cidr;
use netwalk_common::{Error, Result};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

mod stream;

pub use stream::AddressStream;

/// Slots in the handoff channel. One keeps the producer at most a single
/// address ahead of the consumer.
const HANDOFF_CAPACITY: usize = 1;

/// Why a producer task stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The last address of the block was handed off.
    Exhausted,
    /// The stream was closed before the block was exhausted.
    Cancelled,
    /// The receiving half went away while an address was on offer.
    Disconnected,
}

/// Starts walking the block `base/prefix` in ascending order.
///
/// Fails with [`Error::InvalidPrefixLength`] before any task is spawned when
/// `prefix` does not fit the address family.
pub fn enumerate<A: Address>(base: A, prefix: u8) -> Result<AddressStream<A>> {
    let cidr: Cidr<A> = Cidr::new(base, prefix)?;
    enumerate_block(cidr)
}

/// Starts walking an already validated block.
pub fn enumerate_block<A: Address>(cidr: Cidr<A>) -> Result<AddressStream<A>> {
    let start: u128 = cidr.start();
    let end: u128 = cidr.end();

    // Every cursor value lies in [start, end], so checking both bounds once
    // covers the whole walk.
    address::from_integer::<A>(start)?;
    address::from_integer::<A>(end)?;

    let runtime: Handle = Handle::try_current().map_err(|_| Error::NoRuntime)?;

    let (tx, rx) = mpsc::channel::<A>(HANDOFF_CAPACITY);
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    debug!("Walking {cidr} ({} to {})", cidr.network(), cidr.broadcast());
    let task = runtime.spawn(produce(start, end, tx, cancel_rx));

    Ok(AddressStream::new(cidr, rx, cancel_tx, task))
}

async fn produce<A: Address>(
    start: u128,
    end: u128,
    tx: mpsc::Sender<A>,
    mut cancel: oneshot::Receiver<()>,
) -> Termination {
    let mut cursor: u128 = start;

    loop {
        debug_assert!(cursor <= end, "cursor {cursor} passed end {end}");
        let addr: A = A::from_bits_truncating(cursor);

        tokio::select! {
            biased;

            // Fires on an explicit close and when the handle is dropped.
            _ = &mut cancel => {
                trace!("Producer cancelled before handing off {addr}");
                return Termination::Cancelled;
            }

            sent = tx.send(addr) => {
                if sent.is_err() {
                    trace!("Receiver dropped while {addr} was on offer");
                    return Termination::Disconnected;
                }
            }
        }

        if cursor == end {
            trace!("Producer exhausted at {addr}");
            return Termination::Exhausted;
        }
        cursor += 1;
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
