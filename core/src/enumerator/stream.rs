use netwalk_common::network::address::Address;
use netwalk_common::network::cidr::Cidr;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::Termination;

/// Consumer half of an enumeration.
///
/// Yields every address of the block in ascending order. Dropping the
/// handle closes it, which stops the producer task.
#[derive(Debug)]
pub struct AddressStream<A: Address> {
    cidr: Cidr<A>,
    rx: mpsc::Receiver<A>,
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Termination>>,
    done: bool,
}

impl<A: Address> AddressStream<A> {
    pub(super) fn new(
        cidr: Cidr<A>,
        rx: mpsc::Receiver<A>,
        cancel: oneshot::Sender<()>,
        task: JoinHandle<Termination>,
    ) -> Self {
        Self {
            cidr,
            rx,
            cancel: Some(cancel),
            task: Some(task),
            done: false,
        }
    }

    /// The block being walked.
    pub fn cidr(&self) -> Cidr<A> {
        self.cidr
    }

    /// Waits for the next address.
    ///
    /// Returns `None` once the broadcast address has been delivered or the
    /// stream was closed, and on every call after that without waiting.
    pub async fn next(&mut self) -> Option<A> {
        if self.done {
            return None;
        }
        let next = self.rx.recv().await;
        if next.is_none() {
            self.done = true;
        }
        next
    }

    /// Blocking flavour of [`AddressStream::next`] for synchronous callers.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn blocking_next(&mut self) -> Option<A> {
        if self.done {
            return None;
        }
        let next = self.rx.blocking_recv();
        if next.is_none() {
            self.done = true;
        }
        next
    }

    /// Drains the stream from synchronous code, see [`AddressStream::blocking_next`].
    pub fn blocking_iter(&mut self) -> impl Iterator<Item = A> + '_ {
        std::iter::from_fn(move || self.blocking_next())
    }

    /// Stops the walk. Any address already in flight is dropped.
    ///
    /// Calling this more than once, or after the stream ran out, does nothing.
    pub fn close(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // Fails only when the producer has already returned.
            let _ = cancel.send(());
            self.rx.close();
            trace!("Closed stream over {}", self.cidr);
        }
        self.done = true;
    }

    /// Whether the producer task has returned.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits for the producer to return without cancelling it.
    ///
    /// Resolves once the last address has been handed off or the stream is
    /// closed; an undrained, open stream keeps it pending.
    /// Yields `None` if the producer was already awaited or did not complete
    /// normally.
    pub async fn join(&mut self) -> Option<Termination> {
        let task = self.task.take()?;
        match task.await {
            Ok(termination) => Some(termination),
            Err(e) => {
                warn!("Producer for {} failed: {e}", self.cidr);
                None
            }
        }
    }

    /// Closes the stream and waits for the producer to return.
    pub async fn shutdown(&mut self) -> Option<Termination> {
        self.close();
        self.join().await
    }
}

impl<A: Address> Drop for AddressStream<A> {
    fn drop(&mut self) {
        self.close();
    }
}
