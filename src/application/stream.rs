//! Lazy remote output stream: a producer task paired with a cancellable
//! consumer over a bounded channel.

use tokio::sync::OwnedMutexGuard;
use tokio::sync::mpsc;

use crate::domain::error::RemoteError;

/// Forward-only, single-pass sequence of output lines from one remote
/// command.
///
/// Lines arrive in emission order. A failure of the remote process or the
/// transport is delivered in-band and raised when the next element is
/// requested; lines already yielded remain valid. Dropping the stream
/// before exhaustion closes the channel, which stops the producer task at
/// its next send and releases the local process resources; the remote
/// process is not guaranteed to be killed.
#[derive(Debug)]
pub struct LineStream {
    rx: mpsc::Receiver<Result<String, RemoteError>>,
    // Per-environment exclusivity for mutating streamed operations:
    // released when the stream is dropped.
    _guard: Option<OwnedMutexGuard<()>>,
}

impl LineStream {
    /// Create the producer side and the stream it feeds.
    #[must_use]
    pub(crate) fn channel(
        buffer: usize,
    ) -> (mpsc::Sender<Result<String, RemoteError>>, LineStream) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, LineStream { rx, _guard: None })
    }

    /// Attach an environment lock guard for the lifetime of the stream.
    #[must_use]
    pub(crate) fn with_guard(mut self, guard: OwnedMutexGuard<()>) -> Self {
        self._guard = Some(guard);
        self
    }

    /// Next line of combined output, in emission order.
    ///
    /// Returns `Ok(None)` once the remote process has finished and every
    /// line has been consumed.
    ///
    /// # Errors
    ///
    /// A nonzero exit or transport failure, raised at the position in the
    /// sequence where it occurred.
    pub async fn next_line(&mut self) -> Result<Option<String>, RemoteError> {
        match self.rx.recv().await {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }

    /// Drain the rest of the stream into one newline-joined string.
    ///
    /// # Errors
    ///
    /// Propagates the first in-band error encountered while draining.
    pub async fn collect_remaining(mut self) -> Result<String, RemoteError> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line().await? {
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Build a stream from canned events, for test doubles only.
    #[must_use]
    pub fn scripted(events: Vec<Result<String, RemoteError>>) -> Self {
        let (tx, stream) = Self::channel(events.len().max(1));
        for event in events {
            // Capacity covers every event; the send cannot fail here.
            let _ = tx.try_send(event);
        }
        stream
    }
}
