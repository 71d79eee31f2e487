// Port for the backing data store, as seen by the start-up sequence.
//
// Purpose
// - Expose the one thing the server needs before it may accept traffic: a readiness signal.
//
// Boundaries
// - Connection protocol, pooling and queries belong to the concrete store, not to this port.

pub mod in_memory;

use std::sync::Arc;
use tokio::sync::watch;

/// One-time "data store is ready" notification.
///
/// Clones share the same underlying state. Only the first `fire` transitions the
/// signal; later calls are no-ops, so waiters observe exactly one transition.
#[derive(Clone, Debug)]
pub struct ReadinessSignal {
    ready: Arc<watch::Sender<bool>>,
}

impl Default for ReadinessSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessSignal {
    pub fn new() -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            ready: Arc::new(ready),
        }
    }

    /// Marks the store as ready. Returns `true` only for the call that performed the transition.
    pub fn fire(&self) -> bool {
        self.ready.send_if_modified(|ready| {
            if *ready {
                false
            } else {
                *ready = true;
                true
            }
        })
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Resolves once the signal has fired; immediately if it already has.
    pub async fn wait(&self) {
        let mut receiver = self.ready.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = receiver.wait_for(|ready| *ready).await;
    }
}

pub trait DataStore: Send + Sync {
    fn readiness(&self) -> ReadinessSignal;
}
