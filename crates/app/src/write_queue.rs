//! Write queues for fire-and-forget control writes.
//!
//! A slider can produce many values per second. Each value is sent as its
//! own request, but a newer value cancels the request carrying an older one
//! if it is still in flight, so the device converges on the last value
//! instead of whichever request happened to arrive last.
//!
//! Power toggles use the in-order variant: every toggle is sent exactly
//! once, each request starting after the previous one finished.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    LatestWins,
    InOrder,
}

/// Per-endpoint write queue; only the most recent request is tracked.
pub struct WriteQueue {
    key: &'static str,
    policy: Policy,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl WriteQueue {
    /// Create an empty latest-value-wins queue. `key` names the endpoint in
    /// logs.
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self::with_policy(key, Policy::LatestWins)
    }

    /// Create an empty queue that sends every request, one after the other.
    #[must_use]
    pub fn in_order(key: &'static str) -> Self {
        Self::with_policy(key, Policy::InOrder)
    }

    fn with_policy(key: &'static str, policy: Policy) -> Self {
        Self {
            key,
            policy,
            in_flight: Mutex::new(None),
        }
    }

    /// Spawn `request` without waiting for it.
    ///
    /// A latest-value-wins queue cancels the previous request if it has not
    /// finished; an in-order queue runs `request` once the previous one is
    /// done. Must be called from within a tokio runtime.
    pub fn submit<F>(&self, request: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self.lock();
        let previous = slot.take();
        let handle = match (self.policy, previous) {
            (Policy::InOrder, Some(previous)) if !previous.is_finished() => {
                let key = self.key;
                tokio::spawn(async move {
                    if let Err(err) = previous.await
                        && !err.is_cancelled()
                    {
                        tracing::warn!(key, %err, "write task failed");
                    }
                    request.await;
                })
            }
            (Policy::LatestWins, Some(previous)) if !previous.is_finished() => {
                previous.abort();
                tracing::debug!(key = self.key, "superseded write cancelled");
                tokio::spawn(request)
            }
            _ => tokio::spawn(request),
        };
        *slot = Some(handle);
    }

    /// Wait for the most recent request to finish.
    ///
    /// Returns immediately when nothing is in flight.
    pub async fn settle(&self) {
        let handle = self.lock().take();
        if let Some(handle) = handle
            && let Err(err) = handle.await
            && !err.is_cancelled()
        {
            tracing::warn!(key = self.key, %err, "write task failed");
        }
    }

    /// Cancel the in-flight request, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for WriteQueue {
    fn drop(&mut self) {
        self.cancel();
    }
}
