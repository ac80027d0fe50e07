//! One-shot deferred callbacks on the tokio runtime.
//!
//! Timing is best effort: the callback runs no earlier than `delay`, with no
//! upper bound. Aborting the returned handle is the only cancellation.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Message resolved by [`fetch_data`].
pub const FETCHED: &str = "Fetched Data Successfully";

/// Runs `f` once after `delay` and returns a handle to its result.
///
/// Must be called from within a tokio runtime.
pub fn schedule_once<F, R>(delay: Duration, f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::trace!(?delay, "running deferred callback");
        f()
    })
}

/// Resolves immediately to [`FETCHED`].
pub async fn fetch_data() -> String {
    FETCHED.to_string()
}
