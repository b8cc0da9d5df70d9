//! View-scoped background tasks

use std::future::Future;
use tokio::task::JoinHandle;

/// A spawned task tied to the lifetime of the value that owns it.
///
/// Dropping a `Scoped` aborts the underlying task, so async work started by
/// a view (a mount-time fetch, a notice timer) cannot outlive the view and
/// apply stale results after teardown.
#[derive(Debug)]
pub struct Scoped<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> Scoped<T> {
    /// Spawn `future` on the current Tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Whether the task has run to completion or been aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task and return its output, or `None` if it was
    /// aborted or panicked.
    pub async fn join(mut self) -> Option<T> {
        (&mut self.handle).await.ok()
    }
}

impl<T> Drop for Scoped<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
