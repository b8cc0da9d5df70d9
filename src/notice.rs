//! Transient user-facing notices
//!
//! Save and submit outcomes surface as short-lived notices. Each notice
//! auto-clears after a fixed delay; showing a new notice supersedes the
//! previous clear timer rather than stacking another one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::task::Scoped;

/// Holds at most one visible notice and its pending clear timer.
///
/// Cloning is cheap and all clones observe the same notice. Requires a
/// Tokio runtime when showing notices.
#[derive(Debug, Clone)]
pub struct NoticeHost {
    current: Arc<Mutex<Option<String>>>,
    timer: Arc<Mutex<Option<Scoped<()>>>>,
    epoch: Arc<AtomicU64>,
    ttl: Duration,
}

impl NoticeHost {
    /// Create a host whose notices clear after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            timer: Arc::new(Mutex::new(None)),
            epoch: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Display a notice, replacing any current one and superseding its
    /// pending clear timer.
    pub fn show(&self, text: impl Into<String>) {
        let text = text.into();

        // Supersede the previous timer before the new text becomes
        // visible. The epoch also fences out a timer that has already
        // woken and is past the point where aborting can stop it.
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        drop(self.timer.lock().unwrap().take());
        *self.current.lock().unwrap() = Some(text);

        let current = Arc::clone(&self.current);
        let epochs = Arc::clone(&self.epoch);
        let ttl = self.ttl;
        let timer = Scoped::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut current = current.lock().unwrap();
            if epochs.load(Ordering::SeqCst) == epoch {
                *current = None;
            }
        });

        *self.timer.lock().unwrap() = Some(timer);
    }

    /// The currently visible notice text, if any.
    pub fn current(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    /// Clear the notice immediately and cancel any pending timer.
    pub fn clear(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *self.timer.lock().unwrap() = None;
        *self.current.lock().unwrap() = None;
    }
}
