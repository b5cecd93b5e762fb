//! Shared loading indicator.
//!
//! A plain boolean with last-set-wins semantics. It is not reference
//! counted: two overlapping `start()` calls followed by one `stop()` leave the
//! flag cleared even though a fetch may still be in flight.

use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable handle to one loading flag.
///
/// Every clone observes and drives the same flag. Hand one clone to the
/// fetcher and others to whatever renders the indicator.
#[derive(Debug, Clone)]
pub struct LoadingSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for LoadingSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSignal {
    /// Create a new flag, initially not loading.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Set the flag.
    pub fn start(&self) {
        log::debug!("[loading] start");
        self.tx.send_replace(true);
    }

    /// Clear the flag.
    pub fn stop(&self) {
        log::debug!("[loading] stop");
        self.tx.send_replace(false);
    }

    /// Current value.
    pub fn is_loading(&self) -> bool {
        *self.tx.borrow()
    }

    /// Receiver notified on every change of the flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}
