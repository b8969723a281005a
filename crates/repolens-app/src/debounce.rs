//! Supersession-safe debouncing for autocomplete requests.
//!
//! A timer-only debounce leaves a window where a request already in flight
//! can complete after a newer one and overwrite its result. Tagging each
//! attempt with a generation ticket closes that window: the ticket is
//! checked after the debounce delay and again after the fetch resolves, so
//! a superseded attempt can never write state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Trailing debounce applied to suggestion keystrokes.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);

/// Shared counter handing out supersession tickets.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    counter: Arc<AtomicU64>,
}

impl Generation {
    /// A fresh counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, superseding all earlier tickets.
    pub fn begin(&self) -> Ticket {
        let value = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            value,
            counter: self.counter.clone(),
        }
    }
}

/// A single attempt's claim on the shared counter.
#[derive(Debug)]
pub struct Ticket {
    value: u64,
    counter: Arc<AtomicU64>,
}

impl Ticket {
    /// Whether this attempt is still the newest one.
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.value
    }
}
