//! Deferred apply of freshly loaded content into the editor widget.
//!
//! Loading an item schedules its document instead of pushing it straight into
//! the editor, so an in-progress selection is not clobbered mid-event. The
//! host polls on each idle tick; a newer schedule supersedes an older one.

use std::time::{Duration, Instant};

/// A single pending value, released once its delay has elapsed.
#[derive(Debug, Clone)]
pub struct DeferredApply<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    /// Incremented on every schedule; identifies the latest request.
    generation: u64,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: Instant,
    generation: u64,
}

impl<T> DeferredApply<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            generation: 0,
        }
    }

    /// Generation of the most recent schedule (0 before the first one).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedule `value`, replacing anything still pending.
    pub fn schedule(&mut self, value: T, now: Instant) -> u64 {
        self.generation += 1;
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
            generation: self.generation,
        });
        self.generation
    }

    /// Drop the pending value without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| {
            p.generation == self.generation && now >= p.due
        });
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }
}

impl<T> Default for DeferredApply<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_APPLY_DELAY_MS))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
