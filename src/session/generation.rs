//! Stale-result suppression for asynchronous searches.
//!
//! Every search takes a ticket when it is issued. A result may only trigger a render while its
//! ticket is still the newest one; results of superseded searches are dropped. In-flight work is
//! never cancelled, only ignored.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Value before any search was issued.
    pub const INITIAL: Self = Self(0);

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_newer_than(self, other: Self) -> bool {
        self.0 > other.0
    }
}

/// Monotonic generation counter, shared between the issuing side and background workers.
#[derive(Debug, Default)]
pub struct SearchGeneration {
    current: AtomicU64,
}

impl SearchGeneration {
    pub const fn new() -> Self {
        Self {
            current: AtomicU64::new(Generation::INITIAL.0),
        }
    }

    /// Issue a new search, superseding every earlier ticket.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::Acquire))
    }

    pub fn is_current(&self, ticket: Generation) -> bool {
        self.current() == ticket
    }

    /// Pass `value` through only if `ticket` has not been superseded.
    pub fn accept<T>(&self, ticket: Generation, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(
                ticket = ticket.get(),
                current = self.current().get(),
                "dropping stale search result"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/generation.rs"]
mod tests;
