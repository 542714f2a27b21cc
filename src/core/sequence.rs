//! Request sequencing for listing reads.
//!
//! Each navigation takes a [`Ticket`]. When a response lands, it is applied
//! only if its ticket is still the latest one issued, so a slow earlier read
//! can never overwrite a later navigation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one listing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Issues monotonically increasing tickets.
///
/// Clones share the same counter, so an in-flight read can hold one while
/// later navigations issue newer tickets.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    /// Start a new request, superseding all earlier ones.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether a response for `ticket` should still be applied.
    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSequencer::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSequencer::default();
        let held = seq.clone();
        let ticket = held.issue();

        seq.issue();
        assert!(!held.is_current(ticket));
    }
}
