use std::sync::atomic::{AtomicU64, Ordering};

/// Id handed out when an async request starts. Only the ticket matching the
/// latest issued id may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter shared by everything that can be superseded:
/// snapshot loads, session refreshes, view switches.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Make every outstanding ticket stale without starting a request (unmount).
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest()
    }

    /// Pass `value` through if `ticket` is still current, drop it otherwise.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest(),
                "dropping result of superseded request"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let generation = RequestGeneration::new();
        let first = generation.issue();
        let second = generation.issue();
        assert!(first < second);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert_eq!(generation.accept(first, "old"), None);
        assert_eq!(generation.accept(second, "new"), Some("new"));
    }

    #[test]
    fn invalidate_drops_outstanding_ticket() {
        let generation = RequestGeneration::new();
        let ticket = generation.issue();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
        assert_eq!(generation.accept(ticket, 1), None);
    }
}
