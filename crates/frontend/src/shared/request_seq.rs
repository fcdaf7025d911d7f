//! Last-write-wins guard for overlapping async requests.

use leptos::prelude::*;

/// Hands out increasing tickets; only the latest ticket is current.
///
/// Start a request with [`RequestSeq::next`] and drop its response when
/// [`RequestSeq::is_current`] says a newer request has started since.
#[derive(Clone, Copy)]
pub struct RequestSeq(StoredValue<u64>);

impl RequestSeq {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    pub fn next(&self) -> u64 {
        let ticket = self.0.get_value() + 1;
        self.0.set_value(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get_value() == ticket
    }
}

impl Default for RequestSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let owner = Owner::new();
        owner.set();

        let seq = RequestSeq::new();
        let first = seq.next();
        assert!(seq.is_current(first));

        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_copies_share_the_counter() {
        let owner = Owner::new();
        owner.set();

        let seq = RequestSeq::new();
        let copy = seq;
        let stale = seq.next();
        let fresh = copy.next();
        assert!(!seq.is_current(stale));
        assert!(seq.is_current(fresh));
    }
}
