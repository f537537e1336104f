//! Request-generation guard for pages whose fetch effect re-runs on filter
//! changes.
//!
//! Overlapping fetches carry no ordering guarantee: a slow response for an
//! old filter state can resolve after a fast response for the current one.
//! Each fetch takes a [`FetchTicket`]; only the ticket issued last commits
//! its response to page state, stale responses are dropped.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct FetchSeq(Rc<Cell<u64>>);

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation, invalidating all previously issued tickets.
    pub fn next(&self) -> FetchTicket {
        let seq = self.0.get() + 1;
        self.0.set(seq);
        FetchTicket {
            seq,
            counter: Rc::clone(&self.0),
        }
    }
}

pub struct FetchTicket {
    seq: u64,
    counter: Rc<Cell<u64>>,
}

impl FetchTicket {
    /// True while no newer fetch has started.
    pub fn is_current(&self) -> bool {
        self.counter.get() == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_wins() {
        let seq = FetchSeq::new();
        let first = seq.next();
        assert!(first.is_current());

        let second = seq.next();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn tickets_from_same_seq_share_a_counter() {
        let seq = FetchSeq::new();
        let a = seq.next();
        let cloned = seq.clone();
        let b = cloned.next();
        assert!(!a.is_current());
        assert!(b.is_current());
    }
}
