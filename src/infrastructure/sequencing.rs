//! Latest-request-wins bookkeeping for overlapping fetches.

use std::cell::Cell;

/// Ticket handed out when a request starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues increasing tickets; only the newest one is current.
///
/// A response is applied only if its ticket is still current, so a slow
/// response can never overwrite the result of a request started after it.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest.get()
    }

    pub fn latest(&self) -> Option<RequestTicket> {
        match self.latest.get() {
            0 => None,
            value => Some(RequestTicket(value)),
        }
    }
}
