//! Booking ledger: confirmed allocations in confirmation order.

use crate::seat::SeatId;

/// Stack of booked seats; cancellation always takes the most recent entry.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    entries: Vec<SeatId>,
}

impl BookingLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a confirmed booking (including promotions).
    pub fn push(&mut self, id: SeatId) {
        debug_assert!(!self.entries.contains(&id), "seat {id} already in ledger");
        self.entries.push(id);
    }

    /// Most recently confirmed booking, without removing it.
    pub fn last(&self) -> Option<SeatId> {
        self.entries.last().copied()
    }

    /// Removes the most recently confirmed booking.
    pub fn pop(&mut self) -> Option<SeatId> {
        self.entries.pop()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no booking is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.entries.iter().copied()
    }
}
