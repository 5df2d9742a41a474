//! Bounded in-memory record of allocation events.

use std::collections::VecDeque;

use railseat_core::events::{AllocationEvent, JournalEntry};

/// Ring of the most recent journal entries.
#[derive(Debug, Clone)]
pub struct AllocationJournal {
    entries: VecDeque<JournalEntry>,
    capacity: usize,
}

impl AllocationJournal {
    /// Creates a journal keeping at most `capacity` entries. `0` records nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Appends an event, evicting the oldest entry when full.
    pub fn record(&mut self, event: AllocationEvent) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(JournalEntry::new(event));
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> + '_ {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
