//! Domain events emitted by Railseat operations.
//!
//! Every successful engine mutation produces one or more events, which
//! the engine keeps in its allocation journal for the shell's history
//! view and for JSON export.

pub mod allocation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use allocation::AllocationEvent;

/// An allocation event with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub event: AllocationEvent,
}

impl JournalEntry {
    /// Create a new journal entry stamped with the current time.
    pub fn new(event: AllocationEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SeatNumber;

    #[test]
    fn test_entry_serializes_with_type_tag() {
        let entry = JournalEntry::new(AllocationEvent::SeatFreed {
            seat_number: SeatNumber(7),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"]["type"], "SeatFreed");
        assert_eq!(json["event"]["seat_number"], 7);
    }

    #[test]
    fn test_summary() {
        let event = AllocationEvent::Waitlisted {
            name: "Asha".to_string(),
            tatkal: true,
        };
        assert_eq!(event.summary(), "WAITING (Tatkal) -> Asha");
    }
}
