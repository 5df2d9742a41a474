//! Section registry with round-robin selection.

use railseat_core::types::Section;

use crate::seat::SeatId;

/// Partitions seats into sections and tracks which section is tried first.
///
/// The cursor is advanced on every attempt, whether or not the attempt
/// finds a free seat.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    members: [Vec<SeatId>; Section::ALL.len()],
    cursor: usize,
    attempts: u64,
}

impl SectionRegistry {
    /// Creates an empty registry with the cursor on the first section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a seat as belonging to `section`, after any earlier seats.
    pub fn register(&mut self, section: Section, id: SeatId) {
        self.members[section.ordinal()].push(id);
    }

    /// Returns the section under the cursor and advances the cursor.
    pub fn next_section(&mut self) -> Section {
        let section = Section::ALL[self.cursor];
        self.cursor = (self.cursor + 1) % Section::ALL.len();
        self.attempts += 1;
        section
    }

    /// Seats of a section in creation order.
    pub fn seats_in(&self, section: Section) -> &[SeatId] {
        &self.members[section.ordinal()]
    }

    /// All seats, section by section in round-robin order.
    pub fn iter(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.members.iter().flatten().copied()
    }

    /// Section that the next booking will try first.
    pub fn cursor(&self) -> Section {
        Section::ALL[self.cursor]
    }

    /// Total number of section attempts made so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Number of sections tried per booking.
    pub fn section_count(&self) -> usize {
        Section::ALL.len()
    }
}
