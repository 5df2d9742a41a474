//! Allocation engine configuration.

use serde::{Deserialize, Serialize};

use crate::types::{SeatNumber, Section};

/// Allocation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of RAC holders per booked seat.
    #[serde(default = "default_rac_capacity")]
    pub rac_capacity: usize,
    /// Reject gender input other than male/female instead of passing it through.
    #[serde(default)]
    pub strict_gender: bool,
    /// Number of journal entries retained (oldest dropped first, `0` disables).
    #[serde(default = "default_journal_capacity")]
    pub journal_capacity: usize,
    /// Seats created when the engine starts, in creation order.
    #[serde(default)]
    pub seats: Vec<SeatSpec>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rac_capacity: default_rac_capacity(),
            strict_gender: false,
            journal_capacity: default_journal_capacity(),
            seats: Vec::new(),
        }
    }
}

/// One seat of the initial layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSpec {
    /// Seat number.
    pub number: SeatNumber,
    /// Section the seat belongs to.
    pub section: Section,
}

fn default_rac_capacity() -> usize {
    2
}

fn default_journal_capacity() -> usize {
    256
}
