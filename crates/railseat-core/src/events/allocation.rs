//! Allocation events emitted by the engine.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, SeatNumber, Section};

/// Events related to seats, bookings and their promotion cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AllocationEvent {
    /// A seat was added to the index.
    SeatAdded {
        /// The new seat.
        seat_number: SeatNumber,
        /// Its section.
        section: Section,
    },
    /// A passenger was given a free seat.
    Seated {
        /// Passenger name.
        name: String,
        /// The assigned seat.
        seat_number: SeatNumber,
        /// Its section.
        section: Section,
    },
    /// A passenger joined a seat's RAC queue.
    RacAssigned {
        /// Passenger name.
        name: String,
        /// The seat whose RAC queue was joined.
        seat_number: SeatNumber,
    },
    /// A passenger joined the waiting list.
    Waitlisted {
        /// Passenger name.
        name: String,
        /// Whether the request jumped to the head of the list.
        tatkal: bool,
    },
    /// The most recent booking was cancelled.
    Cancelled {
        /// Name of the cancelled occupant.
        name: String,
        /// The cancelled seat.
        seat_number: SeatNumber,
    },
    /// A RAC holder took over a cancelled seat.
    RacPromoted {
        /// Name of the promoted passenger.
        name: String,
        /// The seat taken over.
        seat_number: SeatNumber,
    },
    /// The head of the waiting list took over a cancelled seat.
    WaitlistPromoted {
        /// Name of the promoted passenger.
        name: String,
        /// The seat taken over.
        seat_number: SeatNumber,
    },
    /// A cancelled seat had no successor and is free again.
    SeatFreed {
        /// The freed seat.
        seat_number: SeatNumber,
    },
    /// The seat display order was rotated.
    Rotated {
        /// Rotation direction.
        direction: Direction,
    },
}

impl AllocationEvent {
    /// Short human-readable summary used by the shell's history view.
    pub fn summary(&self) -> String {
        match self {
            Self::SeatAdded {
                seat_number,
                section,
            } => format!("Seat {seat_number} added [{section}]"),
            Self::Seated {
                name,
                seat_number,
                section,
            } => format!("{name} -> Seat {seat_number} [{section}]"),
            Self::RacAssigned { name, seat_number } => {
                format!("RAC -> {name} Seat {seat_number}")
            }
            Self::Waitlisted { name, tatkal } => {
                if *tatkal {
                    format!("WAITING (Tatkal) -> {name}")
                } else {
                    format!("WAITING -> {name}")
                }
            }
            Self::Cancelled { name, seat_number } => {
                format!("CANCELLED -> {name} Seat {seat_number}")
            }
            Self::RacPromoted { name, seat_number } => {
                format!("RAC PROMOTED -> {name} Seat {seat_number}")
            }
            Self::WaitlistPromoted { name, seat_number } => {
                format!("WL PROMOTED -> {name} Seat {seat_number}")
            }
            Self::SeatFreed { seat_number } => format!("Seat {seat_number} now available"),
            Self::Rotated { direction } => format!("Seat order rotated {direction}"),
        }
    }
}
