//! Results of engine operations as handed to callers for rendering.

use serde::{Deserialize, Serialize};

use super::passenger::Passenger;
use super::seat::{SeatNumber, Section};

/// Where a booking request ended up. Booking never fails outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    /// A free seat was assigned.
    Seated {
        /// The assigned seat.
        seat_number: SeatNumber,
        /// Section of the assigned seat.
        section: Section,
    },
    /// The passenger joined the RAC queue of a booked seat.
    Rac {
        /// The seat whose RAC queue was joined.
        seat_number: SeatNumber,
    },
    /// The passenger joined the waiting list.
    Waitlisted {
        /// 1-based position in the waiting list at enqueue time.
        position: usize,
    },
}

/// What happened to a seat after its occupant cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "passenger", rename_all = "snake_case")]
pub enum Promotion {
    /// The head of the seat's own RAC queue took the seat.
    Rac(Passenger),
    /// The head of the waiting list took the seat.
    Waitlist(Passenger),
    /// Nobody was waiting; the seat is free again.
    SeatFreed,
}

impl Promotion {
    /// The passenger now occupying the seat, if any.
    pub fn passenger(&self) -> Option<&Passenger> {
        match self {
            Self::Rac(p) | Self::Waitlist(p) => Some(p),
            Self::SeatFreed => None,
        }
    }
}

/// Result of a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationReport {
    /// The occupant whose booking was cancelled.
    pub cancelled: Passenger,
    /// The cancelled seat.
    pub seat_number: SeatNumber,
    /// Section of the cancelled seat.
    pub section: Section,
    /// The promotion cascade result for that seat.
    pub promotion: Promotion,
}

/// Read-only administrative snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminReport {
    /// Seat numbers in ascending order.
    pub in_order: Vec<SeatNumber>,
    /// Seat numbers breadth-first from the first inserted seat.
    pub level_order: Vec<SeatNumber>,
    /// Waiting list names, head first.
    pub waiting_names: Vec<String>,
}

/// Display snapshot of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    /// Seat number.
    pub seat_number: SeatNumber,
    /// Section.
    pub section: Section,
    /// Current occupant, if booked.
    pub occupant: Option<Passenger>,
    /// RAC holders, head first.
    pub rac_holders: Vec<Passenger>,
}

impl SeatView {
    /// Whether the seat currently has an occupant.
    pub fn is_booked(&self) -> bool {
        self.occupant.is_some()
    }
}
