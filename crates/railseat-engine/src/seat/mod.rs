//! Seat records and their storage.
//!
//! Seats live in a flat arena owned by [`SeatIndex`]; every other
//! component refers to them by [`SeatId`].

pub mod index;
pub mod rac;

use std::fmt;

use railseat_core::types::{Passenger, SeatNumber, SeatView, Section};

pub use index::{InOrder, LevelOrder, SeatIndex};
pub use rac::RacQueue;

/// Arena slot of a seat. Slots are handed out in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId(usize);

impl SeatId {
    /// Position of the seat in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single seat.
///
/// A seat is booked exactly when it has an occupant; there is no separate flag.
#[derive(Debug, Clone)]
pub struct Seat {
    number: SeatNumber,
    section: Section,
    occupant: Option<Passenger>,
    rac: RacQueue,
}

impl Seat {
    pub(crate) fn new(number: SeatNumber, section: Section, rac_capacity: usize) -> Self {
        Self {
            number,
            section,
            occupant: None,
            rac: RacQueue::new(rac_capacity),
        }
    }

    /// Seat number.
    pub fn number(&self) -> SeatNumber {
        self.number
    }

    /// Section the seat belongs to.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Whether the seat has an occupant.
    pub fn is_booked(&self) -> bool {
        self.occupant.is_some()
    }

    /// Current occupant.
    pub fn occupant(&self) -> Option<&Passenger> {
        self.occupant.as_ref()
    }

    /// RAC queue of this seat.
    pub fn rac(&self) -> &RacQueue {
        &self.rac
    }

    pub(crate) fn rac_mut(&mut self) -> &mut RacQueue {
        &mut self.rac
    }

    /// Replace the occupant, returning the previous one.
    pub(crate) fn set_occupant(&mut self, passenger: Passenger) -> Option<Passenger> {
        self.occupant.replace(passenger)
    }

    pub(crate) fn take_occupant(&mut self) -> Option<Passenger> {
        self.occupant.take()
    }

    /// Display snapshot.
    pub fn view(&self) -> SeatView {
        SeatView {
            seat_number: self.number,
            section: self.section,
            occupant: self.occupant.clone(),
            rac_holders: self.rac.iter().cloned().collect(),
        }
    }
}
