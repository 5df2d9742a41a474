//! Rotatable seat display order. Has no effect on allocation.

use std::collections::VecDeque;

use railseat_core::types::{Direction, SeatNumber};

/// Seat numbers in creation order, rotated one step at a time.
#[derive(Debug, Clone, Default)]
pub struct RotationSequence {
    order: VecDeque<SeatNumber>,
}

impl RotationSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a seat number at the end.
    pub fn push(&mut self, number: SeatNumber) {
        self.order.push_back(number);
    }

    /// Rotates by one position and returns the new order.
    pub fn rotate(&mut self, direction: Direction) -> Vec<SeatNumber> {
        if !self.order.is_empty() {
            match direction {
                Direction::Left => self.order.rotate_left(1),
                Direction::Right => self.order.rotate_right(1),
            }
        }
        self.to_vec()
    }

    /// Current order.
    pub fn to_vec(&self) -> Vec<SeatNumber> {
        self.order.iter().copied().collect()
    }
}
