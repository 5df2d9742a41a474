//! Per-seat RAC (reservation against cancellation) queue.

use std::collections::VecDeque;

use railseat_core::types::{Gender, Passenger};

/// Bounded FIFO of passengers waiting on one booked seat.
///
/// Invariants: never more than `capacity` holders, and every holder shares
/// the gender of the first one.
#[derive(Debug, Clone)]
pub struct RacQueue {
    holders: VecDeque<Passenger>,
    capacity: usize,
}

impl RacQueue {
    /// Creates an empty queue with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            holders: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether a requester of the given gender would be accepted.
    ///
    /// Only the first holder's gender is compared.
    pub fn accepts(&self, gender: &Gender) -> bool {
        if self.holders.len() >= self.capacity {
            return false;
        }
        match self.holders.front() {
            Some(first) => first.gender == *gender,
            None => true,
        }
    }

    /// Appends a passenger, handing it back if the queue does not accept it.
    pub fn try_push(&mut self, passenger: Passenger) -> Result<(), Passenger> {
        if !self.accepts(&passenger.gender) {
            return Err(passenger);
        }
        self.holders.push_back(passenger);
        Ok(())
    }

    /// Removes the head holder.
    pub fn pop(&mut self) -> Option<Passenger> {
        self.holders.pop_front()
    }

    /// Number of holders.
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    /// Whether the queue has no holders.
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Maximum number of holders.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Holders, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.holders.iter()
    }
}
