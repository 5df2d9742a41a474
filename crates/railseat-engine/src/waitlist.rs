//! Global waiting list.

use std::collections::VecDeque;

use railseat_core::types::{Passenger, RequestType};

/// Passengers with neither a seat nor a RAC slot.
///
/// Normal requests join the tail. Tatkal requests jump to the head, ahead of
/// every normal request and of earlier tatkal requests.
#[derive(Debug, Clone, Default)]
pub struct WaitingList {
    queue: VecDeque<Passenger>,
}

impl WaitingList {
    /// Creates an empty waiting list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a passenger and returns their 1-based position.
    pub fn enqueue(&mut self, passenger: Passenger, request_type: RequestType) -> usize {
        match request_type {
            RequestType::Tatkal => {
                self.queue.push_front(passenger);
                1
            }
            RequestType::Normal => {
                self.queue.push_back(passenger);
                self.queue.len()
            }
        }
    }

    /// Removes the head passenger.
    pub fn dequeue(&mut self) -> Option<Passenger> {
        self.queue.pop_front()
    }

    /// Number of waiting passengers.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Waiting passengers' names, head first.
    pub fn names(&self) -> Vec<String> {
        self.queue.iter().map(|p| p.name.clone()).collect()
    }
}
