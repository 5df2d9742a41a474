//! # railseat-engine
//!
//! In-memory seat allocation for a single travel service.
//!
//! A booking request is offered, in order, a free seat (sections tried
//! round-robin), a RAC slot on an already booked seat, and finally a place
//! on the waiting list. Cancelling the most recent booking promotes the
//! seat's own RAC holder first, then the head of the waiting list.
//!
//! [`AllocationEngine`] is the single-caller engine; [`SharedEngine`] wraps
//! it behind one async mutex for concurrent callers.

pub mod engine;
pub mod journal;
pub mod ledger;
pub mod rotation;
pub mod seat;
pub mod section;
pub mod shared;
pub mod waitlist;

pub use engine::AllocationEngine;
pub use seat::{RacQueue, Seat, SeatId, SeatIndex};
pub use shared::SharedEngine;
