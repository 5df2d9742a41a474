//! Core type definitions used across the Railseat workspace.

pub mod direction;
pub mod outcome;
pub mod passenger;
pub mod seat;

pub use direction::Direction;
pub use outcome::{AdminReport, BookingOutcome, CancellationReport, Promotion, SeatView};
pub use passenger::{Gender, Passenger, RequestType};
pub use seat::{SeatNumber, Section};
