//! # railseat-core
//!
//! Core crate for Railseat. Contains configuration schemas, the domain
//! vocabulary shared by the engine and the CLI (seat numbers, sections,
//! passengers, booking outcomes), allocation events, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Railseat crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
