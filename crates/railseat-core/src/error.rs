//! Unified application error types for Railseat.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Every error is recoverable: the
//! engine validates before it mutates, so a rejected operation leaves its
//! state exactly as it was.

use std::fmt;
use thiserror::Error;

use crate::types::SeatNumber;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A seat with the same number already exists.
    DuplicateSeat,
    /// A section name outside the closed `Front`/`Mid`/`Rear` set.
    InvalidSection,
    /// A cancellation was requested while no booking is recorded.
    EmptyLedger,
    /// Gender input was rejected under strict validation.
    InvalidGender,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// An I/O error occurred.
    Io,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal invariant was violated.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSeat => write!(f, "DUPLICATE_SEAT"),
            Self::InvalidSection => write!(f, "INVALID_SECTION"),
            Self::EmptyLedger => write!(f, "EMPTY_LEDGER"),
            Self::InvalidGender => write!(f, "INVALID_GENDER"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Io => write!(f, "IO"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Railseat.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a duplicate-seat error.
    pub fn duplicate_seat(seat_number: SeatNumber) -> Self {
        Self::new(
            ErrorKind::DuplicateSeat,
            format!("Seat {seat_number} already exists"),
        )
    }

    /// Create an invalid-section error.
    pub fn invalid_section(input: &str) -> Self {
        Self::new(
            ErrorKind::InvalidSection,
            format!("Invalid section: '{input}'. Expected one of: front, mid, rear"),
        )
    }

    /// Create an empty-ledger error.
    pub fn empty_ledger() -> Self {
        Self::new(ErrorKind::EmptyLedger, "No tickets to cancel")
    }

    /// Create an invalid-gender error.
    pub fn invalid_gender(input: &str) -> Self {
        Self::new(
            ErrorKind::InvalidGender,
            format!("Invalid gender: '{input}'. Expected one of: m, f, male, female"),
        )
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Check whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
