//! Passengers, their gender, and booking request types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Passenger gender as normalized from free-form input.
///
/// Single-letter and full-word forms of male/female are recognized; any
/// other text passes through lowercased as [`Gender::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// No gender given.
    Unspecified,
    /// Unrecognized input, lowercased.
    Other(String),
}

impl Gender {
    /// Normalize free-form input. Never fails.
    pub fn normalize(input: &str) -> Self {
        let lowered = input.trim().to_lowercase();
        match lowered.as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            "" => Self::Unspecified,
            _ => Self::Other(lowered),
        }
    }

    /// Normalize input, rejecting anything other than male or female.
    pub fn parse_strict(input: &str) -> Result<Self, AppError> {
        match Self::normalize(input) {
            g @ (Self::Male | Self::Female) => Ok(g),
            _ => Err(AppError::invalid_gender(input)),
        }
    }

    /// Return the gender as a lowercase string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A passenger holding a seat, a RAC slot, or a waiting-list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Passenger name as entered.
    pub name: String,
    /// Normalized gender.
    pub gender: Gender,
}

impl Passenger {
    /// Create a new passenger.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.gender)
    }
}

/// Booking request priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Regular request, queued at the tail of the waiting list.
    #[default]
    Normal,
    /// Expedited request, queued at the head of the waiting list.
    Tatkal,
}

impl RequestType {
    /// Interpret free-form input. Anything that is not a tatkal request is normal.
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "tatkal" | "priority" => Self::Tatkal,
            _ => Self::Normal,
        }
    }

    /// Return the request type as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Tatkal => "Tatkal",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
