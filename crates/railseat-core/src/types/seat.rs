//! Seat numbers and sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A seat number. Unique within an engine and the ordering key of the seat index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatNumber(pub i64);

impl SeatNumber {
    /// Return the inner integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SeatNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for SeatNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| AppError::validation(format!("Invalid seat number '{s}': {e}")))
    }
}

/// Coach sections. The declaration order is the round-robin order.
///
/// Deserialization goes through [`FromStr`], so configuration accepts any
/// casing (`"front"`, `"Front"`, `"FRONT"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Section {
    /// Front of the coach.
    Front,
    /// Middle of the coach.
    Mid,
    /// Rear of the coach.
    Rear,
}

impl Section {
    /// All sections in round-robin order.
    pub const ALL: [Section; 3] = [Self::Front, Self::Mid, Self::Rear];

    /// Position of this section in [`Section::ALL`].
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Front => 0,
            Self::Mid => 1,
            Self::Rear => 2,
        }
    }

    /// Return the display name of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Mid => "Mid",
            Self::Rear => "Rear",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "mid" => Ok(Self::Mid),
            "rear" => Ok(Self::Rear),
            _ => Err(AppError::invalid_section(s)),
        }
    }
}

impl TryFrom<String> for Section {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_section_from_str() {
        assert_eq!("front".parse::<Section>().unwrap(), Section::Front);
        assert_eq!(" MID ".parse::<Section>().unwrap(), Section::Mid);
        assert_eq!("Rear".parse::<Section>().unwrap(), Section::Rear);

        let err = "sleeper".parse::<Section>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSection);
    }

    #[test]
    fn test_section_deserialize_any_case() {
        let sections: Vec<Section> =
            serde_json::from_str(r#"["Front", "mId", "rear"]"#).unwrap();
        assert_eq!(sections, vec![Section::Front, Section::Mid, Section::Rear]);

        let err = serde_json::from_str::<Section>(r#""sleeper""#).unwrap_err();
        assert!(err.to_string().contains("INVALID_SECTION"));

        assert_eq!(serde_json::to_string(&Section::Mid).unwrap(), r#""mid""#);
    }

    #[test]
    fn test_section_ordinals_match_round_robin_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.ordinal(), i);
        }
    }

    #[test]
    fn test_seat_number_parse() {
        assert_eq!("42".parse::<SeatNumber>().unwrap(), SeatNumber(42));
        assert_eq!("-3".parse::<SeatNumber>().unwrap(), SeatNumber(-3));
        assert!("4a".parse::<SeatNumber>().is_err());
    }
}
