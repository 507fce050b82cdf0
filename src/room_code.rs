//! Room code generation and parsing
//!
//! This module provides the short numeric identifier a host registers its
//! transport endpoint under, and which a guest enters to locate it. Codes
//! are 6-digit decimal numbers so they are easy to read out or paste.

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::room_code::{MAX_VALUE, MIN_VALUE};

/// A 6-digit decimal identifier for a duel room
///
/// Room codes are sampled uniformly from `[100000, 999999]` so the decimal
/// rendering is always exactly six digits with no leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomCode(u32);

/// Errors that can occur when parsing a room code from a string
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not a decimal number
    #[error("room code is not a decimal number: {0}")]
    NotANumber(#[from] ParseIntError),
    /// The number is outside the 6-digit range
    #[error("room code {0} is outside of [{MIN_VALUE}, {MAX_VALUE}]")]
    OutOfRange(u32),
}

impl RoomCode {
    /// Creates a new random room code
    pub fn new() -> Self {
        Self(fastrand::u32(MIN_VALUE..=MAX_VALUE))
    }
}

impl Default for RoomCode {
    /// Creates a new random room code (same as `new()`)
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RoomCode {
    /// Formats the room code as a 6-digit decimal number
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

impl Serialize for RoomCode {
    /// Serializes the room code as a decimal string
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoomCode {
    /// Deserializes a room code from a decimal string
    fn deserialize<D>(deserializer: D) -> Result<RoomCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RoomCode::from_str(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

impl FromStr for RoomCode {
    type Err = Error;

    /// Parses a room code from its decimal string representation
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotANumber`] if the string is not a decimal number
    /// and [`Error::OutOfRange`] if it does not have exactly six digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.parse()?;
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::OutOfRange(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_code_sampled_in_range() {
        for _ in 0..10_000 {
            let code = RoomCode::new();
            assert!(code.0 >= MIN_VALUE);
            assert!(code.0 <= MAX_VALUE);
        }
    }

    #[test]
    fn test_room_code_display_is_six_digits() {
        for _ in 0..10_000 {
            let rendered = RoomCode::new().to_string();
            assert_eq!(rendered.len(), 6);
            assert!(rendered.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(rendered.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn test_room_code_from_str() {
        let code = RoomCode::from_str("100000").unwrap();
        assert_eq!(code.0, MIN_VALUE);

        let code = RoomCode::from_str("999999").unwrap();
        assert_eq!(code.0, MAX_VALUE);

        let code = RoomCode::from_str("123456").unwrap();
        assert_eq!(code.to_string(), "123456");
    }

    #[test]
    fn test_room_code_from_str_rejects_out_of_range() {
        assert_eq!(
            RoomCode::from_str("99999"),
            Err(Error::OutOfRange(99_999))
        );
        assert_eq!(
            RoomCode::from_str("1000000"),
            Err(Error::OutOfRange(1_000_000))
        );
    }

    #[test]
    fn test_room_code_from_str_rejects_garbage() {
        assert!(RoomCode::from_str("abc123").is_err());
        assert!(RoomCode::from_str("").is_err());
        assert!(RoomCode::from_str("12 3456").is_err());
    }

    #[test]
    fn test_room_code_serialization() {
        let code = RoomCode(123_456);
        let serialized = serde_json::to_string(&code).unwrap();
        assert_eq!(serialized, "\"123456\"");

        let deserialized: RoomCode = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, code);
    }

    #[test]
    fn test_room_code_deserialization_rejects_number() {
        let result: Result<RoomCode, _> = serde_json::from_str("123456");
        assert!(result.is_err());
    }
}
