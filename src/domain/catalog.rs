// ============================================================================
// Error Catalog
// Stable codes and messages reported by the decimal matcher
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rules a decimal value can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatcherError {
    /// Value could not be parsed as a decimal number
    InvalidDecimalValue,
    /// Value has more digits than allowed
    TooManyDigits,
    /// Value has more decimal places than allowed
    TooManyDecimalPlaces,
}

impl MatcherError {
    /// Every catalog entry, in code order
    pub const ALL: [MatcherError; 3] = [
        MatcherError::InvalidDecimalValue,
        MatcherError::TooManyDigits,
        MatcherError::TooManyDecimalPlaces,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            MatcherError::InvalidDecimalValue => "doubleNumber.e001",
            MatcherError::TooManyDigits => "doubleNumber.e002",
            MatcherError::TooManyDecimalPlaces => "doubleNumber.e003",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            MatcherError::InvalidDecimalValue => "The value is not a valid decimal number.",
            MatcherError::TooManyDigits => "The value exceeded maximum number of digits.",
            MatcherError::TooManyDecimalPlaces => {
                "The value exceeded maximum number of decimal places."
            }
        }
    }
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for MatcherError {}
