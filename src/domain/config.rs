// ============================================================================
// Matcher Configuration
// Digit-count limits and edge-case policy for the decimal matcher
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of digits when no limit is configured
pub const DEFAULT_MAX_TOTAL_DIGITS: u32 = 11;

// ============================================================================
// Digit Limits
// ============================================================================

/// Which digit-count rules are active and with which limits.
///
/// The variant decides whether the decimal-places rule runs: only
/// `MaxDigitsAndPlaces` enables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatcherConfig {
    /// At most `DEFAULT_MAX_TOTAL_DIGITS` digits
    #[default]
    Default,

    /// At most `n` digits in total
    MaxDigits(u32),

    /// At most `n` digits in total, of which at most `d` after the separator
    MaxDigitsAndPlaces(u32, u32),
}

impl MatcherConfig {
    /// Build a configuration from positional parameters.
    ///
    /// - `[]` -> `Default`
    /// - `[n]` -> `MaxDigits(n)`
    /// - `[n, d]` -> `MaxDigitsAndPlaces(n, d)`
    ///
    /// # Errors
    /// Returns `TooManyParameters` for more than two parameters.
    pub fn from_params(params: &[u32]) -> Result<Self, ConfigError> {
        match *params {
            [] => Ok(Self::Default),
            [max_digits] => Ok(Self::MaxDigits(max_digits)),
            [max_digits, max_places] => Ok(Self::MaxDigitsAndPlaces(max_digits, max_places)),
            _ => Err(ConfigError::TooManyParameters(params.len())),
        }
    }

    /// Maximum number of digits in total
    pub const fn max_total_digits(&self) -> u32 {
        match *self {
            Self::Default => DEFAULT_MAX_TOTAL_DIGITS,
            Self::MaxDigits(n) | Self::MaxDigitsAndPlaces(n, _) => n,
        }
    }

    /// Maximum number of decimal places, if that rule is active
    pub const fn max_decimal_places(&self) -> Option<u32> {
        match *self {
            Self::MaxDigitsAndPlaces(_, d) => Some(d),
            _ => None,
        }
    }

    /// Number of positional parameters this configuration corresponds to
    pub const fn parameter_count(&self) -> usize {
        match self {
            Self::Default => 0,
            Self::MaxDigits(_) => 1,
            Self::MaxDigitsAndPlaces(..) => 2,
        }
    }
}

// ============================================================================
// Zero Value Policy
// ============================================================================

/// How a value that parses to zero is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroValuePolicy {
    /// Zero passes without any digit rule being evaluated, so `"0"` is
    /// valid even under a zero-digit limit.
    #[default]
    PassThrough,

    /// Zero is checked like any other value (one digit, no decimal places)
    Evaluate,
}

impl ZeroValuePolicy {
    #[inline]
    pub const fn skips_rules(self) -> bool {
        matches!(self, Self::PassThrough)
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while building a matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// More than two positional parameters were supplied
    TooManyParameters(usize),
    /// A decimal-places limit was set without a total-digits limit
    DecimalPlacesWithoutDigits,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyParameters(n) => {
                write!(f, "decimal matcher takes at most 2 parameters, got {}", n)
            }
            ConfigError::DecimalPlacesWithoutDigits => {
                write!(f, "maximum decimal places requires maximum number of digits")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_params() {
        assert_eq!(MatcherConfig::from_params(&[]), Ok(MatcherConfig::Default));
        assert_eq!(MatcherConfig::from_params(&[3]), Ok(MatcherConfig::MaxDigits(3)));
        assert_eq!(
            MatcherConfig::from_params(&[5, 2]),
            Ok(MatcherConfig::MaxDigitsAndPlaces(5, 2))
        );
        assert_eq!(
            MatcherConfig::from_params(&[5, 2, 1]),
            Err(ConfigError::TooManyParameters(3))
        );
    }

    #[test]
    fn test_limits() {
        let default = MatcherConfig::default();
        assert_eq!(default.max_total_digits(), DEFAULT_MAX_TOTAL_DIGITS);
        assert_eq!(default.max_decimal_places(), None);
        assert_eq!(default.parameter_count(), 0);

        let one = MatcherConfig::MaxDigits(4);
        assert_eq!(one.max_total_digits(), 4);
        assert_eq!(one.max_decimal_places(), None);
        assert_eq!(one.parameter_count(), 1);

        let two = MatcherConfig::MaxDigitsAndPlaces(5, 2);
        assert_eq!(two.max_total_digits(), 5);
        assert_eq!(two.max_decimal_places(), Some(2));
        assert_eq!(two.parameter_count(), 2);
    }

    #[test]
    fn test_zero_policy() {
        assert_eq!(ZeroValuePolicy::default(), ZeroValuePolicy::PassThrough);
        assert!(ZeroValuePolicy::PassThrough.skips_rules());
        assert!(!ZeroValuePolicy::Evaluate.skips_rules());
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::TooManyParameters(3).to_string(),
            "decimal matcher takes at most 2 parameters, got 3"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = MatcherConfig::MaxDigitsAndPlaces(5, 2);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"MaxDigitsAndPlaces":[5,2]}"#);
        let back: MatcherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
