// ============================================================================
// Decimal Matcher
// Validates that a string is a decimal number within digit-count limits
// ============================================================================

use crate::domain::{ConfigError, MatcherConfig, MatcherError, ValidationResult, ZeroValuePolicy};
use crate::interfaces::{DecimalDigits, Matcher};
use crate::numeric::ParsedDecimal;

/// Decimal number matcher.
///
/// Validates that a value is either absent or a string representing a
/// decimal number with `.` as the separator, and that the number respects
/// the configured digit limits:
///
/// - `Default`: at most 11 digits in total
/// - `MaxDigits(n)`: at most `n` digits in total
/// - `MaxDigitsAndPlaces(n, d)`: at most `n` digits in total and at most `d`
///   after the separator; both rules are checked independently
///
/// The matcher holds only immutable configuration, so one instance can be
/// shared across threads.
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
///
/// let matcher = DecimalMatcher::new(MatcherConfig::MaxDigitsAndPlaces(5, 2));
///
/// assert!(matcher.match_str("12.3").is_valid());
/// assert_eq!(
///     matcher.match_str("123.456").codes(),
///     vec!["doubleNumber.e002", "doubleNumber.e003"]
/// );
/// assert!(matcher.match_value(None).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalMatcher {
    config: MatcherConfig,
    zero_policy: ZeroValuePolicy,
}

impl DecimalMatcher {
    /// Create a matcher with the given limits
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            zero_policy: ZeroValuePolicy::default(),
        }
    }

    /// Create a matcher from 0 to 2 positional parameters.
    ///
    /// # Errors
    /// Returns `TooManyParameters` for more than two parameters.
    pub fn from_params(params: &[u32]) -> Result<Self, ConfigError> {
        MatcherConfig::from_params(params).map(Self::new)
    }

    /// Builder method: Set how zero values are treated
    pub fn with_zero_policy(mut self, zero_policy: ZeroValuePolicy) -> Self {
        self.zero_policy = zero_policy;
        self
    }

    pub fn config(&self) -> MatcherConfig {
        self.config
    }

    pub fn zero_policy(&self) -> ZeroValuePolicy {
        self.zero_policy
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Validate a value that may be absent.
    ///
    /// An absent value is always valid; presence is the concern of a
    /// separate "required" rule.
    pub fn match_value(&self, value: Option<&str>) -> ValidationResult {
        match value {
            Some(text) => self.match_str(text),
            None => {
                tracing::trace!("decimal matcher: null value, nothing to check");
                ValidationResult::new()
            }
        }
    }

    /// Validate a decimal string.
    ///
    /// A string that does not parse yields only `InvalidDecimalValue`;
    /// the digit rules are not evaluated for it.
    pub fn match_str(&self, value: &str) -> ValidationResult {
        match ParsedDecimal::parse(value) {
            Ok(number) => self.match_decimal(&number),
            Err(e) => {
                tracing::debug!("decimal matcher: rejected {:?}: {}", value, e);
                let mut result = ValidationResult::new();
                result.add_error(MatcherError::InvalidDecimalValue);
                result
            }
        }
    }

    /// Check the digit rules on an already parsed number.
    pub fn match_decimal<D: DecimalDigits + ?Sized>(&self, number: &D) -> ValidationResult {
        let mut result = ValidationResult::new();

        if number.is_zero() && self.zero_policy.skips_rules() {
            tracing::trace!("decimal matcher: zero value passes without digit checks");
            return result;
        }

        if self.exceeds_total_digits(number) {
            tracing::debug!(
                "decimal matcher: more than {} digits",
                self.config.max_total_digits()
            );
            result.add_error(MatcherError::TooManyDigits);
        }

        if self.exceeds_decimal_places(number) {
            tracing::debug!(
                "decimal matcher: more than {:?} decimal places",
                self.config.max_decimal_places()
            );
            result.add_error(MatcherError::TooManyDecimalPlaces);
        }

        result
    }

    fn exceeds_total_digits<D: DecimalDigits + ?Sized>(&self, number: &D) -> bool {
        let max = self.config.max_total_digits() as u64;
        number.precision_with_zeros().is_some_and(|digits| digits > max)
    }

    /// Only evaluated when a decimal-places limit is configured
    fn exceeds_decimal_places<D: DecimalDigits + ?Sized>(&self, number: &D) -> bool {
        let Some(max) = self.config.max_decimal_places() else {
            return false;
        };
        number
            .decimal_places()
            .is_some_and(|places| places > max as u64)
    }
}

impl Matcher for DecimalMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        DecimalMatcher::match_value(self, value)
    }

    fn name(&self) -> &str {
        "decimal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    const E001: &str = "doubleNumber.e001";
    const E002: &str = "doubleNumber.e002";
    const E003: &str = "doubleNumber.e003";

    fn matcher(params: &[u32]) -> DecimalMatcher {
        DecimalMatcher::from_params(params).unwrap()
    }

    #[test]
    fn test_null_is_valid() {
        let configs: [&[u32]; 3] = [&[], &[0], &[0, 0]];
        for params in configs {
            assert!(matcher(params).match_value(None).is_valid());
        }
    }

    #[test]
    fn test_default_limit() {
        let m = DecimalMatcher::default();
        assert!(m.match_str("123.45").is_valid());
        assert!(m.match_str("12345678901").is_valid());
        assert!(m.match_str("-1234567890.1").is_valid());
        assert_eq!(m.match_str("123456789012").codes(), vec![E002]);
        assert_eq!(m.match_str("1.23456789012").codes(), vec![E002]);
    }

    #[test]
    fn test_default_ignores_decimal_places() {
        let m = DecimalMatcher::default();
        assert!(m.match_str("0.0000000001").is_valid());
    }

    #[test]
    fn test_invalid_value() {
        let m = DecimalMatcher::default();
        for input in ["not-a-number", "abc", "1.2.3", "", "1,5", " 12"] {
            let result = m.match_str(input);
            assert_eq!(result.codes(), vec![E001], "input {:?}", input);
        }
    }

    #[test]
    fn test_radix_and_separated_literals() {
        let m = DecimalMatcher::default();
        for input in ["0x1F", "0b101", "0o17", "1_000", "-0x1.8"] {
            assert!(m.match_str(input).is_valid(), "input {:?}", input);
        }

        let m = matcher(&[2, 0]);
        assert_eq!(m.match_str("0xFFF").codes(), vec![E002]);
        assert_eq!(m.match_str("0x1.8").codes(), vec![E003]);
        assert_eq!(m.match_str("1_000").codes(), vec![E002]);
    }

    #[test]
    fn test_invalid_value_skips_digit_rules() {
        let m = matcher(&[0, 0]);
        assert_eq!(m.match_str("12345.678.9").codes(), vec![E001]);
    }

    #[test]
    fn test_one_param_boundary() {
        let m = matcher(&[3]);
        assert!(m.match_str("123").is_valid());
        assert!(m.match_str("1.23").is_valid());
        assert_eq!(m.match_str("1234").codes(), vec![E002]);
        assert_eq!(m.match_str("1.234").codes(), vec![E002]);
    }

    #[test]
    fn test_one_param_ignores_decimal_places() {
        let m = matcher(&[5]);
        assert!(m.match_str("0.00001").is_valid());
    }

    #[test]
    fn test_two_params() {
        let m = matcher(&[5, 2]);
        assert!(m.match_str("12.3").is_valid());
        assert!(m.match_str("123.45").is_valid());
        assert_eq!(m.match_str("1.234").codes(), vec![E003]);
        assert_eq!(m.match_str("123456").codes(), vec![E002]);
        assert_eq!(m.match_str("123.456").codes(), vec![E002, E003]);
    }

    #[test]
    fn test_trailing_zeros() {
        let m = matcher(&[4, 1]);
        // Fractional trailing zeros are not digits of the value
        assert!(m.match_str("1.500000").is_valid());
        // Integer trailing zeros are
        assert!(m.match_str("1000").is_valid());
        assert_eq!(m.match_str("10000").codes(), vec![E002]);
    }

    #[test]
    fn test_leading_zeros_and_sign() {
        let m = matcher(&[3]);
        assert!(m.match_str("000123").is_valid());
        assert!(m.match_str("-0.123").is_valid());
        assert!(m.match_str("+12.3").is_valid());
    }

    #[test]
    fn test_exponent_notation() {
        let m = matcher(&[4, 2]);
        assert!(m.match_str("1.5e3").is_valid());
        assert_eq!(m.match_str("1.5e4").codes(), vec![E002]);
        // 0.0015: two significant digits, four decimal places
        assert_eq!(m.match_str("1.5e-3").codes(), vec![E003]);
    }

    #[test]
    fn test_zero_pass_through() {
        for input in ["0", "0.000", "-0", "0e5", "0.000000000000001e-9000000000000000"] {
            assert!(matcher(&[0]).match_str(input).is_valid(), "input {:?}", input);
            assert!(matcher(&[0, 0]).match_str(input).is_valid(), "input {:?}", input);
        }
    }

    #[test]
    fn test_zero_evaluated() {
        let m = matcher(&[0, 0]).with_zero_policy(ZeroValuePolicy::Evaluate);
        assert_eq!(m.match_str("0.00").codes(), vec![E002]);

        let m = matcher(&[1, 0]).with_zero_policy(ZeroValuePolicy::Evaluate);
        assert!(m.match_str("0.00").is_valid());
    }

    #[test]
    fn test_non_finite_passes_digit_rules() {
        let m = matcher(&[1, 0]);
        for input in ["Infinity", "-Infinity", "NaN", "1e9000000000000001"] {
            assert!(m.match_str(input).is_valid(), "input {:?}", input);
        }
    }

    #[test]
    fn test_wide_value() {
        let m = DecimalMatcher::default();
        let wide = "9".repeat(40);
        assert_eq!(m.match_str(&wide).codes(), vec![E002]);
    }

    #[test]
    fn test_match_decimal() {
        let m = matcher(&[5, 2]);
        assert!(m.match_decimal(&Decimal::new(1230, 2)).is_valid());
        assert_eq!(
            m.match_decimal(&Decimal::new(123456, 3)).codes(),
            vec![E002, E003]
        );
        assert!(m.match_decimal(&Decimal::ZERO).is_valid());
    }

    #[test]
    fn test_idempotent() {
        let m = matcher(&[5, 2]);
        for input in ["123.456", "12.3", "abc", "0"] {
            assert_eq!(m.match_str(input), m.match_str(input));
        }
    }

    #[test]
    fn test_matcher_trait() {
        let m: &dyn Matcher = &DecimalMatcher::default();
        assert_eq!(m.name(), "decimal");
        assert!(m.match_value(Some("42")).is_valid());
    }
}
