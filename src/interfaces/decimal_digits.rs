// ============================================================================
// Decimal Digits Interface
// Digit-count contract the matcher needs from a decimal number
// ============================================================================

use crate::numeric::ParsedDecimal;
use rust_decimal::Decimal;

/// Digit counts of a decimal number.
///
/// Counts are taken on the normalised value, i.e. fractional trailing zeros
/// do not count. `None` means the value has no digits (infinite or NaN) and
/// no digit rule applies.
pub trait DecimalDigits {
    /// Significant digits, including trailing zeros of the integer part
    fn precision_with_zeros(&self) -> Option<u64>;

    /// Digits after the decimal separator
    fn decimal_places(&self) -> Option<u64>;

    fn is_zero(&self) -> bool;
}

impl DecimalDigits for ParsedDecimal {
    #[inline]
    fn precision_with_zeros(&self) -> Option<u64> {
        self.precision(true)
    }

    #[inline]
    fn decimal_places(&self) -> Option<u64> {
        ParsedDecimal::decimal_places(self)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        ParsedDecimal::is_zero(self)
    }
}

impl DecimalDigits for Decimal {
    fn precision_with_zeros(&self) -> Option<u64> {
        let mantissa = self.normalize().mantissa().unsigned_abs();
        Some(mantissa.checked_ilog10().map_or(1, |log| log as u64 + 1))
    }

    fn decimal_places(&self) -> Option<u64> {
        Some(self.normalize().scale() as u64)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same_counts(text: &str) {
        let parsed: ParsedDecimal = text.parse().unwrap();
        let decimal: Decimal = text.parse().unwrap();
        assert_eq!(
            parsed.precision_with_zeros(),
            decimal.precision_with_zeros(),
            "precision of {}",
            text
        );
        assert_eq!(
            DecimalDigits::decimal_places(&parsed),
            DecimalDigits::decimal_places(&decimal),
            "decimal places of {}",
            text
        );
    }

    #[test]
    fn test_counts_agree() {
        for text in ["123.45", "1000", "1.500", "0.00120", "-98765.4321", "7", "0.0"] {
            assert_same_counts(text);
        }
    }

    #[test]
    fn test_decimal_zero() {
        let zero = Decimal::ZERO;
        assert!(DecimalDigits::is_zero(&zero));
        assert_eq!(zero.precision_with_zeros(), Some(1));
        assert_eq!(DecimalDigits::decimal_places(&zero), Some(0));
    }

    #[test]
    fn test_non_finite_has_no_digits() {
        let inf: ParsedDecimal = "Infinity".parse().unwrap();
        assert_eq!(inf.precision_with_zeros(), None);
        assert_eq!(DecimalDigits::decimal_places(&inf), None);
        assert!(!DecimalDigits::is_zero(&inf));
    }
}
