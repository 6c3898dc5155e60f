// ============================================================================
// Parsed Decimal
// Arbitrary-precision decimal value parsed from its textual form
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Largest exponent a finite value may carry; anything above becomes infinite.
pub const MAX_EXPONENT: i64 = 9_000_000_000_000_000;

/// Smallest exponent a finite value may carry; anything below becomes zero.
pub const MIN_EXPONENT: i64 = -9_000_000_000_000_000;

/// Largest binary exponent (`p` part) accepted in a radix literal
pub const MAX_BINARY_EXPONENT: u64 = 1074;

/// Largest scale `rust_decimal::Decimal` can hold
const DECIMAL_MAX_SCALE: u64 = 28;

/// Largest number of mantissa digits `rust_decimal::Decimal` can hold
const DECIMAL_MAX_DIGITS: usize = 29;

/// Exponent bounds outside which `Display` switches to exponential notation
const TO_EXP_NEG: i64 = -7;
const TO_EXP_POS: i64 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    /// `digits` has no leading or trailing zeros and is never empty.
    /// `exponent` is the power of ten of the first digit.
    Finite { digits: String, exponent: i64 },
    Zero,
    Infinite,
    NaN,
}

/// A decimal number parsed from text, without any bound on its width.
///
/// The value is kept normalised: leading zeros and fractional trailing zeros
/// are dropped, so `"001.500"` and `"1.5"` parse to the same value. This is
/// what the digit counters below measure.
///
/// # Example
/// ```
/// use decimal_matcher::numeric::ParsedDecimal;
///
/// let x: ParsedDecimal = "1000.50".parse().unwrap();
/// assert_eq!(x.precision(true), Some(5));
/// assert_eq!(x.decimal_places(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedDecimal {
    negative: bool,
    repr: Repr,
}

impl ParsedDecimal {
    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse a decimal string.
    ///
    /// Accepted forms:
    /// - `"123"`, `"-0.5"`, `"+7"`
    /// - `"5."`, `".5"`
    /// - `"1.5e3"`, `"2E-4"`
    /// - `"1_000"`: `_` between two digits is ignored
    /// - `"0x1F"`, `"0b101"`, `"0o17"`, `"0x1.8p3"`: binary, octal and
    ///   hexadecimal literals with optional fraction and binary exponent
    /// - `"Infinity"`, `"-Infinity"`, `"NaN"`
    ///
    /// Whitespace, other grouping separators and `,` as decimal separator
    /// are rejected.
    ///
    /// # Errors
    /// - `InvalidInput` if the text is not a number
    /// - `Overflow` if a binary exponent exceeds `MAX_BINARY_EXPONENT`
    pub fn parse(s: &str) -> NumericResult<Self> {
        let (negative, body) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        if let Some(parsed) = Self::parse_decimal(negative, body) {
            return Ok(parsed);
        }

        if body.contains('_') {
            let stripped = strip_digit_separators(body);
            if let Some(parsed) = Self::parse_decimal(negative, &stripped) {
                return Ok(parsed);
            }
            return Self::parse_radix(negative, &stripped);
        }

        match body {
            "Infinity" => Ok(Self {
                negative,
                repr: Repr::Infinite,
            }),
            "NaN" => Ok(Self {
                negative: false,
                repr: Repr::NaN,
            }),
            _ => Self::parse_radix(negative, body),
        }
    }

    /// Plain or exponential decimal notation; `None` if `body` is not one.
    fn parse_decimal(negative: bool, body: &str) -> Option<Self> {
        // Split off the exponent
        let (mantissa, exp_shift) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..]).ok()?),
            None => (body, 0),
        };

        // Split on decimal point
        let (int_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if int_str.is_empty() && frac_str.is_empty() {
            return None;
        }
        if !is_digits(int_str) || !is_digits(frac_str) {
            return None;
        }

        let combined: Vec<u8> = int_str.bytes().chain(frac_str.bytes()).collect();
        Some(Self::from_digits(negative, &combined, int_str.len(), exp_shift))
    }

    /// Binary, octal or hexadecimal literal, converted exactly.
    ///
    /// A fraction of `k` digits in base `2^m` divides by `2^(m*k)` and the
    /// `p` exponent multiplies by a power of two, so the value is always an
    /// integer times a power of two and has a finite decimal expansion.
    fn parse_radix(negative: bool, body: &str) -> NumericResult<Self> {
        let (radix, bits_per_digit) = match body.get(..2) {
            Some("0x" | "0X") => (16, 4),
            Some("0o" | "0O") => (8, 3),
            Some("0b" | "0B") => (2, 1),
            _ => return Err(NumericError::InvalidInput),
        };
        let rest = &body[2..];

        let (mantissa, binary_exponent) = match rest.find(['p', 'P']) {
            Some(pos) => (&rest[..pos], parse_exponent(&rest[pos + 1..])?),
            None => (rest, 0),
        };
        if binary_exponent.unsigned_abs() > MAX_BINARY_EXPONENT {
            return Err(NumericError::Overflow);
        }

        let (int_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        // Little-endian decimal digits of the integer formed by all digits
        let mut value: Vec<u8> = Vec::new();
        for c in int_str.chars().chain(frac_str.chars()) {
            let digit = c.to_digit(radix).ok_or(NumericError::InvalidInput)?;
            mul_add(&mut value, radix, digit);
        }

        let fraction_bits = (frac_str.len() as i64) * bits_per_digit;
        let shift = binary_exponent - fraction_bits;

        // x * 2^-n == x * 5^n / 10^n
        let scale = if shift >= 0 {
            for _ in 0..shift {
                mul_add(&mut value, 2, 0);
            }
            0
        } else {
            for _ in 0..-shift {
                mul_add(&mut value, 5, 0);
            }
            -shift
        };

        let combined: Vec<u8> = value.iter().rev().map(|d| b'0' + d).collect();
        Ok(Self::from_digits(negative, &combined, combined.len(), -scale))
    }

    /// Normalise ASCII digits whose first `int_len` digits form the integer
    /// part, scaled by `10^exp_shift`.
    fn from_digits(negative: bool, combined: &[u8], int_len: usize, exp_shift: i64) -> Self {
        let Some(lead) = combined.iter().position(|&b| b != b'0') else {
            return Self {
                negative,
                repr: Repr::Zero,
            };
        };
        // A non-zero digit exists, so rposition finds one too
        let trail = combined.iter().rposition(|&b| b != b'0').unwrap_or(lead);

        let exponent = (int_len as i64 - 1 - lead as i64).saturating_add(exp_shift);

        let repr = if exponent > MAX_EXPONENT {
            Repr::Infinite
        } else if exponent < MIN_EXPONENT {
            Repr::Zero
        } else {
            let digits = combined[lead..=trail].iter().map(|&b| b as char).collect();
            Repr::Finite { digits, exponent }
        };

        Self { negative, repr }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero (of either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Zero)
    }

    /// Check if value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self.repr, Repr::Finite { .. } | Repr::Zero)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::NaN)
    }

    /// Check if the sign is negative. `"-0"` counts as negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    // ========================================================================
    // Digit Counts
    // ========================================================================

    /// Number of significant digits.
    ///
    /// With `include_zeros`, trailing zeros of the integer part count as
    /// significant: `"1000"` has precision 1 without and 4 with them.
    /// Zero has precision 1. Non-finite values have no precision.
    pub fn precision(&self, include_zeros: bool) -> Option<u64> {
        match &self.repr {
            Repr::Finite { digits, exponent } => {
                let significant = digits.len() as u64;
                let integer_digits = exponent.saturating_add(1);
                if include_zeros && integer_digits > significant as i64 {
                    Some(integer_digits as u64)
                } else {
                    Some(significant)
                }
            }
            Repr::Zero => Some(1),
            Repr::Infinite | Repr::NaN => None,
        }
    }

    /// Number of digits after the decimal separator once normalised.
    ///
    /// `"1.500"` has one decimal place, `"1.5e-3"` four, `"1.5e3"` none.
    pub fn decimal_places(&self) -> Option<u64> {
        match &self.repr {
            Repr::Finite { digits, exponent } => {
                let places = (digits.len() as i64 - 1).saturating_sub(*exponent);
                Some(places.max(0) as u64)
            }
            Repr::Zero => Some(0),
            Repr::Infinite | Repr::NaN => None,
        }
    }

    // ========================================================================
    // Conversion to rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal` without rounding.
    ///
    /// # Errors
    /// - `InvalidInput` for infinite and NaN values
    /// - `Overflow` if the mantissa or scale does not fit
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let (digits, exponent) = match &self.repr {
            Repr::Finite { digits, exponent } => (digits, *exponent),
            Repr::Zero => return Ok(Decimal::ZERO),
            Repr::Infinite | Repr::NaN => return Err(NumericError::InvalidInput),
        };

        let scale = self.decimal_places().unwrap_or(0);
        if scale > DECIMAL_MAX_SCALE {
            return Err(NumericError::Overflow);
        }

        let padding = (exponent - (digits.len() as i64 - 1)).max(0) as usize;
        if digits.len().saturating_add(padding) > DECIMAL_MAX_DIGITS {
            return Err(NumericError::Overflow);
        }

        let mut mantissa = digits
            .bytes()
            .try_fold(0i128, |acc, b| acc.checked_mul(10)?.checked_add((b - b'0') as i128))
            .ok_or(NumericError::Overflow)?;
        for _ in 0..padding {
            mantissa = mantissa.checked_mul(10).ok_or(NumericError::Overflow)?;
        }
        if self.negative {
            mantissa = -mantissa;
        }

        Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

/// Parse the exponent after `e`/`E`, saturating instead of overflowing.
fn parse_exponent(s: &str) -> NumericResult<i64> {
    let (negative, digits) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    if digits.is_empty() || !is_digits(digits) {
        return Err(NumericError::InvalidInput);
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as i64)
    });

    Ok(if negative { -magnitude } else { magnitude })
}

#[inline]
fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Drop every `_` that sits between two ASCII digits.
fn strip_digit_separators(s: &str) -> String {
    let bytes = s.as_bytes();
    s.char_indices()
        .filter(|&(i, c)| {
            let separator = c == '_'
                && i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            !separator
        })
        .map(|(_, c)| c)
        .collect()
}

/// `digits = digits * factor + addend` on little-endian decimal digits.
fn mul_add(digits: &mut Vec<u8>, factor: u32, addend: u32) {
    let mut carry = addend;
    for d in digits.iter_mut() {
        let v = *d as u32 * factor + carry;
        *d = (v % 10) as u8;
        carry = v / 10;
    }
    while carry > 0 {
        digits.push((carry % 10) as u8);
        carry /= 10;
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromStr for ParsedDecimal {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match &self.repr {
            Repr::NaN => write!(f, "NaN"),
            Repr::Infinite => write!(f, "{}Infinity", sign),
            Repr::Zero => write!(f, "{}0", sign),
            Repr::Finite { digits, exponent } => {
                let exponent = *exponent;
                let (head, tail) = digits.split_at(1);

                if exponent <= TO_EXP_NEG || exponent >= TO_EXP_POS {
                    let dot = if tail.is_empty() { "" } else { "." };
                    let exp_sign = if exponent < 0 { "-" } else { "+" };
                    write!(
                        f,
                        "{}{}{}{}e{}{}",
                        sign,
                        head,
                        dot,
                        tail,
                        exp_sign,
                        exponent.unsigned_abs()
                    )
                } else if exponent < 0 {
                    let zeros = (-exponent - 1) as usize;
                    write!(f, "{}0.{}{}", sign, "0".repeat(zeros), digits)
                } else {
                    let int_len = exponent as usize + 1;
                    if digits.len() > int_len {
                        let (int_part, frac_part) = digits.split_at(int_len);
                        write!(f, "{}{}.{}", sign, int_part, frac_part)
                    } else {
                        let zeros = int_len - digits.len();
                        write!(f, "{}{}{}", sign, digits, "0".repeat(zeros))
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
