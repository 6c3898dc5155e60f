// ============================================================================
// Decimal Matcher Library
// Validation rule for decimal number strings with digit-count limits
// ============================================================================

//! # Decimal Matcher
//!
//! Validates that a value is a textual decimal number within configurable
//! digit-count limits, and reports violations as a list of typed errors
//! instead of failing.
//!
//! ## Features
//!
//! - **Arbitrary-precision parsing**: no limit on digits or exponent width
//! - **Three configurations**: default (11 digits), max digits, max digits
//!   and max decimal places
//! - **Stable error codes** (`doubleNumber.e001` to `doubleNumber.e003`)
//! - **Stateless evaluation**: one matcher can be shared across threads
//!
//! ## Example
//!
//! ```rust
//! use decimal_matcher::prelude::*;
//!
//! let matcher = DecimalMatcher::from_params(&[5, 2]).unwrap();
//!
//! let result = matcher.match_value(Some("123.456"));
//! assert!(!result.is_valid());
//! assert_eq!(result.codes(), vec!["doubleNumber.e002", "doubleNumber.e003"]);
//!
//! assert!(matcher.match_value(Some("12.3")).is_valid());
//! assert!(matcher.match_value(None).is_valid());
//! ```

pub mod domain;
pub mod interfaces;
pub mod matcher;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, MatcherConfig, MatcherError, ValidationError, ValidationErrorKind,
        ValidationResult, ZeroValuePolicy, DEFAULT_MAX_TOTAL_DIGITS,
    };
    pub use crate::interfaces::{DecimalDigits, Matcher};
    pub use crate::matcher::{create_from_params, DecimalMatcher, DecimalMatcherBuilder};
    pub use crate::numeric::{NumericError, ParsedDecimal};
}
