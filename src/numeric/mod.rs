// ============================================================================
// Numeric Module
// Arbitrary-precision decimal parsing for digit-count validation
// ============================================================================
//
// This module provides:
// - ParsedDecimal: normalised decimal value parsed from text
//   (decimal, exponential, `_`-separated and 0x/0o/0b radix notation)
// - NumericError: Error types for parsing and conversion
//
// Design principles:
// - No floating-point operations
// - Parsing returns Result (no panics)
// - No upper bound on digit count; values wider than rust_decimal survive
// - ParsedDecimal::to_decimal is a boundary helper for callers that store
//   accepted values as rust_decimal::Decimal; the matcher never converts

mod errors;
mod parsed_decimal;

pub use errors::{NumericError, NumericResult};
pub use parsed_decimal::{ParsedDecimal, MAX_BINARY_EXPONENT, MAX_EXPONENT, MIN_EXPONENT};
