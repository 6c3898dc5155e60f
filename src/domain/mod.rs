// ============================================================================
// Domain Models Module
// Configuration, error catalog and validation outcome
// ============================================================================

pub mod catalog;
pub mod config;
pub mod validation;

pub use catalog::MatcherError;
pub use config::{ConfigError, MatcherConfig, ZeroValuePolicy, DEFAULT_MAX_TOTAL_DIGITS};
pub use validation::{ValidationError, ValidationErrorKind, ValidationResult};
