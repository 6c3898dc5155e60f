// ============================================================================
// Matcher Module
// Contains the decimal number validation rule
// ============================================================================

mod decimal_matcher;

pub mod factory;

pub use decimal_matcher::DecimalMatcher;
pub use factory::{create_from_params, DecimalMatcherBuilder};
