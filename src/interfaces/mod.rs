// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod decimal_digits;
mod matcher;

pub use decimal_digits::DecimalDigits;
pub use matcher::Matcher;
