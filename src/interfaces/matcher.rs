// ============================================================================
// Matcher Interface
// Defines the contract for single-field validation rules
// ============================================================================

use crate::domain::ValidationResult;

/// Strategy pattern interface for validation rules.
///
/// A matcher evaluates one field value and reports every rule it violates.
/// Invalid input is never an `Err`: callers inspect the returned result.
pub trait Matcher: Send + Sync {
    /// Validate a value. `None` stands for an absent (null) value.
    fn match_value(&self, value: Option<&str>) -> ValidationResult;

    /// Get the matcher name for logging
    fn name(&self) -> &str;

    /// Validate several values, one result per value in input order
    fn match_all<'a, I>(&self, values: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = Option<&'a str>>,
        Self: Sized,
    {
        values.into_iter().map(|v| self.match_value(v)).collect()
    }
}
