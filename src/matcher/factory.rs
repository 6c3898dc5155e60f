// ============================================================================
// Matcher Factory
// Creates decimal matchers from positional parameters or a fluent builder
// ============================================================================

use crate::domain::{ConfigError, MatcherConfig, ZeroValuePolicy};
use crate::interfaces::Matcher;
use crate::matcher::DecimalMatcher;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a boxed matcher from positional parameters
///
/// # Arguments
/// * `params` - 0 to 2 limits: maximum digits, then maximum decimal places
///
/// # Returns
/// * `Result<Box<dyn Matcher>, ConfigError>` - Configured matcher or error
///
/// # Example
/// ```
/// use decimal_matcher::matcher::factory::create_from_params;
///
/// let matcher = create_from_params(&[5, 2]).unwrap();
/// assert!(matcher.match_value(Some("12.3")).is_valid());
/// assert!(create_from_params(&[1, 2, 3]).is_err());
/// ```
pub fn create_from_params(params: &[u32]) -> Result<Box<dyn Matcher>, ConfigError> {
    let matcher = DecimalMatcher::from_params(params)?;
    tracing::debug!("Created decimal matcher: {:?}", matcher.config());
    Ok(Box::new(matcher))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for decimal matchers with a fluent API
///
/// # Example
/// ```
/// use decimal_matcher::matcher::DecimalMatcherBuilder;
///
/// let matcher = DecimalMatcherBuilder::new()
///     .max_digits(5)
///     .max_decimal_places(2)
///     .build()
///     .unwrap();
///
/// assert!(matcher.match_str("123.45").is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecimalMatcherBuilder {
    max_digits: Option<u32>,
    max_decimal_places: Option<u32>,
    zero_policy: ZeroValuePolicy,
}

impl DecimalMatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum number of digits in total
    pub fn max_digits(mut self, n: u32) -> Self {
        self.max_digits = Some(n);
        self
    }

    /// Set maximum number of decimal places (requires `max_digits`)
    pub fn max_decimal_places(mut self, d: u32) -> Self {
        self.max_decimal_places = Some(d);
        self
    }

    /// Set how zero values are treated
    pub fn zero_policy(mut self, policy: ZeroValuePolicy) -> Self {
        self.zero_policy = policy;
        self
    }

    /// Build the matcher
    ///
    /// # Errors
    /// Returns `DecimalPlacesWithoutDigits` if only decimal places were set.
    pub fn build(self) -> Result<DecimalMatcher, ConfigError> {
        let config = match (self.max_digits, self.max_decimal_places) {
            (None, None) => MatcherConfig::Default,
            (Some(n), None) => MatcherConfig::MaxDigits(n),
            (Some(n), Some(d)) => MatcherConfig::MaxDigitsAndPlaces(n, d),
            (None, Some(_)) => return Err(ConfigError::DecimalPlacesWithoutDigits),
        };

        Ok(DecimalMatcher::new(config).with_zero_policy(self.zero_policy))
    }
}
