// ============================================================================
// Validation Result
// Ordered collection of errors produced by one matcher evaluation
// ============================================================================

use super::catalog::MatcherError;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationErrorKind {
    /// The value does not have the shape the field requires
    InvalidType,
}

/// A single validation error
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub code: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Outcome of validating one value.
///
/// Valid iff no error was added. A decimal matcher reports at most two
/// errors, which stay inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    errors: SmallVec<[ValidationError; 2]>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error of kind `InvalidType`
    pub fn add_invalid_type_error(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.errors.push(ValidationError {
            kind: ValidationErrorKind::InvalidType,
            code: code.into(),
            message: message.into(),
        });
    }

    /// Append a catalog error
    pub fn add_error(&mut self, error: MatcherError) {
        self.add_invalid_type_error(error.code(), error.message());
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Error codes in the order they were added
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }

    /// Check whether an error with the given code was reported.
    ///
    /// Consumer-side helper for callers that react to one specific code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// `Ok(())` if valid, otherwise the result itself as the error
    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationResult {}
