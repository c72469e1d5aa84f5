//! Base contract trait.

use wp_core::error::ValidationErrors;

/// Result of a contract validation.
pub type ValidationResult = Result<(), ValidationErrors>;

/// Trait for contract validation.
///
/// Implementations collect every violation rather than short-circuiting on
/// the first.
pub trait Contract<T> {
    fn validate(&self, entity: &T) -> ValidationResult;
}
