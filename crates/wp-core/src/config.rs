//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;

/// Tunables for the timeline engine.
///
/// Passed explicitly to the components that need it; the engine never reads
/// ambient environment state (including wall-clock time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Working hours that make up one business day. Divisor in the
    /// hours-to-duration rule when a phase has no explicit duration.
    pub hours_per_day: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { hours_per_day: 8.0 }
    }
}

impl EngineConfig {
    pub fn new(hours_per_day: f64) -> Self {
        Self { hours_per_day }
    }

    /// Reject configurations the duration rule cannot divide by.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.hours_per_day.is_finite() || self.hours_per_day <= 0.0 {
            errors.add("hours_per_day", "must be a positive number");
        }
        errors.into_result()
    }
}
