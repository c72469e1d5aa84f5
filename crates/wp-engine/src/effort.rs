//! Effort aggregation.
//!
//! Rolls item-level effort (quantity × hours-per-unit) up through the
//! hierarchy and derives a phase duration from hours when no explicit
//! duration was authored.

use wp_core::error::ValidationErrors;
use wp_core::{EngineConfig, WpError, WpResult};
use wp_models::{Item, Phase, WorkPackage};

/// Aggregates effort figures bottom-up.
#[derive(Debug, Clone, Default)]
pub struct EffortAggregator {
    config: EngineConfig,
}

impl EffortAggregator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Total hours for one item: quantity × hours-per-unit.
    ///
    /// Negative figures are invalid input, never clamped.
    pub fn item_hours(&self, item: &Item) -> WpResult<f64> {
        let mut errors = ValidationErrors::new();
        if item.quantity < 0 {
            errors.add("quantity", "must be greater than or equal to 0");
        }
        if !item.hours_per_unit.is_finite() || item.hours_per_unit < 0.0 {
            errors.add("hours_per_unit", "must be greater than or equal to 0");
        }
        errors.into_result()?;

        Ok(item.quantity as f64 * item.hours_per_unit)
    }

    /// Sum of child item hours for a phase.
    pub fn phase_hours(&self, phase: &Phase) -> WpResult<f64> {
        let mut total = 0.0;
        for item in &phase.items {
            total += self.item_hours(item)?;
        }
        Ok(total)
    }

    /// Duration of a phase in business days.
    ///
    /// An explicitly authored duration wins verbatim. Otherwise the duration
    /// derives from hours: `ceil(total_hours / hours_per_day)`, with a floor
    /// of 0; a zero-effort phase consumes no schedule time.
    pub fn phase_duration(&self, phase: &Phase, total_hours: f64) -> WpResult<i64> {
        if let Some(duration) = phase.duration_days {
            if duration < 0 {
                let mut errors = ValidationErrors::new();
                errors.add("duration_days", "must be greater than or equal to 0");
                return Err(WpError::InvalidInput(errors));
            }
            return Ok(duration);
        }

        self.config.validate().map_err(WpError::InvalidInput)?;
        if total_hours <= 0.0 {
            return Ok(0);
        }
        Ok((total_hours / self.config.hours_per_day).ceil() as i64)
    }

    /// Package total: phase hours plus package-level item hours.
    pub fn package_hours(&self, pkg: &WorkPackage) -> WpResult<f64> {
        let mut total = 0.0;
        for phase in &pkg.phases {
            total += self.phase_hours(phase)?;
        }
        for item in &pkg.items {
            total += self.item_hours(item)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator() -> EffortAggregator {
        EffortAggregator::default()
    }

    #[test]
    fn test_item_hours() {
        let item = Item::new(1, None, "Decks").with_effort(3, 4.0);
        assert_eq!(aggregator().item_hours(&item).unwrap(), 12.0);
    }

    #[test]
    fn test_item_hours_rejects_negative() {
        let item = Item::new(1, None, "Bad").with_effort(-1, 4.0);
        assert!(matches!(
            aggregator().item_hours(&item),
            Err(WpError::InvalidInput(_))
        ));

        let item = Item::new(1, None, "Bad").with_effort(1, -4.0);
        assert!(aggregator().item_hours(&item).is_err());
    }

    #[test]
    fn test_phase_hours_sums_items() {
        let phase = Phase::new(1, 1, "Build", 1).with_items(vec![
            Item::new(10, Some(1), "Decks").with_effort(2, 3.0),
            Item::new(11, Some(1), "Pages").with_effort(4, 0.5),
        ]);
        assert_eq!(aggregator().phase_hours(&phase).unwrap(), 8.0);
    }

    #[test]
    fn test_explicit_duration_wins() {
        let phase = Phase::new(1, 1, "Build", 1).with_duration(10);
        // 4 hours would derive to 1 day, but the author said 10
        assert_eq!(aggregator().phase_duration(&phase, 4.0).unwrap(), 10);
    }

    #[test]
    fn test_derived_duration_rounds_up() {
        let phase = Phase::new(1, 1, "Build", 1);
        assert_eq!(aggregator().phase_duration(&phase, 12.0).unwrap(), 2);
        assert_eq!(aggregator().phase_duration(&phase, 8.0).unwrap(), 1);
        assert_eq!(aggregator().phase_duration(&phase, 0.5).unwrap(), 1);
    }

    #[test]
    fn test_zero_hours_zero_duration() {
        let phase = Phase::new(1, 1, "Empty", 1);
        assert_eq!(aggregator().phase_duration(&phase, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_negative_explicit_duration_rejected() {
        let phase = Phase::new(1, 1, "Build", 1).with_duration(-1);
        assert!(aggregator().phase_duration(&phase, 0.0).is_err());
    }

    #[test]
    fn test_custom_hours_per_day() {
        let aggregator = EffortAggregator::new(EngineConfig::new(6.0));
        let phase = Phase::new(1, 1, "Build", 1);
        assert_eq!(aggregator.phase_duration(&phase, 12.0).unwrap(), 2);
        assert_eq!(aggregator.phase_duration(&phase, 13.0).unwrap(), 3);
    }

    #[test]
    fn test_package_hours_includes_loose_items() {
        let pkg = WorkPackage::new(1, "ACME")
            .with_phases(vec![Phase::new(10, 1, "Build", 1)
                .with_items(vec![Item::new(100, Some(10), "Decks").with_effort(2, 3.0)])])
            .with_items(vec![Item::new(200, None, "Brief").with_effort(1, 2.0)]);

        assert_eq!(aggregator().package_hours(&pkg).unwrap(), 8.0);
    }
}
