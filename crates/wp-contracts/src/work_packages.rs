//! Hydration contract for work package snapshots.
//!
//! Gates every hydrate call: a snapshot that fails here produces no partial
//! result. The checks cover the fatal input errors: missing start date,
//! negative durations or effort figures, and malformed hierarchy shape
//! (items referencing phases that do not exist or are not their parent).

use std::collections::HashSet;

use wp_core::error::ValidationErrors;
use wp_core::traits::Id;
use wp_models::{Item, Phase, WorkPackage};

use crate::base::{Contract, ValidationResult};

/// Contract validating a work package snapshot before hydration.
#[derive(Debug, Default)]
pub struct HydrationContract;

impl HydrationContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_start_date(&self, pkg: &WorkPackage, errors: &mut ValidationErrors) {
        if pkg.starts_on.is_none() {
            errors.add("starts_on", "can't be blank");
        }
    }

    fn validate_phase(&self, phase: &Phase, index: usize, errors: &mut ValidationErrors) {
        if phase.name.trim().is_empty() {
            errors.add(format!("phases[{index}].name"), "can't be blank");
        }
        if let Some(duration) = phase.duration_days {
            if duration < 0 {
                errors.add(
                    format!("phases[{index}].duration_days"),
                    "must be greater than or equal to 0",
                );
            }
        }
    }

    fn validate_item(&self, item: &Item, field: &str, errors: &mut ValidationErrors) {
        if item.quantity < 0 {
            errors.add(
                format!("{field}.quantity"),
                "must be greater than or equal to 0",
            );
        }
        if !item.hours_per_unit.is_finite() {
            errors.add(format!("{field}.hours_per_unit"), "must be a number");
        } else if item.hours_per_unit < 0.0 {
            errors.add(
                format!("{field}.hours_per_unit"),
                "must be greater than or equal to 0",
            );
        }
    }

    /// Items nested under a phase must reference that phase (or nothing);
    /// package-level items may only reference a phase that exists in the
    /// package. A dangling reference means the hierarchy was assembled
    /// wrong upstream.
    fn validate_hierarchy(&self, pkg: &WorkPackage, errors: &mut ValidationErrors) {
        let phase_ids: HashSet<Id> = pkg.phases.iter().map(|p| p.id).collect();

        for (pi, phase) in pkg.phases.iter().enumerate() {
            for (ii, item) in phase.items.iter().enumerate() {
                match item.phase_id {
                    Some(id) if id != phase.id => {
                        errors.add(
                            format!("phases[{pi}].items[{ii}].phase_id"),
                            format!("references phase {id} but is nested under phase {}", phase.id),
                        );
                    }
                    _ => {}
                }
            }
        }

        for (ii, item) in pkg.items.iter().enumerate() {
            if let Some(id) = item.phase_id {
                if !phase_ids.contains(&id) {
                    errors.add(
                        format!("items[{ii}].phase_id"),
                        format!("references nonexistent phase {id}"),
                    );
                }
            }
        }
    }
}

impl Contract<WorkPackage> for HydrationContract {
    fn validate(&self, pkg: &WorkPackage) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_start_date(pkg, &mut errors);

        for (pi, phase) in pkg.phases.iter().enumerate() {
            self.validate_phase(phase, pi, &mut errors);
            for (ii, item) in phase.items.iter().enumerate() {
                self.validate_item(item, &format!("phases[{pi}].items[{ii}]"), &mut errors);
            }
        }

        for (ii, item) in pkg.items.iter().enumerate() {
            self.validate_item(item, &format!("items[{ii}]"), &mut errors);
        }

        self.validate_hierarchy(pkg, &mut errors);

        errors.into_result()
    }
}
