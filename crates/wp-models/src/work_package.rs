//! Work Package model.
//!
//! The top-level schedulable unit: an author-set start date, ordered phases,
//! and any items that sit directly under the package instead of a phase.
//! Everything derived (completion date, totals, rollup status) lives on
//! [`crate::hydrated::HydratedWorkPackage`], never here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;
use wp_core::traits::{Id, Identifiable};

use crate::item::Item;
use crate::phase::Phase;

/// Work package entity as the work-item store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkPackage {
    pub id: Id,

    #[validate(length(min = 1, max = 255))]
    pub subject: String,

    /// Owning CRM contact. Foreign attribute, consumed but never resolved
    /// at this layer.
    pub contact_id: Option<Id>,

    /// Author-set start date. Required to schedule; its absence is a fatal
    /// input error at hydration time.
    pub starts_on: Option<NaiveDate>,

    #[serde(default)]
    pub phases: Vec<Phase>,

    /// Items not grouped under any phase.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl WorkPackage {
    pub fn new(id: Id, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
            contact_id: None,
            starts_on: None,
            phases: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn starting(mut self, starts_on: NaiveDate) -> Self {
        self.starts_on = Some(starts_on);
        self
    }

    pub fn with_phases(mut self, phases: Vec<Phase>) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Whether the package carries no phases and no package-level items.
    /// Not an error: such packages hydrate to a zero-duration, zero-hour
    /// result.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty() && self.items.is_empty()
    }
}

impl Identifiable for WorkPackage {
    fn id(&self) -> Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_work_package() {
        let pkg = WorkPackage::new(1, "ACME onboarding");
        assert_eq!(pkg.subject, "ACME onboarding");
        assert!(pkg.starts_on.is_none());
        assert!(pkg.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let pkg = WorkPackage::new(1, "ACME onboarding")
            .starting(start)
            .with_phases(vec![Phase::new(10, 1, "Discovery", 1)]);

        assert_eq!(pkg.starts_on, Some(start));
        assert!(!pkg.is_empty());
    }

    #[test]
    fn test_wire_shape_round_trip() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let pkg = WorkPackage::new(7, "Renewal push").starting(start);

        let json = serde_json::to_string(&pkg).unwrap();
        assert!(json.contains("\"startsOn\":\"2024-03-04\""));

        let back: WorkPackage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pkg);
    }
}
