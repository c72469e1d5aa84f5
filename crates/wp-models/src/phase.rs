//! Phase model.
//!
//! Phases are the ordered sub-intervals of a work package's timeline. Their
//! `position` defines the schedule sequence; an explicitly authored
//! `duration_days` always wins over the hours-derived duration.

use serde::{Deserialize, Serialize};
use validator::Validate;
use wp_core::traits::{Id, Identifiable, Positioned};

use crate::item::Item;

/// Phase entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: Id,

    /// Owning work package.
    pub work_package_id: Id,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Sequence key. Duplicates are tolerated; ordering stays stable.
    #[serde(default)]
    pub position: i32,

    /// Explicitly authored duration override, in business days.
    #[validate(range(min = 0))]
    pub duration_days: Option<i64>,

    #[serde(default)]
    pub items: Vec<Item>,
}

impl Phase {
    pub fn new(id: Id, work_package_id: Id, name: impl Into<String>, position: i32) -> Self {
        Self {
            id,
            work_package_id,
            name: name.into(),
            position,
            duration_days: None,
            items: Vec::new(),
        }
    }

    pub fn with_duration(mut self, duration_days: i64) -> Self {
        self.duration_days = Some(duration_days);
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}

impl Identifiable for Phase {
    fn id(&self) -> Id {
        self.id
    }
}

impl Positioned for Phase {
    fn position(&self) -> i32 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_builder() {
        let phase = Phase::new(1, 100, "Discovery", 1).with_duration(5);
        assert_eq!(phase.duration_days, Some(5));
        assert_eq!(phase.position(), 1);
        assert!(phase.items.is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_duration() {
        let phase = Phase::new(1, 100, "Discovery", 1).with_duration(-2);
        assert!(phase.validate().is_err());
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "id": 3,
            "workPackageId": 100,
            "name": "Build",
            "position": 2,
            "durationDays": null,
            "items": []
        }"#;

        let phase: Phase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.name, "Build");
        assert_eq!(phase.duration_days, None);
    }
}
