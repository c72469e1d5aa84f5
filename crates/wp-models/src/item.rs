//! Item model.
//!
//! An Item is a unit of work inside a Phase (or directly under a package),
//! carrying a quantity and an effort estimate per unit. Its status is never
//! authored; it derives from the attached collateral.

use serde::{Deserialize, Serialize};
use validator::Validate;
use wp_core::traits::{Id, Identifiable};

use crate::collateral::Collateral;

/// Item entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Id,

    /// Parent phase, or None for package-level items.
    pub phase_id: Option<Id>,

    /// Free-text label used for routing elsewhere in the platform.
    #[validate(length(min = 1, max = 255))]
    pub label: String,

    /// Units of work authored, never negative.
    #[validate(range(min = 0))]
    pub quantity: i64,

    /// Estimated effort per unit, in hours.
    #[validate(range(min = 0.0))]
    pub hours_per_unit: f64,

    /// Unit of measure, e.g. "deck" or "page".
    pub unit: String,

    #[serde(default)]
    pub collateral: Vec<Collateral>,
}

impl Item {
    pub fn new(id: Id, phase_id: Option<Id>, label: impl Into<String>) -> Self {
        Self {
            id,
            phase_id,
            label: label.into(),
            quantity: 0,
            hours_per_unit: 0.0,
            unit: String::new(),
            collateral: Vec::new(),
        }
    }

    pub fn with_effort(mut self, quantity: i64, hours_per_unit: f64) -> Self {
        self.quantity = quantity;
        self.hours_per_unit = hours_per_unit;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_collateral(mut self, collateral: Vec<Collateral>) -> Self {
        self.collateral = collateral;
        self
    }

    /// Whether the item sits directly under the package rather than a phase.
    pub fn is_package_level(&self) -> bool {
        self.phase_id.is_none()
    }
}

impl Identifiable for Item {
    fn id(&self) -> Id {
        self.id
    }
}
