//! Enriched hierarchy returned by a hydration run.
//!
//! These are the output counterparts of the raw snapshot structs. Every
//! derived field is present and non-optional; a value of this type always
//! represents a fully computed hierarchy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wp_core::traits::Id;

use crate::collateral::Collateral;
use crate::status::WorkStatus;

/// Item with effort and status computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydratedItem {
    pub id: Id,
    pub phase_id: Option<Id>,
    pub label: String,
    pub quantity: i64,
    pub hours_per_unit: f64,
    pub unit: String,

    /// quantity × hours_per_unit.
    pub total_hours: f64,

    /// Derived from the full collateral set, regardless of view filtering.
    pub status: WorkStatus,

    /// All collateral in owner view; published entries only in client view.
    pub collateral: Vec<Collateral>,
}

/// Phase with aggregation, schedule window, and status computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydratedPhase {
    pub id: Id,
    pub name: String,
    pub position: i32,

    /// Sum of child item hours.
    pub total_hours: f64,

    /// Explicit override when authored, else derived from hours.
    pub duration_days: i64,

    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,

    pub status: WorkStatus,

    pub items: Vec<HydratedItem>,
}

/// Fully computed work package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydratedWorkPackage {
    pub id: Id,
    pub subject: String,
    pub contact_id: Option<Id>,

    pub starts_on: NaiveDate,
    pub completes_on: NaiveDate,

    /// Sum of phase durations, in business days.
    pub total_duration_days: i64,

    /// Phase hours plus package-level item hours.
    pub total_hours: f64,

    pub status: WorkStatus,

    pub phases: Vec<HydratedPhase>,

    /// Package-level items.
    pub items: Vec<HydratedItem>,
}
