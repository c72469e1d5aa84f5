//! Shared work status enum.
//!
//! One six-value status set is used at every level of the hierarchy:
//! Collateral carries it directly (the only author-set status), while Item,
//! Phase, and WorkPackage statuses are derived bottom-up from it by the
//! rollup engine.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a deliverable, and by derivation of everything above
/// it in the hierarchy.
///
/// Store snapshots occasionally contain status strings outside the
/// recognized set; those decode to [`WorkStatus::Unrecognized`] rather than
/// failing the whole snapshot, and rollups treat them as `NOT_STARTED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkStatus {
    #[default]
    NotStarted,
    InProgress,
    InReview,
    ChangesNeeded,
    ChangesInProgress,
    Approved,
    #[serde(other)]
    Unrecognized,
}

impl WorkStatus {
    /// Outstanding-work precedence, worst first. The rollup returns the
    /// first of these present among the inputs; `APPROVED` requires
    /// unanimity and everything else falls back to `NOT_STARTED`.
    pub const OUTSTANDING_PRECEDENCE: [WorkStatus; 4] = [
        WorkStatus::ChangesInProgress,
        WorkStatus::ChangesNeeded,
        WorkStatus::InReview,
        WorkStatus::InProgress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "NOT_STARTED",
            WorkStatus::InProgress => "IN_PROGRESS",
            WorkStatus::InReview => "IN_REVIEW",
            WorkStatus::ChangesNeeded => "CHANGES_NEEDED",
            WorkStatus::ChangesInProgress => "CHANGES_IN_PROGRESS",
            WorkStatus::Approved => "APPROVED",
            WorkStatus::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Whether this is one of the six recognized values.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, WorkStatus::Unrecognized)
    }

    /// Collapse unrecognized values to `NOT_STARTED` for rollup purposes.
    pub fn normalized(&self) -> WorkStatus {
        match self {
            WorkStatus::Unrecognized => WorkStatus::NotStarted,
            other => *other,
        }
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
