//! Status rollup.
//!
//! One reduction, applied at every level of the hierarchy: an Item's status
//! derives from its collateral, a Phase's from its items, a package's from
//! its phases and package-level items. The rule is worst-outstanding-work
//! wins, with APPROVED only on unanimous consent; a single regressed
//! artifact overrides any number of approved ones.

use tracing::warn;
use wp_models::{Collateral, WorkStatus};

/// Reduce child statuses to a parent status.
///
/// Empty input means nothing has happened yet: NOT_STARTED. Otherwise the
/// outstanding-work precedence table is scanned in order and the first
/// status present wins; APPROVED requires every input to be APPROVED, and
/// anything else falls back to NOT_STARTED. Unrecognized inputs normalize
/// to NOT_STARTED, so they also block unanimous approval.
pub fn rollup<I>(statuses: I) -> WorkStatus
where
    I: IntoIterator<Item = WorkStatus>,
{
    let statuses: Vec<WorkStatus> = statuses.into_iter().map(|s| s.normalized()).collect();
    if statuses.is_empty() {
        return WorkStatus::NotStarted;
    }

    for candidate in WorkStatus::OUTSTANDING_PRECEDENCE {
        if statuses.contains(&candidate) {
            return candidate;
        }
    }

    if statuses.iter().all(|s| *s == WorkStatus::Approved) {
        WorkStatus::Approved
    } else {
        WorkStatus::NotStarted
    }
}

/// Derive an item's status from its collateral set.
///
/// Unrecognized collateral statuses are warned about here rather than
/// dropped silently; the rollup treats them as NOT_STARTED.
pub fn item_status(collateral: &[Collateral]) -> WorkStatus {
    for entry in collateral {
        if !entry.status.is_recognized() {
            warn!(
                collateral_id = entry.id,
                item_id = entry.item_id,
                "unrecognized collateral status, treating as NOT_STARTED"
            );
        }
    }
    rollup(collateral.iter().map(|c| c.status))
}
