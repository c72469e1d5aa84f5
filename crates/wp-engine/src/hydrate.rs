//! Hydration orchestration.
//!
//! The façade over the engine components. Order matters: the timeline
//! depends on phase durations, which depend on aggregated hours, so effort
//! rolls up first, then the schedule lays out, then statuses derive. View
//! filtering happens last so client-facing callers see derived statuses
//! computed from the full collateral set.

use tracing::debug;
use wp_contracts::{Contract, HydrationContract};
use wp_core::{EngineConfig, WpError, WpResult};
use wp_models::{
    HydratedItem, HydratedPhase, HydratedWorkPackage, Item, Phase, Positioned, WorkPackage,
};

use crate::effort::EffortAggregator;
use crate::schedule::{self, PhaseSpan};
use crate::status;

/// View selection for a hydration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HydrateOptions {
    /// When true, collateral lists are filtered to published entries only.
    pub client_view: bool,
}

impl HydrateOptions {
    /// Internal/owner view: all collateral, unfiltered.
    pub fn owner() -> Self {
        Self { client_view: false }
    }

    /// External/client view: published collateral only.
    pub fn client() -> Self {
        Self { client_view: true }
    }
}

/// Runs the full hydration pipeline over one snapshot.
///
/// Pure: no wall clock, no shared state, no retries. Two runs over the same
/// snapshot produce identical results.
#[derive(Debug, Clone, Default)]
pub struct HydrationOrchestrator {
    effort: EffortAggregator,
}

impl HydrationOrchestrator {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            effort: EffortAggregator::new(config),
        }
    }

    /// Compute the enriched hierarchy for a snapshot.
    ///
    /// Fatal input problems (missing start date, negative figures, malformed
    /// hierarchy) error out before any computation; no partial result is
    /// ever returned.
    pub fn hydrate(
        &self,
        pkg: &WorkPackage,
        options: &HydrateOptions,
    ) -> WpResult<HydratedWorkPackage> {
        HydrationContract::new()
            .validate(pkg)
            .map_err(WpError::InvalidInput)?;
        let starts_on = pkg.starts_on.ok_or_else(|| {
            WpError::Internal("start date missing after contract validation".to_string())
        })?;

        debug!(
            work_package_id = pkg.id,
            phases = pkg.phases.len(),
            client_view = options.client_view,
            "hydrating work package snapshot"
        );

        // Schedule order: stable position sort, insertion order breaks ties.
        let mut ordered: Vec<&Phase> = pkg.phases.iter().collect();
        ordered.sort_by_key(|p| p.position());

        let mut spans = Vec::with_capacity(ordered.len());
        let mut staged = Vec::with_capacity(ordered.len());
        for phase in ordered {
            let items = phase
                .items
                .iter()
                .map(|item| self.hydrate_item(item, options))
                .collect::<WpResult<Vec<_>>>()?;
            let total_hours: f64 = items.iter().map(|i| i.total_hours).sum();
            let duration_days = self.effort.phase_duration(phase, total_hours)?;
            let phase_status = status::rollup(items.iter().map(|i| i.status));

            spans.push(PhaseSpan {
                phase_id: phase.id,
                position: phase.position,
                duration_days,
            });
            staged.push((phase, items, total_hours, phase_status));
        }

        let schedule = schedule::schedule_phases(starts_on, &spans)?;

        let mut phases = Vec::with_capacity(staged.len());
        for ((phase, items, total_hours, phase_status), window) in
            staged.into_iter().zip(schedule.windows.iter())
        {
            debug_assert_eq!(phase.id, window.phase_id);
            phases.push(HydratedPhase {
                id: phase.id,
                name: phase.name.clone(),
                position: phase.position,
                total_hours,
                duration_days: window.duration_days,
                starts_on: window.starts_on,
                ends_on: window.ends_on,
                status: phase_status,
                items,
            });
        }

        let items = pkg
            .items
            .iter()
            .map(|item| self.hydrate_item(item, options))
            .collect::<WpResult<Vec<_>>>()?;

        let total_hours = phases.iter().map(|p| p.total_hours).sum::<f64>()
            + items.iter().map(|i| i.total_hours).sum::<f64>();
        let total_duration_days = phases.iter().map(|p| p.duration_days).sum();
        let package_status = status::rollup(
            phases
                .iter()
                .map(|p| p.status)
                .chain(items.iter().map(|i| i.status)),
        );

        Ok(HydratedWorkPackage {
            id: pkg.id,
            subject: pkg.subject.clone(),
            contact_id: pkg.contact_id,
            starts_on,
            completes_on: schedule.completes_on,
            total_duration_days,
            total_hours,
            status: package_status,
            phases,
            items,
        })
    }

    fn hydrate_item(&self, item: &Item, options: &HydrateOptions) -> WpResult<HydratedItem> {
        let total_hours = self.effort.item_hours(item)?;
        // Status always derives from the full collateral set; the view
        // filter below only narrows what the caller gets back.
        let derived = status::item_status(&item.collateral);

        let collateral = if options.client_view {
            item.collateral
                .iter()
                .filter(|c| c.published)
                .cloned()
                .collect()
        } else {
            item.collateral.clone()
        };

        Ok(HydratedItem {
            id: item.id,
            phase_id: item.phase_id,
            label: item.label.clone(),
            quantity: item.quantity,
            hours_per_unit: item.hours_per_unit,
            unit: item.unit.clone(),
            total_hours,
            status: derived,
            collateral,
        })
    }
}
