//! # wp-engine
//!
//! The Work Package timeline and hydration engine.
//!
//! Given a hierarchy snapshot (WorkPackage → Phases → Items → Collateral),
//! the engine computes a deterministic business-day schedule, aggregates
//! effort bottom-up, and derives status at every level from the leaf-level
//! collateral facts. The whole computation is a pure function over the
//! snapshot: no wall clock, no shared state, no side effects beyond
//! `tracing` events.
//!
//! Components, leaf-first:
//! - [`calendar`]: weekend-skipping date arithmetic
//! - [`effort`]: quantity × hours rollups and the hours-to-duration rule
//! - [`schedule`]: sequential, non-overlapping phase windows
//! - [`status`]: the worst-outstanding-wins rollup ladder
//! - [`hydrate`]: the façade tying them together, with owner/client views

pub mod calendar;
pub mod effort;
pub mod hydrate;
pub mod schedule;
pub mod status;

pub use wp_core::{EngineConfig, WpError, WpResult};

pub use effort::EffortAggregator;
pub use hydrate::{HydrateOptions, HydrationOrchestrator};
pub use schedule::{PhaseSpan, PhaseWindow, Schedule};

use wp_models::{HydratedWorkPackage, WorkPackage};

/// Hydrate a snapshot with the default engine configuration.
pub fn hydrate(pkg: &WorkPackage, options: &HydrateOptions) -> WpResult<HydratedWorkPackage> {
    HydrationOrchestrator::default().hydrate(pkg, options)
}
