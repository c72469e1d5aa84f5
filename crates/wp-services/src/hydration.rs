//! Hydration service.

use tracing::info;
use wp_core::traits::Id;
use wp_core::{EngineConfig, WpResult};
use wp_engine::{HydrateOptions, HydrationOrchestrator};
use wp_models::HydratedWorkPackage;
use wp_store::WorkPackageStore;

/// Which projection of the hierarchy the caller gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Internal callers: all collateral, unfiltered.
    #[default]
    Owner,
    /// External callers: published collateral only.
    Client,
}

impl View {
    fn options(self) -> HydrateOptions {
        match self {
            View::Owner => HydrateOptions::owner(),
            View::Client => HydrateOptions::client(),
        }
    }
}

/// Loads a snapshot from the store and runs the engine over it.
///
/// No retries: the computation is deterministic, so re-running over
/// unchanged input reproduces the same result (or the same error).
pub struct HydrationService<S> {
    store: S,
    orchestrator: HydrationOrchestrator,
}

impl<S: WorkPackageStore> HydrationService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            orchestrator: HydrationOrchestrator::new(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load and hydrate one work package.
    pub async fn hydrated(&self, id: Id, view: View) -> WpResult<HydratedWorkPackage> {
        let pkg = self.store.find(id).await?;
        info!(work_package_id = id, view = ?view, "hydrating work package");
        self.orchestrator.hydrate(&pkg, &view.options())
    }
}
