//! # wp-store
//!
//! The external work-item store boundary.
//!
//! Persistence of the hierarchy is not this system's concern; the engine
//! only needs point reads and writes that return the nested snapshot. This
//! crate defines that boundary as a trait, plus an in-memory implementation
//! for tests and embedding. No database driver ships here.

use async_trait::async_trait;
use wp_core::traits::Id;
use wp_core::WpResult;
use wp_models::WorkPackage;

pub mod memory;

pub use memory::InMemoryWorkPackageStore;

/// Point reads and writes of work package hierarchies.
///
/// Implementations return the full nested snapshot (phases, items,
/// collateral) on every read; the engine operates on whatever snapshot it
/// was given and does not detect concurrent edits. Versioning is the
/// store's concern.
#[async_trait]
pub trait WorkPackageStore: Send + Sync {
    /// Find a work package by id, erring when absent.
    async fn find(&self, id: Id) -> WpResult<WorkPackage>;

    /// Find a work package by id, `None` when absent.
    async fn find_optional(&self, id: Id) -> WpResult<Option<WorkPackage>>;

    /// Insert or replace a work package hierarchy.
    async fn save(&self, pkg: WorkPackage) -> WpResult<WorkPackage>;

    /// Remove a work package hierarchy.
    async fn delete(&self, id: Id) -> WpResult<()>;

    /// Whether a work package exists.
    async fn exists(&self, id: Id) -> WpResult<bool>;
}
