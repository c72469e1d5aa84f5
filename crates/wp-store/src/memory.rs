//! In-memory work package store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use wp_core::traits::Id;
use wp_core::{WpError, WpResult};
use wp_models::WorkPackage;

use crate::WorkPackageStore;

/// Map-backed store for tests and embedding.
///
/// Reader/writer locked so concurrent hydration services can read the same
/// package in parallel.
#[derive(Debug, Default)]
pub struct InMemoryWorkPackageStore {
    packages: RwLock<HashMap<Id, WorkPackage>>,
}

impl InMemoryWorkPackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a set of packages.
    pub fn with_packages(packages: impl IntoIterator<Item = WorkPackage>) -> Self {
        let map = packages.into_iter().map(|p| (p.id, p)).collect();
        Self {
            packages: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.packages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.read().is_empty()
    }
}

#[async_trait]
impl WorkPackageStore for InMemoryWorkPackageStore {
    async fn find(&self, id: Id) -> WpResult<WorkPackage> {
        self.packages
            .read()
            .get(&id)
            .cloned()
            .ok_or(WpError::NotFound {
                entity: "WorkPackage",
                id,
            })
    }

    async fn find_optional(&self, id: Id) -> WpResult<Option<WorkPackage>> {
        Ok(self.packages.read().get(&id).cloned())
    }

    async fn save(&self, pkg: WorkPackage) -> WpResult<WorkPackage> {
        self.packages.write().insert(pkg.id, pkg.clone());
        Ok(pkg)
    }

    async fn delete(&self, id: Id) -> WpResult<()> {
        match self.packages.write().remove(&id) {
            Some(_) => Ok(()),
            None => Err(WpError::NotFound {
                entity: "WorkPackage",
                id,
            }),
        }
    }

    async fn exists(&self, id: Id) -> WpResult<bool> {
        Ok(self.packages.read().contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn package(id: Id) -> WorkPackage {
        WorkPackage::new(id, format!("Package {id}"))
            .starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = InMemoryWorkPackageStore::new();
        store.save(package(1)).await.unwrap();

        let found = store.find(1).await.unwrap();
        assert_eq!(found.subject, "Package 1");
        assert!(store.exists(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_missing_errs() {
        let store = InMemoryWorkPackageStore::new();
        let err = store.find(99).await.unwrap_err();
        assert!(matches!(
            err,
            WpError::NotFound {
                entity: "WorkPackage",
                id: 99
            }
        ));
        assert_eq!(store.find_optional(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_replaces() {
        let store = InMemoryWorkPackageStore::new();
        store.save(package(1)).await.unwrap();

        let mut updated = package(1);
        updated.subject = "Renamed".to_string();
        store.save(updated).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.find(1).await.unwrap().subject, "Renamed");
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryWorkPackageStore::with_packages([package(1), package(2)]);
        store.delete(1).await.unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.delete(1).await.is_err());
    }
}
