// crates/access-gate-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Adapters
// Description: In-memory package store and static group directory.
// Purpose: Provide deterministic adapter implementations without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides simple in-memory implementations of
//! [`ResourceStore`] and [`GroupDirectory`] for tests and local demos. They
//! are not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::GroupName;
use crate::core::PackageId;
use crate::core::PackageRecord;
use crate::core::UserId;
use crate::interfaces::DirectoryError;
use crate::interfaces::GroupDirectory;
use crate::interfaces::ResourceStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Resource Store
// ============================================================================

/// In-memory package store for tests and demos.
#[derive(Debug, Default, Clone)]
pub struct InMemoryResourceStore {
    /// Package records keyed by identifier, protected by a mutex.
    packages: Arc<Mutex<BTreeMap<PackageId, PackageRecord>>>,
}

impl InMemoryResourceStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a package record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store mutex is poisoned.
    pub fn put_package(&self, record: PackageRecord) -> Result<(), StoreError> {
        let mut guard = self
            .packages
            .lock()
            .map_err(|_| StoreError::Lookup("package store mutex poisoned".to_string()))?;
        guard.insert(record.package_id.clone(), record);
        Ok(())
    }

    /// Removes a package record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store mutex is poisoned.
    pub fn remove_package(&self, package_id: &PackageId) -> Result<(), StoreError> {
        let mut guard = self
            .packages
            .lock()
            .map_err(|_| StoreError::Lookup("package store mutex poisoned".to_string()))?;
        guard.remove(package_id);
        Ok(())
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn get_package(&self, package_id: &PackageId) -> Result<Option<PackageRecord>, StoreError> {
        let guard = self
            .packages
            .lock()
            .map_err(|_| StoreError::Lookup("package store mutex poisoned".to_string()))?;
        Ok(guard.get(package_id).cloned())
    }
}

// ============================================================================
// SECTION: Static Group Directory
// ============================================================================

/// Static group directory for tests and demos.
///
/// # Invariants
/// - Users without an assignment resolve to the empty set, matching the
///   identity provider's behavior for group-less accounts.
#[derive(Debug, Default, Clone)]
pub struct StaticGroupDirectory {
    /// Group memberships keyed by user, protected by a mutex.
    memberships: Arc<Mutex<BTreeMap<UserId, BTreeSet<GroupName>>>>,
}

impl StaticGroupDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the full group set for a user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the directory mutex is poisoned.
    pub fn assign(&self, user_id: UserId, groups: BTreeSet<GroupName>) -> Result<(), DirectoryError> {
        let mut guard = self
            .memberships
            .lock()
            .map_err(|_| DirectoryError::Lookup("group directory mutex poisoned".to_string()))?;
        guard.insert(user_id, groups);
        Ok(())
    }
}

#[async_trait]
impl GroupDirectory for StaticGroupDirectory {
    async fn list_groups(&self, user_id: &UserId) -> Result<BTreeSet<GroupName>, DirectoryError> {
        let guard = self
            .memberships
            .lock()
            .map_err(|_| DirectoryError::Lookup("group directory mutex poisoned".to_string()))?;
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }
}
