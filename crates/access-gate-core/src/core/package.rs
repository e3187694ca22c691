// crates/access-gate-core/src/core/package.rs
// ============================================================================
// Module: Package Record
// Description: The package/task record read from the package table.
// Purpose: Carry ownership, group ACL, and soft-delete state for gate checks.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A package record is the resource being accessed. The gate reads only
//! `owner`, `groups`, and `deleted`; the remaining fields are handler-facing
//! metadata echoed back to callers so a successful gate check avoids a
//! duplicate fetch. Records are read-only from the gate's perspective.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::GroupName;
use crate::core::identifiers::PackageId;
use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Package Record
// ============================================================================

/// Package/task record owned by the external package table.
///
/// # Invariants
/// - A record with `deleted == true` is invisible to every operation except
///   the deletion-exempt set (cascade cleanup).
/// - `groups` lists group names with read/use access; absent on the wire
///   means empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Unique package identifier.
    pub package_id: PackageId,
    /// User identifier of the creator.
    pub owner: UserId,
    /// Group names with read/use access to the package.
    #[serde(default)]
    pub groups: Vec<GroupName>,
    /// Soft-delete flag.
    #[serde(default)]
    pub deleted: bool,
    /// Display name, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp as stored, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp as stored, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PackageRecord {
    /// Creates a record with the fields the gate evaluates; metadata is unset.
    #[must_use]
    pub fn new(package_id: impl Into<PackageId>, owner: impl Into<UserId>) -> Self {
        Self {
            package_id: package_id.into(),
            owner: owner.into(),
            groups: Vec::new(),
            deleted: false,
            name: None,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Replaces the group ACL.
    #[must_use]
    pub fn with_groups(mut self, groups: Vec<GroupName>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the soft-delete flag.
    #[must_use]
    pub const fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Returns `true` when the record's group ACL intersects `groups`.
    #[must_use]
    pub fn shares_group_with(&self, groups: &BTreeSet<GroupName>) -> bool {
        self.groups.iter().any(|group| groups.contains(group))
    }
}
