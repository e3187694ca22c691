// crates/access-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Access Gate Interfaces
// Description: Backend-agnostic interfaces for package lookup and group listing.
// Purpose: Define the contract surfaces the gate depends on.
// Dependencies: crate::core, async-trait, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the gate reaches its two backing services (the
//! package table and the identity provider's group directory) without
//! embedding backend-specific details, plus the audit seam that observes
//! decisions. Implementations must be request-scoped and fail closed on
//! missing or invalid data.
//!
//! ## Invariants
//! - Interface calls carry no retries; transient failures surface
//!   immediately to the gate.
//! - Implementations must be safe to call concurrently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::GroupName;
use crate::core::Operation;
use crate::core::PackageId;
use crate::core::PackageRecord;
use crate::core::UserId;

// ============================================================================
// SECTION: Resource Store
// ============================================================================

/// Package store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The package table could not be queried.
    #[error("package store lookup error: {0}")]
    Lookup(String),
}

/// Read-only access to the package table.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Fetches a package record by identifier.
    ///
    /// Returns `Ok(None)` when no record exists for `package_id`; soft-deleted
    /// records are returned as stored (visibility is the gate's decision).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the table cannot be queried.
    async fn get_package(&self, package_id: &PackageId) -> Result<Option<PackageRecord>, StoreError>;
}

#[async_trait]
impl<T: ResourceStore + ?Sized> ResourceStore for Arc<T> {
    async fn get_package(&self, package_id: &PackageId) -> Result<Option<PackageRecord>, StoreError> {
        (**self).get_package(package_id).await
    }
}

// ============================================================================
// SECTION: Group Directory
// ============================================================================

/// Group directory errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The identity provider's group listing failed.
    #[error("group directory lookup error: {0}")]
    Lookup(String),
}

/// Group membership listing for a principal.
///
/// The gate remaps every [`DirectoryError`] to a denial: an unreachable
/// directory must never widen access.
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Lists the groups the user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the directory cannot be queried.
    async fn list_groups(&self, user_id: &UserId) -> Result<BTreeSet<GroupName>, DirectoryError>;
}

#[async_trait]
impl<T: GroupDirectory + ?Sized> GroupDirectory for Arc<T> {
    async fn list_groups(&self, user_id: &UserId) -> Result<BTreeSet<GroupName>, DirectoryError> {
        (**self).list_groups(user_id).await
    }
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Access path that satisfied a granted check.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPath {
    /// The operation requires no resource-level check.
    OpenOperation,
    /// The caller holds the admin role.
    AdminRole,
    /// The caller owns the package.
    Ownership,
    /// The caller shares a group with the package ACL.
    GroupMembership,
}

impl AccessPath {
    /// Returns a stable label for the access path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenOperation => "open_operation",
            Self::AdminRole => "admin_role",
            Self::Ownership => "ownership",
            Self::GroupMembership => "group_membership",
        }
    }
}

/// Outcome of one gate decision.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Access granted through the named path.
    Granted(AccessPath),
    /// Access denied (policy denial or resource absence, conflated).
    Denied,
    /// The backing store could not be queried.
    LookupFailed,
}

impl GateOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted(_) => "granted",
            Self::Denied => "denied",
            Self::LookupFailed => "lookup_failed",
        }
    }
}

/// Check a decision applies to.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCheck {
    /// Resource-scoped operation check.
    Operation(Operation),
    /// Administrative-service check (no associated resource).
    AdminService,
}

impl GateCheck {
    /// Returns a stable label for the check.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operation(operation) => operation.as_str(),
            Self::AdminService => "admin:service",
        }
    }
}

/// Audit event emitted for every gate decision.
///
/// # Invariants
/// - Carries identifiers and stable labels only; never tokens or record
///   contents.
#[derive(Debug, Clone)]
pub struct GateDecisionEvent {
    /// Check that was performed.
    pub check: GateCheck,
    /// Principal the decision applies to.
    pub user_id: UserId,
    /// Target package, when the operation has one.
    pub package_id: Option<PackageId>,
    /// Decision outcome.
    pub outcome: GateOutcome,
}

/// Decision observer for audit logs or metrics.
///
/// Kept dependency-light so deployments can plug in their own log or metrics
/// pipeline without redesign.
pub trait GateAuditSink: Send + Sync {
    /// Records one gate decision.
    fn record_decision(&self, event: &GateDecisionEvent);
}

/// No-op audit sink.
///
/// # Invariants
/// - Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl GateAuditSink for NoopAuditSink {
    fn record_decision(&self, _event: &GateDecisionEvent) {}
}
