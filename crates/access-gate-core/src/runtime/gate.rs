// crates/access-gate-core/src/runtime/gate.rs
// ============================================================================
// Module: Access Gate
// Description: The single authorization checkpoint for resource-scoped calls.
// Purpose: Decide whether a principal may perform an operation on a package.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! The access gate combines role rules, ownership, group ACLs, and the
//! operation policy table into one ordered, short-circuiting decision. Every
//! resource-scoped handler calls [`AccessGate::validate`] before doing any
//! work; administrative handlers with no target resource call
//! [`AccessGate::validate_admin_access`].
//!
//! ## Invariants
//! - At most one store read and at most one directory read per decision,
//!   performed sequentially; no retries, no shared mutable state.
//! - Every denial carries the identical message: an unauthorized caller must
//!   not be able to distinguish "exists but hidden" from "does not exist".
//! - A group-directory failure denies; it is never surfaced as a lookup
//!   failure (the directory must fail closed).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::Operation;
use crate::core::PackageId;
use crate::core::PackageRecord;
use crate::core::Ticket;
use crate::interfaces::AccessPath;
use crate::interfaces::GateAuditSink;
use crate::interfaces::GateCheck;
use crate::interfaces::GateDecisionEvent;
use crate::interfaces::GateOutcome;
use crate::interfaces::GroupDirectory;
use crate::interfaces::ResourceStore;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Uniform message returned by every denial path.
///
/// Deliberately information-minimizing: it does not reveal whether the
/// package exists, is deleted, or is merely hidden from the caller.
pub const DENIAL_MESSAGE: &str = "resource not found or not authorized";

/// Gate decision errors.
///
/// # Invariants
/// - [`GateError::Unauthorized`] conflates policy denial and resource
///   absence by design; only infrastructure failures are distinguishable.
#[derive(Debug, Error)]
pub enum GateError {
    /// The caller is not entitled, or no visible resource exists.
    #[error("{}", DENIAL_MESSAGE)]
    Unauthorized,
    /// The package table could not be queried.
    #[error("access check lookup failed: {0}")]
    LookupFailed(String),
}

impl GateError {
    /// Returns the HTTP-equivalent status for the error.
    ///
    /// Denials map to 404 so that unauthorized callers cannot distinguish a
    /// hidden package from a missing one; lookup failures map to 502.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Unauthorized => 404,
            Self::LookupFailed(_) => 502,
        }
    }
}

// ============================================================================
// SECTION: Access Grant
// ============================================================================

/// Successful gate decision.
///
/// # Invariants
/// - `package` is `Some` exactly when the operation required a fetch (open
///   operations grant without one).
#[derive(Debug, Clone)]
pub struct AccessGrant {
    /// Access path that satisfied the check.
    pub path: AccessPath,
    /// The fetched record, returned so callers avoid a duplicate read.
    pub package: Option<PackageRecord>,
}

// ============================================================================
// SECTION: Access Gate
// ============================================================================

/// The authorization checkpoint shared by every resource-scoped handler.
///
/// Stores are injected at construction time and scoped to process lifetime;
/// the gate itself holds no mutable state and is safe to share across
/// concurrent requests.
pub struct AccessGate<S, D> {
    /// Package table access.
    store: S,
    /// Identity-provider group listing.
    directory: D,
    /// Optional decision observer.
    audit: Option<Arc<dyn GateAuditSink>>,
}

impl<S, D> AccessGate<S, D>
where
    S: ResourceStore,
    D: GroupDirectory,
{
    /// Creates a gate over the given store and directory.
    #[must_use]
    pub const fn new(store: S, directory: D) -> Self {
        Self {
            store,
            directory,
            audit: None,
        }
    }

    /// Attaches an audit sink that observes every decision.
    #[must_use]
    pub fn with_audit_sink(mut self, sink: Arc<dyn GateAuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Validates that the ticket may perform `operation` on `package_id`.
    ///
    /// Checks run in order and short-circuit: open-operation bypass, record
    /// fetch, base eligibility (auth status, existence, soft-delete), then
    /// admin role, ownership, and finally group membership for
    /// group-eligible operations. The fetched record is returned on success
    /// so the caller avoids a second read.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::LookupFailed`] when the package table cannot be
    /// queried, and [`GateError::Unauthorized`] for every other failure,
    /// with one uniform message across all denial branches.
    pub async fn validate(
        &self,
        package_id: Option<&PackageId>,
        ticket: &Ticket,
        operation: Operation,
    ) -> Result<AccessGrant, GateError> {
        if operation.is_open() {
            return Ok(self.grant(GateCheck::Operation(operation), ticket, None, AccessPath::OpenOperation));
        }

        // A resource-scoped operation without a target is a caller bug; deny
        // without touching the store.
        let Some(package_id) = package_id else {
            return Err(self.deny(GateCheck::Operation(operation), ticket, None));
        };

        let fetched = match self.store.get_package(package_id).await {
            Ok(fetched) => fetched,
            Err(err) => {
                self.record(GateCheck::Operation(operation), ticket, Some(package_id), GateOutcome::LookupFailed);
                return Err(GateError::LookupFailed(err.to_string()));
            }
        };

        if !ticket.is_authorized() {
            return Err(self.deny(GateCheck::Operation(operation), ticket, Some(package_id)));
        }
        let Some(record) = fetched else {
            return Err(self.deny(GateCheck::Operation(operation), ticket, Some(package_id)));
        };
        if record.deleted && !operation.is_deletion_exempt() {
            return Err(self.deny(GateCheck::Operation(operation), ticket, Some(package_id)));
        }

        if ticket.is_admin() {
            return Ok(self.grant(GateCheck::Operation(operation), ticket, Some(record), AccessPath::AdminRole));
        }
        if record.owner == ticket.user_id {
            return Ok(self.grant(GateCheck::Operation(operation), ticket, Some(record), AccessPath::Ownership));
        }

        if operation.is_group_eligible() {
            // A directory failure stays a denial: an unreachable directory
            // must never widen access.
            match self.directory.list_groups(&ticket.user_id).await {
                Ok(groups) if record.shares_group_with(&groups) => {
                    return Ok(self.grant(
                        GateCheck::Operation(operation),
                        ticket,
                        Some(record),
                        AccessPath::GroupMembership,
                    ));
                }
                Ok(_) | Err(_) => {
                    return Err(self.deny(GateCheck::Operation(operation), ticket, Some(package_id)));
                }
            }
        }

        Err(self.deny(GateCheck::Operation(operation), ticket, Some(package_id)))
    }

    /// Validates that the ticket may use administrative-only services.
    ///
    /// No resource fetch: the check is authorized status plus the admin role.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Unauthorized`] unless the ticket is authorized
    /// and carries the admin role.
    pub async fn validate_admin_access(&self, ticket: &Ticket) -> Result<(), GateError> {
        if ticket.is_authorized() && ticket.is_admin() {
            self.record(GateCheck::AdminService, ticket, None, GateOutcome::Granted(AccessPath::AdminRole));
            Ok(())
        } else {
            Err(self.deny(GateCheck::AdminService, ticket, None))
        }
    }

    /// Emits a grant event and builds the grant.
    fn grant(
        &self,
        check: GateCheck,
        ticket: &Ticket,
        package: Option<PackageRecord>,
        path: AccessPath,
    ) -> AccessGrant {
        let package_id = package.as_ref().map(|record| &record.package_id);
        self.record(check, ticket, package_id, GateOutcome::Granted(path));
        AccessGrant {
            path,
            package,
        }
    }

    /// Emits a denial event and builds the uniform denial error.
    fn deny(&self, check: GateCheck, ticket: &Ticket, package_id: Option<&PackageId>) -> GateError {
        self.record(check, ticket, package_id, GateOutcome::Denied);
        GateError::Unauthorized
    }

    /// Forwards one decision to the audit sink, when attached.
    fn record(
        &self,
        check: GateCheck,
        ticket: &Ticket,
        package_id: Option<&PackageId>,
        outcome: GateOutcome,
    ) {
        if let Some(sink) = &self.audit {
            sink.record_decision(&GateDecisionEvent {
                check,
                user_id: ticket.user_id.clone(),
                package_id: package_id.cloned(),
                outcome,
            });
        }
    }
}
