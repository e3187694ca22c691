// crates/access-gate-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared test utilities and fixtures for gate tests.
// Purpose: Provide reusable tickets, records, and instrumented adapters.
// Dependencies: access-gate-core
// ============================================================================

//! ## Overview
//! This module provides shared tickets, package records, and instrumented
//! store/directory implementations for use across the gate test files.
//!
//! Security posture: fixtures are designed to exercise the denial branches
//! and validate fail-closed behavior under backend failures.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::unwrap_in_result,
    reason = "Test fixtures favor direct unwraps for setup clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use access_gate_core::AuthStatus;
use access_gate_core::DirectoryError;
use access_gate_core::GateAuditSink;
use access_gate_core::GateDecisionEvent;
use access_gate_core::GroupDirectory;
use access_gate_core::GroupName;
use access_gate_core::PackageId;
use access_gate_core::PackageRecord;
use access_gate_core::ResourceStore;
use access_gate_core::StoreError;
use access_gate_core::Ticket;
use access_gate_core::UserId;
use async_trait::async_trait;

// ============================================================================
// SECTION: Ticket Fixtures
// ============================================================================

/// Authorized member ticket.
pub fn member_ticket(user: &str) -> Ticket {
    Ticket::new(user, AuthStatus::Authorized, "member")
}

/// Authorized admin ticket.
pub fn admin_ticket(user: &str) -> Ticket {
    Ticket::new(user, AuthStatus::Authorized, "Admin")
}

/// Unauthorized ticket.
pub fn unauthorized_ticket(user: &str) -> Ticket {
    Ticket::new(user, AuthStatus::Unauthorized, "member")
}

// ============================================================================
// SECTION: Record Fixtures
// ============================================================================

/// Package record owned by `owner` with the given group ACL.
pub fn package_with_groups(id: &str, owner: &str, groups: &[&str]) -> PackageRecord {
    PackageRecord::new(id, owner).with_groups(groups.iter().map(|name| GroupName::from(*name)).collect())
}

/// Group set from string slices.
pub fn group_set(groups: &[&str]) -> BTreeSet<GroupName> {
    groups.iter().map(|name| GroupName::from(*name)).collect()
}

// ============================================================================
// SECTION: Instrumented Adapters
// ============================================================================

/// Store wrapper that counts reads, for the open-operation bypass property.
pub struct CountingStore<S> {
    /// Wrapped store.
    pub inner: S,
    /// Number of `get_package` calls observed.
    pub reads: AtomicUsize,
}

impl<S> CountingStore<S> {
    /// Wraps a store with a zeroed read counter.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    /// Returns the number of reads observed so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: ResourceStore> ResourceStore for CountingStore<S> {
    async fn get_package(&self, package_id: &PackageId) -> Result<Option<PackageRecord>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_package(package_id).await
    }
}

/// Store that always fails, for lookup-error classification tests.
pub struct FailingStore;

#[async_trait]
impl ResourceStore for FailingStore {
    async fn get_package(&self, _package_id: &PackageId) -> Result<Option<PackageRecord>, StoreError> {
        Err(StoreError::Lookup("table unreachable".to_string()))
    }
}

/// Directory that always fails, for fail-closed directory tests.
pub struct FailingDirectory;

#[async_trait]
impl GroupDirectory for FailingDirectory {
    async fn list_groups(&self, _user_id: &UserId) -> Result<BTreeSet<GroupName>, DirectoryError> {
        Err(DirectoryError::Lookup("directory unreachable".to_string()))
    }
}

// ============================================================================
// SECTION: Recording Audit Sink
// ============================================================================

/// Audit sink that records (check, outcome) label pairs.
#[derive(Default)]
pub struct RecordingSink {
    /// Observed label pairs in decision order.
    pub events: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded label pairs.
    pub fn labels(&self) -> Vec<(String, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl GateAuditSink for RecordingSink {
    fn record_decision(&self, event: &GateDecisionEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.check.as_str().to_string(), event.outcome.as_str().to_string()));
    }
}
