// crates/access-gate-core/src/lib.rs
// ============================================================================
// Module: Access Gate Core Library
// Description: Public API surface for the access gate core.
// Purpose: Expose core types, interfaces, and the gate runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Access Gate core provides the single authorization checkpoint for a
//! content-cataloging and transcoding-task backend: role rules, package
//! ownership, group ACLs, and a hand-curated operation policy table. It is
//! backend-agnostic and integrates with the package table and the identity
//! provider through explicit interfaces rather than embedded clients.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::AccessPath;
pub use interfaces::DirectoryError;
pub use interfaces::GateAuditSink;
pub use interfaces::GateCheck;
pub use interfaces::GateDecisionEvent;
pub use interfaces::GateOutcome;
pub use interfaces::GroupDirectory;
pub use interfaces::NoopAuditSink;
pub use interfaces::ResourceStore;
pub use interfaces::StoreError;
pub use runtime::AccessGate;
pub use runtime::AccessGrant;
pub use runtime::DENIAL_MESSAGE;
pub use runtime::GateError;
pub use runtime::InMemoryResourceStore;
pub use runtime::StaticGroupDirectory;
pub use runtime::extract_auth_token;
