// crates/access-gate-core/src/core/mod.rs
// ============================================================================
// Module: Access Gate Core Types
// Description: Canonical tickets, package records, and operation policy table.
// Purpose: Provide stable, serializable types for gate decisions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the authorization ticket, the package record, the opaque
//! identifiers they share, and the operation classification table. These
//! types are the canonical source of truth for every gate decision and for
//! the handler-facing API surfaces derived from them.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod operation;
pub mod package;
pub mod ticket;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::GroupName;
pub use identifiers::PackageId;
pub use identifiers::UserId;
pub use operation::Operation;
pub use operation::OperationClass;
pub use package::PackageRecord;
pub use ticket::AuthStatus;
pub use ticket::Ticket;
