// crates/access-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Access Gate Runtime
// Description: Gate decision logic and supporting adapters.
// Purpose: Execute authorization checks against injected backing stores.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the gate decision algorithm, the in-memory
//! adapters used by tests and demos, and auth-token header extraction. All
//! handler surfaces must call into the same gate logic so the policy is
//! enforced consistently.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod gate;
pub mod store;
pub mod token;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use gate::AccessGate;
pub use gate::AccessGrant;
pub use gate::DENIAL_MESSAGE;
pub use gate::GateError;
pub use store::InMemoryResourceStore;
pub use store::StaticGroupDirectory;
pub use token::extract_auth_token;
