// crates/access-gate-core/src/core/ticket.rs
// ============================================================================
// Module: Authorization Ticket
// Description: Resolved identity context for one request.
// Purpose: Carry the principal, auth status, and role consumed by the gate.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A ticket is the resolved authorization context for a single request,
//! produced by the upstream token-verification step and consumed read-only by
//! the gate. Tickets are never persisted. Wire field names (`userid`,
//! `auth_status`, `role`) match the authorizer payload.
//!
//! Security posture: tickets arrive from an upstream trust boundary; unknown
//! auth status values deserialize as unauthorized (fail closed).

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Auth Status
// ============================================================================

/// Authentication status reported by the upstream authorizer.
///
/// # Invariants
/// - Any wire value other than `"authorized"` deserializes to
///   [`AuthStatus::Unauthorized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    /// The upstream authorizer verified the caller's token.
    Authorized,
    /// The caller is not authenticated (or the status was unrecognized).
    Unauthorized,
}

impl<'de> Deserialize<'de> for AuthStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        // Unknown statuses fail closed rather than rejecting the payload.
        if value == "authorized" {
            Ok(Self::Authorized)
        } else {
            Ok(Self::Unauthorized)
        }
    }
}

// ============================================================================
// SECTION: Ticket
// ============================================================================

/// Resolved authorization context for one request.
///
/// # Invariants
/// - Immutable once constructed; created fresh per request.
/// - `role` is free-form; only a case-insensitive match against `"admin"`
///   grants privileged access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Stable identifier of the authenticated principal.
    #[serde(rename = "userid")]
    pub user_id: UserId,
    /// Authentication status resolved upstream.
    pub auth_status: AuthStatus,
    /// Role assigned to the principal (free-form).
    pub role: String,
}

impl Ticket {
    /// Creates a ticket from its parts.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, auth_status: AuthStatus, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            auth_status,
            role: role.into(),
        }
    }

    /// Returns `true` when the upstream authorizer verified the caller.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.auth_status == AuthStatus::Authorized
    }

    /// Returns `true` when the caller holds the admin role.
    ///
    /// Role comparison is case-insensitive; any non-admin value is treated as
    /// a non-privileged member.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}
