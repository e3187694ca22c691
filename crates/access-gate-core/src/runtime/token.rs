// crates/access-gate-core/src/runtime/token.rs
// ============================================================================
// Module: Auth Token Extraction
// Description: Header lookup for the auth-bearing request header.
// Purpose: Abstract how the auth token is extracted from request headers.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The upstream gateway layer transforms header casing inconsistently, so the
//! auth-bearing header may arrive as `Auth` or `auth` (or, with some
//! proxies, another casing entirely). This module keeps that workaround in
//! one place.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

// ============================================================================
// SECTION: Token Extraction
// ============================================================================

/// Extracts the auth token from request headers.
///
/// Prefers the exact `Auth` key, then exact `auth`, then falls back to a
/// case-insensitive scan. Returns an empty string when no auth header is
/// present; the upstream authorizer treats an empty token as unauthorized.
#[must_use]
pub fn extract_auth_token(headers: &HashMap<String, String>) -> String {
    if let Some(token) = headers.get("Auth") {
        return token.clone();
    }
    if let Some(token) = headers.get("auth") {
        return token.clone();
    }
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("auth"))
        .map(|(_, token)| token.clone())
        .unwrap_or_default()
}
