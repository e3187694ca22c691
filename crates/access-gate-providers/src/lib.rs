// crates/access-gate-providers/src/lib.rs
// ============================================================================
// Module: Access Gate Providers
// Description: Managed-cloud adapters for the gate's backing interfaces.
// Purpose: Provide the package-table store and group-directory implementations.
// Dependencies: access-gate-core, aws-sdk-dynamodb, aws-sdk-cognitoidentityprovider
// ============================================================================

//! ## Overview
//! This crate ships the production adapters behind the gate's two seams: a
//! DynamoDB-backed package store and a Cognito-backed group directory.
//! Clients are constructed by the caller and injected; adapters hold no
//! ambient credentials or module-scope state, perform no retries, and map
//! every backend failure to the seam's error type so the gate can fail
//! closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cognito;
pub mod dynamo;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cognito::CognitoGroupDirectory;
pub use cognito::CognitoGroupDirectoryConfig;
pub use dynamo::DynamoPackageStore;
pub use dynamo::DynamoPackageStoreConfig;

#[cfg(test)]
mod tests;
