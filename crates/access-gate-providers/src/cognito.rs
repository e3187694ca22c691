// crates/access-gate-providers/src/cognito.rs
// ============================================================================
// Module: Cognito Group Directory
// Description: Group-directory adapter backed by the Cognito user pool.
// Purpose: List a principal's groups for the gate's group access path.
// Dependencies: access-gate-core, aws-sdk-cognitoidentityprovider
// ============================================================================

//! ## Overview
//! One `AdminListGroupsForUser` call per lookup. Under federated login the
//! user pool holds no group memberships, so the directory returns the empty
//! set without calling Cognito — group-based sharing is unsupported in that
//! deployment mode. This is a deliberate simplification boundary and must
//! stay a configuration switch, not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use access_gate_core::DirectoryError;
use access_gate_core::GroupDirectory;
use access_gate_core::GroupName;
use access_gate_core::UserId;
use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the Cognito group directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognitoGroupDirectoryConfig {
    /// User pool holding the accounts and groups.
    pub user_pool_id: String,
    /// Federated deployment mode: groups resolve to the empty set.
    pub federated_login: bool,
}

impl CognitoGroupDirectoryConfig {
    /// Creates a non-federated configuration for a user pool.
    #[must_use]
    pub const fn new(user_pool_id: String) -> Self {
        Self {
            user_pool_id,
            federated_login: false,
        }
    }

    /// Switches the directory into federated mode.
    #[must_use]
    pub const fn with_federated_login(mut self, federated_login: bool) -> Self {
        self.federated_login = federated_login;
        self
    }
}

// ============================================================================
// SECTION: Directory Implementation
// ============================================================================

/// Group directory backed by the Cognito user pool.
pub struct CognitoGroupDirectory {
    /// Injected Cognito client.
    client: Client,
    /// Pool configuration.
    config: CognitoGroupDirectoryConfig,
}

impl CognitoGroupDirectory {
    /// Creates a directory over an injected client.
    #[must_use]
    pub const fn new(client: Client, config: CognitoGroupDirectoryConfig) -> Self {
        Self {
            client,
            config,
        }
    }
}

#[async_trait]
impl GroupDirectory for CognitoGroupDirectory {
    async fn list_groups(&self, user_id: &UserId) -> Result<BTreeSet<GroupName>, DirectoryError> {
        if self.config.federated_login {
            return Ok(BTreeSet::new());
        }

        let output = self
            .client
            .admin_list_groups_for_user()
            .user_pool_id(&self.config.user_pool_id)
            .username(user_id.as_str())
            .send()
            .await
            .map_err(|err| DirectoryError::Lookup(err.to_string()))?;

        Ok(output
            .groups()
            .iter()
            .filter_map(|group| group.group_name().map(GroupName::from))
            .collect())
    }
}
