// crates/access-gate-providers/src/dynamo.rs
// ============================================================================
// Module: DynamoDB Package Store
// Description: Package-table adapter backed by DynamoDB GetItem.
// Purpose: Resolve package records for gate checks from the managed table.
// Dependencies: access-gate-core, aws-sdk-dynamodb
// ============================================================================

//! ## Overview
//! One `GetItem` per lookup, keyed by `package_id`. Item decoding is a pure
//! function over the attribute map so the wire shape is testable without a
//! live endpoint. Decoding fails closed: a present-but-malformed attribute
//! is an error, never a default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use access_gate_core::GroupName;
use access_gate_core::PackageId;
use access_gate_core::PackageRecord;
use access_gate_core::ResourceStore;
use access_gate_core::StoreError;
use access_gate_core::UserId;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Attribute holding the package partition key.
const PACKAGE_ID_ATTRIBUTE: &str = "package_id";

/// Configuration for the DynamoDB package store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoPackageStoreConfig {
    /// Name of the package table.
    pub table_name: String,
}

impl Default for DynamoPackageStoreConfig {
    fn default() -> Self {
        Self {
            table_name: "serverless-video-transcode-packages".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Store Implementation
// ============================================================================

/// Package store backed by the DynamoDB package table.
pub struct DynamoPackageStore {
    /// Injected DynamoDB client.
    client: Client,
    /// Table configuration.
    config: DynamoPackageStoreConfig,
}

impl DynamoPackageStore {
    /// Creates a store over an injected client.
    #[must_use]
    pub const fn new(client: Client, config: DynamoPackageStoreConfig) -> Self {
        Self {
            client,
            config,
        }
    }
}

#[async_trait]
impl ResourceStore for DynamoPackageStore {
    async fn get_package(&self, package_id: &PackageId) -> Result<Option<PackageRecord>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.config.table_name)
            .key(PACKAGE_ID_ATTRIBUTE, AttributeValue::S(package_id.as_str().to_string()))
            .send()
            .await
            .map_err(|err| StoreError::Lookup(err.to_string()))?;

        match output.item {
            Some(item) => Ok(Some(record_from_item(&item)?)),
            None => Ok(None),
        }
    }
}

// ============================================================================
// SECTION: Item Decoding
// ============================================================================

/// Decodes a package-table item into a record.
///
/// `groups` is accepted both as a string set and as a list of strings (both
/// shapes exist in deployed tables); absence means empty. `deleted` defaults
/// to `false` only when absent.
pub(crate) fn record_from_item(item: &HashMap<String, AttributeValue>) -> Result<PackageRecord, StoreError> {
    let package_id = required_string(item, PACKAGE_ID_ATTRIBUTE)?;
    let owner = required_string(item, "owner")?;

    let groups = match item.get("groups") {
        None => Vec::new(),
        Some(AttributeValue::Ss(names)) => names.iter().map(|name| GroupName::new(name.clone())).collect(),
        Some(AttributeValue::L(values)) => {
            let mut names = Vec::with_capacity(values.len());
            for value in values {
                let name = value.as_s().map_err(|_| malformed("groups"))?;
                names.push(GroupName::new(name.clone()));
            }
            names
        }
        Some(_) => return Err(malformed("groups")),
    };

    let deleted = match item.get("deleted") {
        None => false,
        Some(value) => *value.as_bool().map_err(|_| malformed("deleted"))?,
    };

    Ok(PackageRecord {
        package_id: PackageId::new(package_id),
        owner: UserId::new(owner),
        groups,
        deleted,
        name: optional_string(item, "name")?,
        description: optional_string(item, "description")?,
        created_at: optional_string(item, "created_at")?,
        updated_at: optional_string(item, "updated_at")?,
    })
}

/// Reads a required string attribute.
fn required_string(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, StoreError> {
    item.get(name)
        .ok_or_else(|| StoreError::Lookup(format!("package item missing attribute `{name}`")))?
        .as_s()
        .map(Clone::clone)
        .map_err(|_| malformed(name))
}

/// Reads an optional string attribute.
fn optional_string(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<Option<String>, StoreError> {
    match item.get(name) {
        None => Ok(None),
        Some(value) => value.as_s().map(|text| Some(text.clone())).map_err(|_| malformed(name)),
    }
}

/// Error for a present-but-mistyped attribute.
fn malformed(name: &str) -> StoreError {
    StoreError::Lookup(format!("package item attribute `{name}` has an unexpected type"))
}
