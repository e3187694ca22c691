// crates/access-gate-providers/src/tests.rs
// ============================================================================
// Module: Providers Unit Tests
// Description: Item decoding and federated-mode tests for the adapters.
// Purpose: Pin the table wire shape and the federated simplification boundary.
// Dependencies: access-gate-providers
// ============================================================================

//! ## Overview
//! Unit tests for the adapter layers that run without a live endpoint: the
//! package-item decoder (both group shapes, the delete flag, malformed
//! attributes fail closed) and the federated directory short-circuit.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use access_gate_core::GroupDirectory;
use access_gate_core::GroupName;
use access_gate_core::UserId;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::cognito::CognitoGroupDirectory;
use crate::cognito::CognitoGroupDirectoryConfig;
use crate::dynamo::record_from_item;

// ============================================================================
// SECTION: Item Fixtures
// ============================================================================

/// Minimal valid package item.
fn base_item() -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("package_id".to_string(), AttributeValue::S("p1".to_string()));
    item.insert("owner".to_string(), AttributeValue::S("alice".to_string()));
    item
}

// ============================================================================
// SECTION: Item Decoding
// ============================================================================

#[test]
fn minimal_item_decodes_with_defaults() {
    let record = record_from_item(&base_item()).unwrap();
    assert_eq!(record.package_id.as_str(), "p1");
    assert_eq!(record.owner, UserId::from("alice"));
    assert!(record.groups.is_empty());
    assert!(!record.deleted);
    assert!(record.name.is_none());
}

#[test]
fn groups_decode_from_string_set() {
    let mut item = base_item();
    item.insert(
        "groups".to_string(),
        AttributeValue::Ss(vec!["teamA".to_string(), "teamB".to_string()]),
    );
    let record = record_from_item(&item).unwrap();
    assert_eq!(record.groups, vec![GroupName::from("teamA"), GroupName::from("teamB")]);
}

#[test]
fn groups_decode_from_string_list() {
    let mut item = base_item();
    item.insert(
        "groups".to_string(),
        AttributeValue::L(vec![
            AttributeValue::S("teamA".to_string()),
            AttributeValue::S("teamB".to_string()),
        ]),
    );
    let record = record_from_item(&item).unwrap();
    assert_eq!(record.groups, vec![GroupName::from("teamA"), GroupName::from("teamB")]);
}

#[test]
fn mistyped_groups_attribute_fails_closed() {
    let mut item = base_item();
    item.insert("groups".to_string(), AttributeValue::N("7".to_string()));
    assert!(record_from_item(&item).is_err());

    let mut item = base_item();
    item.insert("groups".to_string(), AttributeValue::L(vec![AttributeValue::Bool(true)]));
    assert!(record_from_item(&item).is_err());
}

#[test]
fn deleted_flag_decodes_and_rejects_non_bool() {
    let mut item = base_item();
    item.insert("deleted".to_string(), AttributeValue::Bool(true));
    assert!(record_from_item(&item).unwrap().deleted);

    let mut item = base_item();
    item.insert("deleted".to_string(), AttributeValue::S("true".to_string()));
    assert!(record_from_item(&item).is_err());
}

#[test]
fn missing_owner_is_an_error() {
    let mut item = base_item();
    item.remove("owner");
    assert!(record_from_item(&item).is_err());
}

#[test]
fn metadata_strings_decode_when_present() {
    let mut item = base_item();
    item.insert("name".to_string(), AttributeValue::S("launch footage".to_string()));
    item.insert("created_at".to_string(), AttributeValue::S("2024-02-18T00:00:00Z".to_string()));
    let record = record_from_item(&item).unwrap();
    assert_eq!(record.name.as_deref(), Some("launch footage"));
    assert_eq!(record.created_at.as_deref(), Some("2024-02-18T00:00:00Z"));
}

// ============================================================================
// SECTION: Federated Directory
// ============================================================================

#[tokio::test]
async fn federated_directory_resolves_empty_without_calling_cognito() {
    // No credentials and no endpoint: the call would fail if it left the
    // process, so an Ok empty set proves the short-circuit.
    let sdk_config = aws_config::SdkConfig::builder()
        .behavior_version(aws_config::BehaviorVersion::latest())
        .build();
    let client = aws_sdk_cognitoidentityprovider::Client::new(&sdk_config);
    let config = CognitoGroupDirectoryConfig::new("pool-1".to_string()).with_federated_login(true);
    let directory = CognitoGroupDirectory::new(client, config);

    let groups = directory.list_groups(&UserId::from("bob")).await.unwrap();
    assert!(groups.is_empty());
}
