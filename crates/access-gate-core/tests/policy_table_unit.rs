// crates/access-gate-core/tests/policy_table_unit.rs
// ============================================================================
// Module: Policy Table Unit Tests
// Description: Exact membership checks for the operation classification table.
// Purpose: Pin the hand-curated policy surface so changes are deliberate.
// ============================================================================

//! ## Overview
//! The classification table is a security-relevant surface: these tests
//! enumerate the exact class membership and the stable wire identifiers so
//! any edit to the table shows up as a failing, reviewable diff.

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

use access_gate_core::Operation;
use access_gate_core::OperationClass;

// ============================================================================
// SECTION: Class Membership
// ============================================================================

#[test]
fn open_operations_are_exactly_the_curated_set() {
    let open: Vec<Operation> =
        Operation::ALL.into_iter().filter(|operation| operation.is_open()).collect();
    assert_eq!(open, vec![Operation::CreatePackage, Operation::Search, Operation::DashboardStats]);
}

#[test]
fn deletion_exempt_operations_are_exactly_the_cascade_cleanup_set() {
    let exempt: Vec<Operation> =
        Operation::ALL.into_iter().filter(|operation| operation.is_deletion_exempt()).collect();
    assert_eq!(exempt, vec![
        Operation::DeletePackage,
        Operation::DeleteCatalogReferences,
        Operation::DeletePackageDataset,
        Operation::DeleteSearchDocument,
    ]);
}

#[test]
fn group_eligible_operations_are_exactly_the_read_oriented_set() {
    let eligible: Vec<Operation> =
        Operation::ALL.into_iter().filter(|operation| operation.is_group_eligible()).collect();
    assert_eq!(eligible, vec![
        Operation::GetPackage,
        Operation::GetCrawler,
        Operation::GetTables,
        Operation::ViewTableData,
        Operation::ListPackageDatasets,
        Operation::GetPackageDataset,
    ]);
}

#[test]
fn remaining_operations_are_strict() {
    let strict: Vec<Operation> = Operation::ALL
        .into_iter()
        .filter(|operation| operation.classification() == OperationClass::STRICT)
        .collect();
    assert_eq!(strict, vec![
        Operation::UpdatePackage,
        Operation::StartCrawler,
        Operation::UpdateOrCreateCrawler,
        Operation::CreatePackageDataset,
        Operation::IndexSearchDocument,
    ]);
}

#[test]
fn every_operation_carries_exactly_one_named_class() {
    for operation in Operation::ALL {
        let class = operation.classification();
        let named = [
            OperationClass::OPEN,
            OperationClass::DELETION_EXEMPT,
            OperationClass::GROUP_ELIGIBLE,
            OperationClass::STRICT,
        ];
        assert!(named.contains(&class), "unnamed class for {operation}");
    }
}

// ============================================================================
// SECTION: Wire Identifiers
// ============================================================================

#[test]
fn wire_identifiers_round_trip() {
    for operation in Operation::ALL {
        assert_eq!(Operation::parse(operation.as_str()), Some(operation));
    }
}

#[test]
fn wire_identifiers_are_unique() {
    for left in Operation::ALL {
        for right in Operation::ALL {
            if left != right {
                assert_ne!(left.as_str(), right.as_str());
            }
        }
    }
}

#[test]
fn unknown_wire_identifiers_do_not_parse() {
    assert_eq!(Operation::parse("content-package:dropTable"), None);
    assert_eq!(Operation::parse(""), None);
    // Parsing is exact; identifiers are not case-folded.
    assert_eq!(Operation::parse("CONTENT-PACKAGE:GETPACKAGE"), None);
}
