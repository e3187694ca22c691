// crates/access-gate-core/src/core/operation.rs
// ============================================================================
// Module: Operation Classification
// Description: Enumerated gate operations and their policy classes.
// Purpose: Keep the hand-curated policy surface a single reviewable artifact.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Every service call site names its operation with a stable string
//! identifier (for example `content-package:getPackage`). This module
//! enumerates those identifiers as a closed type and maps each one to its
//! policy class in one explicit table. The table is hand-curated and
//! security-relevant: any change to it is a policy change, so membership is
//! enumerated rather than inferred from naming conventions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Gate-checked operation, one variant per service call site.
///
/// # Invariants
/// - Wire names are stable; [`Operation::parse`] accepts exactly the strings
///   produced by [`Operation::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a new package.
    CreatePackage,
    /// Read a package record.
    GetPackage,
    /// Update package metadata.
    UpdatePackage,
    /// Soft-delete a package.
    DeletePackage,
    /// Remove the package's catalog (crawler/table) references.
    DeleteCatalogReferences,
    /// Read the package's crawler status.
    GetCrawler,
    /// Start the package's crawler.
    StartCrawler,
    /// Create or update the package's crawler.
    UpdateOrCreateCrawler,
    /// List the package's catalog tables.
    GetTables,
    /// View rows of a catalog table.
    ViewTableData,
    /// Attach a dataset to a package.
    CreatePackageDataset,
    /// List the package's datasets.
    ListPackageDatasets,
    /// Read a single package dataset.
    GetPackageDataset,
    /// Delete a package dataset.
    DeletePackageDataset,
    /// Search across all packages.
    Search,
    /// Aggregate dashboard statistics.
    DashboardStats,
    /// Index the package's search document.
    IndexSearchDocument,
    /// Delete the package's search document.
    DeleteSearchDocument,
}

impl Operation {
    /// Every operation, for exhaustive policy review and tests.
    pub const ALL: [Self; 18] = [
        Self::CreatePackage,
        Self::GetPackage,
        Self::UpdatePackage,
        Self::DeletePackage,
        Self::DeleteCatalogReferences,
        Self::GetCrawler,
        Self::StartCrawler,
        Self::UpdateOrCreateCrawler,
        Self::GetTables,
        Self::ViewTableData,
        Self::CreatePackageDataset,
        Self::ListPackageDatasets,
        Self::GetPackageDataset,
        Self::DeletePackageDataset,
        Self::Search,
        Self::DashboardStats,
        Self::IndexSearchDocument,
        Self::DeleteSearchDocument,
    ];

    /// Returns the stable wire identifier for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatePackage => "content-package:createPackage",
            Self::GetPackage => "content-package:getPackage",
            Self::UpdatePackage => "content-package:updatePackage",
            Self::DeletePackage => "content-package:deletePackage",
            Self::DeleteCatalogReferences => "content-package:deleteGlueReferences",
            Self::GetCrawler => "content-package:getCrawler",
            Self::StartCrawler => "content-package:startCrawler",
            Self::UpdateOrCreateCrawler => "content-package:updateOrCreateCrawler",
            Self::GetTables => "content-package:getTables",
            Self::ViewTableData => "content-package:viewTableData",
            Self::CreatePackageDataset => "dataset:createPackageDataset",
            Self::ListPackageDatasets => "dataset:getPackageDatasets",
            Self::GetPackageDataset => "dataset:getPackageDataset",
            Self::DeletePackageDataset => "dataset:deletePackageDataset",
            Self::Search => "metadata:search",
            Self::DashboardStats => "metadata:dashboardStats",
            Self::IndexSearchDocument => "metadata:indexDocument",
            Self::DeleteSearchDocument => "metadata:deleteDocument",
        }
    }

    /// Parses a wire identifier into an operation.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|operation| operation.as_str() == value)
    }

    /// Returns the policy class for the operation.
    ///
    /// This match is the authoritative classification table. Class membership
    /// was hand-curated per call site; keep additions explicit.
    #[must_use]
    pub const fn classification(self) -> OperationClass {
        match self {
            // No single target resource to check (creation, global search,
            // dashboard stats). Authorization, if any, happens in the handler.
            Self::CreatePackage | Self::Search | Self::DashboardStats => OperationClass::OPEN,
            // Cascade-cleanup operations allowed against soft-deleted packages.
            Self::DeletePackage
            | Self::DeleteCatalogReferences
            | Self::DeletePackageDataset
            | Self::DeleteSearchDocument => OperationClass::DELETION_EXEMPT,
            // Read-oriented operations where group membership alone suffices.
            Self::GetPackage
            | Self::GetCrawler
            | Self::GetTables
            | Self::ViewTableData
            | Self::ListPackageDatasets
            | Self::GetPackageDataset => OperationClass::GROUP_ELIGIBLE,
            // Everything else is admin or owner only.
            Self::UpdatePackage
            | Self::StartCrawler
            | Self::UpdateOrCreateCrawler
            | Self::CreatePackageDataset
            | Self::IndexSearchDocument => OperationClass::STRICT,
        }
    }

    /// Returns `true` when the operation requires no resource-level check.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.classification().open
    }

    /// Returns `true` when the operation may target a soft-deleted package.
    #[must_use]
    pub const fn is_deletion_exempt(self) -> bool {
        self.classification().deletion_exempt
    }

    /// Returns `true` when group membership alone is a sufficient access path.
    #[must_use]
    pub const fn is_group_eligible(self) -> bool {
        self.classification().group_eligible
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Policy Classes
// ============================================================================

/// Policy classification flags for one operation.
///
/// # Invariants
/// - Flags are not mutually exclusive in general, but the current table
///   assigns each operation exactly one of the named class constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationClass {
    /// No resource-level check at all; the gate grants without a fetch.
    pub open: bool,
    /// May target a package whose soft-delete flag is set.
    pub deletion_exempt: bool,
    /// Group membership is a sufficient access path.
    pub group_eligible: bool,
}

impl OperationClass {
    /// Open operation: no resource-level check.
    pub const OPEN: Self = Self {
        open: true,
        deletion_exempt: false,
        group_eligible: false,
    };

    /// Deletion-exempt operation: cascade cleanup against deleted packages.
    pub const DELETION_EXEMPT: Self = Self {
        open: false,
        deletion_exempt: true,
        group_eligible: false,
    };

    /// Group-eligible operation: readable through a shared group.
    pub const GROUP_ELIGIBLE: Self = Self {
        open: false,
        deletion_exempt: false,
        group_eligible: true,
    };

    /// Strict operation: admin or owner only.
    pub const STRICT: Self = Self {
        open: false,
        deletion_exempt: false,
        group_eligible: false,
    };
}
