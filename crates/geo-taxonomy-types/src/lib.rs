//! Shared wire types for the geo taxonomy service
//!
//! This crate is the SINGLE SOURCE OF TRUTH for every shape that leaves the
//! process: label lists returned by `/labels`, the denormalized tree served by
//! `/full` and written by `taxonomy_cli generate`, and diagnostic bodies.
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐         ┌──────────────────┐
//! │  Lookup Server   │  JSON   │  Taxonomy picker │
//! │  (Axum)          │ ──────► │  (any client)    │
//! └──────────────────┘         └──────────────────┘
//!          │
//!          └──► full.json artifact (taxonomy_cli)
//! ```
//!
//! ## Rules
//!
//! 1. Field names are camelCase on the wire (`alias`, `value`, `isLeaf`, `children`)
//! 2. Field presence is part of the contract: absent is not the same as `null`
//! 3. No inline response structs in handlers

pub mod label;
pub mod tree;

use serde::{Deserialize, Serialize};

pub use label::{LabelItems, LabelNode};
pub use tree::{CityLeaf, ContinentBranch, CountryBranch, FullTree};

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Body returned with a 404 when the country selector of a path matches nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundDiagnostic {
    /// Always "Not Found"
    pub error: String,
    /// Raw, undecoded query string of the request
    pub search: String,
    /// The selector that matched no country code or name
    #[serde(rename = "countryNameOrCode")]
    pub country_name_or_code: String,
}

impl NotFoundDiagnostic {
    pub fn new(search: impl Into<String>, country_name_or_code: impl Into<String>) -> Self {
        Self {
            error: "Not Found".to_string(),
            search: search.into(),
            country_name_or_code: country_name_or_code.into(),
        }
    }
}
