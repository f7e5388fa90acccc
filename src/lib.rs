//! Geo Taxonomy - read-only continent → country → city lookup
//!
//! Two consumers share one set of immutable reference tables:
//!
//! ```text
//!                    ┌──────────────────────┐
//!                    │   ReferenceTables    │  loaded once at startup
//!                    │ continents/countries │
//!                    │       /cities        │
//!                    └──────────┬───────────┘
//!               ┌───────────────┴───────────────┐
//!               ▼                               ▼
//!      ┌──────────────────┐            ┌──────────────────┐
//!      │ TaxonomyResolver │            │  TreeGenerator   │
//!      │ (per request)    │            │  (one-shot)      │
//!      └────────┬─────────┘            └────────┬─────────┘
//!               ▼                               ▼
//!        Vec<LabelNode>                 FullTree (full.json)
//! ```
//!
//! # Usage
//!
//! ```
//! use geo_taxonomy::tables::{City, Continent, Country, ReferenceTables};
//! use geo_taxonomy::{TaxonomyResolver, TreeGenerator};
//!
//! let tables = ReferenceTables::from_parts(
//!     vec![Continent::new("EU", "Europe")],
//!     vec![Country::new("DE", "Germany", "EU")],
//!     vec![City::new("Berlin", "DE"), City::new("Berlin", "DE")],
//! );
//!
//! let cities = TaxonomyResolver::new(&tables).resolve(&["EU", "DE"], "").unwrap();
//! assert_eq!(cities.len(), 1);
//!
//! let tree = TreeGenerator::new(&tables).generate().unwrap();
//! assert_eq!(tree.city_count(), 2);
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod resolver;
pub mod tables;

#[cfg(feature = "server")]
pub mod api;

// Re-export main types
pub use config::{AuthConfig, DataConfig, ServerConfig, TaxonomyConfig};
pub use error::{
    ConfigError, LoadError, ReferenceError, ResolveError, TaxonomyError, TaxonomyResult,
};
pub use generator::TreeGenerator;
pub use resolver::TaxonomyResolver;
pub use tables::ReferenceTables;

pub use geo_taxonomy_types as types;
