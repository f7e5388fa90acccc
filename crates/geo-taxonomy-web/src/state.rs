//! Startup state assembly
//!
//! Reference tables are read once, the full tree is loaded or generated once,
//! and both are handed to the routers behind `Arc`s.

use anyhow::{Context, Result};

use geo_taxonomy::api::TaxonomyState;
use geo_taxonomy::artifact::{self, TreeSource};
use geo_taxonomy::{DataConfig, ReferenceTables};

pub fn build_state(data: &DataConfig) -> Result<TaxonomyState> {
    let tables = ReferenceTables::load(data)
        .with_context(|| format!("loading reference tables from {}", data.dir.display()))?;

    let full_path = data.full_path();
    let (full, source) = artifact::load_or_generate(&full_path, &tables)
        .with_context(|| format!("preparing full tree ({})", full_path.display()))?;

    if source == TreeSource::Generated {
        tracing::info!(
            "Run `taxonomy_cli generate --out {}` to persist the tree",
            full_path.display()
        );
    }

    Ok(TaxonomyState::new(tables, full))
}
