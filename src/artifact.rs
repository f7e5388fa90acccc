//! The `full.json` artifact: read at server start, written by `taxonomy_cli generate`.

use std::io::Write;
use std::path::Path;

use geo_taxonomy_types::FullTree;

use crate::error::{LoadError, TaxonomyResult};
use crate::generator::TreeGenerator;
use crate::tables::ReferenceTables;

/// Where the served tree came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSource {
    Artifact,
    Generated,
}

/// Parse a previously generated artifact.
pub fn read_full_tree(path: &Path) -> Result<FullTree, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize the tree with two-space indentation and a trailing newline.
pub fn write_full_tree<W: Write>(tree: &FullTree, mut writer: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, tree)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Use the artifact at `path` when it exists, otherwise generate from `tables`.
pub fn load_or_generate(
    path: &Path,
    tables: &ReferenceTables,
) -> TaxonomyResult<(FullTree, TreeSource)> {
    if path.exists() {
        let tree = read_full_tree(path)?;
        tracing::info!(
            path = %path.display(),
            continents = tree.items.len(),
            countries = tree.country_count(),
            cities = tree.city_count(),
            "Full tree loaded from artifact"
        );
        return Ok((tree, TreeSource::Artifact));
    }

    let tree = TreeGenerator::new(tables).generate()?;
    tracing::info!(
        path = %path.display(),
        continents = tree.items.len(),
        countries = tree.country_count(),
        cities = tree.city_count(),
        "No artifact found, full tree generated from reference tables"
    );
    Ok((tree, TreeSource::Generated))
}
