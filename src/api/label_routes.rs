//! Label endpoints: `/labels`, `/labels2`, `/countries`

use axum::{
    extract::{RawQuery, State},
    Json,
};

use geo_taxonomy_types::{LabelItems, LabelNode};

use super::{AppError, TaxonomyState};
use crate::resolver::TaxonomyResolver;

/// Every `path` parameter of a query string, decoded, in request order.
///
/// Other parameters are ignored. `path=EU&foo=1&path=DE` gives `["EU", "DE"]`.
pub fn parse_path_segments(raw_query: &str) -> Vec<String> {
    url::form_urlencoded::parse(raw_query.as_bytes())
        .filter(|(key, _)| key == "path")
        .map(|(_, value)| value.into_owned())
        .collect()
}

fn resolve_query(state: &TaxonomyState, query: Option<String>) -> Result<Vec<LabelNode>, AppError> {
    let raw_query = query.unwrap_or_default();
    let path = parse_path_segments(&raw_query);
    let labels = TaxonomyResolver::new(&state.tables).resolve(path.as_slice(), &raw_query)?;
    Ok(labels)
}

pub(super) async fn labels(
    State(state): State<TaxonomyState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<LabelNode>>, AppError> {
    Ok(Json(resolve_query(&state, query)?))
}

pub(super) async fn labels_wrapped(
    State(state): State<TaxonomyState>,
    RawQuery(query): RawQuery,
) -> Result<Json<LabelItems>, AppError> {
    Ok(Json(LabelItems::from(resolve_query(&state, query)?)))
}

pub(super) async fn countries(State(state): State<TaxonomyState>) -> Json<Vec<LabelNode>> {
    Json(TaxonomyResolver::new(&state.tables).all_countries())
}
