//! Full-tree endpoints: `/full` and its authenticated twin `/private`

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use super::TaxonomyState;

pub(super) async fn full_tree(State(state): State<TaxonomyState>) -> Response {
    Json(state.full.as_ref()).into_response()
}
