//! Error → HTTP response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use geo_taxonomy_types::NotFoundDiagnostic;

use crate::error::{ResolveError, TaxonomyError};

#[derive(Debug)]
pub struct AppError(pub TaxonomyError);

impl<E> From<E> for AppError
where
    E: Into<TaxonomyError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            TaxonomyError::Resolve(ResolveError::NotFound {
                raw_query,
                attempted,
            }) => {
                tracing::info!(search = %raw_query, country = %attempted, "No country matches selector");
                (
                    StatusCode::NOT_FOUND,
                    Json(NotFoundDiagnostic::new(raw_query, attempted)),
                )
                    .into_response()
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "error": other.to_string(),
                        "code": other.code(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
