//! HTTP API for the taxonomy lookup service
//!
//! ## Endpoints
//!
//! - `GET /labels?path=..&path=..` - Resolved label list (bare array)
//! - `GET /labels2?path=..`        - Same, wrapped as `{ "items": [...] }`
//! - `GET /countries`              - Every country
//! - `GET /full`                   - Full continent → country → city tree
//! - `GET /private`                - `/full` behind basic auth
//!
//! Any other path, or any method other than GET on these paths, answers 404
//! `Not Found, check /labels`. `OPTIONS` on any path is answered by the CORS
//! layer before routing, so it never needs credentials.

mod auth;
mod error;
mod full_routes;
mod label_routes;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    handler::Handler,
    routing::{get, MethodRouter},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

use geo_taxonomy_types::FullTree;

use crate::config::AuthConfig;
use crate::tables::ReferenceTables;

pub use auth::basic_auth;
pub use error::AppError;
pub use label_routes::parse_path_segments;

/// Shared, immutable state: loaded once at startup, never reloaded per request
#[derive(Clone)]
pub struct TaxonomyState {
    pub tables: Arc<ReferenceTables>,
    pub full: Arc<FullTree>,
}

impl TaxonomyState {
    pub fn new(tables: ReferenceTables, full: FullTree) -> Self {
        Self {
            tables: Arc::new(tables),
            full: Arc::new(full),
        }
    }
}

/// Build the complete taxonomy router, CORS included.
pub fn create_taxonomy_router(state: TaxonomyState, auth: AuthConfig) -> Router {
    let public = Router::new()
        .route("/labels", get_only(label_routes::labels))
        .route("/labels2", get_only(label_routes::labels_wrapped))
        .route("/countries", get_only(label_routes::countries))
        .route("/full", get_only(full_routes::full_tree));

    let protected = Router::new()
        .route("/private", get_only(full_routes::full_tree))
        .route_layer(middleware::from_fn(basic_auth))
        .layer(Extension(Arc::new(auth)));

    public
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
}

/// CORS for browser clients: any origin, GET/OPTIONS only
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// GET route whose other methods answer like an unknown path
fn get_only<H, T>(handler: H) -> MethodRouter<TaxonomyState>
where
    H: Handler<T, TaxonomyState>,
    T: 'static,
{
    get(handler).fallback(not_found)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found, check /labels")
}
