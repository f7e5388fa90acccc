//! Geo Taxonomy Web Server
//!
//! Serves continent/country/city labels and the full taxonomy tree over HTTP.
//!
//! Reads config from `config/taxonomy.yaml` (or `TAXONOMY_CONFIG`) and the
//! environment; see `geo_taxonomy::config` for the variable list.

mod state;

use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use geo_taxonomy::api::create_taxonomy_router;
use geo_taxonomy::{logging, TaxonomyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(logging::SERVER_FILTER);

    tracing::info!("Starting Geo Taxonomy Web Server");

    let config = TaxonomyConfig::load()?;
    let addr = config.server.socket_addr()?;

    let state = state::build_state(&config.data)?;

    let app = create_taxonomy_router(state, config.auth.clone())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    tracing::info!("");
    tracing::info!("===========================================");
    tracing::info!("  Geo Taxonomy running on http://{}", addr);
    tracing::info!("===========================================");
    tracing::info!("");
    tracing::info!("API Endpoints:");
    tracing::info!("  /labels?path=EU&path=DE - Labels one level below path");
    tracing::info!("  /labels2?path=EU        - Same, wrapped as {{items}}");
    tracing::info!("  /countries              - All countries");
    tracing::info!("  /full                   - Full taxonomy tree");
    tracing::info!("  /private                - Full tree (basic auth)");
    tracing::info!("");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Try: lsof -ti:{} | xargs kill -9",
                    addr.port(),
                    addr.port()
                );
            }
            return Err(e.into());
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
