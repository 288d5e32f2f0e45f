use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reelflix_catalog::{seed_catalog, CatalogService, MemoryCatalog};
use reelflix_common::Config;

mod rest;

pub struct AppState {
    pub service: CatalogService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Catalog API
        .route("/movies", get(rest::api_movies))
        .route("/movies/{id}", get(rest::api_movie_detail))
        .route("/movies/{id}/events", get(rest::api_movie_events))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("reelflix_api=info".parse()?)
                .add_directive("reelflix_catalog=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let store = Arc::new(MemoryCatalog::new());
    if config.seed_on_start {
        seed_catalog(store.as_ref()).await?;
    }

    let state = Arc::new(AppState {
        service: CatalogService::new(store),
    });

    let app = router(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.host, config.port);
    info!("Reelflix API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
