use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

use config::Config;
use handlers::{display_options, find_nearby, health};
use services::{DiscoverClient, RoutingClient};

/// Build the service router with its shared state. Exposed so tests can
/// mount the same routes the binary serves.
pub fn app(config: Config) -> Result<Router> {
    let discover = Arc::new(DiscoverClient::new(&config)?);
    let routing = Arc::new(RoutingClient::new(&config)?);

    let router = Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/nearby", post(find_nearby))
        .route("/api/config", get(display_options))
        .with_state((config, discover, routing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    Ok(router)
}
