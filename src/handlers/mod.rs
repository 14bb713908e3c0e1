pub mod nearby;
pub mod options;

use axum::{response::IntoResponse, Json};

pub use nearby::find_nearby;
pub use options::display_options;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "station-finder-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
