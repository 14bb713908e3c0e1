use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    config::Config,
    models::{Coordinate, DisplayOptions},
    services::{DiscoverClient, RoutingClient},
};

/// Report the map display options to the browser client. The deployed page
/// variants differed only in these knobs, so they live in one config.
pub async fn display_options(
    State((config, _, _)): State<(Config, Arc<DiscoverClient>, Arc<RoutingClient>)>,
) -> Json<DisplayOptions> {
    Json(DisplayOptions {
        map_style: config.map_style.clone(),
        show_traffic: config.show_traffic,
        show_instructions: config.show_instructions,
        center: Coordinate::new(config.map_center_lat, config.map_center_lng),
        zoom: config.map_zoom,
    })
}
