use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    libraries::distance::rank_by_distance,
    models::{CoordinateError, NearbyRequest, NearbyResponse},
    services::{DiscoverClient, RoutingClient},
};

/// Upper bound on requested results, regardless of what the client asks for
const MAX_SEARCH_LIMIT: usize = 20;

/// Handle a nearby-station search.
///
/// This endpoint:
/// 1. Validates the caller's position
/// 2. Asks the search collaborator for stations around it
/// 3. Annotates each result with the computed great-circle distance
/// 4. Optionally fetches a drivable route to the first result
pub async fn find_nearby(
    State((config, discover, routing)): State<(Config, Arc<DiscoverClient>, Arc<RoutingClient>)>,
    Json(request): Json<NearbyRequest>,
) -> Json<NearbyResponse> {
    let origin = request.origin;
    debug!(
        "Nearby search from ({}, {})",
        origin.latitude, origin.longitude
    );

    // The browser is not a trusted collaborator; reject out-of-range
    // coordinates before they reach the distance math.
    if !origin.is_valid() {
        return Json(NearbyResponse::error(
            CoordinateError::InvalidCoordinates.to_string(),
        ));
    }

    let query = request.query.as_deref().unwrap_or(&config.search_query);
    let limit = request
        .limit
        .unwrap_or(config.search_limit)
        .clamp(1, MAX_SEARCH_LIMIT);

    let stations = match discover.discover(&origin, query, limit).await {
        Ok(stations) => stations,
        Err(e) => {
            error!("Discover request failed: {:#}", e);
            return Json(NearbyResponse::error(
                "Can't reach the remote server".to_string(),
            ));
        }
    };

    if stations.is_empty() {
        info!("No stations found near ({}, {})", origin.latitude, origin.longitude);
        return Json(NearbyResponse::not_found());
    }

    let ranked = rank_by_distance(&origin, stations);

    let nearest = &ranked[0];
    info!(
        "Nearest station {:?} at {:.2} km (service reported {:?} m)",
        nearest.station.title, nearest.distance_km, nearest.station.reported_distance_m
    );

    // Route to the first result, matching what the page draws. A routing
    // failure degrades to a routeless response; the markers still show.
    let route = if request.include_route {
        match routing.route(&origin, &nearest.station.position).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("Failed to calculate the route: {:#}", e);
                None
            }
        }
    } else {
        None
    };

    Json(NearbyResponse::found(ranked, route))
}
