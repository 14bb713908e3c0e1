use serde::{Deserialize, Serialize};

use super::location::Coordinate;
use crate::libraries::distance::RankedStation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyRequest {
    /// The user's current position, from the browser geolocation API
    pub origin: Coordinate,

    /// Overrides the configured search query when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Overrides the configured result limit when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Request a drivable route to the first result
    #[serde(default = "default_include_route")]
    pub include_route: bool,
}

fn default_include_route() -> bool {
    true
}

/// A drivable route to the nearest station, flattened from the routing
/// service's sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    /// One encoded flexible polyline per route section, drawable as-is
    pub polylines: Vec<String>,
    pub length_m: u64,
    pub duration_s: u64,
    /// Turn-by-turn instructions; empty when the instructions panel is off
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub success: bool,

    // Stations annotated with computed distance (when the search succeeds)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stations: Vec<RankedStation>,

    // Route to the first station (when requested and available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<String>,

    // Status messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NearbyResponse {
    pub fn found(stations: Vec<RankedStation>, route: Option<RouteSummary>) -> Self {
        Self {
            success: true,
            stations,
            route,
            retrieved_at: Some(chrono::Utc::now().to_rfc3339()),
            message: None,
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: true,
            stations: Vec::new(),
            route: None,
            retrieved_at: Some(chrono::Utc::now().to_rfc3339()),
            message: Some("No petrol pumps found nearby.".to_string()),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            stations: Vec::new(),
            route: None,
            retrieved_at: None,
            message: None,
            error: Some(message),
        }
    }
}

/// Map display options for the browser client. One configurable surface
/// instead of parallel page variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub map_style: String,
    pub show_traffic: bool,
    pub show_instructions: bool,
    pub center: Coordinate,
    pub zoom: u8,
}
