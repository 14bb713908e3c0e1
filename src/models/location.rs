use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate that the coordinate is within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// A named place returned by the search collaborator. Read-only within
/// this service; the upstream response is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub title: String,
    /// Full address label as the search service formats it
    pub address: String,
    pub position: Coordinate,
    /// Distance in meters as reported by the search service, when present.
    /// Logged for comparison against our own computation, never displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_distance_m: Option<f64>,
}

impl Station {
    pub fn new(title: impl Into<String>, address: impl Into<String>, position: Coordinate) -> Self {
        Self {
            title: title.into(),
            address: address.into(),
            position,
            reported_distance_m: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CoordinateError {
    #[error("Invalid coordinates provided.")]
    InvalidCoordinates,
}
