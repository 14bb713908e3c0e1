use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::models::{Coordinate, Station};

/// Earth radius in kilometers (for distance calculations)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A station annotated with its great-circle distance from the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedStation {
    #[serde(flatten)]
    pub station: Station,
    pub distance_km: f64,
}

/// Great-circle distance between two coordinates in kilometers, using the
/// Haversine formula. Pure and total over valid coordinates; callers are
/// responsible for range-checking inputs from untrusted sources.
pub fn distance_km(origin: &Coordinate, target: &Coordinate) -> f64 {
    let lat1_rad = origin.latitude * PI / 180.0;
    let lat2_rad = target.latitude * PI / 180.0;
    let delta_lat = (target.latitude - origin.latitude) * PI / 180.0;
    let delta_lon = (target.longitude - origin.longitude) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Annotate each station with its distance from the origin.
///
/// The input order is preserved: the search collaborator already ranks
/// results by relevance, and that ranking stays visible to the user next
/// to the physical distance. Re-sorting here would change the contract.
pub fn rank_by_distance(origin: &Coordinate, stations: Vec<Station>) -> Vec<RankedStation> {
    stations
        .into_iter()
        .map(|station| {
            let distance_km = distance_km(origin, &station.position);
            RankedStation {
                station,
                distance_km,
            }
        })
        .collect()
}
