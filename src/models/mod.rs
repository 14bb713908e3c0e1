pub mod location;
pub mod requests;

// Re-export commonly used types
pub use location::{Coordinate, CoordinateError, Station};
pub use requests::{DisplayOptions, NearbyRequest, NearbyResponse, RouteSummary};
