pub mod discover;
pub mod routing;

pub use discover::DiscoverClient;
pub use routing::RoutingClient;
