use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use station_finder_service::{app, config::Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "station_finder_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().expect("Failed to load configuration");

    if config.here_api_key.is_empty() {
        info!("HERE_API_KEY is not set; collaborator requests will be rejected upstream");
    }

    info!("Starting station finder service");

    let port = config.port;
    let app = app(config).expect("Failed to build application");

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", port).parse().unwrap();
    info!("HTTP server listening on {}", addr);

    // Run the HTTP server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .await
        .expect("Failed to start HTTP server");

    info!("Shutting down...");
}
