use std::net::SocketAddr;

use metro_server::network::chennai;
use metro_server::web::{AppState, create_router};

/// Default listen port; override with METRO_PORT.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metro_server=info".into()),
        )
        .init();

    // Read the listen port from the environment
    let port = std::env::var("METRO_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Build and validate the network (fail fast on a defective dataset)
    let network = chennai().expect("built-in Chennai network must be valid");
    println!("Loaded {} stations", network.station_names().len());

    // Build app state and router
    let state = AppState::new(network);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Metro Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health    - Health check");
    println!("  GET /stations  - Station list with coordinates");
    println!("  GET /route     - Plan a route (?from=...&to=...)");
    println!("  GET /wait      - Wait estimate (?time=HH:MM, default now)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
