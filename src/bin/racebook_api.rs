//! racebook-api: HTTP/JSON gateway
//!
//! Translates REST calls into gRPC calls against the racing and sports
//! backends and serves them on one listener.
//!
//! ```text
//! [Client] -> [racebook-api] -> [racebook-racing] -> racing.db
//!                  |
//!                  +----------> [racebook-sports] -> sports.db
//! ```
//!
//! ## Configuration
//! - api.endpoint: gateway listen address (default: localhost:8000)
//! - racing.endpoint / sports.endpoint: backend addresses
//!
//! Backends are dialed lazily, so the gateway starts even while they are
//! down; calls fail with 503 until they come up.

use tracing::{error, info};

use racebook::config::Config;
use racebook::handlers::gateway::{self, GatewayBuilder, RacingRoutes, SportsRoutes};
use racebook::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    info!("Starting racebook-api gateway");

    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let builder = GatewayBuilder::new()
        .register::<RacingRoutes>(&config.racing.endpoint)
        .and_then(|b| b.register::<SportsRoutes>(&config.sports.endpoint))
        .map_err(|e| {
            error!("Failed to register backend: {}", e);
            e
        })?;

    info!(domains = ?builder.domains(), "Gateway routes registered");

    gateway::serve(builder.build(), &config.api.endpoint).await?;

    Ok(())
}
