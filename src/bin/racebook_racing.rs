//! racebook-racing: Racing gRPC backend
//!
//! Serves `racing.Racing` and `grpc.health.v1.Health` from the SQLite store
//! at `racing.database`, listening on `racing.endpoint`.
//!
//! ## Configuration
//! - First argument: optional config file path
//! - RACEBOOK_CONFIG: config file path
//! - RACEBOOK__RACING__ENDPOINT, RACEBOOK__RACING__DATABASE,
//!   RACEBOOK__RACING__SEED_DEMO_DATA: per-key overrides

use std::sync::Arc;

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use racebook::config::Config;
use racebook::proto::racing::RacingServer;
use racebook::repository::{RacesRepo, Repository};
use racebook::services::RacingService;
use racebook::storage::{self, DemoSeed, Races, SchemaSeed, Seed};
use racebook::transport::{grpc_trace_layer, serve_grpc};
use racebook::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    info!("Starting racebook-racing service");

    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    let backend = config.racing;

    let pool = storage::connect(&backend.database).await?;
    let seed: Arc<dyn Seed<Races>> = if backend.seed_demo_data {
        Arc::new(DemoSeed::races())
    } else {
        Arc::new(SchemaSeed)
    };

    let repo = RacesRepo::new(pool, seed);
    repo.init().await.map_err(|e| {
        error!("Failed to initialize races repository: {}", e);
        e
    })?;

    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<RacingServer<RacingService>>()
        .await;

    let router = Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health_service)
        .add_service(RacingServer::new(RacingService::new(Arc::new(repo))));

    serve_grpc(router, &backend.endpoint, "racing").await?;

    Ok(())
}
