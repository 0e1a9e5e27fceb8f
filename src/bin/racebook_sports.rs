//! racebook-sports: Sports gRPC backend
//!
//! Serves `sports.Sports` and `grpc.health.v1.Health` from the SQLite store
//! at `sports.database`, listening on `sports.endpoint`.
//!
//! ## Configuration
//! - First argument: optional config file path
//! - RACEBOOK_CONFIG: config file path
//! - RACEBOOK__SPORTS__ENDPOINT, RACEBOOK__SPORTS__DATABASE,
//!   RACEBOOK__SPORTS__SEED_DEMO_DATA: per-key overrides

use std::sync::Arc;

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use racebook::config::Config;
use racebook::proto::sports::SportsServer;
use racebook::repository::{EventsRepo, Repository};
use racebook::services::SportsService;
use racebook::storage::{self, DemoSeed, Events, SchemaSeed, Seed};
use racebook::transport::{grpc_trace_layer, serve_grpc};
use racebook::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    info!("Starting racebook-sports service");

    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    let backend = config.sports;

    let pool = storage::connect(&backend.database).await?;
    let seed: Arc<dyn Seed<Events>> = if backend.seed_demo_data {
        Arc::new(DemoSeed::events())
    } else {
        Arc::new(SchemaSeed)
    };

    let repo = EventsRepo::new(pool, seed);
    repo.init().await.map_err(|e| {
        error!("Failed to initialize events repository: {}", e);
        e
    })?;

    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<SportsServer<SportsService>>()
        .await;

    let router = Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health_service)
        .add_service(SportsServer::new(SportsService::new(Arc::new(repo))));

    serve_grpc(router, &backend.endpoint, "sports").await?;

    Ok(())
}
