//! Shared utilities for integration tests.
//!
//! Starts real backends on ephemeral ports over in-memory SQLite stores
//! that the test fills directly.

use std::sync::Arc;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use sqlx::SqlitePool;
use tonic::transport::Server;
use tonic_health::server::health_reporter;

use racebook::proto::racing::RacingServer;
use racebook::proto::sports::SportsServer;
use racebook::repository::{EventsRepo, RacesRepo, Repository};
use racebook::services::{RacingService, SportsService};
use racebook::storage::{self, SchemaSeed};
use racebook::transport::{grpc_trace_layer, serve_with_listener};

/// A row to insert into a listing table.
pub struct Row {
    pub id: i64,
    pub grouping_id: i64,
    pub name: &'static str,
    pub number: i64,
    pub visible: bool,
    pub start: DateTime<Utc>,
}

impl Row {
    pub fn new(id: i64, grouping_id: i64, name: &'static str, start: DateTime<Utc>) -> Self {
        Self {
            id,
            grouping_id,
            name,
            number: id,
            visible: true,
            start,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

pub fn hours_from_now(hours: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours)
}

async fn insert(pool: &SqlitePool, table: &str, grouping: &str, rows: &[Row]) {
    let sql = format!(
        "INSERT INTO {table} (id, {grouping}, name, number, visible, advertised_start_time) \
         VALUES (?, ?, ?, ?, ?, ?)"
    );
    for row in rows {
        sqlx::query(&sql)
            .bind(row.id)
            .bind(row.grouping_id)
            .bind(row.name)
            .bind(row.number)
            .bind(row.visible)
            .bind(row.start.to_rfc3339_opts(SecondsFormat::Secs, true))
            .execute(pool)
            .await
            .expect("Failed to insert row");
    }
}

async fn bind_ephemeral() -> (tokio::net::TcpListener, String) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address").to_string();
    (listener, addr)
}

/// Start a racing backend holding `rows`, returning its address.
pub async fn start_racing_backend(rows: &[Row]) -> String {
    let pool = storage::connect("sqlite::memory:").await.unwrap();
    let repo = RacesRepo::new(pool.clone(), Arc::new(SchemaSeed));
    repo.init().await.unwrap();
    insert(&pool, "races", "meeting_id", rows).await;

    let (mut reporter, health) = health_reporter();
    reporter.set_serving::<RacingServer<RacingService>>().await;

    let router = Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health)
        .add_service(RacingServer::new(RacingService::new(Arc::new(repo))));

    let (listener, addr) = bind_ephemeral().await;
    tokio::spawn(async move {
        serve_with_listener(router, listener, "racing", std::future::pending())
            .await
            .ok();
    });
    addr
}

/// Start a sports backend holding `rows`, returning its address.
pub async fn start_sports_backend(rows: &[Row]) -> String {
    let pool = storage::connect("sqlite::memory:").await.unwrap();
    let repo = EventsRepo::new(pool.clone(), Arc::new(SchemaSeed));
    repo.init().await.unwrap();
    insert(&pool, "events", "competition_id", rows).await;

    let router = Server::builder()
        .layer(grpc_trace_layer())
        .add_service(SportsServer::new(SportsService::new(Arc::new(repo))));

    let (listener, addr) = bind_ephemeral().await;
    tokio::spawn(async move {
        serve_with_listener(router, listener, "sports", std::future::pending())
            .await
            .ok();
    });
    addr
}
