//! Domain repositories.
//!
//! One generic SQLite repository serves every listed domain; a `Listing`
//! says which table it reads and which message each row becomes.

mod events;
mod races;

pub use events::{EventListing, EventsRepo};
pub use races::{RaceListing, RacesRepo};

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_query_binder::SqlxValues;
use sqlx::SqlitePool;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::storage::mapper::{self, Clock, RecordFields, SystemClock};
use crate::storage::{ListFilter, ListQuery, ListingTable, Result, Seed, StorageError};

/// Outcome of a single-record lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<R> {
    Found(R),
    NotFound,
}

#[cfg(test)]
impl<R> Lookup<R> {
    pub fn into_option(self) -> Option<R> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Describes one listed domain.
pub trait Listing: Send + Sync + 'static {
    type Table: ListingTable;
    type Record: Send + 'static;

    /// Domain name used in logs.
    const DOMAIN: &'static str;

    fn into_record(fields: RecordFields) -> Self::Record;
}

/// Read access to a listed domain.
#[async_trait]
pub trait Repository<R>: Send + Sync {
    /// Prepare the store. Runs at most once, even if a caller is cancelled
    /// mid-way; every caller gets the same result.
    async fn init(&self) -> Result<()>;

    /// List records matching `filter`, ordered by advertised start time.
    async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<R>>;

    /// Fetch a single record by id.
    async fn get(&self, id: i64) -> Result<Lookup<R>>;
}

/// SQLite-backed repository for a `Listing`.
pub struct SqliteRepository<L: Listing> {
    pool: SqlitePool,
    seed: Arc<dyn Seed<L::Table>>,
    clock: Arc<dyn Clock>,
    init: Arc<OnceCell<std::result::Result<(), Arc<StorageError>>>>,
    _listing: PhantomData<fn() -> L>,
}

impl<L: Listing> SqliteRepository<L> {
    /// Create a repository reading from `pool`, prepared by `seed` on init.
    pub fn new(pool: SqlitePool, seed: Arc<dyn Seed<L::Table>>) -> Self {
        Self {
            pool,
            seed,
            clock: Arc::new(SystemClock),
            init: Arc::new(OnceCell::new()),
            _listing: PhantomData,
        }
    }

    /// Replace the clock used to derive record status.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    async fn fetch(&self, query: ListQuery) -> Result<Vec<L::Record>> {
        let now = self.clock.now();
        let fetched = sqlx::query_with(&query.sql, SqlxValues(query.values))
            .fetch_all(&self.pool)
            .await;
        mapper::map_rows(fetched, now, L::into_record)
    }
}

#[async_trait]
impl<L: Listing> Repository<L::Record> for SqliteRepository<L> {
    async fn init(&self) -> Result<()> {
        if let Some(outcome) = self.init.get() {
            return outcome.clone().map_err(StorageError::Init);
        }

        // Driven from a spawned task: a cancelled caller must not abandon a
        // half-run seed and let the next caller start another.
        let cell = Arc::clone(&self.init);
        let seed = Arc::clone(&self.seed);
        let pool = self.pool.clone();
        let outcome = tokio::spawn(async move {
            cell.get_or_init(|| async move {
                info!(domain = L::DOMAIN, "Initializing repository");
                seed.seed(&pool).await.map_err(|e| {
                    error!(domain = L::DOMAIN, error = %e, "Repository initialization failed");
                    Arc::new(e)
                })
            })
            .await
            .clone()
        })
        .await?;

        outcome.map_err(StorageError::Init)
    }

    async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<L::Record>> {
        let records = self.fetch(ListQuery::list::<L::Table>(filter)).await?;
        debug!(domain = L::DOMAIN, count = records.len(), "Listed records");
        Ok(records)
    }

    async fn get(&self, id: i64) -> Result<Lookup<L::Record>> {
        let records = self.fetch(ListQuery::get::<L::Table>(id)).await?;
        match records.into_iter().next() {
            Some(record) => Ok(Lookup::Found(record)),
            None => {
                debug!(domain = L::DOMAIN, id, "Record not found");
                Ok(Lookup::NotFound)
            }
        }
    }
}
