//! One-time table preparation run by repository `init`.

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_binder::SqlxValues;
use sqlx::SqlitePool;
use tracing::info;

use super::schema::ListingTable;
use super::Result;

/// Prepares a listing table. Runs at most once per repository.
#[async_trait]
pub trait Seed<T: ListingTable>: Send + Sync {
    async fn seed(&self, pool: &SqlitePool) -> Result<()>;
}

/// Creates the table and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaSeed;

#[async_trait]
impl<T: ListingTable> Seed<T> for SchemaSeed {
    async fn seed(&self, pool: &SqlitePool) -> Result<()> {
        sqlx::query(T::CREATE_TABLE).execute(pool).await?;
        Ok(())
    }
}

const RACE_NAMES: &[&str] = &[
    "Caulfield Guineas",
    "Cox Plate",
    "Golden Slipper",
    "Doncaster Mile",
    "Epsom Handicap",
    "Queen Elizabeth Stakes",
    "Blue Diamond Stakes",
    "Stradbroke Handicap",
    "Railway Stakes",
    "Oakleigh Plate",
];

const EVENT_NAMES: &[&str] = &[
    "Storm vs Panthers",
    "Lakers vs Celtics",
    "Arsenal vs Chelsea",
    "Swans vs Magpies",
    "Warriors vs Broncos",
    "Bulls vs Knicks",
    "Real Madrid vs Barcelona",
    "Crusaders vs Blues",
    "Yankees vs Red Sox",
    "Tigers vs Bombers",
];

/// Creates the table and fills it with random example rows.
///
/// Start times are spread from one day in the past to two days ahead, so a
/// fresh store always has both open and closed records. Existing ids are
/// left untouched, so restarting against a file store does not duplicate.
#[derive(Debug, Clone)]
pub struct DemoSeed {
    count: i64,
    names: &'static [&'static str],
    max_grouping_id: i64,
    max_number: i64,
}

struct DemoRow {
    id: i64,
    grouping_id: i64,
    name: String,
    number: i64,
    visible: bool,
    advertised_start_time: String,
}

impl DemoSeed {
    /// 100 races over 10 meetings, race numbers 1 to 12.
    pub fn races() -> Self {
        Self {
            count: 100,
            names: RACE_NAMES,
            max_grouping_id: 10,
            max_number: 12,
        }
    }

    /// 100 sporting events over 10 competitions, rounds 1 to 30.
    pub fn events() -> Self {
        Self {
            count: 100,
            names: EVENT_NAMES,
            max_grouping_id: 10,
            max_number: 30,
        }
    }

    #[cfg(test)]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    fn rows(&self) -> Vec<DemoRow> {
        let mut rng = rand::rng();
        let now = Utc::now();

        (1..=self.count)
            .map(|id| {
                let offset = rng.random_range(
                    -Duration::days(1).num_seconds()..=Duration::days(2).num_seconds(),
                );
                let start = now + Duration::seconds(offset);
                DemoRow {
                    id,
                    grouping_id: rng.random_range(1..=self.max_grouping_id),
                    name: self.names.choose(&mut rng).copied().unwrap_or("Unnamed").to_string(),
                    number: rng.random_range(1..=self.max_number),
                    visible: rng.random_bool(0.5),
                    advertised_start_time: start.to_rfc3339_opts(SecondsFormat::Secs, true),
                }
            })
            .collect()
    }
}

#[async_trait]
impl<T: ListingTable> Seed<T> for DemoSeed {
    async fn seed(&self, pool: &SqlitePool) -> Result<()> {
        sqlx::query(T::CREATE_TABLE).execute(pool).await?;

        // ThreadRng is not Send, so rows are generated up front.
        let rows = self.rows();
        let mut tx = pool.begin().await?;

        for row in &rows {
            let (sql, values) = Query::insert()
                .into_table(T::TABLE)
                .columns(T::columns())
                .values([
                    row.id.into(),
                    row.grouping_id.into(),
                    row.name.as_str().into(),
                    row.number.into(),
                    row.visible.into(),
                    row.advertised_start_time.as_str().into(),
                ])?
                .on_conflict(OnConflict::column(T::ID).do_nothing().to_owned())
                .build(SqliteQueryBuilder);

            sqlx::query_with(&sql, SqlxValues(values))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        let table = T::TABLE.to_string();
        info!(table = %table, count = rows.len(), "Seeded demo data");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema::{Events, Races};

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_schema_seed_creates_empty_table() {
        let pool = crate::storage::connect("sqlite::memory:").await.unwrap();
        Seed::<Races>::seed(&SchemaSeed, &pool).await.unwrap();
        assert_eq!(count(&pool, "races").await, 0);
    }

    #[tokio::test]
    async fn test_demo_seed_inserts_requested_rows() {
        let pool = crate::storage::connect("sqlite::memory:").await.unwrap();
        let seed = DemoSeed::events().with_count(25);
        Seed::<Events>::seed(&seed, &pool).await.unwrap();
        assert_eq!(count(&pool, "events").await, 25);

        let out_of_range: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events WHERE competition_id NOT BETWEEN 1 AND 10",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(out_of_range, 0);
    }

    #[tokio::test]
    async fn test_demo_seed_is_idempotent_per_id() {
        let pool = crate::storage::connect("sqlite::memory:").await.unwrap();
        let seed = DemoSeed::races().with_count(10);
        Seed::<Races>::seed(&seed, &pool).await.unwrap();
        Seed::<Races>::seed(&seed, &pool).await.unwrap();
        assert_eq!(count(&pool, "races").await, 10);
    }
}
