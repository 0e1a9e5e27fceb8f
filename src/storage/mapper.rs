//! Row mapping and derived status.

use std::fmt;

use chrono::{DateTime, Utc};
use prost_types::Timestamp;
use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, Type};

use super::{MappingError, Result, StorageError};
use crate::proto::timestamp::from_datetime;

/// Column labels in mapper read order, for error messages.
const COLUMNS: [&str; 6] = [
    "id",
    "grouping_id",
    "name",
    "number",
    "visible",
    "advertised_start_time",
];

/// Source of the evaluation instant for derived status.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Read-time status of a listed record. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    /// `Closed` iff the start time is strictly before `now`.
    pub fn at(advertised_start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if advertised_start_time < now {
            Status::Closed
        } else {
            Status::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mapped row, before it is shaped into a domain message.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub id: i64,
    pub grouping_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    pub status: Status,
}

/// Map a single row read in the fixed listing column order.
pub fn map_row(row: &SqliteRow, now: DateTime<Utc>) -> std::result::Result<RecordFields, MappingError> {
    let width = row.len();
    if width != COLUMNS.len() {
        return Err(MappingError::Shape {
            expected: COLUMNS.len(),
            actual: width,
        });
    }

    let start: DateTime<Utc> = column(row, 5)?;
    let advertised_start_time = from_datetime(&start).ok_or(MappingError::Timestamp {
        seconds: start.timestamp(),
        nanos: start.timestamp_subsec_nanos(),
    })?;

    Ok(RecordFields {
        id: column(row, 0)?,
        grouping_id: column(row, 1)?,
        name: column(row, 2)?,
        number: column(row, 3)?,
        visible: column(row, 4)?,
        advertised_start_time,
        status: Status::at(start, now),
    })
}

/// Map fetched rows in order, evaluating status against one instant.
///
/// A `RowNotFound` from the data-access layer means "no rows" and yields an
/// empty list.
pub fn map_rows<R>(
    fetched: std::result::Result<Vec<SqliteRow>, sqlx::Error>,
    now: DateTime<Utc>,
    shape: impl Fn(RecordFields) -> R,
) -> Result<Vec<R>> {
    let rows = match fetched {
        Ok(rows) => rows,
        Err(sqlx::Error::RowNotFound) => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::Database(e)),
    };

    rows.iter()
        .map(|row| map_row(row, now).map(&shape).map_err(StorageError::from))
        .collect()
}

fn column<'r, T>(row: &'r SqliteRow, index: usize) -> std::result::Result<T, MappingError>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(index).map_err(|source| MappingError::Column {
        index,
        column: COLUMNS[index],
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    async fn fetch(sql: &str) -> Vec<SqliteRow> {
        let pool = crate::storage::connect("sqlite::memory:").await.unwrap();
        sqlx::query(sql).fetch_all(&pool).await.unwrap()
    }

    #[test]
    fn test_status_strictly_before_is_closed() {
        let now = instant(1_000);
        assert_eq!(Status::at(now - Duration::seconds(1), now), Status::Closed);
    }

    #[test]
    fn test_status_exactly_now_is_open() {
        let now = instant(1_000);
        assert_eq!(Status::at(now, now), Status::Open);
        assert_eq!(Status::at(now + Duration::seconds(1), now), Status::Open);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(Status::Open.to_string(), "OPEN");
        assert_eq!(Status::Closed.as_str(), "CLOSED");
    }

    #[tokio::test]
    async fn test_map_row_reads_fixed_column_order() {
        let rows = fetch("SELECT 7, 3, 'Ascot Gold Cup', 5, 1, '2024-01-01T00:00:00Z'").await;
        let fields = map_row(&rows[0], instant(0)).unwrap();

        assert_eq!(fields.id, 7);
        assert_eq!(fields.grouping_id, 3);
        assert_eq!(fields.name, "Ascot Gold Cup");
        assert_eq!(fields.number, 5);
        assert!(fields.visible);
        assert_eq!(fields.advertised_start_time.seconds, 1_704_067_200);
        assert_eq!(fields.status, Status::Open);
    }

    #[tokio::test]
    async fn test_map_row_rejects_wrong_width() {
        let rows = fetch("SELECT 1, 2").await;
        let err = map_row(&rows[0], instant(0)).unwrap_err();
        assert!(matches!(
            err,
            MappingError::Shape {
                expected: 6,
                actual: 2
            }
        ));
    }

    #[tokio::test]
    async fn test_map_row_rejects_unparseable_timestamp() {
        let rows = fetch("SELECT 1, 2, 'name', 3, 1, 'not a date'").await;
        let err = map_row(&rows[0], instant(0)).unwrap_err();
        assert!(matches!(err, MappingError::Column { index: 5, .. }));
    }

    #[tokio::test]
    async fn test_map_rows_aborts_on_first_bad_row() {
        let rows = fetch(
            "SELECT 1, 2, 'ok', 3, 1, '2024-01-01T00:00:00Z' \
             UNION ALL SELECT 2, 2, 'bad', 3, 1, 'garbage'",
        )
        .await;
        let result = map_rows(Ok(rows), instant(0), |f| f.id);
        assert!(matches!(result, Err(StorageError::Mapping(_))));
    }

    #[test]
    fn test_map_rows_translates_row_not_found_to_empty() {
        let mapped = map_rows(Err(sqlx::Error::RowNotFound), instant(0), |f| f.id).unwrap();
        assert!(mapped.is_empty());
    }

    #[test]
    fn test_map_rows_propagates_store_errors() {
        let result = map_rows(Err(sqlx::Error::PoolClosed), instant(0), |f| f.id);
        assert!(matches!(result, Err(StorageError::Database(_))));
    }
}
