//! Database schema definitions using sea-query.
//!
//! These define the table and column identifiers for type-safe query building.
//! Both listed tables share one shape; they differ only in names, which is
//! what `ListingTable` captures.

use sea_query::Iden;

/// A table served by the filtered list query.
///
/// Columns, in the fixed order the mapper reads them: id, grouping id, name,
/// number, visible, advertised start time.
pub trait ListingTable: Iden + Copy + Send + Sync + 'static {
    const TABLE: Self;
    const ID: Self;
    /// Column restricted by `ListFilter::grouping_ids`.
    const GROUPING_ID: Self;
    const NAME: Self;
    const NUMBER: Self;
    const VISIBLE: Self;
    const ADVERTISED_START_TIME: Self;

    /// DDL creating the table if it does not exist.
    const CREATE_TABLE: &'static str;

    fn columns() -> [Self; 6] {
        [
            Self::ID,
            Self::GROUPING_ID,
            Self::NAME,
            Self::NUMBER,
            Self::VISIBLE,
            Self::ADVERTISED_START_TIME,
        ]
    }
}

/// Races table schema.
#[derive(Iden, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Races {
    Table,
    #[iden = "id"]
    Id,
    #[iden = "meeting_id"]
    MeetingId,
    #[iden = "name"]
    Name,
    #[iden = "number"]
    Number,
    #[iden = "visible"]
    Visible,
    #[iden = "advertised_start_time"]
    AdvertisedStartTime,
}

impl ListingTable for Races {
    const TABLE: Self = Races::Table;
    const ID: Self = Races::Id;
    const GROUPING_ID: Self = Races::MeetingId;
    const NAME: Self = Races::Name;
    const NUMBER: Self = Races::Number;
    const VISIBLE: Self = Races::Visible;
    const ADVERTISED_START_TIME: Self = Races::AdvertisedStartTime;
    const CREATE_TABLE: &'static str = CREATE_RACES_TABLE;
}

/// Sporting events table schema.
#[derive(Iden, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Events {
    Table,
    #[iden = "id"]
    Id,
    #[iden = "competition_id"]
    CompetitionId,
    #[iden = "name"]
    Name,
    #[iden = "number"]
    Number,
    #[iden = "visible"]
    Visible,
    #[iden = "advertised_start_time"]
    AdvertisedStartTime,
}

impl ListingTable for Events {
    const TABLE: Self = Events::Table;
    const ID: Self = Events::Id;
    const GROUPING_ID: Self = Events::CompetitionId;
    const NAME: Self = Events::Name;
    const NUMBER: Self = Events::Number;
    const VISIBLE: Self = Events::Visible;
    const ADVERTISED_START_TIME: Self = Events::AdvertisedStartTime;
    const CREATE_TABLE: &'static str = CREATE_EVENTS_TABLE;
}

/// SQL for creating the races table.
pub const CREATE_RACES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS races (
    id INTEGER PRIMARY KEY,
    meeting_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    number INTEGER NOT NULL,
    visible BOOLEAN NOT NULL,
    advertised_start_time DATETIME NOT NULL
);
"#;

/// SQL for creating the events table.
pub const CREATE_EVENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY,
    competition_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    number INTEGER NOT NULL,
    visible BOOLEAN NOT NULL,
    advertised_start_time DATETIME NOT NULL
);
"#;
