//! Race listing.

use super::{Listing, SqliteRepository};
use crate::proto::racing::{ListRacesRequestFilter, Race};
use crate::storage::{ListFilter, Races, RecordFields};

/// Races are grouped by meeting.
pub struct RaceListing;

impl Listing for RaceListing {
    type Table = Races;
    type Record = Race;

    const DOMAIN: &'static str = "racing";

    fn into_record(fields: RecordFields) -> Race {
        Race {
            id: fields.id,
            meeting_id: fields.grouping_id,
            name: fields.name,
            number: fields.number,
            visible: fields.visible,
            advertised_start_time: Some(fields.advertised_start_time),
            status: fields.status.to_string(),
        }
    }
}

/// Repository access to races.
pub type RacesRepo = SqliteRepository<RaceListing>;

impl From<ListRacesRequestFilter> for ListFilter {
    fn from(filter: ListRacesRequestFilter) -> Self {
        Self {
            grouping_ids: filter.meeting_ids,
            visible_only: filter.visible_only,
            order_by: Some(filter.order_by).filter(|o| !o.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_filter_conversion() {
        let filter = ListFilter::from(ListRacesRequestFilter {
            meeting_ids: vec![5, 8],
            visible_only: true,
            order_by: "DESC".to_string(),
        });
        assert_eq!(filter.grouping_ids, vec![5, 8]);
        assert!(filter.visible_only);
        assert_eq!(filter.order_by.as_deref(), Some("DESC"));
    }

    #[test]
    fn test_empty_order_by_is_absent() {
        let filter = ListFilter::from(ListRacesRequestFilter::default());
        assert_eq!(filter, ListFilter::default());
    }
}
