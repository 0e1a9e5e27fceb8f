//! Sporting event listing.

use super::{Listing, SqliteRepository};
use crate::proto::sports::{Event, ListEventsRequestFilter};
use crate::storage::{Events, ListFilter, RecordFields};

/// Sporting events are grouped by competition.
pub struct EventListing;

impl Listing for EventListing {
    type Table = Events;
    type Record = Event;

    const DOMAIN: &'static str = "sports";

    fn into_record(fields: RecordFields) -> Event {
        Event {
            id: fields.id,
            competition_id: fields.grouping_id,
            name: fields.name,
            number: fields.number,
            visible: fields.visible,
            advertised_start_time: Some(fields.advertised_start_time),
            status: fields.status.to_string(),
        }
    }
}

/// Repository access to sporting events.
pub type EventsRepo = SqliteRepository<EventListing>;

impl From<ListEventsRequestFilter> for ListFilter {
    fn from(filter: ListEventsRequestFilter) -> Self {
        Self {
            grouping_ids: filter.competition_ids,
            visible_only: filter.visible_only,
            order_by: Some(filter.order_by).filter(|o| !o.is_empty()),
        }
    }
}
