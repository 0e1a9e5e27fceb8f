//! Sports service.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use super::storage_status;
use crate::proto::sports::{
    Event, GetEventRequest, ListEventsRequest, ListEventsResponse, Sports,
};
use crate::repository::{Lookup, Repository};
use crate::storage::ListFilter;

/// Answers `sports.Sports` calls from an event repository.
pub struct SportsService {
    repo: Arc<dyn Repository<Event>>,
}

impl SportsService {
    pub fn new(repo: Arc<dyn Repository<Event>>) -> Self {
        Self { repo }
    }
}

#[tonic::async_trait]
impl Sports for SportsService {
    async fn list_events(
        &self,
        request: Request<ListEventsRequest>,
    ) -> Result<Response<ListEventsResponse>, Status> {
        let filter = request.into_inner().filter.map(ListFilter::from);

        let events = self
            .repo
            .list(filter.as_ref())
            .await
            .map_err(|e| storage_status("sports", "list events", e))?;

        debug!(count = events.len(), "Listed events");
        Ok(Response::new(ListEventsResponse { events }))
    }

    async fn get_event(
        &self,
        request: Request<GetEventRequest>,
    ) -> Result<Response<Event>, Status> {
        let id = request.into_inner().id;

        match self
            .repo
            .get(id)
            .await
            .map_err(|e| storage_status("sports", "get event", e))?
        {
            Lookup::Found(event) => Ok(Response::new(event)),
            Lookup::NotFound => Err(Status::not_found(format!("Event {id} not found"))),
        }
    }
}
