//! Racing service.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use super::storage_status;
use crate::proto::racing::{
    GetRaceRequest, ListRacesRequest, ListRacesResponse, Race, Racing,
};
use crate::repository::{Lookup, Repository};
use crate::storage::ListFilter;

/// Answers `racing.Racing` calls from a race repository.
pub struct RacingService {
    repo: Arc<dyn Repository<Race>>,
}

impl RacingService {
    pub fn new(repo: Arc<dyn Repository<Race>>) -> Self {
        Self { repo }
    }
}

#[tonic::async_trait]
impl Racing for RacingService {
    async fn list_races(
        &self,
        request: Request<ListRacesRequest>,
    ) -> Result<Response<ListRacesResponse>, Status> {
        let filter = request.into_inner().filter.map(ListFilter::from);

        let races = self
            .repo
            .list(filter.as_ref())
            .await
            .map_err(|e| storage_status("racing", "list races", e))?;

        debug!(count = races.len(), "Listed races");
        Ok(Response::new(ListRacesResponse { races }))
    }

    async fn get_race(&self, request: Request<GetRaceRequest>) -> Result<Response<Race>, Status> {
        let id = request.into_inner().id;

        match self
            .repo
            .get(id)
            .await
            .map_err(|e| storage_status("racing", "get race", e))?
        {
            Lookup::Found(race) => Ok(Response::new(race)),
            Lookup::NotFound => Err(Status::not_found(format!("Race {id} not found"))),
        }
    }
}
