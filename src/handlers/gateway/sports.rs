//! Sports routes.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use tonic::transport::Channel;

use super::{correlation_id, decode_body, path_id, DomainRoutes, GatewayError};
use crate::proto::correlated_request;
use crate::proto::sports::{
    Event, GetEventRequest, ListEventsRequest, ListEventsResponse, SportsClient,
};

type Client = SportsClient<Channel>;

/// `POST /v1/list-events` and `GET /v1/events/:id`.
pub struct SportsRoutes;

impl DomainRoutes for SportsRoutes {
    const DOMAIN: &'static str = "sports";

    fn routes(channel: Channel) -> Router {
        Router::new()
            .route("/v1/list-events", post(list_events))
            .route("/v1/events/:id", get(get_event))
            .with_state(SportsClient::new(channel))
    }
}

async fn list_events(
    State(mut client): State<Client>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ListEventsResponse>, GatewayError> {
    let body: ListEventsRequest = decode_body(&body)?;
    let response = client
        .list_events(correlated_request(body, correlation_id(&headers)))
        .await?;
    Ok(Json(response.into_inner()))
}

async fn get_event(
    State(mut client): State<Client>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Event>, GatewayError> {
    let id = path_id(path)?;
    let response = client
        .get_event(correlated_request(GetEventRequest { id }, correlation_id(&headers)))
        .await?;
    Ok(Json(response.into_inner()))
}
