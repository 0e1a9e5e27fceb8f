//! Racing routes.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use tonic::transport::Channel;

use super::{correlation_id, decode_body, path_id, DomainRoutes, GatewayError};
use crate::proto::correlated_request;
use crate::proto::racing::{GetRaceRequest, ListRacesRequest, ListRacesResponse, Race, RacingClient};

type Client = RacingClient<Channel>;

/// `POST /v1/list-races` and `GET /v1/races/:id`.
pub struct RacingRoutes;

impl DomainRoutes for RacingRoutes {
    const DOMAIN: &'static str = "racing";

    fn routes(channel: Channel) -> Router {
        Router::new()
            .route("/v1/list-races", post(list_races))
            .route("/v1/races/:id", get(get_race))
            .with_state(RacingClient::new(channel))
    }
}

async fn list_races(
    State(mut client): State<Client>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ListRacesResponse>, GatewayError> {
    let body: ListRacesRequest = decode_body(&body)?;
    let response = client
        .list_races(correlated_request(body, correlation_id(&headers)))
        .await?;
    Ok(Json(response.into_inner()))
}

async fn get_race(
    State(mut client): State<Client>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Race>, GatewayError> {
    let id = path_id(path)?;
    let response = client
        .get_race(correlated_request(GetRaceRequest { id }, correlation_id(&headers)))
        .await?;
    Ok(Json(response.into_inner()))
}
