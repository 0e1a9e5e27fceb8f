//! `racing.Racing` service contract.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesRequest {
    #[prost(message, optional, tag = "1")]
    pub filter: Option<ListRacesRequestFilter>,
}

/// Filter for listing races.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesRequestFilter {
    #[prost(int64, repeated, tag = "1")]
    #[serde(with = "super::int64")]
    pub meeting_ids: Vec<i64>,
    /// Only return races flagged visible.
    #[prost(bool, tag = "2")]
    pub visible_only: bool,
    /// "ASC" or "DESC" on advertised start time; anything else keeps the default.
    #[prost(string, tag = "3")]
    pub order_by: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesResponse {
    #[prost(message, repeated, tag = "1")]
    pub races: Vec<Race>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRaceRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

/// A race definition.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Race {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(int64, tag = "2")]
    pub meeting_id: i64,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(int64, tag = "4")]
    pub number: i64,
    #[prost(bool, tag = "5")]
    pub visible: bool,
    #[prost(message, optional, tag = "6")]
    #[serde(with = "super::timestamp::rfc3339")]
    pub advertised_start_time: Option<prost_types::Timestamp>,
    /// "OPEN" or "CLOSED", derived at read time.
    #[prost(string, tag = "7")]
    pub status: String,
}

include!(concat!(env!("OUT_DIR"), "/racing.Racing.rs"));

pub use racing_client::RacingClient;
pub use racing_server::{Racing, RacingServer};
