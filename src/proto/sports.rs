//! `sports.Sports` service contract.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListEventsRequest {
    #[prost(message, optional, tag = "1")]
    pub filter: Option<ListEventsRequestFilter>,
}

/// Filter for listing sporting events.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListEventsRequestFilter {
    #[prost(int64, repeated, tag = "1")]
    #[serde(with = "super::int64")]
    pub competition_ids: Vec<i64>,
    #[prost(bool, tag = "2")]
    pub visible_only: bool,
    #[prost(string, tag = "3")]
    pub order_by: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListEventsResponse {
    #[prost(message, repeated, tag = "1")]
    pub events: Vec<Event>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetEventRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

/// A sporting event.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(int64, tag = "2")]
    pub competition_id: i64,
    #[prost(string, tag = "3")]
    pub name: String,
    /// Round or fixture number within the competition.
    #[prost(int64, tag = "4")]
    pub number: i64,
    #[prost(bool, tag = "5")]
    pub visible: bool,
    #[prost(message, optional, tag = "6")]
    #[serde(with = "super::timestamp::rfc3339")]
    pub advertised_start_time: Option<prost_types::Timestamp>,
    #[prost(string, tag = "7")]
    pub status: String,
}

include!(concat!(env!("OUT_DIR"), "/sports.Sports.rs"));

pub use sports_client::SportsClient;
pub use sports_server::{Sports, SportsServer};
