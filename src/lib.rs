//! Racebook - racing and sports listings
//!
//! Read-only gRPC backends for races and sporting events, each over its own
//! SQLite store, fronted by a single HTTP/JSON gateway.

pub mod config;
pub mod handlers;
pub mod proto;
pub mod repository;
pub mod services;
pub mod storage;
pub mod transport;
pub mod utils;
