//! HTTP-facing handlers.

pub mod gateway;
