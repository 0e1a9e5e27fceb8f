//! Wire contracts for the racing and sports services.
//!
//! Messages are plain prost structs (standard protobuf wire format, no
//! `.proto` files). Service traits, servers and clients are generated by
//! `build.rs`. The same structs double as the gateway's JSON bodies, so they
//! also derive serde with camelCase field names.

pub mod int64;
pub mod racing;
pub mod sports;
pub mod timestamp;

/// gRPC metadata key (and HTTP header) for correlation ID propagation.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Wrap a message in a tonic request, attaching the correlation ID as
/// metadata when one is present.
pub fn correlated_request<T>(msg: T, correlation_id: &str) -> tonic::Request<T> {
    let mut req = tonic::Request::new(msg);
    if !correlation_id.is_empty() {
        if let Ok(val) = correlation_id.parse() {
            req.metadata_mut().insert(CORRELATION_ID_HEADER, val);
        }
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlated_request_sets_metadata() {
        let req = correlated_request((), "corr-1");
        assert_eq!(
            req.metadata().get(CORRELATION_ID_HEADER).unwrap(),
            "corr-1"
        );
    }

    #[test]
    fn test_correlated_request_skips_empty_id() {
        let req = correlated_request((), "");
        assert!(req.metadata().get(CORRELATION_ID_HEADER).is_none());
    }
}
