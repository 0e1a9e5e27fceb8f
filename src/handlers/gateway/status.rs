//! RPC status to HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tonic::{Code, Status};
use tracing::{debug, warn};

use super::errmsg;

/// A failed backend call, rendered as an HTTP error.
#[derive(Debug)]
pub struct GatewayError(pub Status);

impl From<Status> for GatewayError {
    fn from(status: Status) -> Self {
        Self(status)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: i32,
    message: &'a str,
    details: Vec<serde_json::Value>,
}

/// HTTP status for a gRPC code, following the standard grpc-gateway table.
pub fn http_status(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::Cancelled => StatusCode::from_u16(499).unwrap_or(StatusCode::BAD_REQUEST),
        Code::InvalidArgument | Code::OutOfRange | Code::FailedPrecondition => {
            StatusCode::BAD_REQUEST
        }
        Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists | Code::Aborted => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::Unknown | Code::Internal | Code::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.0;
        let code = status.code();

        let message = match code {
            Code::Unavailable => {
                warn!(error = %status.message(), "Backend unavailable");
                errmsg::SERVICE_UNAVAILABLE
            }
            Code::Unknown | Code::Internal | Code::DataLoss => {
                warn!(code = ?code, error = %status.message(), "Backend call failed");
                errmsg::INTERNAL_ERROR
            }
            _ => {
                debug!(code = ?code, error = %status.message(), "Backend returned error");
                status.message()
            }
        };

        let body = ErrorBody {
            code: code as i32,
            message,
            details: Vec::new(),
        };
        (http_status(code), Json(body)).into_response()
    }
}
