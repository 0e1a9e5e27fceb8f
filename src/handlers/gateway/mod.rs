//! HTTP/JSON gateway in front of the racing and sports gRPC backends.
//!
//! Each backend domain is registered against its own endpoint and
//! contributes a route table; the merged router is served on one listener.

mod errmsg;
mod racing;
mod sports;
mod status;

pub use racing::RacingRoutes;
pub use sports::SportsRoutes;
pub use status::GatewayError;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::proto::CORRELATION_ID_HEADER;

/// A backend domain the gateway can front.
pub trait DomainRoutes {
    /// Name used to detect duplicate registration and in logs.
    const DOMAIN: &'static str;

    /// Route table translating HTTP calls into RPCs over `channel`.
    fn routes(channel: Channel) -> Router;
}

/// Errors that abort gateway startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Empty endpoint for domain {domain}")]
    EmptyEndpoint { domain: &'static str },

    #[error("Malformed endpoint {endpoint:?} for domain {domain}: {reason}")]
    MalformedEndpoint {
        domain: &'static str,
        endpoint: String,
        reason: String,
    },

    #[error("Domain {0} registered twice")]
    DuplicateDomain(&'static str),
}

/// Collects domain registrations into one router.
#[derive(Default)]
pub struct GatewayBuilder {
    router: Router,
    domains: Vec<&'static str>,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register domain `D` against a backend at `endpoint` (`host:port`,
    /// optionally with an `http://` scheme).
    ///
    /// The connection is lazy: no network I/O happens here, and an
    /// unreachable backend only surfaces when a request is forwarded.
    /// Must be called within a Tokio runtime.
    pub fn register<D: DomainRoutes>(mut self, endpoint: &str) -> Result<Self, RegistrationError> {
        if self.domains.contains(&D::DOMAIN) {
            return Err(RegistrationError::DuplicateDomain(D::DOMAIN));
        }

        let channel = backend_channel(D::DOMAIN, endpoint)?;
        self.router = self.router.merge(D::routes(channel));
        self.domains.push(D::DOMAIN);

        info!(domain = D::DOMAIN, endpoint = %endpoint, "Registered backend");
        Ok(self)
    }

    /// Domains registered so far, in registration order.
    pub fn domains(&self) -> &[&'static str] {
        &self.domains
    }

    /// Finish the router: adds `/healthz` and HTTP request tracing.
    pub fn build(self) -> Router {
        self.router
            .route("/healthz", get(healthz))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let correlation_id = correlation_id(request.headers());
                tracing::info_span!(
                    "http",
                    method = %request.method(),
                    path = %request.uri().path(),
                    %correlation_id,
                )
            }))
    }
}

/// Parse `endpoint` and open a lazy plaintext channel to it.
///
/// TODO: TLS to backends once deployments terminate it in-cluster.
fn backend_channel(domain: &'static str, endpoint: &str) -> Result<Channel, RegistrationError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(RegistrationError::EmptyEndpoint { domain });
    }

    let malformed = |reason: String| RegistrationError::MalformedEndpoint {
        domain,
        endpoint: endpoint.to_string(),
        reason,
    };

    let uri = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    };

    let parsed = Endpoint::from_shared(uri).map_err(|e| malformed(e.to_string()))?;
    if parsed.uri().host().map_or(true, str::is_empty) {
        return Err(malformed("missing host".to_string()));
    }

    Ok(parsed.connect_lazy())
}

/// Correlation ID from request headers, empty when absent or not ASCII.
pub(crate) fn correlation_id(headers: &HeaderMap) -> &str {
    headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Decode a JSON request body. Content-Type is not checked, and an empty
/// body decodes to the default message.
pub(crate) fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| GatewayError(Status::invalid_argument(format!("Invalid request body: {e}"))))
}

/// Record id from the path, or InvalidArgument.
pub(crate) fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, GatewayError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        GatewayError(Status::invalid_argument(format!(
            "Invalid id: {}",
            rejection.body_text()
        )))
    })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Serve the gateway router on `endpoint` until Ctrl-C.
pub async fn serve(
    router: Router,
    endpoint: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = tokio::net::TcpListener::bind(endpoint).await?;
    info!(address = %listener.local_addr()?, "Gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(crate::transport::shutdown_signal())
        .await?;
    Ok(())
}
