//! gRPC server plumbing shared by the backend binaries.

use std::future::Future;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::service::Routes;
use tonic::transport::server::Router;
use tower::Layer;
use tower::Service;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::proto::CORRELATION_ID_HEADER;

/// Bind `endpoint` (`host:port`) and serve the gRPC router until Ctrl-C.
pub async fn serve_grpc<L, ResBody>(
    router: Router<L>,
    endpoint: &str,
    service_name: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    L: Layer<Routes> + Clone,
    L::Service: Service<http::Request<tonic::body::BoxBody>, Response = http::Response<ResBody>>
        + Clone
        + Send
        + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Future: Send + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Error:
        Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    ResBody: http_body::Body<Data = bytes::Bytes> + Send + 'static,
    ResBody::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let listener = TcpListener::bind(endpoint).await?;
    serve_with_listener(router, listener, service_name, shutdown_signal()).await
}

/// Serve the gRPC router on an already bound listener until `signal`
/// completes.
///
/// Binding first lets callers use port 0 and read the assigned address.
pub async fn serve_with_listener<L, ResBody, F>(
    router: Router<L>,
    listener: TcpListener,
    service_name: &str,
    signal: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    L: Layer<Routes> + Clone,
    L::Service: Service<http::Request<tonic::body::BoxBody>, Response = http::Response<ResBody>>
        + Clone
        + Send
        + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Future: Send + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Error:
        Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    ResBody: http_body::Body<Data = bytes::Bytes> + Send + 'static,
    ResBody::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    F: Future<Output = ()> + Send,
{
    info!(
        service = %service_name,
        address = %listener.local_addr()?,
        transport = "tcp",
        "Server listening"
    );

    router
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
        .await?;

    info!(service = %service_name, "Server stopped");
    Ok(())
}

/// Completes on Ctrl-C.
///
/// If the signal handler cannot be installed this never completes, so the
/// server keeps running instead of stopping at once.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}

/// Tower trace layer that extracts `x-correlation-id` from gRPC request headers.
///
/// Creates a tracing span per request with the correlation_id, enabling
/// all downstream tracing to inherit it automatically. This works at the HTTP
/// layer, before tonic deserializes the protobuf body.
pub fn grpc_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::GrpcErrorsAsFailures>,
    impl Fn(&http::Request<tonic::body::BoxBody>) -> tracing::Span + Clone,
> {
    TraceLayer::new_for_grpc().make_span_with(|request: &http::Request<tonic::body::BoxBody>| {
        let correlation_id = request
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let path = request.uri().path();
        tracing::info_span!("grpc", %correlation_id, %path)
    })
}
