//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness and store check
//! - [`verify`] - public membership verification
//! - [`credential`] - membership credential PDF
//! - [`admin`] - gated administrative mutations and the audit log

pub mod admin;
pub mod credential;
pub mod health;
pub mod verify;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Method, header};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_admin_pin;
use crate::core::{Config, ServerState};

/// UUID-v4 request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: axum_middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// CORS layer pinned to the configured frontend origin
///
/// `ALLOWED_ORIGIN=*` selects the permissive layer (development).
fn cors_layer(config: &Config) -> CorsLayer {
    if config.allowed_origin == "*" {
        return CorsLayer::permissive();
    }
    match config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static("x-admin-pin"),
            ]),
        Err(_) => {
            tracing::warn!(
                "Invalid ALLOWED_ORIGIN {:?}, falling back to permissive CORS",
                config.allowed_origin
            );
            CorsLayer::permissive()
        }
    }
}

/// All routes merged; middleware and state are applied by [`build_app`]
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Liveness - public
        .merge(health::router())
        // Public lookup APIs
        .merge(verify::router())
        .merge(credential::router())
        // Admin API - PIN gate required
        .merge(admin::router())
}

/// Build the fully configured application: routes, gate, middleware, state
///
/// Used by both the HTTP server and the integration tests.
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // Admin PIN gate - sits directly in front of the routes
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_admin_pin,
        ))
        .with_state(state.clone())
        // ========== Tower HTTP Middleware ==========
        // CORS - pinned to the configured frontend origin
        .layer(cors_layer(&state.config))
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - per-request spans
        .layer(TraceLayer::new_for_http())
        // Request ID - set one per request, echo it on the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Access log - outermost, sees the final status
        .layer(axum_middleware::from_fn(log_request))
}
