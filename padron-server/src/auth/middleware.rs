//! Access gate middleware
//!
//! Guards the administrative routes with the shared PIN before any
//! handler or store code runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::security_log;
use shared::AppError;

/// Admin gate - requires a valid `x-admin-pin` header on `/api/admin/` routes
///
/// The candidate is compared against the configured PIN as SHA-256 digests
/// (exact equality, no length or prefix leak). Mismatch or absence yields
/// 403 with the structured error envelope.
///
/// # Skipped requests
///
/// - `OPTIONS *` (CORS preflight)
/// - any path outside `/api/admin`
pub async fn require_admin_pin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Allow CORS preflight through (the browser never sends custom headers here)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !req.uri().path().starts_with("/api/admin") {
        return Ok(next.run(req).await);
    }

    let pin = req
        .headers()
        .get("x-admin-pin")
        .and_then(|h| h.to_str().ok());

    match pin {
        Some(candidate) if state.verify_pin(candidate) => Ok(next.run(req).await),
        Some(_) => {
            security_log!(
                "WARN",
                "admin_pin_rejected",
                uri = format!("{:?}", req.uri())
            );
            Err(AppError::access_denied("Invalid admin PIN"))
        }
        None => {
            security_log!(
                "WARN",
                "admin_pin_missing",
                uri = format!("{:?}", req.uri())
            );
            Err(AppError::access_denied("Missing x-admin-pin header"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use axum::{Router, body::Body, middleware, routing::get};
    use http::StatusCode;
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    async fn gated_router() -> Router {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let state = ServerState::new(Config::with_overrides("/tmp/padron-gate-test", 0, "2468"), pool);

        Router::new()
            .route("/api/admin/ping", get(|| async { "pong" }))
            .route("/api/verify", get(|| async { "open" }))
            .layer(middleware::from_fn_with_state(state, require_admin_pin))
    }

    fn request(method: &str, uri: &str, pin: Option<&str>) -> Request {
        let mut builder = http::Request::builder().method(method).uri(uri);
        if let Some(pin) = pin {
            builder = builder.header("x-admin-pin", pin);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_admin_route_requires_pin() {
        let app = gated_router().await;

        let missing = app
            .clone()
            .oneshot(request("GET", "/api/admin/ping", None))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::FORBIDDEN);

        let wrong = app
            .clone()
            .oneshot(request("GET", "/api/admin/ping", Some("0000")))
            .await
            .unwrap();
        assert_eq!(wrong.status(), StatusCode::FORBIDDEN);

        let right = app
            .oneshot(request("GET", "/api/admin/ping", Some("2468")))
            .await
            .unwrap();
        assert_eq!(right.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_admin_routes_pass() {
        let app = gated_router().await;

        let open = app
            .oneshot(request("GET", "/api/verify", None))
            .await
            .unwrap();
        assert_eq!(open.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preflight_skips_gate() {
        let app = gated_router().await;

        let preflight = app
            .oneshot(request("OPTIONS", "/api/admin/ping", None))
            .await
            .unwrap();
        assert_ne!(preflight.status(), StatusCode::FORBIDDEN);
    }
}
