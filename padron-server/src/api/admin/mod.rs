//! Admin API module
//!
//! Every route here sits behind the PIN gate (`require_admin_pin`).

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/add", post(handler::add))
        .route("/api/admin/edit", put(handler::edit))
        .route("/api/admin/remove", post(handler::remove))
        .route("/api/admin/logs", get(handler::logs))
}
