//! Credential API module
//!
//! The route accepts both GET (direct download link) and POST (lookup
//! form submission); both produce the same PDF.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/credential",
        get(handler::download).post(handler::download_post),
    )
}
