//! Verification API Handlers

use axum::extract::{Json, State};

use crate::affiliates::lookup;
use crate::core::ServerState;
use shared::models::{VerifyRequest, VerifyResponse};
use shared::{ApiResponse, AppResult};

/// POST /api/verify - check membership by national ID or full name
///
/// A miss answers `found: false` inside a success envelope; only a
/// malformed identifier or an empty query is an error.
pub async fn verify(
    State(state): State<ServerState>,
    Json(payload): Json<VerifyRequest>,
) -> AppResult<ApiResponse<VerifyResponse>> {
    let result = lookup::verify(&state.pool, payload).await?;
    Ok(ApiResponse::success(result))
}
