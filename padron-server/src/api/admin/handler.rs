//! Admin API Handlers
//!
//! Request bodies use camelCase JSON keys; responses use the unified
//! `ApiResponse` envelope. The PIN gate has already run by the time any
//! of these handlers execute.

use axum::extract::{Json, Query, State};
use serde::Deserialize;

use crate::affiliates::service;
use crate::core::ServerState;
use crate::db::repository::{RepoError, audit};
use shared::models::{
    AffiliateCreate, AffiliateRecord, AffiliateUpdate, AuditListResponse, AuditQuery,
};
use shared::{ApiResponse, AppResult};

/// Hard cap on one audit log page
const MAX_LOG_LIMIT: usize = 100;

/// PUT /api/admin/edit body: target key plus replacement fields
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    pub national_id: String,
    pub full_name: String,
    pub member_number: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub admission_date: Option<String>,
}

/// POST /api/admin/remove body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRequest {
    pub national_id: String,
}

/// POST /api/admin/add - register a new affiliate
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<AffiliateCreate>,
) -> AppResult<ApiResponse<AffiliateRecord>> {
    let record = service::add(&state.pool, payload).await?;
    Ok(ApiResponse::success(record))
}

/// PUT /api/admin/edit - update the affiliate keyed by nationalId
pub async fn edit(
    State(state): State<ServerState>,
    Json(payload): Json<EditRequest>,
) -> AppResult<ApiResponse<AffiliateRecord>> {
    let update = AffiliateUpdate {
        full_name: payload.full_name,
        member_number: payload.member_number,
        category: payload.category,
        employer: payload.employer,
        admission_date: payload.admission_date,
    };
    let record = service::edit(&state.pool, &payload.national_id, update).await?;
    Ok(ApiResponse::success(record))
}

/// POST /api/admin/remove - delete the affiliate, returning its snapshot
pub async fn remove(
    State(state): State<ServerState>,
    Json(payload): Json<RemoveRequest>,
) -> AppResult<ApiResponse<AffiliateRecord>> {
    let snapshot = service::remove(&state.pool, &payload.national_id).await?;
    Ok(ApiResponse::success(snapshot))
}

/// GET /api/admin/logs?limit=&offset= - audit entries, most recent first
pub async fn logs(
    State(state): State<ServerState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<ApiResponse<AuditListResponse>> {
    let limit = query.limit.min(MAX_LOG_LIMIT);

    let mut conn = state.pool.acquire().await.map_err(RepoError::from)?;
    let items = audit::list_recent(&mut conn, limit, query.offset).await?;
    let total = audit::count(&mut conn).await?;

    Ok(ApiResponse::success(AuditListResponse { items, total }))
}
