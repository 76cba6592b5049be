//! Membership verification
//!
//! Public lookup used by the association's frontend. A miss is a plain
//! `found: false` response, never an error; only a malformed identifier
//! or an empty query is rejected.

use shared::models::{AffiliateRecord, VerifyRequest, VerifyResponse};
use shared::{AppError, AppResult};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, affiliate};
use crate::utils::validation::validate_identifier;

/// Look up a membership by national ID or by full name.
///
/// When both are present the national ID wins. Name matching is a
/// case-insensitive substring match; with several hits the first in
/// name order is returned.
pub async fn verify(pool: &SqlitePool, query: VerifyRequest) -> AppResult<VerifyResponse> {
    let mut conn = pool.acquire().await.map_err(RepoError::from)?;

    if let Some(national_id) = query
        .national_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        let national_id = validate_identifier(national_id, "nationalId")?;
        let record = affiliate::find_by_national_id(&mut conn, &national_id).await?;
        return Ok(found_or_not(record));
    }

    if let Some(name) = query
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let record = affiliate::search_by_name(&mut conn, name)
            .await?
            .into_iter()
            .next();
        return Ok(found_or_not(record));
    }

    Err(AppError::invalid_request(
        "Provide a nationalId or a fullName to verify",
    ))
}

fn found_or_not(record: Option<AffiliateRecord>) -> VerifyResponse {
    VerifyResponse {
        found: record.is_some(),
        record,
    }
}
