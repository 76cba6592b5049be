//! Administrative mutations
//!
//! Each operation runs its record mutation and the matching audit append
//! inside one transaction: both commit together or neither does. A failure
//! on any path (validation, conflict, not-found, store fault) leaves the
//! audit log untouched.

use shared::models::{AffiliateCreate, AffiliateRecord, AffiliateUpdate, AuditAction};
use shared::{AppError, AppResult};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, affiliate, audit};
use crate::utils::validation::{normalize_optional, validate_identifier, validate_name};

/// Register a new affiliate and log the addition.
///
/// Conflict checks run in a fixed order, national ID before member number,
/// so a retrying caller sees at most one conflict per field in sequence.
pub async fn add(pool: &SqlitePool, data: AffiliateCreate) -> AppResult<AffiliateRecord> {
    let data = AffiliateCreate {
        national_id: validate_identifier(&data.national_id, "nationalId")?,
        member_number: validate_identifier(&data.member_number, "memberNumber")?,
        full_name: validate_name(&data.full_name, "fullName")?,
        category: normalize_optional(data.category),
        employer: normalize_optional(data.employer),
        admission_date: normalize_optional(data.admission_date),
    };
    let national_id = data.national_id.clone();
    let member_number = data.member_number.clone();
    let map = |e: RepoError| map_repo(e, &national_id, &member_number);

    let mut tx = pool.begin().await.map_err(|e| map(e.into()))?;

    let record = affiliate::insert(&mut tx, data).await.map_err(map)?;
    audit::append(&mut tx, AuditAction::Add, &record)
        .await
        .map_err(map)?;

    tx.commit().await.map_err(|e| map(e.into()))?;

    tracing::info!(national_id = %record.national_id, "Affiliate added");
    Ok(record)
}

/// Update the affiliate keyed by `national_id` and log the edit.
///
/// The national ID selects the target and is never itself changed.
pub async fn edit(
    pool: &SqlitePool,
    national_id: &str,
    data: AffiliateUpdate,
) -> AppResult<AffiliateRecord> {
    let national_id = validate_identifier(national_id, "nationalId")?;
    let data = AffiliateUpdate {
        member_number: validate_identifier(&data.member_number, "memberNumber")?,
        full_name: validate_name(&data.full_name, "fullName")?,
        category: normalize_optional(data.category),
        employer: normalize_optional(data.employer),
        admission_date: normalize_optional(data.admission_date),
    };
    let member_number = data.member_number.clone();
    let map = |e: RepoError| map_repo(e, &national_id, &member_number);

    let mut tx = pool.begin().await.map_err(|e| map(e.into()))?;

    let record = affiliate::update(&mut tx, &national_id, data)
        .await
        .map_err(map)?;
    audit::append(&mut tx, AuditAction::Edit, &record)
        .await
        .map_err(map)?;

    tx.commit().await.map_err(|e| map(e.into()))?;

    tracing::info!(national_id = %record.national_id, "Affiliate updated");
    Ok(record)
}

/// Delete the affiliate keyed by `national_id` and log the removal.
///
/// Returns the deleted record's snapshot; the audit entry carries the
/// same pre-delete values.
pub async fn remove(pool: &SqlitePool, national_id: &str) -> AppResult<AffiliateRecord> {
    let national_id = validate_identifier(national_id, "nationalId")?;
    let map = |e: RepoError| map_repo(e, &national_id, "");

    let mut tx = pool.begin().await.map_err(|e| map(e.into()))?;

    let snapshot = affiliate::delete(&mut tx, &national_id).await.map_err(map)?;
    audit::append(&mut tx, AuditAction::Delete, &snapshot)
        .await
        .map_err(map)?;

    tx.commit().await.map_err(|e| map(e.into()))?;

    tracing::info!(national_id = %snapshot.national_id, "Affiliate removed");
    Ok(snapshot)
}

/// Translate repository errors into the response taxonomy.
///
/// Duplicate messages name the violated column on both paths (explicit
/// pre-check and `UNIQUE` constraint race), which picks the conflict code.
fn map_repo(err: RepoError, national_id: &str, member_number: &str) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::affiliate_not_found(national_id),
        RepoError::Duplicate(msg) => {
            if msg.contains("national_id") {
                AppError::national_id_exists(national_id)
            } else {
                AppError::member_number_exists(member_number)
            }
        }
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::Unavailable(msg) => AppError::store_unavailable(msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}
