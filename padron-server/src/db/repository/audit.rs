//! Audit Log Repository
//!
//! Append-only. Rows are never updated or deleted; the `timestamp` is
//! assigned here, never taken from a caller.

use super::RepoResult;
use shared::models::{AffiliateRecord, AuditAction, AuditLogEntry};
use sqlx::SqliteConnection;

const AUDIT_SELECT: &str =
    "SELECT id, action, national_id, full_name, member_number, timestamp FROM audit_log";

/// Append one entry snapshotting `record` at the time of `action`.
///
/// For [`AuditAction::Delete`] the caller passes the pre-delete snapshot.
pub async fn append(
    conn: &mut SqliteConnection,
    action: AuditAction,
    record: &AffiliateRecord,
) -> RepoResult<AuditLogEntry> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "INSERT INTO audit_log (action, national_id, full_name, member_number, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(action)
    .bind(&record.national_id)
    .bind(&record.full_name)
    .bind(&record.member_number)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(AuditLogEntry {
        id: result.last_insert_rowid(),
        action,
        national_id: record.national_id.clone(),
        full_name: record.full_name.clone(),
        member_number: record.member_number.clone(),
        timestamp: now,
    })
}

/// Most recent entries first. `id` is the ordering key so entries written
/// within the same millisecond still list in append order.
pub async fn list_recent(
    conn: &mut SqliteConnection,
    limit: usize,
    offset: usize,
) -> RepoResult<Vec<AuditLogEntry>> {
    let sql = format!("{AUDIT_SELECT} ORDER BY id DESC LIMIT ? OFFSET ?");
    let rows = sqlx::query_as::<_, AuditLogEntry>(&sql)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

pub async fn count(conn: &mut SqliteConnection) -> RepoResult<usize> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM audit_log")
        .fetch_one(&mut *conn)
        .await?;
    Ok(total as usize)
}
