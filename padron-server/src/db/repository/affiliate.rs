//! Affiliate Repository

use super::{RepoError, RepoResult};
use shared::models::{AffiliateCreate, AffiliateRecord, AffiliateUpdate};
use sqlx::SqliteConnection;

const AFFILIATE_SELECT: &str = "SELECT id, national_id, member_number, full_name, category, employer, admission_date, created_at, updated_at FROM affiliate";

pub async fn find_by_national_id(
    conn: &mut SqliteConnection,
    national_id: &str,
) -> RepoResult<Option<AffiliateRecord>> {
    let sql = format!("{AFFILIATE_SELECT} WHERE national_id = ?");
    let row = sqlx::query_as::<_, AffiliateRecord>(&sql)
        .bind(national_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn find_by_member_number(
    conn: &mut SqliteConnection,
    member_number: &str,
) -> RepoResult<Option<AffiliateRecord>> {
    let sql = format!("{AFFILIATE_SELECT} WHERE member_number = ?");
    let row = sqlx::query_as::<_, AffiliateRecord>(&sql)
        .bind(member_number)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// Substring match on the full name, ordered by name.
///
/// SQLite `LIKE` is case-insensitive for ASCII letters, which covers the
/// registry's unaccented uppercase names.
pub async fn search_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> RepoResult<Vec<AffiliateRecord>> {
    let pattern = format!("%{name}%");
    let sql = format!(
        "{AFFILIATE_SELECT} WHERE full_name LIKE ?1 ORDER BY full_name COLLATE NOCASE"
    );
    let rows = sqlx::query_as::<_, AffiliateRecord>(&sql)
        .bind(&pattern)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// Insert a new affiliate.
///
/// Conflicts are pre-checked in a fixed order, `national_id` first, so the
/// caller gets a distinguishable reason per field. The `UNIQUE` constraints
/// remain the final arbiter under concurrency; a constraint race surfaces
/// as the same [`RepoError::Duplicate`] naming the violated column.
pub async fn insert(
    conn: &mut SqliteConnection,
    data: AffiliateCreate,
) -> RepoResult<AffiliateRecord> {
    if find_by_national_id(conn, &data.national_id).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "national_id {} is already registered",
            data.national_id
        )));
    }
    if find_by_member_number(conn, &data.member_number)
        .await?
        .is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "member_number {} is already registered",
            data.member_number
        )));
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO affiliate (national_id, member_number, full_name, category, employer, admission_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
    )
    .bind(&data.national_id)
    .bind(&data.member_number)
    .bind(&data.full_name)
    .bind(&data.category)
    .bind(&data.employer)
    .bind(&data.admission_date)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    find_by_national_id(conn, &data.national_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create affiliate".into()))
}

/// Replace the mutable fields of the record keyed by `national_id`.
///
/// The key itself is never changed. Optional fields are written as given,
/// so an absent option clears the stored value.
pub async fn update(
    conn: &mut SqliteConnection,
    national_id: &str,
    data: AffiliateUpdate,
) -> RepoResult<AffiliateRecord> {
    let existing = find_by_national_id(conn, national_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Affiliate {national_id} not found")))?;

    // The new member_number must not belong to a different record
    if data.member_number != existing.member_number
        && find_by_member_number(conn, &data.member_number)
            .await?
            .is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "member_number {} is already registered",
            data.member_number
        )));
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE affiliate SET member_number = ?1, full_name = ?2, category = ?3, employer = ?4, admission_date = ?5, updated_at = ?6 WHERE national_id = ?7",
    )
    .bind(&data.member_number)
    .bind(&data.full_name)
    .bind(&data.category)
    .bind(&data.employer)
    .bind(&data.admission_date)
    .bind(now)
    .bind(national_id)
    .execute(&mut *conn)
    .await?;

    find_by_national_id(conn, national_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Affiliate {national_id} not found")))
}

/// Delete the record keyed by `national_id`, returning its last state.
///
/// The returned snapshot feeds the audit log's Delete entry.
pub async fn delete(
    conn: &mut SqliteConnection,
    national_id: &str,
) -> RepoResult<AffiliateRecord> {
    let existing = find_by_national_id(conn, national_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Affiliate {national_id} not found")))?;

    sqlx::query("DELETE FROM affiliate WHERE national_id = ?")
        .bind(national_id)
        .execute(&mut *conn)
        .await?;

    Ok(existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE affiliate (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                national_id TEXT NOT NULL UNIQUE,
                member_number TEXT NOT NULL UNIQUE,
                full_name TEXT NOT NULL,
                category TEXT,
                employer TEXT,
                admission_date TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    fn juan() -> AffiliateCreate {
        AffiliateCreate {
            national_id: "30111222".into(),
            full_name: "Juan Perez".into(),
            member_number: "1001".into(),
            category: Some("Activo".into()),
            employer: None,
            admission_date: Some("2020-03-01".into()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let record = insert(&mut conn, juan()).await.unwrap();
        assert!(record.id > 0);
        assert_eq!(record.national_id, "30111222");
        assert_eq!(record.member_number, "1001");
        assert_eq!(record.category.as_deref(), Some("Activo"));
        assert!(record.created_at > 0);
        assert_eq!(record.created_at, record.updated_at);

        let found = find_by_national_id(&mut conn, "30111222").await.unwrap();
        assert_eq!(found, Some(record.clone()));

        let by_number = find_by_member_number(&mut conn, "1001").await.unwrap();
        assert_eq!(by_number, Some(record));

        assert!(
            find_by_national_id(&mut conn, "99999999")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_insert_duplicate_national_id_checked_first() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, juan()).await.unwrap();

        // Same national_id AND same member_number: the national_id check wins
        let err = insert(&mut conn, juan()).await.unwrap_err();
        match err {
            RepoError::Duplicate(msg) => assert!(msg.contains("national_id")),
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_duplicate_member_number() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, juan()).await.unwrap();

        let mut other = juan();
        other.national_id = "28000555".into();
        let err = insert(&mut conn, other).await.unwrap_err();
        match err {
            RepoError::Duplicate(msg) => assert!(msg.contains("member_number")),
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unique_constraint_maps_to_duplicate() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, juan()).await.unwrap();

        // Bypass the pre-checks to hit the constraint directly
        let err = sqlx::query(
            "INSERT INTO affiliate (national_id, member_number, full_name, created_at, updated_at) VALUES ('30111222', '9999', 'X', 0, 0)",
        )
        .execute(&mut *conn)
        .await
        .unwrap_err();

        match RepoError::from(err) {
            RepoError::Duplicate(msg) => assert!(msg.contains("national_id")),
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_by_name() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let mut a = juan();
        a.full_name = "PEREZ JUAN".into();
        insert(&mut conn, a).await.unwrap();

        let mut b = juan();
        b.national_id = "28000555".into();
        b.member_number = "1002".into();
        b.full_name = "GOMEZ MARIA".into();
        insert(&mut conn, b).await.unwrap();

        let mut c = juan();
        c.national_id = "27000111".into();
        c.member_number = "1003".into();
        c.full_name = "PEREYRA LUIS".into();
        insert(&mut conn, c).await.unwrap();

        // Case-insensitive substring, ordered by name
        let hits = search_by_name(&mut conn, "pere").await.unwrap();
        let names: Vec<_> = hits.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["PEREYRA LUIS", "PEREZ JUAN"]);

        assert!(search_by_name(&mut conn, "lopez").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, juan()).await.unwrap();

        let updated = update(
            &mut conn,
            "30111222",
            AffiliateUpdate {
                full_name: "Juan A. Perez".into(),
                member_number: "1001".into(),
                category: None,
                employer: Some("Transportes Andes".into()),
                admission_date: Some("2020-03-01".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.full_name, "Juan A. Perez");
        assert_eq!(updated.national_id, "30111222");
        // Absent option cleared the stored category
        assert_eq!(updated.category, None);
        assert_eq!(updated.employer.as_deref(), Some("Transportes Andes"));
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let err = update(
            &mut conn,
            "99999999",
            AffiliateUpdate {
                full_name: "Nadie".into(),
                member_number: "1".into(),
                category: None,
                employer: None,
                admission_date: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_member_number_collision() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, juan()).await.unwrap();

        let mut other = juan();
        other.national_id = "28000555".into();
        other.member_number = "1002".into();
        insert(&mut conn, other).await.unwrap();

        // Try to steal 1001 for the second record
        let err = update(
            &mut conn,
            "28000555",
            AffiliateUpdate {
                full_name: "Juan Perez".into(),
                member_number: "1001".into(),
                category: None,
                employer: None,
                admission_date: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        // Keeping its own number is fine
        update(
            &mut conn,
            "28000555",
            AffiliateUpdate {
                full_name: "Juan Perez".into(),
                member_number: "1002".into(),
                category: None,
                employer: None,
                admission_date: None,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, juan()).await.unwrap();

        let snapshot = delete(&mut conn, "30111222").await.unwrap();
        assert_eq!(snapshot.full_name, "Juan Perez");
        assert_eq!(snapshot.member_number, "1001");

        assert!(
            find_by_national_id(&mut conn, "30111222")
                .await
                .unwrap()
                .is_none()
        );

        let err = delete(&mut conn, "30111222").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
