//! Affiliate Model

use serde::{Deserialize, Serialize};

/// Affiliate record (one row per association member)
///
/// `national_id` is the natural key used for lookup and mutation; it is
/// immutable once the record is created. `id` is the internal store identity
/// and never appears in request payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AffiliateRecord {
    pub id: i64,
    pub national_id: String,
    pub member_number: String,
    pub full_name: String,
    pub category: Option<String>,
    pub employer: Option<String>,
    pub admission_date: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create affiliate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateCreate {
    pub national_id: String,
    pub full_name: String,
    pub member_number: String,
    pub category: Option<String>,
    pub employer: Option<String>,
    pub admission_date: Option<String>,
}

/// Update affiliate payload
///
/// The target record is selected by its national ID, which is never itself
/// replaced. `full_name` and `member_number` are full replacements; the
/// optional fields are written as given (absent clears).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateUpdate {
    pub full_name: String,
    pub member_number: String,
    pub category: Option<String>,
    pub employer: Option<String>,
    pub admission_date: Option<String>,
}

/// Verification query: national ID or full name, at least one required
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub national_id: Option<String>,
    pub full_name: Option<String>,
}

/// Verification result
///
/// A miss is a normal outcome, not an error: `found` is false and `record`
/// is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<AffiliateRecord>,
}
