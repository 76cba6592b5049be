//! Audit Log Model

use serde::{Deserialize, Serialize};

/// Administrative action recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum AuditAction {
    Add,
    Edit,
    Delete,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One append-only audit log row
///
/// Field values are a snapshot of the affected record at the time of the
/// action; for a delete that is the record's last state before removal.
/// `timestamp` (Unix ms) is assigned by the store layer at append time and
/// never accepted from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AuditLogEntry {
    pub id: i64,
    pub action: AuditAction,
    pub national_id: String,
    pub full_name: String,
    pub member_number: String,
    pub timestamp: i64,
}

/// Query parameters for the audit log listing
#[derive(Debug, Clone, Deserialize)]
pub struct AuditQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
        }
    }
}

/// Audit log listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditListResponse {
    pub items: Vec<AuditLogEntry>,
    pub total: usize,
}
