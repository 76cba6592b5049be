//! Data models
//!
//! Shared between padron-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod affiliate;
pub mod audit;

// Re-exports
pub use affiliate::*;
pub use audit::*;
