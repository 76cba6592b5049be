use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use std::path::PathBuf;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

/// Server state - cheap-to-clone handles shared by every request
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | configuration (immutable) |
/// | pool | SqlitePool | SQLite connection pool (WAL mode) |
///
/// The admin PIN is held only as a SHA-256 digest; request candidates are
/// hashed and compared digest-to-digest by [`verify_pin`](Self::verify_pin).
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// SHA-256 digest of the configured admin PIN
    pin_digest: [u8; 32],
}

impl ServerState {
    /// Create server state from parts
    ///
    /// Production code uses [`initialize()`](Self::initialize); tests build
    /// their own pool and call this directly.
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let pin_digest = digest_pin(&config.admin_pin);
        Self {
            config,
            pool,
            pin_digest,
        }
    }

    /// Initialize server state
    ///
    /// 1. Ensure the working directory layout exists
    /// 2. Open the database (`work_dir/database/padron.db`) and run migrations
    /// 3. Pre-compute the admin PIN digest
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure().map_err(|e| {
            ServerError::Config(format!("Failed to create work directory structure: {e}"))
        })?;

        if config.is_production() && config.admin_pin == "1234" {
            tracing::warn!("⚠️ ADMIN_PIN is still the default value in a production environment");
        }

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.pool))
    }

    /// Check a candidate PIN against the configured one
    ///
    /// Both sides are compared as SHA-256 digests.
    pub fn verify_pin(&self, candidate: &str) -> bool {
        digest_pin(candidate) == self.pin_digest
    }

    /// Working directory as a path
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}

fn digest_pin(pin: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    hasher.finalize().into()
}
