//! Padron Server - membership registry for a mutual-aid association
//!
//! # Overview
//!
//! Main entry point of the registry service:
//!
//! - **HTTP API** (`api`): public verification, credential PDF download,
//!   PIN-gated administrative mutations, audit log listing
//! - **Domain services** (`affiliates`): each mutation paired with its
//!   audit entry in one transaction
//! - **Database** (`db`): SQLite (WAL) pool, embedded migrations,
//!   repositories
//! - **Access gate** (`auth`): shared-PIN middleware for `/api/admin`
//!
//! # Module structure
//!
//! ```text
//! padron-server/src/
//! ├── core/          # configuration, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── affiliates/    # mutation + lookup services
//! ├── auth/          # admin PIN gate
//! ├── db/            # pool, migrations, repositories
//! └── utils/         # validation, logging
//! ```

pub mod affiliates;
pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Prepare the process environment: dotenv, working directory, logging
///
/// Must run before anything touches the configured paths.
pub fn setup_environment() -> anyhow::Result<()> {
    // .env is optional; a missing file is fine
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let logs_dir = config.logs_dir();
    utils::logger::init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        logs_dir.to_str(),
    );

    // Best-effort rotation of old log files
    if let Some(dir) = logs_dir.to_str()
        && let Err(e) = utils::logger::cleanup_old_logs(dir, 30)
    {
        tracing::warn!("Log cleanup failed: {}", e);
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____          __
   / __ \____ ___/ /_________  ____
  / /_/ / __ `/ __  / ___/ __ \/ __ \
 / ____/ /_/ / /_/ / /  / /_/ / / / /
/_/    \__,_/\__,_/_/   \____/_/ /_/
    "#
    );
}
