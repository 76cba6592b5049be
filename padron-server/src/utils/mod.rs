//! Utility module - cross-cutting helpers
//!
//! # Contents
//!
//! - [`validation`] - centralized input validation (identifiers, names)
//! - [`logger`] - tracing subscriber setup
//!
//! Error and response types come straight from `shared::error`.

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
