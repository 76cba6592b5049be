//! Affiliate domain services
//!
//! - [`service`] - administrative mutations (add / edit / remove), each one
//!   paired with its audit log entry in a single transaction
//! - [`lookup`] - public membership verification

pub mod lookup;
pub mod service;
