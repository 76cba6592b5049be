//! Access control
//!
//! A single shared PIN gates the administrative mutation routes. There are
//! no user accounts or sessions: callers present the PIN on every request.

pub mod middleware;

pub use middleware::require_admin_pin;
