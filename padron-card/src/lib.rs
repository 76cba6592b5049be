//! # padron-card
//!
//! Membership credential PDF rendering - fixed-layout card generation only.
//!
//! ## Scope
//!
//! This crate handles HOW to render:
//! - Single-page credit-card sized PDF assembly
//! - Windows-1252 encoding for PDF text objects
//! - Background color, fonts and field placement
//!
//! Business logic (WHAT goes on the card) should stay in application code:
//! - Record lookup and field selection → padron-server
//!
//! ## Example
//!
//! ```ignore
//! use padron_card::CredentialCard;
//!
//! let mut card = CredentialCard::new("Mutual Camioneros Mendoza");
//! card.field("Nombre", "Juan Perez");
//! card.field("DNI", "30111222");
//! card.field("N° Afiliado", "1001");
//! card.field("Fecha", "25/08/2026");
//!
//! let pdf_bytes = card.render()?;
//! ```

mod card;
mod encoding;
mod error;

// Re-exports
pub use card::CredentialCard;
pub use encoding::encode_win_ansi;
pub use error::{CardError, CardResult};
