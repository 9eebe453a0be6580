//! # keymask
//!
//! As-you-type input masking for national identifiers, phone numbers, dates,
//! money amounts and technical codes.
//!
//! ## Features
//!
//! - 85 formats across Brazil, the United States, Europe, Latin America, Asia
//!   and more
//! - One data-driven rule table; no per-format code paths
//! - Pure and stateless: safe to call from any thread on every keystroke
//! - Caret-preserving field binding for UI layers
//! - Multiple interfaces: library, CLI, REST API, WASM, Node.js
//!
//! Masks reshape input. They do not verify check digits or reject malformed
//! values.
//!
//! ## Quick Start
//!
//! ```rust
//! use keymask::{format, FormatId};
//!
//! assert_eq!(format(FormatId::Cpf, "12345678901"), "123.456.789-01");
//! assert_eq!(format(FormatId::Cnpj, "11222333000181"), "11.222.333/0001-81");
//! assert_eq!(format(FormatId::CreditCard, "4111111111111111"), "4111 1111 1111 1111");
//!
//! // Partial input gives a partial mask
//! assert_eq!(format(FormatId::PhoneUs, "5551"), "(555) 1");
//!
//! // Letters are uppercased where the format allows them
//! assert_eq!(
//!     format(FormatId::Uuid, "550e8400e29b41d4a716446655440000"),
//!     "550E8400-E29B-41D4-A716-446655440000"
//! );
//! ```
//!
//! ## Special Formats
//!
//! ```rust
//! use keymask::{format, FormatId};
//!
//! // Money fills from the cents up
//! assert_eq!(format(FormatId::CurrencyUs, "123456"), "$1,234.56");
//! assert_eq!(format(FormatId::CurrencyUs, "5"), "$0.05");
//! assert_eq!(format(FormatId::CurrencyUs, ""), "");
//!
//! // IPv4 groups only advance on a typed dot
//! assert_eq!(format(FormatId::Ipv4, "192.168.1.1"), "192.168.1.1");
//! assert_eq!(format(FormatId::Ipv4, "19216811"), "192");
//!
//! // Long dates switch to a month name once complete
//! assert_eq!(format(FormatId::DateUsFull, "1225"), "12/25");
//! assert_eq!(format(FormatId::DateUsFull, "12252024"), "December 25, 2024");
//!
//! // Country codes take the place of the first digits
//! assert_eq!(format(FormatId::PhoneMx, "525512345678"), "+52 (55) 1234-5678");
//! ```
//!
//! ## Format Tags
//!
//! ```rust
//! use keymask::{format_lenient, format_str, FormatError, FormatId};
//!
//! let id: FormatId = "phone-br".parse().unwrap();
//! assert_eq!(id, FormatId::PhoneBr);
//!
//! // Unknown tags are an error...
//! assert!(matches!(format_str("zip-xx", "1"), Err(FormatError::UnknownFormat { .. })));
//!
//! // ...unless the caller opts into pass-through
//! assert_eq!(format_lenient("zip-xx", "1 2"), "1 2");
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use keymask::{BatchFormatter, FormatId};
//!
//! let batch = BatchFormatter::new(FormatId::Cep);
//! assert_eq!(batch.format_all(&["01310100", "2004"]), vec!["01310-100", "2004"]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `FormatId` (de)serializes as its tag |
//! | `tracing` | Warnings from lenient formatting |
//! | `parallel` | Rayon-based batch masking |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//! | `wasm` | WebAssembly support |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod binding;
pub mod charset;
pub mod clock;
pub mod currency;
pub mod date;
pub mod engine;
pub mod error;
pub mod format_id;
pub mod network;
pub mod rules;
pub mod segment;
pub mod stream;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use batch::BatchFormatter;
pub use charset::CharacterClass;
pub use engine::{format, format_lenient, format_str};
pub use error::FormatError;
pub use format_id::{FormatId, Region};
pub use rules::{FormatRule, Renderer};
