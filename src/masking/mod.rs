//! Deterministic PII masking
//!
//! Real values are replaced with synthetic, format-preserving substitutes
//! derived from a fingerprint of `(subject id, field kind, real value)`. The
//! same inputs always produce the same fake, on any machine, with no shared
//! state.
//!
//! # Layers
//!
//! - [`fingerprint`] - 8-byte XXH3 digest of one masking input
//! - [`select`] - turns fingerprint bytes into picks and bounded integers
//! - [`tables`] - compiled-in names, streets and address regions
//! - [`generators`] - one function per PII category
//! - [`record`] - typed [`PersonalData`] masking
//! - [`walker`] - schema-free JSON masking
//! - [`engine`] - configured entry point returning [`MaskStats`]

pub mod config;
pub mod engine;
pub mod fingerprint;
pub mod generators;
pub mod record;
pub mod select;
pub mod stats;
pub mod tables;
pub mod walker;

pub use config::{IdScope, MaskingConfig};
pub use engine::{MaskMode, MaskOutcome, MaskingEngine};
pub use fingerprint::{fingerprint, Fingerprint};
pub use record::{obscure_data, BankAccount, DriverLicense, Passport, PersonalData};
pub use stats::MaskStats;
pub use walker::{PiiField, Walker, RECOGNIZED_FIELDS};
