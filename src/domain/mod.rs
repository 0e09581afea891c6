//! Domain types for Simulacrum.
//!
//! The domain layer provides:
//! - **Subject identifier** ([`SubjectId`]) with validation and log-safe digests
//! - **Error types** ([`SimulacrumError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, SimulacrumError>`]:
//!
//! ```rust
//! use simulacrum::domain::{Result, SubjectId, SimulacrumError};
//!
//! fn parse(raw: &str) -> Result<SubjectId> {
//!     SubjectId::new(raw).map_err(SimulacrumError::MissingSubjectId)
//! }
//!
//! assert!(parse("user123").is_ok());
//! assert!(parse("").is_err());
//! ```

pub mod errors;
pub mod ids;
pub mod result;

pub use errors::SimulacrumError;
pub use ids::SubjectId;
pub use result::Result;
