//! Core orchestration for Simulacrum.
//!
//! The masking engine itself is synchronous and pure. This module holds the
//! runtime-facing layer around it.
//!
//! # Modules
//!
//! - [`batch`] - Concurrent masking of many independent documents
//!
//! # Example
//!
//! ```rust,no_run
//! use simulacrum::core::batch::BatchMasker;
//! use simulacrum::masking::{MaskMode, MaskingConfig, MaskingEngine};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = MaskingEngine::new(MaskingConfig::default())?;
//! let masker = BatchMasker::new(engine);
//!
//! let documents = vec![
//!     json!({"id": "user1", "name": "John Doe"}),
//!     json!({"id": "user2", "name": "Jane Roe"}),
//! ];
//! let result = masker.mask_all(documents, MaskMode::Generic).await?;
//!
//! println!("Masked: {}", result.successful);
//! println!("Failed: {}", result.failed);
//! # Ok(())
//! # }
//! ```

pub mod batch;
