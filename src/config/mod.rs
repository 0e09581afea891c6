//! Configuration management for Simulacrum.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Simulacrum uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SIMULACRUM_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use simulacrum::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("simulacrum.toml")?;
//!
//! println!("Walker id scope: {:?}", config.masking.walker_id_scope);
//! println!("Batch concurrency: {}", config.masking.batch_concurrency);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`MaskingConfig`] - Walker id scope, default subject, batch concurrency
//! - [`LoggingConfig`] - Local JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [masking]
//! walker_id_scope = "threaded"
//! default_subject_id = "${SIMULACRUM_TENANT}"
//! batch_concurrency = 8
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::masking::config::MaskingConfig;
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, SimulacrumConfig};
