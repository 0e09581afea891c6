//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console logs on stderr
//! - Configurable log levels
//! - Local JSON file logging with rotation
//!
//! Subject identifiers are logged only as [`SubjectId::redacted`] digests, and
//! real field values are never logged.
//!
//! [`SubjectId::redacted`]: crate::domain::SubjectId::redacted
//!
//! # Example
//!
//! ```no_run
//! use simulacrum::logging::init_logging;
//! use simulacrum::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a masking run from its [`MaskStats`](crate::masking::MaskStats)
///
/// # Example
///
/// ```no_run
/// use simulacrum::log_mask_complete;
/// use simulacrum::masking::MaskStats;
///
/// let stats = MaskStats::new();
/// log_mask_complete!(&stats);
/// ```
#[macro_export]
macro_rules! log_mask_complete {
    ($stats:expr) => {
        tracing::info!(
            documents = $stats.documents,
            fields_masked = $stats.total_masked(),
            passthrough_keys = $stats.passthrough_keys,
            duration_ms = $stats.elapsed_ms,
            "Masking completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use simulacrum::log_error_with_context;
/// use simulacrum::domain::SimulacrumError;
///
/// let error = SimulacrumError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
