//! Masking engine
//!
//! [`MaskingEngine`] is the entry point callers hold on to. It owns the
//! validated [`MaskingConfig`] and routes each document to either the typed
//! record path or the schema-free walker, timing the work and collecting
//! [`MaskStats`].
//!
//! # Examples
//!
//! ```
//! use simulacrum::masking::{MaskingConfig, MaskingEngine};
//! use serde_json::json;
//!
//! let engine = MaskingEngine::new(MaskingConfig::default())?;
//! let outcome = engine.mask_json(&json!({
//!     "id": "user123",
//!     "email": "john@company.com",
//!     "custom_field": "keep_me"
//! }));
//!
//! assert_eq!(outcome.masked["id"], "user123");
//! assert_eq!(outcome.masked["custom_field"], "keep_me");
//! assert_eq!(outcome.stats.masked("email"), 1);
//! # Ok::<(), simulacrum::domain::SimulacrumError>(())
//! ```

use crate::domain::{Result, SimulacrumError, SubjectId};
use crate::masking::config::MaskingConfig;
use crate::masking::record::{obscure_data_with_stats, PersonalData};
use crate::masking::stats::MaskStats;
use crate::masking::walker::Walker;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Which masking path a JSON document takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    /// Schema-free walker; unknown keys are kept
    #[default]
    Generic,
    /// Fixed [`PersonalData`] schema; a subject id is required
    Typed,
}

impl FromStr for MaskMode {
    type Err = SimulacrumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "typed" => Ok(Self::Typed),
            _ => Err(SimulacrumError::Validation(format!(
                "Invalid mask mode: {s}. Must be 'generic' or 'typed'"
            ))),
        }
    }
}

impl fmt::Display for MaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Typed => write!(f, "typed"),
        }
    }
}

/// A masked document together with the statistics of masking it
#[derive(Debug, Clone)]
pub struct MaskOutcome<T> {
    pub masked: T,
    pub stats: MaskStats,
}

/// Deterministic PII masking engine
///
/// The engine holds no mutable state; clone it freely or share it across
/// threads.
#[derive(Debug, Clone)]
pub struct MaskingEngine {
    config: MaskingConfig,
}

impl MaskingEngine {
    /// Create a new engine
    ///
    /// # Errors
    ///
    /// Returns [`SimulacrumError::Configuration`] if `config` fails validation.
    pub fn new(config: MaskingConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            SimulacrumError::Configuration(format!("Invalid masking configuration: {e:#}"))
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MaskingConfig {
        &self.config
    }

    /// Mask a typed record
    ///
    /// # Errors
    ///
    /// Returns [`SimulacrumError::MissingSubjectId`] if the record has no id.
    pub fn mask_record(&self, record: &PersonalData) -> Result<MaskOutcome<PersonalData>> {
        let start = Instant::now();
        let mut stats = MaskStats::new();

        let masked = obscure_data_with_stats(record, &mut stats).map_err(|e| {
            tracing::warn!(error = %e, "Rejected record without subject identifier");
            e
        })?;

        stats.record_document();
        stats.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            subject = %redacted(&record.id),
            fields_masked = stats.total_masked(),
            duration_ms = stats.elapsed_ms,
            "Masked typed record"
        );

        Ok(MaskOutcome { masked, stats })
    }

    /// Parse `value` as a [`PersonalData`] record, mask it and serialize it back
    ///
    /// Keys outside the record schema are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SimulacrumError::Serialization`] if `value` does not have the
    /// record's shape, or [`SimulacrumError::MissingSubjectId`] if it has no id.
    pub fn mask_typed_json(&self, value: Value) -> Result<MaskOutcome<Value>> {
        let record: PersonalData = serde_json::from_value(value)?;
        let outcome = self.mask_record(&record)?;
        Ok(MaskOutcome {
            masked: serde_json::to_value(&outcome.masked)?,
            stats: outcome.stats,
        })
    }

    /// Mask an arbitrary JSON tree with the schema-free walker
    ///
    /// Never fails: unknown keys and malformed values pass through unchanged.
    pub fn mask_json(&self, value: &Value) -> MaskOutcome<Value> {
        let start = Instant::now();
        let mut stats = MaskStats::new();

        let masked = Walker::new(
            self.config.walker_id_scope,
            &self.config.default_subject_id,
            &mut stats,
        )
        .walk(value);

        stats.record_document();
        stats.elapsed_ms = start.elapsed().as_millis() as u64;

        let subject = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or(&self.config.default_subject_id);
        tracing::debug!(
            subject = %redacted(subject),
            fields_masked = stats.total_masked(),
            passthrough_keys = stats.passthrough_keys,
            duration_ms = stats.elapsed_ms,
            "Masked JSON document"
        );

        MaskOutcome { masked, stats }
    }

    /// Mask one JSON document along the path selected by `mode`
    ///
    /// # Errors
    ///
    /// Only [`MaskMode::Typed`] can fail; see [`Self::mask_typed_json`].
    pub fn mask_document(&self, value: Value, mode: MaskMode) -> Result<MaskOutcome<Value>> {
        match mode {
            MaskMode::Generic => Ok(self.mask_json(&value)),
            MaskMode::Typed => self.mask_typed_json(value),
        }
    }
}

/// Log-safe form of a subject identifier
fn redacted(id: &str) -> String {
    SubjectId::new(id)
        .map(|id| id.redacted())
        .unwrap_or_else(|_| "<none>".to_string())
}
