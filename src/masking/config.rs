//! Masking configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How the walker picks the subject identifier for nested objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdScope {
    /// Nearest enclosing `id`, falling back to the default subject
    #[default]
    Threaded,
    /// Every field salted with the empty identifier
    Unscoped,
}

impl std::str::FromStr for IdScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "threaded" => Ok(Self::Threaded),
            "unscoped" => Ok(Self::Unscoped),
            other => Err(format!(
                "Invalid walker_id_scope '{other}'. Must be one of: threaded, unscoped"
            )),
        }
    }
}

/// Settings for the masking engine and batch masker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Subject id resolution for the schema-free walker
    #[serde(default)]
    pub walker_id_scope: IdScope,

    /// Salt for documents that carry no `id` anywhere on the path to a field
    #[serde(default)]
    pub default_subject_id: String,

    /// Maximum documents masked at once by the batch masker
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            walker_id_scope: IdScope::Threaded,
            default_subject_id: String::new(),
            batch_concurrency: default_batch_concurrency(),
        }
    }
}

pub const MAX_BATCH_CONCURRENCY: usize = 256;

impl MaskingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.batch_concurrency == 0 || self.batch_concurrency > MAX_BATCH_CONCURRENCY {
            anyhow::bail!(
                "masking.batch_concurrency must be between 1 and {}, got {}",
                MAX_BATCH_CONCURRENCY,
                self.batch_concurrency
            );
        }
        if !self.default_subject_id.is_empty() && self.default_subject_id.trim().is_empty() {
            anyhow::bail!("masking.default_subject_id cannot be whitespace-only");
        }
        Ok(())
    }

    /// Apply `SIMULACRUM_MASKING_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SIMULACRUM_MASKING_WALKER_ID_SCOPE") {
            self.walker_id_scope = val
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid SIMULACRUM_MASKING_WALKER_ID_SCOPE value")?;
        }

        if let Ok(val) = std::env::var("SIMULACRUM_MASKING_DEFAULT_SUBJECT_ID") {
            self.default_subject_id = val;
        }

        if let Ok(val) = std::env::var("SIMULACRUM_MASKING_BATCH_CONCURRENCY") {
            self.batch_concurrency = val
                .parse()
                .context("Invalid SIMULACRUM_MASKING_BATCH_CONCURRENCY value")?;
        }

        Ok(())
    }
}

fn default_batch_concurrency() -> usize {
    8
}
