//! Masking statistics
//!
//! Counters collected while masking one run of documents. Only field names and
//! counts are recorded, never real or fake values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for one masking run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskStats {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Documents processed
    pub documents: usize,

    /// Masked values per recognized field name
    pub fields_masked: BTreeMap<String, usize>,

    /// Keys outside the recognized set whose scalar values were kept verbatim
    pub passthrough_keys: usize,

    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

impl MaskStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            documents: 0,
            fields_masked: BTreeMap::new(),
            passthrough_keys: 0,
            elapsed_ms: 0,
        }
    }

    pub fn record_masked(&mut self, field: &str) {
        *self.fields_masked.entry(field.to_string()).or_insert(0) += 1;
    }

    pub fn record_passthrough(&mut self) {
        self.passthrough_keys += 1;
    }

    pub fn record_document(&mut self) {
        self.documents += 1;
    }

    /// Count of masked values for `field`
    pub fn masked(&self, field: &str) -> usize {
        self.fields_masked.get(field).copied().unwrap_or(0)
    }

    /// Total masked values over all fields
    pub fn total_masked(&self) -> usize {
        self.fields_masked.values().sum()
    }

    /// Fold another run's counters into this one
    ///
    /// The earlier start time and the longer duration are kept.
    pub fn merge(&mut self, other: &MaskStats) {
        self.started_at = self.started_at.min(other.started_at);
        self.documents += other.documents;
        self.passthrough_keys += other.passthrough_keys;
        self.elapsed_ms = self.elapsed_ms.max(other.elapsed_ms);
        for (field, count) in &other.fields_masked {
            *self.fields_masked.entry(field.clone()).or_insert(0) += count;
        }
    }
}

impl Default for MaskStats {
    fn default() -> Self {
        Self::new()
    }
}
