//! Concurrent batch masking
//!
//! Masks many independent JSON documents on Tokio's blocking pool. At most
//! `batch_concurrency` documents are in flight at once, and results come back
//! in input order whatever order the tasks finish in.

use crate::domain::{Result, SimulacrumError};
use crate::masking::{MaskMode, MaskStats, MaskingEngine};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Result of masking a batch
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// One entry per input document, in input order; `Null` where masking failed
    pub masked: Vec<Value>,
    /// Number of documents masked
    pub successful: usize,
    /// Number of documents rejected
    pub failed: usize,
    /// One message per rejected document, prefixed with its position
    pub errors: Vec<String>,
    /// Combined statistics of every masked document
    pub stats: MaskStats,
}

impl BatchResult {
    fn new(len: usize) -> Self {
        Self {
            masked: Vec::with_capacity(len),
            successful: 0,
            failed: 0,
            errors: Vec::new(),
            stats: MaskStats::new(),
        }
    }

    /// Whether every document was masked
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }
}

/// Batch masker over a shared [`MaskingEngine`]
#[derive(Debug, Clone)]
pub struct BatchMasker {
    engine: Arc<MaskingEngine>,
    concurrency: usize,
}

impl BatchMasker {
    /// Create a batch masker using the engine's configured concurrency
    pub fn new(engine: MaskingEngine) -> Self {
        let concurrency = engine.config().batch_concurrency.max(1);
        Self {
            engine: Arc::new(engine),
            concurrency,
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Mask every document in `documents`
    ///
    /// A document the engine rejects is logged, counted as failed and leaves
    /// `Null` in its output slot; the rest of the batch carries on.
    ///
    /// # Errors
    ///
    /// Returns [`SimulacrumError::Other`] only if a masking task panics or is
    /// cancelled.
    pub async fn mask_all(&self, documents: Vec<Value>, mode: MaskMode) -> Result<BatchResult> {
        let start = Instant::now();
        let total = documents.len();
        tracing::info!(
            documents = total,
            concurrency = self.concurrency,
            mode = %mode,
            "Starting batch masking"
        );

        let mut slots: Vec<Option<Result<(Value, MaskStats)>>> = (0..total).map(|_| None).collect();
        let mut pending = documents.into_iter().enumerate();
        let mut tasks = JoinSet::new();

        loop {
            while tasks.len() < self.concurrency {
                let Some((index, document)) = pending.next() else {
                    break;
                };
                let engine = Arc::clone(&self.engine);
                tasks.spawn_blocking(move || {
                    let outcome = engine
                        .mask_document(document, mode)
                        .map(|outcome| (outcome.masked, outcome.stats));
                    (index, outcome)
                });
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };
            let (index, outcome) = joined
                .map_err(|e| SimulacrumError::Other(format!("Masking task failed: {e}")))?;
            slots[index] = Some(outcome);
        }

        let mut result = BatchResult::new(total);
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(Ok((masked, stats))) => {
                    result.stats.merge(&stats);
                    result.masked.push(masked);
                    result.successful += 1;
                }
                Some(Err(e)) => {
                    tracing::warn!(index, error = %e, "Document rejected");
                    result.errors.push(format!("document {index}: {e}"));
                    result.masked.push(Value::Null);
                    result.failed += 1;
                }
                None => {
                    result.errors.push(format!("document {index}: not processed"));
                    result.masked.push(Value::Null);
                    result.failed += 1;
                }
            }
        }

        result.stats.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            successful = result.successful,
            failed = result.failed,
            fields_masked = result.stats.total_masked(),
            duration_ms = result.stats.elapsed_ms,
            "Batch masking complete"
        );

        Ok(result)
    }
}
