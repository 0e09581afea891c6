//! Mask command implementation
//!
//! This module implements the `mask` command: read a JSON document (or an
//! array of documents with `--batch`), mask it, and write the result.

use crate::config::load_config_or_default;
use crate::core::batch::BatchMasker;
use crate::masking::{MaskMode, MaskStats, MaskingEngine};
use anyhow::Context;
use clap::Args;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// JSON file to mask (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the masked JSON (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Masking path: generic (any JSON) or typed (fixed record schema)
    #[arg(long, default_value = "generic")]
    pub mode: String,

    /// Subject id for documents without one (overrides masking.default_subject_id)
    #[arg(long)]
    pub subject_id: Option<String>,

    /// Treat a top-level array as independent documents masked concurrently
    #[arg(long)]
    pub batch: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    /// Print masking statistics as JSON to stderr
    #[arg(long)]
    pub report: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(mode = %self.mode, batch = self.batch, "Starting mask command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(subject_id) = &self.subject_id {
            tracing::info!("Overriding default subject id from CLI");
            config.masking.default_subject_id = subject_id.clone();
        }

        let mode: MaskMode = match self.mode.parse() {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let engine = match MaskingEngine::new(config.masking) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create masking engine");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let raw = self.read_input().context("Failed to read input")?;
        let document: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(error = %e, "Input is not valid JSON");
                eprintln!("Invalid JSON input: {e}");
                return Ok(2);
            }
        };

        let (masked, stats, exit_code) = if self.batch {
            let Value::Array(documents) = document else {
                eprintln!("--batch requires a top-level JSON array");
                return Ok(2);
            };
            let result = BatchMasker::new(engine).mask_all(documents, mode).await?;
            for error in &result.errors {
                eprintln!("Rejected {error}");
            }
            let exit_code = if result.is_successful() { 0 } else { 2 };
            (Value::Array(result.masked), result.stats, exit_code)
        } else {
            match engine.mask_document(document, mode) {
                Ok(outcome) => (outcome.masked, outcome.stats, 0),
                Err(e) if e.is_caller_error() => {
                    tracing::error!(error = %e, "Document rejected");
                    eprintln!("Invalid input: {e}");
                    return Ok(2);
                }
                Err(e) => return Err(e.into()),
            }
        };

        self.write_output(&masked).context("Failed to write output")?;

        if self.report {
            print_report(&stats)?;
        }

        crate::log_mask_complete!(&stats);

        Ok(exit_code)
    }

    fn read_input(&self) -> io::Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path),
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    fn write_output(&self, masked: &Value) -> anyhow::Result<()> {
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(masked)?
        } else {
            serde_json::to_string(masked)?
        };
        rendered.push('\n');

        match &self.output {
            Some(path) => fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

fn print_report(stats: &MaskStats) -> anyhow::Result<()> {
    eprintln!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(dir: &TempDir, input: &str) -> MaskArgs {
        let input_path = dir.path().join("input.json");
        fs::write(&input_path, input).unwrap();
        MaskArgs {
            input: Some(input_path),
            output: Some(dir.path().join("output.json")),
            mode: "generic".to_string(),
            subject_id: None,
            batch: false,
            pretty: false,
            report: false,
        }
    }

    fn read_output(dir: &TempDir) -> Value {
        let raw = fs::read_to_string(dir.path().join("output.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_mask_generic_file() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, r#"{"id": "user123", "name": "John Doe", "custom_field": "keep_me"}"#);

        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, 0);

        let output = read_output(&dir);
        assert_eq!(output["id"], "user123");
        assert_eq!(output["custom_field"], "keep_me");
        assert_ne!(output["name"], "John Doe");
    }

    #[tokio::test]
    async fn test_mask_typed_without_id_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, r#"{"name": "John Doe"}"#);
        args.mode = "typed".to_string();

        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, 2);
        assert!(!dir.path().join("output.json").exists());
    }

    #[tokio::test]
    async fn test_mask_invalid_mode_and_json() {
        let dir = TempDir::new().unwrap();
        let mut bad_mode = args(&dir, "{}");
        bad_mode.mode = "strict".to_string();
        assert_eq!(bad_mode.execute("does-not-exist.toml").await.unwrap(), 2);

        let bad_json = args(&dir, "{not json");
        assert_eq!(bad_json.execute("does-not-exist.toml").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_mask_batch() {
        let dir = TempDir::new().unwrap();
        let mut args = args(
            &dir,
            r#"[{"id": "a", "email": "a@x.com"}, {"id": "b", "email": "b@x.com"}]"#,
        );
        args.batch = true;

        assert_eq!(args.execute("does-not-exist.toml").await.unwrap(), 0);
        let output = read_output(&dir);
        assert_eq!(output.as_array().map(Vec::len), Some(2));
        assert_eq!(output[1]["id"], "b");
    }

    #[tokio::test]
    async fn test_mask_batch_requires_array() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, r#"{"id": "a"}"#);
        args.batch = true;
        assert_eq!(args.execute("does-not-exist.toml").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_subject_id_override() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, r#"{"name": "John Doe"}"#);
        args.subject_id = Some("tenant-a".to_string());

        assert_eq!(args.execute("does-not-exist.toml").await.unwrap(), 0);
        let output = read_output(&dir);
        assert_eq!(
            output["name"],
            crate::masking::generators::generate_name("tenant-a", "John Doe")
        );
    }
}
