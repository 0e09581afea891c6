//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Simulacrum configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Walker ID Scope: {:?}", config.masking.walker_id_scope);
        println!(
            "  Default Subject ID: {}",
            if config.masking.default_subject_id.is_empty() {
                "(none)"
            } else {
                "(set)"
            }
        );
        println!("  Batch Concurrency: {}", config.masking.batch_concurrency);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "{} ({})",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let args = ValidateArgs {};
        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[masking]\nbatch_concurrency = 0\n").unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args.execute(&file.path().to_string_lossy()).await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[masking]\nbatch_concurrency = 2\n").unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args.execute(&file.path().to_string_lossy()).await.unwrap();
        assert_eq!(code, 0);
    }
}
