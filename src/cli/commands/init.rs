//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "simulacrum.toml")]
    pub output: String,

    /// Include explanatory comments for every setting
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Simulacrum configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: simulacrum validate-config");
                println!("  3. Mask a document: simulacrum mask --input record.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Simulacrum Configuration File

[application]
log_level = "info"

[masking]
walker_id_scope = "threaded"
default_subject_id = ""
batch_concurrency = 8

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with explanatory comments
    fn generate_config_with_examples() -> String {
        r#"# Simulacrum Configuration File
#
# Every key is optional. Values may reference environment variables with
# ${VAR_NAME}, and any key can be overridden at runtime with
# SIMULACRUM_<SECTION>_<KEY>, e.g. SIMULACRUM_MASKING_BATCH_CONCURRENCY=16.

[application]
# trace | debug | info | warn | error
log_level = "info"

[masking]
# How the schema-free walker picks the subject id that salts each field:
#   threaded - the object's own "id", else the nearest enclosing "id",
#              else default_subject_id
#   unscoped - every field is salted with the empty id
walker_id_scope = "threaded"

# Salt for documents with no "id" anywhere above a field.
# Leave empty to salt them with the empty id.
default_subject_id = ""
# default_subject_id = "${SIMULACRUM_TENANT}"

# Documents masked at once by `simulacrum mask --batch` (1-256)
batch_concurrency = 8

[logging]
# Write JSON logs to local_path in addition to the console
local_enabled = false
local_path = "./logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
