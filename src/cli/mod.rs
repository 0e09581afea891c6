//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Simulacrum using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Simulacrum - Deterministic PII Pseudonymization
#[derive(Parser, Debug)]
#[command(name = "simulacrum")]
#[command(version, about, long_about = None)]
#[command(author = "Simulacrum Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "simulacrum.toml", env = "SIMULACRUM_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SIMULACRUM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask PII in a JSON document
    Mask(commands::mask::MaskArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
