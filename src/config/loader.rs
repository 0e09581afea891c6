//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SimulacrumConfig;
use crate::domain::errors::SimulacrumError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SimulacrumConfig
/// 4. Applies environment variable overrides (SIMULACRUM_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`SimulacrumError::Configuration`] if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use simulacrum::config::loader::load_config;
///
/// let config = load_config("simulacrum.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SimulacrumConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SimulacrumError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SimulacrumError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: SimulacrumConfig = toml::from_str(&contents)
        .map_err(|e| SimulacrumError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finalize(config)
}

/// Loads configuration, falling back to defaults when the file does not exist
///
/// Environment overrides and validation still apply to the defaults. A file
/// that exists but cannot be parsed is an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<SimulacrumConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }
    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    finalize(SimulacrumConfig::default())
}

fn finalize(mut config: SimulacrumConfig) -> Result<SimulacrumConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SimulacrumError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SimulacrumError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SimulacrumError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SIMULACRUM_* prefix
///
/// Environment variables follow the pattern: SIMULACRUM_<SECTION>_<KEY>
/// For example: SIMULACRUM_APPLICATION_LOG_LEVEL, SIMULACRUM_MASKING_WALKER_ID_SCOPE
fn apply_env_overrides(config: &mut SimulacrumConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SIMULACRUM_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Masking overrides
    config
        .masking
        .apply_env_overrides()
        .map_err(|e| SimulacrumError::Configuration(format!("{e:#}")))?;

    // Logging overrides
    if let Ok(val) = std::env::var("SIMULACRUM_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SIMULACRUM_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SIMULACRUM_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SIMULACRUM_LOADER_TEST_VAR", "tenant-b");
        let input = "default_subject_id = \"${SIMULACRUM_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "default_subject_id = \"tenant-b\"\n");
        std::env::remove_var("SIMULACRUM_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SIMULACRUM_LOADER_MISSING_VAR");
        let input = "default_subject_id = \"${SIMULACRUM_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# default_subject_id = \"${SIMULACRUM_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SIMULACRUM_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(SimulacrumError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "warn"

[masking]
batch_concurrency = 4
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.masking.batch_concurrency, 4);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[masking\nbatch_concurrency = ").unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
