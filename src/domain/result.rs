//! Result type alias for Simulacrum

use super::errors::SimulacrumError;

/// Result type alias for Simulacrum operations
///
/// # Examples
///
/// ```
/// use simulacrum::domain::result::Result;
/// use simulacrum::domain::errors::SimulacrumError;
///
/// fn failing_function() -> Result<()> {
///     Err(SimulacrumError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SimulacrumError>;
