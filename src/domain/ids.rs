//! Subject identifier type
//!
//! The subject identifier names the real-world entity whose PII is being
//! masked. It salts every fingerprint derived for that entity and is copied
//! through masking verbatim.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Subject identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use simulacrum::domain::ids::SubjectId;
/// use std::str::FromStr;
///
/// let id = SubjectId::from_str("user123").unwrap();
/// assert_eq!(id.as_str(), "user123");
/// assert!(SubjectId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    /// Creates a new SubjectId from a string
    ///
    /// Returns `Err` if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Subject ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the subject ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short SHA-256 digest of the identifier, safe to put in logs
    ///
    /// Returns the first 12 hex characters of the digest.
    pub fn redacted(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let hex = format!("{digest:x}");
        hex[..12].to_string()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubjectId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SubjectId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectId> for String {
    fn from(id: SubjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_id_valid() {
        let id = SubjectId::new("user123").unwrap();
        assert_eq!(id.as_str(), "user123");
        assert_eq!(id.to_string(), "user123");
        assert_eq!(id.into_inner(), "user123");
    }

    #[test]
    fn test_subject_id_rejects_empty() {
        assert!(SubjectId::new("").is_err());
        assert!(SubjectId::new(" \t").is_err());
    }

    #[test]
    fn test_subject_id_keeps_surrounding_whitespace() {
        // Never transformed, even cosmetically
        let id = SubjectId::new(" user1 ").unwrap();
        assert_eq!(id.as_str(), " user1 ");
    }

    #[test]
    fn test_redacted_is_stable_and_opaque() {
        let id = SubjectId::new("user123").unwrap();
        let first = id.redacted();
        assert_eq!(first, id.redacted());
        assert_eq!(first.len(), 12);
        assert!(!first.contains("user123"));
        assert_ne!(first, SubjectId::new("user124").unwrap().redacted());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let id: SubjectId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert!(serde_json::from_str::<SubjectId>("\"\"").is_err());
    }
}
