//! Name generators

use super::kind;
use crate::masking::fingerprint::fingerprint;
use crate::masking::select::pick;
use crate::masking::tables::{FIRST_NAMES, LAST_NAMES};

/// Full name as `"<First> <Last>"`
///
/// # Examples
///
/// ```
/// use simulacrum::masking::generators::generate_name;
///
/// let fake = generate_name("user123", "John Doe");
/// assert_eq!(fake, generate_name("user123", "John Doe"));
/// assert_eq!(fake.split(' ').count(), 2);
/// assert_eq!(generate_name("user123", ""), "");
/// ```
pub fn generate_name(id: &str, real_name: &str) -> String {
    if real_name.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::NAME, real_name);
    format!("{} {}", pick(&fp, 0, FIRST_NAMES), pick(&fp, 1, LAST_NAMES))
}

pub fn generate_first_name(id: &str, real_first_name: &str) -> String {
    single_token(id, kind::FIRST_NAME, real_first_name, FIRST_NAMES)
}

/// Middle names are drawn from the first-name table
pub fn generate_middle_name(id: &str, real_middle_name: &str) -> String {
    single_token(id, kind::MIDDLE_NAME, real_middle_name, FIRST_NAMES)
}

pub fn generate_last_name(id: &str, real_last_name: &str) -> String {
    single_token(id, kind::LAST_NAME, real_last_name, LAST_NAMES)
}

fn single_token(id: &str, field_kind: &str, real: &str, table: &[&'static str]) -> String {
    if real.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, field_kind, real);
    pick(&fp, 0, table).to_string()
}
