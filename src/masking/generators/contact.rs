//! Email and phone generators

use super::kind;
use crate::masking::fingerprint::fingerprint;
use crate::masking::select::pick;
use crate::masking::tables::{EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES};

/// Email as `"<first>.<last>@<domain>"`, lower-cased
pub fn generate_email(id: &str, real_email: &str) -> String {
    if real_email.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::EMAIL, real_email);
    format!(
        "{}.{}@{}",
        pick(&fp, 0, FIRST_NAMES).to_lowercase(),
        pick(&fp, 1, LAST_NAMES).to_lowercase(),
        pick(&fp, 2, EMAIL_DOMAINS)
    )
}

/// Phone as `"555-XXX-XXXX"`
///
/// A leading country-code token such as `+44-` is kept verbatim in front of
/// the fake number. The whole real value, prefix included, is fingerprinted.
///
/// # Examples
///
/// ```
/// use simulacrum::masking::generators::generate_phone;
///
/// let fake = generate_phone("user123", "+1-555-987-6543");
/// assert!(fake.starts_with("+1-555-"));
/// ```
pub fn generate_phone(id: &str, real_phone: &str) -> String {
    if real_phone.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::PHONE, real_phone);
    let exchange = u32::from(fp.byte(1)) % 900 + 100;
    let subscriber = ((u32::from(fp.byte(2)) << 8) | u32::from(fp.byte(3))) % 10000;
    format!(
        "{}555-{exchange:03}-{subscriber:04}",
        country_code_prefix(real_phone).unwrap_or_default()
    )
}

/// The `+<digits>-` prefix of a phone number, dash included
fn country_code_prefix(phone: &str) -> Option<&str> {
    let rest = phone.strip_prefix('+')?;
    let dash = rest.find('-')?;
    let code = &rest[..dash];
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(&phone[..dash + 2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_generate_email() {
        let email1 = generate_email("user123", "john@company.com");
        let email2 = generate_email("user123", "john@company.com");

        assert_eq!(email1, email2);
        assert_ne!(email1, "john@company.com");
        assert_eq!(email1, email1.to_lowercase());
    }

    #[test]
    fn test_generate_email_domains() {
        let re = Regex::new(r"^[a-z]+\.[a-z]+@(example\.com|test\.org|fake\.net|mail\.com)$")
            .unwrap();
        for i in 0..100 {
            let email = generate_email(&format!("email_id_{i}"), "someone@corp.example");
            assert!(re.is_match(&email), "unexpected email format: {email}");
        }
    }

    #[test]
    fn test_generate_phone_format() {
        let re = Regex::new(r"^555-\d{3}-\d{4}$").unwrap();
        for i in 0..100 {
            let phone = generate_phone(&format!("phone_id_{i}"), "555-1234");
            assert!(re.is_match(&phone), "unexpected phone format: {phone}");
            let exchange: u32 = phone[4..7].parse().unwrap();
            assert!((100..=999).contains(&exchange));
        }
    }

    #[test]
    fn test_generate_phone_with_country_code() {
        let phone = "+1-555-987-6543";
        let result = generate_phone("user123", phone);

        assert_ne!(result, phone);
        assert!(result.starts_with("+1-555-"), "got {result}");
        assert_eq!(result, generate_phone("user123", phone));
    }

    #[test]
    fn test_generate_phone_without_country_code() {
        let result = generate_phone("user123", "555-987-6543");
        assert!(!result.starts_with('+'));
    }

    #[test]
    fn test_generate_phone_different_country_codes() {
        let result1 = generate_phone("user123", "+1-555-123-4567");
        let result2 = generate_phone("user123", "+44-555-123-4567");

        assert!(result1.starts_with("+1-"));
        assert!(result2.starts_with("+44-"));
        assert_ne!(result1, result2);
    }

    #[test]
    fn test_country_code_prefix() {
        assert_eq!(country_code_prefix("+1-555"), Some("+1-"));
        assert_eq!(country_code_prefix("+352-12"), Some("+352-"));
        assert_eq!(country_code_prefix("+-555"), None);
        assert_eq!(country_code_prefix("+1 555 123"), None);
        assert_eq!(country_code_prefix("+ab-555"), None);
        assert_eq!(country_code_prefix("1-555"), None);
    }

    #[test]
    fn test_empty_contact_fields() {
        assert_eq!(generate_email("user123", ""), "");
        assert_eq!(generate_phone("user123", ""), "");
    }
}
