//! Bank account generators
//!
//! Every function takes the account's zero-based position in the subject's
//! account list. The position is folded into the field kind, so two accounts
//! holding the same real value still mask to different fakes.

use super::kind;
use crate::masking::fingerprint::fingerprint;
use crate::masking::select::{be_uint, pick};
use crate::masking::tables::ACCOUNT_TYPES;

/// Account-type label such as `"Savings Account"`
pub fn generate_account_name(id: &str, real_name: &str, index: usize) -> String {
    if real_name.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, &kind::indexed(kind::ACCOUNT_NAME, index), real_name);
    pick(&fp, 0, ACCOUNT_TYPES).to_string()
}

/// Decimal `"D.CC"` with dollars in 100-999999
pub fn generate_amount(id: &str, real_amount: &str, index: usize) -> String {
    money(id, &kind::indexed(kind::ACCOUNT_AMOUNT, index), real_amount)
}

/// Same shape as [`generate_amount`], under its own field kind
pub fn generate_balance(id: &str, real_balance: &str, index: usize) -> String {
    money(id, &kind::indexed(kind::BALANCE, index), real_balance)
}

fn money(id: &str, field_kind: &str, real: &str) -> String {
    if real.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, field_kind, real);
    let cents = be_uint(&fp, 0, 2) % 100;
    let dollars = match be_uint(&fp, 2, 3) % 1_000_000 {
        d if d < 100 => d + 100,
        d => d,
    };
    format!("{dollars}.{cents:02}")
}

/// Exactly ten digits, never starting with 0
pub fn generate_account_number(id: &str, real_number: &str, index: usize) -> String {
    if real_number.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, &kind::indexed(kind::ACCOUNT_NUMBER, index), real_number);
    (be_uint(&fp, 0, 6) % 9_000_000_000 + 1_000_000_000).to_string()
}

/// Exactly nine digits, never starting with 0
pub fn generate_routing_number(id: &str, real_number: &str, index: usize) -> String {
    if real_number.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, &kind::indexed(kind::ROUTING_NUMBER, index), real_number);
    (be_uint(&fp, 0, 4) % 900_000_000 + 100_000_000).to_string()
}

/// Sixteen-digit card number starting with `4` that passes the Luhn check
///
/// # Examples
///
/// ```
/// use simulacrum::masking::generators::{generate_credit_card_number, luhn_valid};
///
/// let card = generate_credit_card_number("user123", "4111111111111111", 0);
/// assert_eq!(card.len(), 16);
/// assert!(card.starts_with('4'));
/// assert!(luhn_valid(&card));
/// ```
pub fn generate_credit_card_number(id: &str, real_number: &str, index: usize) -> String {
    if real_number.is_empty() {
        return String::new();
    }
    let fp = fingerprint(
        id,
        &kind::indexed(kind::CREDIT_CARD_NUMBER, index),
        real_number,
    );
    let mut digits = [0u8; 16];
    digits[0] = 4;
    for (i, digit) in digits.iter_mut().enumerate().take(15).skip(1) {
        *digit = fp.byte(i) % 10;
    }
    digits[15] = luhn_check_digit(&digits[..15]);
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Check digit that makes `payload` followed by it pass the Luhn test
///
/// Walking right to left over the payload, every other digit starting with
/// the rightmost is doubled, with 9 subtracted from doubles above 9.
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(pos, &d)| {
            let d = u32::from(d);
            if pos % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether a string of ASCII digits passes the Luhn test
pub fn luhn_valid(number: &str) -> bool {
    if number.len() < 2 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    let (payload, check) = digits.split_at(digits.len() - 1);
    luhn_check_digit(payload) == check[0]
}
