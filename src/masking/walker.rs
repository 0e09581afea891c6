//! Schema-free JSON masking
//!
//! The [`Walker`] masks an arbitrary [`serde_json::Value`] tree without a
//! registered schema. Keys in [`RECOGNIZED_FIELDS`] are handed to the matching
//! field generator; every other key is recursed into when it holds an object
//! or array and copied verbatim otherwise. Arrays keep their order and length.
//!
//! Malformed values under a recognized key never fail the walk: a string field
//! holding a number, an object or an array, or `bank_accounts` holding an
//! object, pass through as they are. The walker does not descend into them.

use crate::masking::config::IdScope;
use crate::masking::generators::{self, kind};
use crate::masking::stats::MaskStats;
use serde_json::{Map, Number, Value};

/// Field names the walker masks, wherever they occur in the tree
pub const RECOGNIZED_FIELDS: &[&str] = &RECOGNIZED_KEYS;

const RECOGNIZED_KEYS: [&str; PiiField::ALL.len()] = {
    let mut keys = [""; PiiField::ALL.len()];
    let mut i = 0;
    while i < keys.len() {
        keys[i] = PiiField::ALL[i].key();
        i += 1;
    }
    keys
};

/// A recognized field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiiField {
    Id,
    Name,
    Email,
    PhoneNumber,
    Address,
    Street,
    City,
    State,
    ZipCode,
    County,
    Country,
    TaxId,
    FirstName,
    LastName,
    MiddleName,
    DateOfBirth,
    Gender,
    Ssn,
    Passport,
    DriverLicense,
    BankAccounts,
    IntegerValue,
    FloatValue,
}

impl PiiField {
    /// Every recognized field, in [`RECOGNIZED_FIELDS`] order
    pub const ALL: [PiiField; 23] = [
        Self::Id,
        Self::Name,
        Self::Email,
        Self::PhoneNumber,
        Self::Address,
        Self::Street,
        Self::City,
        Self::State,
        Self::ZipCode,
        Self::County,
        Self::Country,
        Self::TaxId,
        Self::FirstName,
        Self::LastName,
        Self::MiddleName,
        Self::DateOfBirth,
        Self::Gender,
        Self::Ssn,
        Self::Passport,
        Self::DriverLicense,
        Self::BankAccounts,
        Self::IntegerValue,
        Self::FloatValue,
    ];

    /// Field for a JSON key, matched exactly
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Address => "address",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zip_code",
            Self::County => "county",
            Self::Country => "country",
            Self::TaxId => "tax_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::MiddleName => "middle_name",
            Self::DateOfBirth => "date_of_birth",
            Self::Gender => "gender",
            Self::Ssn => "ssn",
            Self::Passport => "passport",
            Self::DriverLicense => "driver_license",
            Self::BankAccounts => "bank_accounts",
            Self::IntegerValue => "integer_value",
            Self::FloatValue => "float_value",
        }
    }

    /// Generator for fields whose value is a single string
    fn string_generator(self) -> Option<fn(&str, &str) -> String> {
        let generate: fn(&str, &str) -> String = match self {
            Self::Name => generators::generate_name,
            Self::Email => generators::generate_email,
            Self::PhoneNumber => generators::generate_phone,
            Self::Address => generators::generate_address,
            Self::Street => generators::generate_street,
            Self::City => generators::generate_city,
            Self::State => generators::generate_state,
            Self::ZipCode => generators::generate_zip_code,
            Self::County => generators::generate_county,
            Self::Country => generators::generate_country,
            Self::TaxId => generators::generate_tax_id,
            Self::FirstName => generators::generate_first_name,
            Self::LastName => generators::generate_last_name,
            Self::MiddleName => generators::generate_middle_name,
            Self::DateOfBirth => generators::generate_date_of_birth,
            Self::Gender => generators::generate_gender,
            Self::Ssn => generators::generate_ssn,
            _ => return None,
        };
        Some(generate)
    }
}

/// A JSON number split into the representation its generator expects
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
}

impl NumericValue {
    /// Integer if the value survives an `f64 -> i64 -> f64` round trip unchanged
    ///
    /// ```
    /// use simulacrum::masking::walker::NumericValue;
    /// use serde_json::Number;
    ///
    /// let n: Number = serde_json::from_str("7.0").unwrap();
    /// assert_eq!(NumericValue::classify(&n), Some(NumericValue::Integer(7)));
    /// let n: Number = serde_json::from_str("7.5").unwrap();
    /// assert_eq!(NumericValue::classify(&n), Some(NumericValue::Float(7.5)));
    /// ```
    pub fn classify(number: &Number) -> Option<Self> {
        if let Some(i) = number.as_i64() {
            return Some(Self::Integer(i));
        }
        let f = number.as_f64()?;
        if f.is_finite() && (f as i64) as f64 == f {
            Some(Self::Integer(f as i64))
        } else {
            Some(Self::Float(f))
        }
    }

    /// Value as an `i64`, fractions truncated toward zero and out-of-range
    /// floats saturated
    pub fn truncate(self) -> i64 {
        match self {
            Self::Integer(i) => i,
            Self::Float(f) => f as i64,
        }
    }

    pub fn widen(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

/// Recursive masker for schema-free JSON
///
/// # Examples
///
/// ```
/// use simulacrum::masking::config::IdScope;
/// use simulacrum::masking::stats::MaskStats;
/// use simulacrum::masking::walker::Walker;
/// use serde_json::json;
///
/// let mut stats = MaskStats::new();
/// let mut walker = Walker::new(IdScope::Threaded, "", &mut stats);
/// let masked = walker.walk(&json!({"id": "user123", "name": "John Doe", "note": "keep"}));
///
/// assert_eq!(masked["id"], "user123");
/// assert_eq!(masked["note"], "keep");
/// assert_ne!(masked["name"], "John Doe");
/// ```
pub struct Walker<'a> {
    scope: IdScope,
    default_subject: &'a str,
    stats: &'a mut MaskStats,
}

impl<'a> Walker<'a> {
    /// `default_subject` salts objects that have no `id` of their own and no
    /// enclosing object with one. It is ignored under [`IdScope::Unscoped`].
    pub fn new(scope: IdScope, default_subject: &'a str, stats: &'a mut MaskStats) -> Self {
        Self {
            scope,
            default_subject,
            stats,
        }
    }

    /// Mask `value`, returning a structurally identical tree
    pub fn walk(&mut self, value: &Value) -> Value {
        let root = match self.scope {
            IdScope::Threaded => self.default_subject.to_string(),
            IdScope::Unscoped => String::new(),
        };
        self.walk_value(value, &root)
    }

    fn walk_value(&mut self, value: &Value, subject: &str) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.walk_object(map, subject)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.walk_value(item, subject))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn walk_object(&mut self, map: &Map<String, Value>, inherited: &str) -> Map<String, Value> {
        let subject = self.subject_for(map, inherited);
        let mut out = Map::new();
        for (key, value) in map {
            let masked = match PiiField::from_key(key) {
                Some(field) => self.mask_field(field, value, &subject),
                None if value.is_object() || value.is_array() => self.walk_value(value, &subject),
                None => {
                    self.stats.record_passthrough();
                    value.clone()
                }
            };
            out.insert(key.clone(), masked);
        }
        out
    }

    /// Subject salting the fields of `map`
    fn subject_for(&self, map: &Map<String, Value>, inherited: &str) -> String {
        match self.scope {
            IdScope::Unscoped => String::new(),
            IdScope::Threaded => map
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.trim().is_empty())
                .unwrap_or(inherited)
                .to_string(),
        }
    }

    fn mask_field(&mut self, field: PiiField, value: &Value, subject: &str) -> Value {
        match (field, value) {
            (PiiField::Id, _) => value.clone(),
            (PiiField::Passport, Value::Object(map)) => {
                Value::Object(self.mask_document(map, subject, Document::Passport))
            }
            (PiiField::DriverLicense, Value::Object(map)) => {
                Value::Object(self.mask_document(map, subject, Document::DriverLicense))
            }
            (PiiField::Passport | PiiField::DriverLicense, _) => value.clone(),
            (PiiField::BankAccounts, Value::Array(accounts)) => Value::Array(
                accounts
                    .iter()
                    .enumerate()
                    .map(|(i, account)| match account {
                        Value::Object(map) => Value::Object(self.mask_bank_account(map, subject, i)),
                        other => other.clone(),
                    })
                    .collect(),
            ),
            (PiiField::BankAccounts, _) => value.clone(),
            (PiiField::IntegerValue | PiiField::FloatValue, Value::Number(number)) => {
                self.mask_number(field, number, subject)
            }
            (_, Value::String(real)) => match field.string_generator() {
                Some(generate) => Value::String(self.mask_string(field.key(), real, |r| {
                    generate(subject, r)
                })),
                None => value.clone(),
            },
            _ => value.clone(),
        }
    }

    fn mask_string(&mut self, field: &str, real: &str, generate: impl FnOnce(&str) -> String) -> String {
        if real.is_empty() {
            return String::new();
        }
        self.stats.record_masked(field);
        generate(real)
    }

    /// The key picks the generator; the JSON number is only converted to it
    ///
    /// `integer_value` truncates a fractional number toward zero. A value
    /// that is zero after conversion passes through verbatim.
    fn mask_number(&mut self, field: PiiField, number: &Number, subject: &str) -> Value {
        let Some(classified) = NumericValue::classify(number) else {
            return Value::Number(number.clone());
        };
        match field {
            PiiField::IntegerValue => match classified.truncate() {
                0 => Value::Number(number.clone()),
                i => {
                    self.stats.record_masked(field.key());
                    Value::from(generators::generate_integer(subject, i))
                }
            },
            _ => match classified.widen() {
                f if f == 0.0 => Value::Number(number.clone()),
                f => {
                    self.stats.record_masked(field.key());
                    Number::from_f64(generators::generate_float(subject, f))
                        .map(Value::Number)
                        .unwrap_or_else(|| Value::Number(number.clone()))
                }
            },
        }
    }

    /// Mask every string leaf of a passport or driver license object
    ///
    /// Non-string leaves, nested objects and arrays included, are copied as
    /// they are.
    fn mask_document(&mut self, map: &Map<String, Value>, subject: &str, document: Document) -> Map<String, Value> {
        let field = document.key();
        let mut out = Map::new();
        for (key, value) in map {
            let masked = match value {
                Value::String(_) if key == "id" => value.clone(),
                Value::String(real) => {
                    let masked = match key.as_str() {
                        "number" => self.mask_string(field, real, |r| document.number(subject, r)),
                        "issue_date" => self.mask_string(field, real, |r| {
                            generators::generate_date(subject, document.issue_kind(), r)
                        }),
                        "expiration_date" => self.mask_string(field, real, |r| {
                            generators::generate_date(subject, document.expiry_kind(), r)
                        }),
                        other => {
                            let salt = format!("{subject}:{other}");
                            self.mask_string(field, real, |r| document.number(&salt, r))
                        }
                    };
                    Value::String(masked)
                }
                other => other.clone(),
            };
            out.insert(key.clone(), masked);
        }
        out
    }

    /// Mask every string leaf of one `bank_accounts` element at position `index`
    ///
    /// Non-string leaves are copied as they are.
    fn mask_bank_account(&mut self, map: &Map<String, Value>, subject: &str, index: usize) -> Map<String, Value> {
        let field = PiiField::BankAccounts.key();
        let mut out = Map::new();
        for (key, value) in map {
            let masked = match value {
                Value::String(_) if key == "id" => value.clone(),
                Value::String(real) => {
                    let masked = match key.as_str() {
                        "name" => self.mask_string(field, real, |r| {
                            generators::generate_account_name(subject, r, index)
                        }),
                        "amount" => self.mask_string(field, real, |r| {
                            generators::generate_amount(subject, r, index)
                        }),
                        "account_number" => self.mask_string(field, real, |r| {
                            generators::generate_account_number(subject, r, index)
                        }),
                        "balance" => self.mask_string(field, real, |r| {
                            generators::generate_balance(subject, r, index)
                        }),
                        "credit_card_number" => self.mask_string(field, real, |r| {
                            generators::generate_credit_card_number(subject, r, index)
                        }),
                        "routing_number" => self.mask_string(field, real, |r| {
                            generators::generate_routing_number(subject, r, index)
                        }),
                        other => {
                            let salt = format!("{subject}:{other}");
                            self.mask_string(field, real, |r| {
                                generators::generate_account_name(&salt, r, index)
                            })
                        }
                    };
                    Value::String(masked)
                }
                other => other.clone(),
            };
            out.insert(key.clone(), masked);
        }
        out
    }
}

#[derive(Debug, Clone, Copy)]
enum Document {
    Passport,
    DriverLicense,
}

impl Document {
    fn key(self) -> &'static str {
        match self {
            Self::Passport => PiiField::Passport.key(),
            Self::DriverLicense => PiiField::DriverLicense.key(),
        }
    }

    fn number(self, subject: &str, real: &str) -> String {
        match self {
            Self::Passport => generators::generate_passport_number(subject, real),
            Self::DriverLicense => generators::generate_driver_license_number(subject, real),
        }
    }

    fn issue_kind(self) -> &'static str {
        match self {
            Self::Passport => kind::PASSPORT_ISSUE,
            Self::DriverLicense => kind::LICENSE_ISSUE,
        }
    }

    fn expiry_kind(self) -> &'static str {
        match self {
            Self::Passport => kind::PASSPORT_EXPIRY,
            Self::DriverLicense => kind::LICENSE_EXPIRY,
        }
    }
}
