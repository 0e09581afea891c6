//! Typed record masking
//!
//! [`PersonalData`] is the fixed-schema shape of a subject's PII. Masking walks
//! it in one pass and produces an independent fake record:
//!
//! - a combined `name` wins over the separate name fields, and a combined
//!   `address` wins over `street`/`city`/`state`/`zip_code`; the losing form
//!   stays empty on output
//! - `county` and `country` are masked whichever address form is used
//! - passport and driver license sub-records are masked as units
//! - bank accounts are masked in list order, salted with their position
//! - nested `object`/`objects` records are masked recursively
//!
//! Fields that are empty on input stay empty on output, and the `id` field is
//! copied through unchanged at every level.

use crate::domain::{Result, SimulacrumError, SubjectId};
use crate::masking::generators::{self, kind};
use crate::masking::stats::MaskStats;
use serde::{Deserialize, Serialize};

/// A subject's PII in its fixed-schema form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone_number: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub county: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tax_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssn: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gender: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport: Option<Passport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_license: Option<DriverLicense>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bank_accounts: Vec<BankAccount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_value: Option<f64>,

    /// Single nested record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Box<PersonalData>>,
    /// List of nested records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<PersonalData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passport {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issue_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expiration_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverLicense {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issue_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expiration_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub amount: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub balance: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub credit_card_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub routing_number: String,
}

/// Mask a record, salting every field with its `id`
///
/// # Errors
///
/// Returns [`SimulacrumError::MissingSubjectId`] if `record.id` is empty or
/// whitespace-only. Nothing is masked in that case.
///
/// # Examples
///
/// ```
/// use simulacrum::masking::record::{obscure_data, PersonalData};
///
/// let real = PersonalData {
///     id: "user123".to_string(),
///     name: "John Doe".to_string(),
///     ..Default::default()
/// };
/// let fake = obscure_data(&real)?;
/// assert_eq!(fake.id, "user123");
/// assert_ne!(fake.name, "John Doe");
/// assert!(fake.first_name.is_empty());
/// # Ok::<(), simulacrum::domain::SimulacrumError>(())
/// ```
pub fn obscure_data(record: &PersonalData) -> Result<PersonalData> {
    let mut stats = MaskStats::new();
    obscure_data_with_stats(record, &mut stats)
}

/// [`obscure_data`], counting every masked field into `stats`
pub fn obscure_data_with_stats(record: &PersonalData, stats: &mut MaskStats) -> Result<PersonalData> {
    let subject = SubjectId::new(record.id.as_str()).map_err(SimulacrumError::MissingSubjectId)?;
    Ok(obscure_with_salt(record, subject.as_str(), stats))
}

/// Mask `real` with `salt` as the subject identifier
///
/// `salt` need not equal `real.id`: nested records without an id of their
/// own are salted with an identifier derived from their parent.
pub fn obscure_with_salt(real: &PersonalData, salt: &str, stats: &mut MaskStats) -> PersonalData {
    let mut fake = PersonalData {
        id: real.id.clone(),
        ..Default::default()
    };

    if !real.name.is_empty() {
        fake.name = mask(stats, "name", &real.name, |v| generators::generate_name(salt, v));
    } else {
        fake.first_name = mask(stats, "first_name", &real.first_name, |v| {
            generators::generate_first_name(salt, v)
        });
        fake.middle_name = mask(stats, "middle_name", &real.middle_name, |v| {
            generators::generate_middle_name(salt, v)
        });
        fake.last_name = mask(stats, "last_name", &real.last_name, |v| {
            generators::generate_last_name(salt, v)
        });
    }

    if !real.address.is_empty() {
        fake.address = mask(stats, "address", &real.address, |v| {
            generators::generate_address(salt, v)
        });
    } else {
        fake.street = mask(stats, "street", &real.street, |v| generators::generate_street(salt, v));
        fake.city = mask(stats, "city", &real.city, |v| generators::generate_city(salt, v));
        fake.state = mask(stats, "state", &real.state, |v| generators::generate_state(salt, v));
        fake.zip_code = mask(stats, "zip_code", &real.zip_code, |v| {
            generators::generate_zip_code(salt, v)
        });
    }
    fake.county = mask(stats, "county", &real.county, |v| generators::generate_county(salt, v));
    fake.country = mask(stats, "country", &real.country, |v| {
        generators::generate_country(salt, v)
    });

    fake.email = mask(stats, "email", &real.email, |v| generators::generate_email(salt, v));
    fake.phone_number = mask(stats, "phone_number", &real.phone_number, |v| {
        generators::generate_phone(salt, v)
    });
    fake.tax_id = mask(stats, "tax_id", &real.tax_id, |v| generators::generate_tax_id(salt, v));
    fake.ssn = mask(stats, "ssn", &real.ssn, |v| generators::generate_ssn(salt, v));
    fake.date_of_birth = mask(stats, "date_of_birth", &real.date_of_birth, |v| {
        generators::generate_date_of_birth(salt, v)
    });
    fake.gender = mask(stats, "gender", &real.gender, |v| generators::generate_gender(salt, v));

    fake.passport = real
        .passport
        .as_ref()
        .map(|passport| obscure_passport(salt, passport, stats));
    fake.driver_license = real
        .driver_license
        .as_ref()
        .map(|license| obscure_driver_license(salt, license, stats));
    fake.bank_accounts = obscure_bank_accounts(salt, &real.bank_accounts, stats);

    fake.integer_value = real.integer_value.map(|v| {
        if v != 0 {
            stats.record_masked("integer_value");
        }
        generators::generate_integer(salt, v)
    });
    fake.float_value = real.float_value.map(|v| {
        if v != 0.0 {
            stats.record_masked("float_value");
        }
        generators::generate_float(salt, v)
    });

    fake.object = real.object.as_ref().map(|child| {
        let child_salt = nested_salt(child, || format!("{salt}.object"));
        Box::new(obscure_with_salt(child, &child_salt, stats))
    });
    fake.objects = real
        .objects
        .iter()
        .enumerate()
        .map(|(i, child)| {
            let child_salt = nested_salt(child, || format!("{salt}.objects[{i}]"));
            obscure_with_salt(child, &child_salt, stats)
        })
        .collect();

    fake
}

/// Mask a passport's number and both dates, each under its own field kind
pub fn obscure_passport(id: &str, real: &Passport, stats: &mut MaskStats) -> Passport {
    Passport {
        number: mask(stats, "passport", &real.number, |v| {
            generators::generate_passport_number(id, v)
        }),
        issue_date: mask(stats, "passport", &real.issue_date, |v| {
            generators::generate_date(id, kind::PASSPORT_ISSUE, v)
        }),
        expiration_date: mask(stats, "passport", &real.expiration_date, |v| {
            generators::generate_date(id, kind::PASSPORT_EXPIRY, v)
        }),
    }
}

pub fn obscure_driver_license(id: &str, real: &DriverLicense, stats: &mut MaskStats) -> DriverLicense {
    DriverLicense {
        number: mask(stats, "driver_license", &real.number, |v| {
            generators::generate_driver_license_number(id, v)
        }),
        issue_date: mask(stats, "driver_license", &real.issue_date, |v| {
            generators::generate_date(id, kind::LICENSE_ISSUE, v)
        }),
        expiration_date: mask(stats, "driver_license", &real.expiration_date, |v| {
            generators::generate_date(id, kind::LICENSE_EXPIRY, v)
        }),
    }
}

/// Mask accounts in order, passing each account's position to its generators
pub fn obscure_bank_accounts(
    id: &str,
    real: &[BankAccount],
    stats: &mut MaskStats,
) -> Vec<BankAccount> {
    real.iter()
        .enumerate()
        .map(|(i, account)| BankAccount {
            name: mask(stats, "bank_accounts", &account.name, |v| {
                generators::generate_account_name(id, v, i)
            }),
            amount: mask(stats, "bank_accounts", &account.amount, |v| {
                generators::generate_amount(id, v, i)
            }),
            account_number: mask(stats, "bank_accounts", &account.account_number, |v| {
                generators::generate_account_number(id, v, i)
            }),
            balance: mask(stats, "bank_accounts", &account.balance, |v| {
                generators::generate_balance(id, v, i)
            }),
            credit_card_number: mask(stats, "bank_accounts", &account.credit_card_number, |v| {
                generators::generate_credit_card_number(id, v, i)
            }),
            routing_number: mask(stats, "bank_accounts", &account.routing_number, |v| {
                generators::generate_routing_number(id, v, i)
            }),
        })
        .collect()
}

fn mask(stats: &mut MaskStats, field: &str, real: &str, generate: impl FnOnce(&str) -> String) -> String {
    if real.is_empty() {
        return String::new();
    }
    stats.record_masked(field);
    generate(real)
}

fn nested_salt(child: &PersonalData, synthetic: impl FnOnce() -> String) -> String {
    if child.id.trim().is_empty() {
        synthetic()
    } else {
        child.id.clone()
    }
}
