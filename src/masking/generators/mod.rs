//! Field generators
//!
//! One pure function per PII category. Every string generator follows the
//! same contract: an empty real value yields an empty fake value without
//! computing a fingerprint; anything else is fingerprinted under the
//! generator's field kind and mapped to a format-preserving substitute.
//!
//! The typed record path ([`crate::masking::record`]) and the schema-free
//! walker ([`crate::masking::walker`]) both call these functions, so a value
//! masks identically whichever path it travels.

pub mod address;
pub mod bank;
pub mod contact;
pub mod identity;
pub mod name;
pub mod numeric;

pub use address::{
    generate_address, generate_city, generate_country, generate_county, generate_state,
    generate_street, generate_zip_code,
};
pub use bank::{
    generate_account_name, generate_account_number, generate_amount, generate_balance,
    generate_credit_card_number, generate_routing_number, luhn_check_digit, luhn_valid,
};
pub use contact::{generate_email, generate_phone};
pub use identity::{
    generate_date, generate_date_of_birth, generate_driver_license_number, generate_gender,
    generate_passport_number, generate_ssn, generate_tax_id, DateWindow,
};
pub use name::{generate_first_name, generate_last_name, generate_middle_name, generate_name};
pub use numeric::{generate_float, generate_integer};

/// Field kind tags namespacing each fingerprint
///
/// Per-account kinds are built with [`indexed`] (e.g. `account_amount_2`).
pub mod kind {
    pub const NAME: &str = "name";
    pub const FIRST_NAME: &str = "firstname";
    pub const MIDDLE_NAME: &str = "middlename";
    pub const LAST_NAME: &str = "lastname";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP_CODE: &str = "zipcode";
    pub const COUNTY: &str = "county";
    pub const COUNTRY: &str = "country";
    pub const TAX_ID: &str = "taxid";
    pub const SSN: &str = "ssn";
    pub const PASSPORT: &str = "passport";
    pub const PASSPORT_ISSUE: &str = "passport_issue";
    pub const PASSPORT_EXPIRY: &str = "passport_expiry";
    pub const DRIVER_LICENSE: &str = "driverlicense";
    pub const LICENSE_ISSUE: &str = "license_issue";
    pub const LICENSE_EXPIRY: &str = "license_expiry";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const GENDER: &str = "gender";
    pub const ACCOUNT_NAME: &str = "account_name";
    pub const ACCOUNT_AMOUNT: &str = "account_amount";
    pub const ACCOUNT_NUMBER: &str = "account_number";
    pub const BALANCE: &str = "balance";
    pub const ROUTING_NUMBER: &str = "routing_number";
    pub const CREDIT_CARD_NUMBER: &str = "credit_card_number";
    pub const INTEGER: &str = "integer_value";
    pub const FLOAT: &str = "float_value";

    /// `<base>_<index>`, the kind used for the `index`-th bank account
    pub fn indexed(base: &str, index: usize) -> String {
        format!("{base}_{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::kind;

    #[test]
    fn test_indexed_kind() {
        assert_eq!(kind::indexed(kind::ACCOUNT_AMOUNT, 2), "account_amount_2");
        assert_eq!(kind::indexed(kind::BALANCE, 0), "balance_0");
    }
}
