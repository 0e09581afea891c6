//! Integration tests for typed record masking

use simulacrum::domain::SimulacrumError;
use simulacrum::masking::generators::{self, kind};
use simulacrum::masking::{
    obscure_data, BankAccount, DriverLicense, MaskingConfig, MaskingEngine, Passport,
    PersonalData,
};

fn sample_record() -> PersonalData {
    PersonalData {
        id: "user123".to_string(),
        name: "John Doe".to_string(),
        email: "john@company.com".to_string(),
        phone_number: "+1-555-987-6543".to_string(),
        address: "123 Main St, Springfield, IL 62704".to_string(),
        county: "Sangamon".to_string(),
        country: "USA".to_string(),
        ssn: "123-45-6789".to_string(),
        tax_id: "98-7654321".to_string(),
        date_of_birth: "1980-05-17".to_string(),
        gender: "Male".to_string(),
        passport: Some(Passport {
            number: "X1234567".to_string(),
            issue_date: "2018-06-01".to_string(),
            expiration_date: "2028-06-01".to_string(),
        }),
        driver_license: Some(DriverLicense {
            number: "D1234567".to_string(),
            issue_date: "2020-01-15".to_string(),
            expiration_date: "2030-01-15".to_string(),
        }),
        bank_accounts: vec![
            BankAccount {
                name: "Checking".to_string(),
                amount: "1500.00".to_string(),
                account_number: "000123456789".to_string(),
                balance: "2500.50".to_string(),
                credit_card_number: "4111111111111111".to_string(),
                routing_number: "021000021".to_string(),
            },
            BankAccount {
                name: "Savings".to_string(),
                account_number: "000123456789".to_string(),
                ..Default::default()
            },
        ],
        integer_value: Some(42),
        float_value: Some(12.75),
        ..Default::default()
    }
}

#[test]
fn test_full_record_is_masked_and_deterministic() {
    let record = sample_record();
    let first = obscure_data(&record).unwrap();
    let second = obscure_data(&record).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.id, "user123");
    assert_ne!(first.name, record.name);
    assert_ne!(first.email, record.email);
    assert!(first.phone_number.starts_with("+1-555-"));
    assert_ne!(first.ssn, record.ssn);
    assert!(first.gender == "Male" || first.gender == "Female");
    assert_eq!(first.name, generators::generate_name("user123", "John Doe"));
}

#[test]
fn test_name_and_address_exclusivity() {
    let mut record = sample_record();
    record.first_name = "John".to_string();
    record.last_name = "Doe".to_string();
    record.street = "123 Main St".to_string();
    record.city = "Springfield".to_string();

    let fake = obscure_data(&record).unwrap();
    assert!(!fake.name.is_empty());
    assert!(fake.first_name.is_empty());
    assert!(fake.last_name.is_empty());
    assert!(!fake.address.is_empty());
    assert!(fake.street.is_empty());
    assert!(fake.city.is_empty());

    record.name.clear();
    record.address.clear();
    let fake = obscure_data(&record).unwrap();
    assert!(fake.name.is_empty());
    assert!(!fake.first_name.is_empty());
    assert!(!fake.last_name.is_empty());
    assert!(fake.middle_name.is_empty());
    assert!(fake.address.is_empty());
    assert!(!fake.street.is_empty());
    assert!(!fake.city.is_empty());
}

#[test]
fn test_documents_use_their_date_windows() {
    let fake = obscure_data(&sample_record()).unwrap();

    let passport = fake.passport.unwrap();
    assert_eq!(
        passport.issue_date,
        generators::generate_date("user123", kind::PASSPORT_ISSUE, "2018-06-01")
    );
    assert_eq!(
        passport.expiration_date,
        generators::generate_date("user123", kind::PASSPORT_EXPIRY, "2028-06-01")
    );
    assert!(passport.issue_date < passport.expiration_date);

    let license = fake.driver_license.unwrap();
    assert_eq!(license.number.len(), 9);
    assert!(license.issue_date < license.expiration_date);
}

#[test]
fn test_bank_accounts_keep_order_and_blanks() {
    let fake = obscure_data(&sample_record()).unwrap();
    assert_eq!(fake.bank_accounts.len(), 2);

    let [first, second] = [&fake.bank_accounts[0], &fake.bank_accounts[1]];
    assert!(generators::luhn_valid(&first.credit_card_number));
    assert!(second.amount.is_empty());
    assert!(second.credit_card_number.is_empty());
    assert_ne!(first.account_number, second.account_number);
}

#[test]
fn test_zero_numbers_pass_through() {
    let mut record = sample_record();
    record.integer_value = Some(0);
    record.float_value = Some(0.0);

    let fake = obscure_data(&record).unwrap();
    assert_eq!(fake.integer_value, Some(0));
    assert_eq!(fake.float_value, Some(0.0));

    record.integer_value = None;
    record.float_value = None;
    let fake = obscure_data(&record).unwrap();
    assert_eq!(fake.integer_value, None);
    assert_eq!(fake.float_value, None);
}

#[test]
fn test_nested_records() {
    let mut record = sample_record();
    record.object = Some(Box::new(PersonalData {
        name: "Jane Roe".to_string(),
        ..Default::default()
    }));
    record.objects = vec![
        PersonalData {
            id: "child-1".to_string(),
            email: "child@company.com".to_string(),
            ..Default::default()
        },
        PersonalData {
            email: "child@company.com".to_string(),
            ..Default::default()
        },
    ];

    let fake = obscure_data(&record).unwrap();

    let object = fake.object.unwrap();
    assert!(object.id.is_empty());
    assert_eq!(
        object.name,
        generators::generate_name("user123.object", "Jane Roe")
    );

    assert_eq!(fake.objects.len(), 2);
    assert_eq!(fake.objects[0].id, "child-1");
    assert_eq!(
        fake.objects[0].email,
        generators::generate_email("child-1", "child@company.com")
    );
    assert_eq!(
        fake.objects[1].email,
        generators::generate_email("user123.objects[1]", "child@company.com")
    );
}

#[test]
fn test_missing_id_is_rejected() {
    let mut record = sample_record();
    record.id = "   ".to_string();
    assert!(matches!(
        obscure_data(&record),
        Err(SimulacrumError::MissingSubjectId(_))
    ));
}

#[test]
fn test_engine_stats_for_record() {
    let engine = MaskingEngine::new(MaskingConfig::default()).unwrap();
    let outcome = engine.mask_record(&sample_record()).unwrap();

    assert_eq!(outcome.stats.documents, 1);
    assert_eq!(outcome.stats.masked("name"), 1);
    assert_eq!(outcome.stats.masked("passport"), 3);
    assert_eq!(outcome.stats.masked("driver_license"), 3);
    // six leaves in the first account, two in the second
    assert_eq!(outcome.stats.masked("bank_accounts"), 8);
    assert_eq!(outcome.stats.masked("first_name"), 0);
}

#[test]
fn test_json_round_trip_omits_empty_fields() {
    let record = PersonalData {
        id: "user123".to_string(),
        email: "john@company.com".to_string(),
        ..Default::default()
    };
    let fake = obscure_data(&record).unwrap();
    let json = serde_json::to_value(&fake).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("id"));
    assert!(object.contains_key("email"));
}

#[test]
fn test_id_only_record_masks_to_id_only_record() {
    let record = PersonalData {
        id: "user123".to_string(),
        ..Default::default()
    };
    let fake = obscure_data(&record).unwrap();
    assert_eq!(
        fake,
        PersonalData {
            id: "user123".to_string(),
            ..Default::default()
        }
    );
}
