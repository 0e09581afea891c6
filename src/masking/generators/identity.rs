//! Identity document, date and gender generators

use super::kind;
use crate::masking::fingerprint::{fingerprint, Fingerprint};
use crate::masking::select::{be_uint, bounded_int, letter};

/// Year the date windows are anchored to
pub const REFERENCE_YEAR: u32 = 2024;

/// Year range a generated date may fall in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub first_year: u32,
    /// Number of years in the window, at least 1
    pub span: u32,
}

impl DateWindow {
    /// Document issue dates: the ten years up to the reference year
    pub const ISSUE: DateWindow = DateWindow {
        first_year: REFERENCE_YEAR - 10,
        span: 11,
    };

    /// Document expiry dates: five to ten years after the reference year
    pub const EXPIRY: DateWindow = DateWindow {
        first_year: REFERENCE_YEAR + 5,
        span: 6,
    };

    /// Birth dates for ages of roughly 18 to 85 at the reference year
    pub const BIRTH: DateWindow = DateWindow {
        first_year: 1939,
        span: 68,
    };

    /// Window used for dates of the given field kind
    pub fn for_kind(field_kind: &str) -> DateWindow {
        if field_kind == kind::DATE_OF_BIRTH {
            Self::BIRTH
        } else if field_kind.ends_with("_expiry") {
            Self::EXPIRY
        } else {
            Self::ISSUE
        }
    }

    pub fn last_year(&self) -> u32 {
        self.first_year + self.span.max(1) - 1
    }

    fn year(&self, fp: &Fingerprint) -> u32 {
        self.first_year + (be_uint(fp, 0, 2) as u32) % self.span.max(1)
    }
}

/// `AAA-GG-SSSS` with area 1-899, group 1-99 and serial 0-9999
pub fn generate_tax_id(id: &str, real_tax_id: &str) -> String {
    if real_tax_id.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::TAX_ID, real_tax_id);
    let area = bounded_int(&fp, 0, 900);
    let group = fp.byte(2) % 99 + 1;
    let serial = be_uint(&fp, 3, 2) % 10000;
    format!("{area:03}-{group:02}-{serial:04}")
}

/// `AAA-GG-SSSS` outside the reserved SSN ranges
///
/// Area is 1-898 and never 666, group 1-99, serial 1-9999.
///
/// # Examples
///
/// ```
/// use simulacrum::masking::generators::generate_ssn;
///
/// let ssn = generate_ssn("user123", "123-45-6789");
/// assert_eq!(ssn.len(), 11);
/// assert!(!ssn.starts_with("000") && !ssn.starts_with("666"));
/// ```
pub fn generate_ssn(id: &str, real_ssn: &str) -> String {
    if real_ssn.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::SSN, real_ssn);
    let area = match bounded_int(&fp, 0, 899) {
        666 => 667,
        n => n,
    };
    let group = fp.byte(2) % 99 + 1;
    let serial = bounded_int(&fp, 3, 10000);
    format!("{area:03}-{group:02}-{serial:04}")
}

/// Two letters followed by seven digits
pub fn generate_passport_number(id: &str, real_number: &str) -> String {
    document_number(id, kind::PASSPORT, real_number)
}

/// Three letters followed by six digits
pub fn generate_driver_license_number(id: &str, real_number: &str) -> String {
    document_number(id, kind::DRIVER_LICENSE, real_number)
}

fn document_number(id: &str, field_kind: &str, real_number: &str) -> String {
    if real_number.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, field_kind, real_number);
    let (letters, digits) = if field_kind == kind::DRIVER_LICENSE {
        (3, 6)
    } else {
        (2, 7)
    };
    let mut out: String = (0..letters).map(|i| letter(&fp, i)).collect();
    let serial = be_uint(&fp, letters, 4) % 10u64.pow(digits as u32);
    out.push_str(&format!("{serial:0width$}", width = digits));
    out
}

/// `YYYY-MM-DD` within the window for `field_kind`
///
/// Days stop at 28 so every month/day pair is a real calendar date.
///
/// # Examples
///
/// ```
/// use simulacrum::masking::generators::{generate_date, kind};
///
/// let issued = generate_date("user123", kind::PASSPORT_ISSUE, "2019-03-14");
/// let year: u32 = issued[..4].parse().unwrap();
/// assert!((2014..=2024).contains(&year));
/// ```
pub fn generate_date(id: &str, field_kind: &str, real_date: &str) -> String {
    if real_date.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, field_kind, real_date);
    let year = DateWindow::for_kind(field_kind).year(&fp);
    let month = fp.byte(2) % 12 + 1;
    let day = fp.byte(3) % 28 + 1;
    format!("{year:04}-{month:02}-{day:02}")
}

pub fn generate_date_of_birth(id: &str, real_dob: &str) -> String {
    generate_date(id, kind::DATE_OF_BIRTH, real_dob)
}

/// `"Male"` or `"Female"` from the parity of byte 0
pub fn generate_gender(id: &str, real_gender: &str) -> String {
    if real_gender.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::GENDER, real_gender);
    let gender = if fp.byte(0) % 2 == 0 { "Male" } else { "Female" };
    gender.to_string()
}
