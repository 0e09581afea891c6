//! Address generators
//!
//! The combined address draws one region and takes city and state from it,
//! so the three always read as a plausible whole. The separate-field
//! generators fingerprint their own input, and each of `city`, `state` and
//! `country` therefore lands on a region of its own: masking the parts of one
//! address separately does not guarantee they agree geographically.

use super::kind;
use crate::masking::fingerprint::fingerprint;
use crate::masking::select::{bounded_int, pick, region_of};
use crate::masking::tables::{CITY_NAMES, STREET_NAMES};

/// Full address as `"<number> <street>, <city>, <state> <zip5>"`
pub fn generate_address(id: &str, real_address: &str) -> String {
    if real_address.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::ADDRESS, real_address);
    let region = region_of(&fp);
    let number = bounded_int(&fp, 1, 9999);
    let street = pick(&fp, 2, STREET_NAMES);
    let city = pick(&fp, 3, region.cities);
    let state = pick(&fp, 4, region.states);
    let zip_code = bounded_int(&fp, 5, 99999);
    format!("{number} {street}, {city}, {state} {zip_code:05}")
}

/// Street line as `"<number> <street>"`
pub fn generate_street(id: &str, real_street: &str) -> String {
    if real_street.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::STREET, real_street);
    let number = bounded_int(&fp, 0, 9999);
    format!("{number} {}", pick(&fp, 2, STREET_NAMES))
}

pub fn generate_city(id: &str, real_city: &str) -> String {
    if real_city.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::CITY, real_city);
    pick(&fp, 1, region_of(&fp).cities).to_string()
}

pub fn generate_state(id: &str, real_state: &str) -> String {
    if real_state.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::STATE, real_state);
    pick(&fp, 1, region_of(&fp).states).to_string()
}

/// Five-digit, zero-padded zip code
pub fn generate_zip_code(id: &str, real_zip: &str) -> String {
    if real_zip.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::ZIP_CODE, real_zip);
    format!("{:05}", bounded_int(&fp, 0, 99999))
}

/// County drawn from the generic place-name table, not region-scoped
pub fn generate_county(id: &str, real_county: &str) -> String {
    if real_county.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::COUNTY, real_county);
    pick(&fp, 0, CITY_NAMES).to_string()
}

pub fn generate_country(id: &str, real_country: &str) -> String {
    if real_country.is_empty() {
        return String::new();
    }
    let fp = fingerprint(id, kind::COUNTRY, real_country);
    region_of(&fp).country.to_string()
}
