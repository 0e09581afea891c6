//! Generic numeric generators
//!
//! Zero stands for "no value" in numeric fields and passes through unmasked.
//! Any other input maps to a non-zero fake.

use super::kind;
use crate::masking::fingerprint::fingerprint;
use crate::masking::select::be_uint;

/// Positive, non-zero substitute for `real_value`
pub fn generate_integer(id: &str, real_value: i64) -> i64 {
    if real_value == 0 {
        return 0;
    }
    let fp = fingerprint(id, kind::INTEGER, &real_value.to_string());
    match fp.as_i64().checked_abs().unwrap_or(i64::MAX) {
        0 => 1,
        n => n,
    }
}

/// Non-negative, non-zero substitute below 10,000,000
pub fn generate_float(id: &str, real_value: f64) -> f64 {
    if real_value == 0.0 {
        return 0.0;
    }
    let fp = fingerprint(id, kind::FLOAT, &real_value.to_string());
    let integer_part = (be_uint(&fp, 0, 4) % 10_000_000) as f64;
    let fraction = (be_uint(&fp, 4, 4) % 1_000_000) as f64 / 1_000_000.0;
    match integer_part + fraction {
        v if v == 0.0 => 0.1,
        v => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_integer() {
        let int1 = generate_integer("user123", 42);
        let int2 = generate_integer("user123", 42);
        let int3 = generate_integer("user124", 42);

        assert_eq!(int1, int2);
        assert_ne!(int1, int3);
        assert!(int1 > 0);
        assert_eq!(generate_integer("user123", 0), 0);
    }

    #[test]
    fn test_generate_integer_negative_input() {
        for value in [-1i64, -42, i64::MIN, i64::MAX] {
            assert!(generate_integer("user123", value) > 0);
        }
    }

    #[test]
    fn test_generate_float() {
        let f1 = generate_float("user123", 12.75);
        let f2 = generate_float("user123", 12.75);

        assert_eq!(f1, f2);
        assert_ne!(f1, 12.75);
        assert!(f1 > 0.0 && f1 < 10_000_000.0);
        assert_eq!(generate_float("user123", 0.0), 0.0);
    }

    #[test]
    fn test_generate_float_sampled() {
        for i in 1..200 {
            let value = generate_float(&format!("float_{i}"), f64::from(i) * 1.5);
            assert!(value > 0.0, "got {value}");
        }
    }
}
