//! Selection primitives
//!
//! Pure functions that turn fingerprint bytes into list picks, bounded
//! integers, letters and address regions.

use super::fingerprint::Fingerprint;
use super::tables::{AddressRegion, ADDRESS_REGIONS};

/// Pick `list[fp[byte_index] mod len]`
///
/// Returns `None` only for an empty list.
pub fn select_from_list<'a, T>(fp: &Fingerprint, byte_index: usize, list: &'a [T]) -> Option<&'a T> {
    if list.is_empty() {
        return None;
    }
    list.get(fp.byte(byte_index) as usize % list.len())
}

/// String-table variant of [`select_from_list`]; an empty table yields `""`
pub fn pick(fp: &Fingerprint, byte_index: usize, list: &[&'static str]) -> &'static str {
    select_from_list(fp, byte_index, list)
        .copied()
        .unwrap_or_default()
}

/// Two adjacent bytes (wrapping at 8) reduced modulo `max`, with 0 remapped to 1
///
/// Street numbers, zip codes and document serials treat 0 as a placeholder
/// value, so this never returns 0. `max == 0` is treated as `max == 1`.
pub fn bounded_int(fp: &Fingerprint, byte_index: usize, max: u32) -> u32 {
    let raw = (u32::from(fp.byte(byte_index)) << 8) | u32::from(fp.byte(byte_index + 1));
    match raw % max.max(1) {
        0 => 1,
        n => n,
    }
}

/// Big-endian unsigned integer from `len` consecutive bytes starting at `start`
///
/// Wraps at the fingerprint length; `len` is capped at 8.
pub fn be_uint(fp: &Fingerprint, start: usize, len: usize) -> u64 {
    (start..start + len.min(8)).fold(0u64, |acc, i| (acc << 8) | u64::from(fp.byte(i)))
}

/// Upper-case ASCII letter `'A' + fp[byte_index] mod 26`
pub fn letter(fp: &Fingerprint, byte_index: usize) -> char {
    char::from(b'A' + fp.byte(byte_index) % 26)
}

/// Region drawn from byte 0
///
/// Every generator that reads the region through this function for the same
/// fingerprint lands on the same region.
pub fn region_of(fp: &Fingerprint) -> &'static AddressRegion {
    &ADDRESS_REGIONS[fp.byte(0) as usize % ADDRESS_REGIONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masking::fingerprint::fingerprint;

    #[test]
    fn test_select_from_list_bounds() {
        let list = ["a", "b", "c"];
        for i in 0..256u32 {
            let fp = fingerprint("id", "test", &format!("val{i}"));
            let picked = select_from_list(&fp, 0, &list).unwrap();
            assert!(list.contains(picked));
        }
    }

    #[test]
    fn test_select_from_empty_list() {
        let fp = fingerprint("id", "test", "val");
        let empty: [&str; 0] = [];
        assert!(select_from_list(&fp, 0, &empty).is_none());
        assert_eq!(pick(&fp, 0, &empty), "");
    }

    #[test]
    fn test_select_uses_modulo() {
        let fp = Fingerprint::from([5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(select_from_list(&fp, 0, &[10, 20, 30]), Some(&30));
        assert_eq!(select_from_list(&fp, 1, &[10, 20, 30]), Some(&10));
    }

    #[test]
    fn test_bounded_int_ranges() {
        for (max, min_expected, max_expected) in
            [(1, 1, 1), (10, 1, 9), (100, 1, 99), (1000, 1, 999), (10000, 1, 9999)]
        {
            for i in 0..256u32 {
                let fp = fingerprint("test", "int", &i.to_string());
                let val = bounded_int(&fp, 0, max);
                assert!(
                    (min_expected..=max_expected).contains(&val),
                    "bounded_int out of range: got {val} for max {max}"
                );
            }
        }
    }

    #[test]
    fn test_bounded_int_remaps_zero() {
        let fp = Fingerprint::from([0; 8]);
        assert_eq!(bounded_int(&fp, 0, 9999), 1);
        let fp = Fingerprint::from([0x27, 0x0f, 0, 0, 0, 0, 0, 0]); // 9999
        assert_eq!(bounded_int(&fp, 0, 9999), 1);
        assert_eq!(bounded_int(&fp, 0, 0), 1);
    }

    #[test]
    fn test_bounded_int_wraps_at_last_byte() {
        let fp = Fingerprint::from([0x01, 0, 0, 0, 0, 0, 0, 0x02]);
        // byte 7 then byte 0: 0x0201
        assert_eq!(bounded_int(&fp, 7, 60000), 0x0201);
    }

    #[test]
    fn test_be_uint() {
        let fp = Fingerprint::from([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(be_uint(&fp, 0, 2), 0x0102);
        assert_eq!(be_uint(&fp, 6, 4), 0x0708_0102);
        assert_eq!(be_uint(&fp, 0, 0), 0);
    }

    #[test]
    fn test_letter_is_uppercase() {
        for i in 0..100u32 {
            let fp = fingerprint("id", "letters", &i.to_string());
            assert!(letter(&fp, 0).is_ascii_uppercase());
            assert!(letter(&fp, 5).is_ascii_uppercase());
        }
    }

    #[test]
    fn test_region_of_uses_byte_zero() {
        let a = Fingerprint::from([3, 9, 9, 9, 9, 9, 9, 9]);
        let b = Fingerprint::from([3, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(region_of(&a).country, region_of(&b).country);
    }
}
