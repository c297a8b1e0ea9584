//! Property tests for the zodiac mapper.
//!
//! Pure-math tests (no oracle needed).

use destiny_zodiac::{ALL_SIGNS, ZodiacSign, normalize_360, sign_of, sign_position};
use proptest::prelude::*;

#[test]
fn sweep_all_12_midpoints() {
    for (i, expected) in ALL_SIGNS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let (sign, idx) = sign_of(lon).unwrap();
        assert_eq!(sign, *expected, "sign at {lon} deg");
        assert_eq!(idx.get() as usize, i);
    }
}

#[test]
fn every_sector_start_is_exact() {
    for (i, expected) in ALL_SIGNS.iter().enumerate() {
        let (sign, _) = sign_of(i as f64 * 30.0).unwrap();
        assert_eq!(sign, *expected, "start of sector {i}");
    }
}

#[test]
fn cancer_is_index_3() {
    let (sign, idx) = sign_of(100.0).unwrap();
    assert_eq!(sign, ZodiacSign::Cancer);
    assert_eq!(idx.get(), 3);
}

proptest! {
    #[test]
    fn periodic_in_360(lon in -1.0e6f64..1.0e6) {
        prop_assert_eq!(sign_of(lon).unwrap(), sign_of(normalize_360(lon)).unwrap());
    }

    #[test]
    fn shifting_by_full_turns_keeps_sign(sector in 0u8..12, offset in 0.001f64..29.999, turns in -50i32..50) {
        let lon = f64::from(sector) * 30.0 + offset;
        let shifted = lon + f64::from(turns) * 360.0;
        prop_assert_eq!(sign_of(shifted).unwrap().1.get(), sector);
    }

    #[test]
    fn index_is_floor_of_thirty(lon in 0.0f64..360.0) {
        let (_, idx) = sign_of(lon).unwrap();
        prop_assert_eq!(u32::from(idx.get()), (lon / 30.0).floor() as u32);
    }

    #[test]
    fn index_always_in_range(lon in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let (sign, idx) = sign_of(lon).unwrap();
        prop_assert!(idx.get() <= 11);
        prop_assert_eq!(sign.index(), idx);
    }

    #[test]
    fn degrees_in_sign_bounded(lon in -720.0f64..720.0) {
        let pos = sign_position(lon).unwrap();
        prop_assert!(pos.degrees_in_sign >= 0.0 && pos.degrees_in_sign <= 30.0);
    }
}
