//! Per-step scoring rules.
//!
//! Starting from 0:
//! - growth body in the natal sign: +2, status `GrowthReturn`
//! - else pressure body in the natal sign: -2, status `PressureReturn`
//! - independently, growth body a multiple of 4 signs from natal: +1
//!
//! The return checks are an else-if chain, so a growth return masks a
//! simultaneous pressure return.

use destiny_zodiac::ZodiacIndex;

use crate::transit_types::TransitStatus;

pub const GROWTH_RETURN_SCORE: i32 = 2;
pub const PRESSURE_RETURN_SCORE: i32 = -2;
pub const TRINE_BONUS: i32 = 1;

/// Signs per trine step (4 x 30 deg = 120 deg).
const TRINE_MODULUS: i16 = 4;

/// Whether `growth` sits a whole number of trines from `natal`.
///
/// Includes distance 0, so a growth return is also a trine.
pub fn is_trine(growth: ZodiacIndex, natal: ZodiacIndex) -> bool {
    (i16::from(growth.get()) - i16::from(natal.get())).rem_euclid(TRINE_MODULUS) == 0
}

/// Score one step.
pub fn score_step(
    growth: ZodiacIndex,
    pressure: ZodiacIndex,
    natal: ZodiacIndex,
) -> (i32, TransitStatus) {
    let mut score = 0;
    let mut status = TransitStatus::Neutral;

    if growth == natal {
        score += GROWTH_RETURN_SCORE;
        status = TransitStatus::GrowthReturn;
    } else if pressure == natal {
        score += PRESSURE_RETURN_SCORE;
        status = TransitStatus::PressureReturn;
    }

    if is_trine(growth, natal) {
        score += TRINE_BONUS;
    }

    (score, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: u8) -> ZodiacIndex {
        ZodiacIndex::new(i).unwrap()
    }

    #[test]
    fn growth_return_stacks_with_trine() {
        assert_eq!(score_step(idx(0), idx(0), idx(0)), (3, TransitStatus::GrowthReturn));
        assert_eq!(score_step(idx(3), idx(7), idx(3)), (3, TransitStatus::GrowthReturn));
    }

    #[test]
    fn growth_wins_over_pressure() {
        let (score, status) = score_step(idx(3), idx(3), idx(3));
        assert_eq!(status, TransitStatus::GrowthReturn);
        assert!(score > 0);
    }

    #[test]
    fn pressure_return_alone() {
        // growth at 1 step from natal: no trine
        assert_eq!(score_step(idx(4), idx(3), idx(3)), (-2, TransitStatus::PressureReturn));
    }

    #[test]
    fn pressure_return_with_trine() {
        // growth 4 signs ahead of natal
        assert_eq!(score_step(idx(7), idx(3), idx(3)), (-1, TransitStatus::PressureReturn));
    }

    #[test]
    fn trine_only_is_neutral() {
        assert_eq!(score_step(idx(4), idx(1), idx(0)), (1, TransitStatus::Neutral));
        assert_eq!(score_step(idx(8), idx(1), idx(0)), (1, TransitStatus::Neutral));
    }

    #[test]
    fn trine_wraps_below_natal() {
        // 1 - 9 = -8, a multiple of 4
        assert!(is_trine(idx(1), idx(9)));
        assert!(is_trine(idx(5), idx(9)));
        assert!(!is_trine(idx(2), idx(9)));
    }

    #[test]
    fn nothing_fires() {
        assert_eq!(score_step(idx(1), idx(2), idx(0)), (0, TransitStatus::Neutral));
    }

    #[test]
    fn exhaustive_score_range() {
        for g in 0..12 {
            for p in 0..12 {
                for n in 0..12 {
                    let (score, _) = score_step(idx(g), idx(p), idx(n));
                    assert!((-2..=3).contains(&score), "g={g} p={p} n={n} score={score}");
                }
            }
        }
    }
}
