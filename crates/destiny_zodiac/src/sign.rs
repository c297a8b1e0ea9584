//! The twelve signs and their cyclic index.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ZodiacError;

/// Number of signs on the wheel.
pub const SIGN_COUNT: u8 = 12;

/// Width of one sign in degrees.
pub const SIGN_WIDTH_DEG: f64 = 30.0;

/// The 12 zodiac signs starting from Aries at 0 deg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in wheel order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sanskrit (rashi) name.
    pub const fn vedic_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// Position on the wheel.
    pub const fn index(self) -> ZodiacIndex {
        ZodiacIndex(self as u8)
    }

    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated sign index in `0..=11`.
///
/// Ordering is cyclic on the wheel: index 11 is adjacent to index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ZodiacIndex(u8);

impl ZodiacIndex {
    pub fn new(value: u8) -> Result<Self, ZodiacError> {
        if value < SIGN_COUNT {
            Ok(Self(value))
        } else {
            Err(ZodiacError::IndexOutOfRange(i64::from(value)))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn sign(self) -> ZodiacSign {
        ALL_SIGNS[self.0 as usize]
    }

    /// Forward distance from `other` to `self` around the wheel, in signs.
    pub const fn steps_from(self, other: ZodiacIndex) -> u8 {
        (self.0 + SIGN_COUNT - other.0) % SIGN_COUNT
    }
}

impl TryFrom<u8> for ZodiacIndex {
    type Error = ZodiacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for ZodiacIndex {
    type Error = ZodiacError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::new(v).ok())
            .ok_or(ZodiacError::IndexOutOfRange(value))
    }
}

impl From<ZodiacIndex> for u8 {
    fn from(idx: ZodiacIndex) -> Self {
        idx.0
    }
}

impl Display for ZodiacIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
