//! Ecliptic longitude with an explicit angular unit.

use serde::{Deserialize, Serialize};

/// Unit an oracle reports longitudes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// An ecliptic longitude as returned by an oracle, not yet normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Longitude {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Longitude {
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    pub const fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degrees)
    }

    pub const fn radians(value: f64) -> Self {
        Self::new(value, AngleUnit::Radians)
    }

    /// Value in degrees, unwrapped.
    pub fn to_degrees(self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Radians => self.value.to_degrees(),
        }
    }

    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }
}
