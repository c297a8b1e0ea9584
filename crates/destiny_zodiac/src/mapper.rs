//! Longitude to sign classification.
//!
//! The ecliptic is divided into 12 equal sectors of 30 degrees starting at
//! Aries = [0, 30). A longitude is wrapped forward into [0, 360) and its
//! sector is `floor(lon / 30)`.

use destiny_core::Longitude;

use crate::sign::{ALL_SIGNS, SIGN_WIDTH_DEG, ZodiacIndex, ZodiacSign};
use crate::ZodiacError;

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full placement of a longitude on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    pub index: ZodiacIndex,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub degrees_in_sign: f64,
    /// `degrees_in_sign` as DMS.
    pub dms: Dms,
}

/// Wrap a longitude into [0, 360). Negative values wrap forward.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

fn require_finite(deg: f64) -> Result<f64, ZodiacError> {
    if deg.is_finite() {
        Ok(deg)
    } else {
        Err(ZodiacError::NonFiniteLongitude(deg))
    }
}

fn index_of_normalized(lon: f64) -> u8 {
    // rem_euclid of a tiny negative can round up to exactly 360.0
    ((lon / SIGN_WIDTH_DEG).floor() as u8).min(11)
}

/// Sign and index of a longitude in degrees.
pub fn sign_of(longitude_deg: f64) -> Result<(ZodiacSign, ZodiacIndex), ZodiacError> {
    let lon = normalize_360(require_finite(longitude_deg)?);
    let idx = index_of_normalized(lon);
    Ok((ALL_SIGNS[idx as usize], ALL_SIGNS[idx as usize].index()))
}

/// [`sign_of`] for an oracle longitude in either unit.
pub fn sign_of_longitude(longitude: Longitude) -> Result<(ZodiacSign, ZodiacIndex), ZodiacError> {
    sign_of(longitude.to_degrees())
}

/// Sign plus the position inside it.
pub fn sign_position(longitude_deg: f64) -> Result<SignPosition, ZodiacError> {
    let lon = normalize_360(require_finite(longitude_deg)?);
    let idx = index_of_normalized(lon);
    let degrees_in_sign = (lon - f64::from(idx) * SIGN_WIDTH_DEG).clamp(0.0, SIGN_WIDTH_DEG);
    let sign = ALL_SIGNS[idx as usize];
    Ok(SignPosition {
        sign,
        index: sign.index(),
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    })
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - f64::from(degrees)) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - f64::from(minutes)) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}
