//! Zodiac sign classification.
//!
//! Maps an ecliptic longitude to one of 12 fixed 30-degree sectors
//! (Aries..Pisces) and its index. Pure and allocation-free.

pub mod error;
pub mod mapper;
pub mod sign;

pub use error::ZodiacError;
pub use mapper::{
    Dms, SignPosition, deg_to_dms, dms_to_deg, normalize_360, sign_of, sign_of_longitude,
    sign_position,
};
pub use sign::{ALL_SIGNS, SIGN_COUNT, SIGN_WIDTH_DEG, ZodiacIndex, ZodiacSign};
