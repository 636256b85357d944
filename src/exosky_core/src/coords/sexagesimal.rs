//! Sexagesimal angle representations.
//!
//! Exoplanet sky positions are traditionally published with right ascension in
//! hours/minutes/seconds of time and declination in degrees/minutes/seconds of
//! arc. These types hold the published form and convert it to decimal degrees.
//!
//! Neither conversion validates its inputs. Out-of-convention fields (negative
//! minutes, hours past 24) are accepted and produce whatever the arithmetic
//! yields, callers needing range checks must do them before converting.

use crate::constants::{
    ARCMIN_PER_DEG, ARCSEC_PER_DEG, DEG_PER_HOUR, DEG_PER_MINUTE_OF_TIME, DEG_PER_SECOND_OF_TIME,
};
use serde::{Deserialize, Serialize};

/// Right ascension in sexagesimal hours of time.
///
/// Conventionally hours are within [0, 24) and minutes/seconds within [0, 60),
/// though this is not enforced.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct RightAscension {
    /// Hours of time
    pub hours: f64,

    /// Minutes of time
    pub minutes: f64,

    /// Seconds of time
    pub seconds: f64,
}

impl RightAscension {
    /// New right ascension
    #[inline(always)]
    pub fn new(hours: f64, minutes: f64, seconds: f64) -> Self {
        RightAscension {
            hours,
            minutes,
            seconds,
        }
    }

    /// Convert to decimal degrees.
    ///
    /// The seconds term uses the truncated [`DEG_PER_SECOND_OF_TIME`] constant
    /// rather than the exact 1/240, see the note on that constant.
    #[inline(always)]
    pub fn to_degrees(&self) -> f64 {
        self.hours * DEG_PER_HOUR
            + self.minutes * DEG_PER_MINUTE_OF_TIME
            + self.seconds * DEG_PER_SECOND_OF_TIME
    }
}

/// Declination in sexagesimal degrees of arc.
///
/// The sign of the whole angle is carried by `degrees`, the minutes and seconds
/// fields are non-negative magnitudes.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct Declination {
    /// Degrees of arc, signed
    pub degrees: f64,

    /// Arc minutes
    pub minutes: f64,

    /// Arc seconds
    pub seconds: f64,
}

impl Declination {
    /// New declination
    #[inline(always)]
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Declination {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Convert to decimal degrees.
    ///
    /// The magnitude is built from the absolute degrees plus the minute and second
    /// fractions, then the sign of the `degrees` field is reapplied to the whole.
    /// When `degrees` is exactly zero the sign term is zero and the entire result
    /// collapses to zero, discarding nonzero minutes and seconds. This matches the
    /// behavior of the original catalog tooling and is kept deliberately, a
    /// declination within one degree of the equator cannot be represented this way.
    #[inline(always)]
    pub fn to_degrees(&self) -> f64 {
        (self.degrees.abs() + self.minutes / ARCMIN_PER_DEG + self.seconds / ARCSEC_PER_DEG)
            * sign(self.degrees)
    }
}

/// Sign of a value, zero for both zeroes.
///
/// `f64::signum` is not usable here as it maps 0.0 to 1.0 and -0.0 to -1.0.
#[inline(always)]
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
