//! # Constants
//! Angle conversion constants used by the sexagesimal converters.

/// Degrees per hour of right ascension, 24 hours mapping to a full rotation.
pub const DEG_PER_HOUR: f64 = 15.0;

/// Degrees per minute of time, 15 / 60.
pub const DEG_PER_MINUTE_OF_TIME: f64 = 0.25;

/// Degrees per second of time.
///
/// The exact value is 1/240 = 0.00416666..., this constant keeps the truncated
/// value used by the original catalog tooling so that converted placements remain
/// bit-compatible with positions it produced. The truncation shifts results by
/// about 2.7e-6 degrees for a typical seconds field.
pub const DEG_PER_SECOND_OF_TIME: f64 = 0.004166;

/// Arc minutes per degree.
pub const ARCMIN_PER_DEG: f64 = 60.0;

/// Arc seconds per degree.
pub const ARCSEC_PER_DEG: f64 = 3600.0;
