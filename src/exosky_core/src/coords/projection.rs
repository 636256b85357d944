//! Projection of sky coordinates onto cartesian space.
//!
//! Math for the spherical mapping is described here
//! <http://fmwriters.com/Visionback/Issue14/wbputtingstars.htm>

use super::{CartesianCoordinates, Declination, RightAscension};
use std::f64::consts::PI;

/// Convert an angle in degrees to radians.
#[inline(always)]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Project decimal-degree sky coordinates and a distance onto a cartesian point.
///
/// Declination plays the role of elevation from the equatorial plane and right
/// ascension the azimuth. The distance unit carries through unchanged, light years
/// in yield light years out. Nothing is validated, a zero distance collapses to
/// the origin, a negative distance reflects the point through the origin, and
/// non-finite inputs propagate into the output.
///
/// ```
///     use exosky_core::coords::project;
///     let point = project(0.0, 0.0, 11.9);
///     assert!((point.x - 11.9).abs() < 1e-12);
///     assert!(point.y.abs() < 1e-12);
///     assert!(point.z.abs() < 1e-12);
/// ```
///
#[inline(always)]
pub fn project(
    right_ascension_deg: f64,
    declination_deg: f64,
    distance: f64,
) -> CartesianCoordinates {
    let (ra_sin, ra_cos) = to_radians(right_ascension_deg).sin_cos();
    let (dec_sin, dec_cos) = to_radians(declination_deg).sin_cos();
    CartesianCoordinates::new(
        distance * dec_cos * ra_cos,
        distance * dec_cos * ra_sin,
        distance * dec_sin,
    )
}

/// Project sexagesimal sky coordinates and a distance onto a cartesian point.
///
/// Converts both angles to decimal degrees and defers to [`project`]. Callers
/// already holding decimal degrees, such as archive catalog rows, should call
/// [`project`] directly.
#[inline(always)]
pub fn project_sexagesimal(
    right_ascension: RightAscension,
    declination: Declination,
    distance: f64,
) -> CartesianCoordinates {
    project(
        right_ascension.to_degrees(),
        declination.to_degrees(),
        distance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    #[test]
    fn test_to_radians() {
        assert_eq!(to_radians(0.0), 0.0);
        assert!((to_radians(180.0) - PI).abs() <= 10.0 * f64::EPSILON);
        assert!((to_radians(-90.0) + PI / 2.0).abs() <= 10.0 * f64::EPSILON);
    }

    #[test]
    fn test_project_axes() {
        for d in [0.5, 1.0, 11.9, 550.0] {
            let point = project(0.0, 0.0, d);
            assert_eq!(point, CartesianCoordinates::new(d, 0.0, 0.0));

            let point = project(90.0, 0.0, d);
            assert!((point.x).abs() <= d * 10.0 * f64::EPSILON);
            assert!((point.y - d).abs() <= d * 10.0 * f64::EPSILON);
            assert!((point.z).abs() <= d * 10.0 * f64::EPSILON);
        }
    }

    #[test]
    fn test_project_pole_collapses_azimuth() {
        // at the pole the right ascension no longer matters
        for ra in [0.0, 45.0, 123.4, 359.0] {
            let point = project(ra, 90.0, 7.0);
            assert!(point.x.abs() <= 1e-12);
            assert!(point.y.abs() <= 1e-12);
            assert!((point.z - 7.0).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_project_degenerate_distances() {
        let origin = project(123.0, 45.0, 0.0);
        assert_eq!(origin, CartesianCoordinates::new(0.0, 0.0, 0.0));

        // negative distance reflects through the origin
        let fwd = project(26.0, -16.0, 11.9);
        let back = project(26.0, -16.0, -11.9);
        assert!((fwd.x + back.x).abs() <= 1e-12);
        assert!((fwd.y + back.y).abs() <= 1e-12);
        assert!((fwd.z + back.z).abs() <= 1e-12);

        assert!(!project(26.0, -16.0, f64::NAN).is_finite());
        assert!(!project(26.0, -16.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_project_preserves_norm() {
        for (ra, dec) in iproduct!(
            [0.0, 30.0, 90.0, 181.5, 270.0, 359.0],
            [-89.0, -45.0, -0.5, 0.0, 12.25, 88.0]
        ) {
            let point = project(ra, dec, 42.0);
            assert!((point.norm() - 42.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_project_pure() {
        let a = project(26.017043106, -15.937469444444444, 11.9);
        let b = project(26.017043106, -15.937469444444444, 11.9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_sexagesimal_scenario() {
        // Tau Ceti at 11.9 light years, worked through from the sexagesimal form
        let ra = RightAscension::new(1.0, 44.0, 4.091);
        let dec = Declination::new(-15.0, 56.0, 14.89);
        let point = project_sexagesimal(ra, dec, 11.9);
        assert!((point.x - 10.283036655580592).abs() <= 1e-9);
        assert!((point.y - 5.0191590413712435).abs() <= 1e-9);
        assert!((point.z - -3.26759845412609).abs() <= 1e-9);
        assert!((point.norm_squared() - 11.9 * 11.9).abs() <= 1e-9);
    }
}
