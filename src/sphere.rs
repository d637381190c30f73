// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The sphere module contains functions for calculating distances, bearings
//! and positions on the surface of a unit sphere.
//!
//! The formulae are the classical spherical trigonometry formulae described by
//! Chris Veness at [Movable Type Scripts](https://www.movable-type.co.uk/scripts/latlong.html).
//!
//! Positions are given in degrees. Distances are great circle arc lengths in
//! `Radians`, so that they can be scaled by the radius of any sphere.
//! Bearings are returned in `Degrees` measured clockwise from North.

#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

pub mod earth;

use angle_sc::{trig, Angle, Degrees, Radians};
use unit_sphere::LatLong;

/// The difference in longitude from `a` to `b` in `Degrees`, not normalised.
#[must_use]
fn delta_longitude(a: &LatLong, b: &LatLong) -> Degrees {
    Degrees(b.lon().0 - a.lon().0)
}

/// Construct a latitude `Angle` from its sine.
#[must_use]
fn latitude_from_sine(sin_lat: f64) -> Angle {
    let sin_lat = trig::UnitNegRange(sin_lat.clamp(-1.0, 1.0));
    Angle::new(sin_lat, trig::swap_sin_cos(sin_lat))
}

/// Calculate the great circle arc length between a pair of positions using
/// the spherical law of cosines.
///
/// The law of cosines is ill conditioned for small distances, where the
/// haversine formula should be used instead.
/// * `a`, `b` - the start and finish positions.
///
/// returns the great circle arc length in `Radians`.
#[must_use]
pub fn calculate_cosine_arc(a: &LatLong, b: &LatLong) -> Radians {
    let lat1 = Angle::from(a.lat());
    let lat2 = Angle::from(b.lat());
    let delta_lon = Angle::from(delta_longitude(a, b));
    let cos_arc =
        lat1.sin().0 * lat2.sin().0 + lat1.cos().0 * lat2.cos().0 * delta_lon.cos().0;
    // rounding may take coincident positions just outside the domain of acos
    Radians(libm::acos(cos_arc.clamp(-1.0, 1.0)))
}

/// Calculate the great circle arc length between a pair of positions using
/// the haversine formula.
/// * `a`, `b` - the start and finish positions.
///
/// returns the great circle arc length in `Radians`.
///
/// # Examples
/// ```
/// use spherical_geodesy::{sphere, Degrees, LatLong};
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let b = LatLong::new(Degrees(1.0), Degrees(0.0));
/// let arc = sphere::calculate_haversine_arc(&a, &b);
/// assert!((1.0_f64.to_radians() - arc.0).abs() < 1e-15);
/// ```
#[must_use]
pub fn calculate_haversine_arc(a: &LatLong, b: &LatLong) -> Radians {
    let lat1 = Angle::from(a.lat());
    let lat2 = Angle::from(b.lat());
    let sin_half_delta_lat = Angle::from(Degrees(0.5 * (b.lat().0 - a.lat().0))).sin().0;
    let sin_half_delta_lon = Angle::from(Degrees(0.5 * delta_longitude(a, b).0)).sin().0;
    let h = sin_half_delta_lat * sin_half_delta_lat
        + sin_half_delta_lon * sin_half_delta_lon * lat1.cos().0 * lat2.cos().0;
    Radians(2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h)))
}

/// Calculate the arc length between a pair of positions using Pythagoras's
/// theorem on an equirectangular projection.
///
/// It is only accurate over short distances.
/// * `a`, `b` - the start and finish positions.
///
/// returns the approximate great circle arc length in `Radians`.
#[must_use]
pub fn calculate_equirectangular_arc(a: &LatLong, b: &LatLong) -> Radians {
    let mean_lat = Angle::from(Degrees(0.5 * (a.lat().0 + b.lat().0)));
    let x = delta_longitude(a, b).0.to_radians() * mean_lat.cos().0;
    let y = (b.lat().0 - a.lat().0).to_radians();
    Radians(libm::sqrt(x * x + y * y))
}

/// Calculate the initial bearing (forward azimuth) of the great circle path
/// from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing at `a` in the range -180° to 180°.
#[must_use]
pub fn calculate_initial_bearing(a: &LatLong, b: &LatLong) -> Degrees {
    let lat1 = Angle::from(a.lat());
    let lat2 = Angle::from(b.lat());
    let delta_lon = Angle::from(delta_longitude(a, b));
    let y = delta_lon.sin().0 * lat2.cos().0;
    let x = lat1.cos().0 * lat2.sin().0 - lat1.sin().0 * lat2.cos().0 * delta_lon.cos().0;
    Degrees::from(Angle::from_y_x(y, x))
}

/// Calculate the final bearing of the great circle path from `a` to `b`,
/// i.e. the bearing on arrival at `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing at `b`, the reverse of the initial bearing from `b` to `a`.
#[must_use]
pub fn calculate_final_bearing(a: &LatLong, b: &LatLong) -> Degrees {
    Degrees((calculate_initial_bearing(b, a).0 + 180.0) % 360.0)
}

/// Calculate the across track distance of position `c` from the great circle
/// path from `a` to `b`.
/// * `a`, `b` - the start and finish positions of the path.
/// * `c` - the position.
///
/// returns the across track arc length in `Radians`, positive when `c` is
/// to the right of the path.
#[must_use]
pub fn calculate_cross_track_arc(a: &LatLong, b: &LatLong, c: &LatLong) -> Radians {
    let theta12 = calculate_initial_bearing(a, b);
    let theta13 = calculate_initial_bearing(a, c);
    let delta_theta = Angle::from(Degrees(theta13.0 - theta12.0));
    let d13 = Angle::from(calculate_cosine_arc(a, c));
    Radians(libm::asin(d13.sin().0 * delta_theta.sin().0))
}

/// Calculate the along track distance of position `c` along the great circle
/// path from `a` to `b`: the distance from `a` to the point on the path
/// closest to `c`.
/// * `a`, `b` - the start and finish positions of the path.
/// * `c` - the position.
///
/// returns the along track arc length in `Radians`, negative when the
/// closest point is behind `a`.
#[must_use]
pub fn calculate_along_track_arc(a: &LatLong, b: &LatLong, c: &LatLong) -> Radians {
    let d13 = Angle::from(calculate_haversine_arc(a, c));
    let xtd = Angle::from(calculate_cross_track_arc(a, b, c));
    let cos_atd = d13.cos().0 / libm::fabs(xtd.cos().0);
    let atd = libm::acos(cos_atd.clamp(-1.0, 1.0));

    let theta12 = calculate_initial_bearing(a, b);
    let theta13 = calculate_initial_bearing(a, c);
    if Angle::from(Degrees(theta12.0 - theta13.0)).cos().0 < 0.0 {
        Radians(-atd)
    } else {
        Radians(atd)
    }
}

/// Calculate the position half way along the great circle path between a
/// pair of positions.
/// * `a`, `b` - the start and finish positions.
///
/// returns the mid point. Its longitude is not normalised.
#[must_use]
pub fn calculate_midpoint(a: &LatLong, b: &LatLong) -> LatLong {
    let lat1 = Angle::from(a.lat());
    let lat2 = Angle::from(b.lat());
    let delta_lon = Angle::from(delta_longitude(a, b));

    let bx = lat2.cos().0 * delta_lon.cos().0;
    let by = lat2.cos().0 * delta_lon.sin().0;
    let cos_lat1_plus_bx = lat1.cos().0 + bx;
    let lat = Angle::from_y_x(
        lat1.sin().0 + lat2.sin().0,
        libm::sqrt(cos_lat1_plus_bx * cos_lat1_plus_bx + by * by),
    );
    let lon = Degrees::from(Angle::from_y_x(by, cos_lat1_plus_bx));
    LatLong::new(Degrees::from(lat), Degrees(a.lon().0 + lon.0))
}

/// Calculate the destination position from a start position, great circle
/// arc length and initial bearing.
/// * `a` - the start position.
/// * `arc_length` - the great circle arc length to travel.
/// * `bearing` - the initial bearing.
///
/// returns the destination position. Its longitude is not normalised.
#[must_use]
pub fn calculate_offset(a: &LatLong, arc_length: Radians, bearing: Angle) -> LatLong {
    let lat1 = Angle::from(a.lat());
    let arc = Angle::from(arc_length);

    let lat = latitude_from_sine(
        lat1.sin().0 * arc.cos().0 + lat1.cos().0 * arc.sin().0 * bearing.cos().0,
    );
    let lon = Degrees::from(Angle::from_y_x(
        bearing.sin().0 * arc.sin().0 * lat1.cos().0,
        arc.cos().0 - lat1.sin().0 * lat.sin().0,
    ));
    LatLong::new(Degrees::from(lat), Degrees(a.lon().0 + lon.0))
}

/// The "maximum latitude" expression: `cos(|sin(bearing) * cos(latitude)|)`.
///
/// Note: the result is a cosine, not a latitude.
/// Clairaut's formula for the maximum latitude of a great circle is
/// `acos(|sin(bearing) * cos(latitude)|)`.
/// * `bearing` - the bearing of the great circle.
/// * `latitude` - the latitude at which the great circle has `bearing`.
#[must_use]
pub fn maximum_latitude(bearing: Degrees, latitude: Degrees) -> f64 {
    let clairaut = Angle::from(bearing).sin().0 * Angle::from(latitude).cos().0;
    libm::cos(libm::fabs(clairaut))
}

/// Convert a bearing to a compass bearing.
/// * `bearing` - the bearing, e.g. from `calculate_initial_bearing`.
///
/// returns the bearing in the range 0° <= bearing < 360°.
///
/// # Examples
/// ```
/// use spherical_geodesy::{sphere, Degrees};
///
/// assert_eq!(Degrees(270.0), sphere::to_compass(Degrees(-90.0)));
/// assert_eq!(Degrees(0.0), sphere::to_compass(Degrees(360.0)));
/// ```
#[must_use]
pub fn to_compass(bearing: Degrees) -> Degrees {
    let compass = bearing.0 % 360.0;
    if compass < 0.0 {
        Degrees((compass + 360.0) % 360.0)
    } else {
        Degrees(compass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_calculate_cosine_arc() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let b = LatLong::new(Degrees(0.0), Degrees(90.0));
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            calculate_cosine_arc(&a, &b).0,
            f64::EPSILON
        ));

        // coincident positions
        for i in -90..91 {
            let c = LatLong::new(Degrees(f64::from(i)), Degrees(f64::from(2 * i)));
            let arc = calculate_cosine_arc(&c, &c);
            assert!(!arc.0.is_nan());
            assert!(arc.0 < 1e-7);
        }

        // antipodal positions
        let c = LatLong::new(Degrees(0.0), Degrees(180.0));
        assert!(is_within_tolerance(
            core::f64::consts::PI,
            calculate_cosine_arc(&a, &c).0,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_calculate_haversine_arc() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let b = LatLong::new(Degrees(90.0), Degrees(0.0));
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            calculate_haversine_arc(&a, &b).0,
            4.0 * f64::EPSILON
        ));
        assert_eq!(0.0, calculate_haversine_arc(&b, &b).0);

        // across the antimeridian
        let c = LatLong::new(Degrees(0.0), Degrees(179.5));
        let d = LatLong::new(Degrees(0.0), Degrees(-179.5));
        assert!(is_within_tolerance(
            1.0_f64.to_radians(),
            calculate_haversine_arc(&c, &d).0,
            16.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_calculate_equirectangular_arc() {
        // along a meridian the projection is exact
        let a = LatLong::new(Degrees(10.0), Degrees(20.0));
        let b = LatLong::new(Degrees(11.0), Degrees(20.0));
        assert!(is_within_tolerance(
            calculate_haversine_arc(&a, &b).0,
            calculate_equirectangular_arc(&a, &b).0,
            f64::EPSILON
        ));

        // short distances are close to the haversine distance
        let c = LatLong::new(Degrees(51.5), Degrees(-0.1));
        let d = LatLong::new(Degrees(51.6), Degrees(0.1));
        let haversine = calculate_haversine_arc(&c, &d).0;
        let equirectangular = calculate_equirectangular_arc(&c, &d).0;
        assert!(libm::fabs(haversine - equirectangular) / haversine < 1e-6);
    }

    #[test]
    fn test_calculate_bearings() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let east = LatLong::new(Degrees(0.0), Degrees(1.0));
        let west = LatLong::new(Degrees(0.0), Degrees(-1.0));
        let north = LatLong::new(Degrees(1.0), Degrees(0.0));
        let south = LatLong::new(Degrees(-1.0), Degrees(0.0));

        assert_eq!(90.0, calculate_initial_bearing(&a, &east).0);
        assert_eq!(-90.0, calculate_initial_bearing(&a, &west).0);
        assert_eq!(0.0, calculate_initial_bearing(&a, &north).0);
        assert_eq!(180.0, calculate_initial_bearing(&a, &south).0);

        assert_eq!(90.0, calculate_final_bearing(&a, &east).0);
        assert_eq!(270.0, calculate_final_bearing(&a, &west).0);
        assert_eq!(0.0, calculate_final_bearing(&a, &north).0);
        assert_eq!(180.0, calculate_final_bearing(&a, &south).0);

        // Great circles leaving the Equator at 45° cross the meridian further
        // along at a steeper angle.
        let b = LatLong::new(Degrees(40.0), Degrees(50.0));
        let initial = calculate_initial_bearing(&a, &b).0;
        let final_bearing = calculate_final_bearing(&a, &b).0;
        assert!(initial < final_bearing);
        assert_eq!(
            (calculate_initial_bearing(&b, &a).0 + 180.0) % 360.0,
            final_bearing
        );
    }

    #[test]
    fn test_calculate_cross_and_along_track_arcs() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let b = LatLong::new(Degrees(0.0), Degrees(10.0));

        // A position 1° North of the Equator is to the left of an Eastbound path.
        let c = LatLong::new(Degrees(1.0), Degrees(5.0));
        let xtd = calculate_cross_track_arc(&a, &b, &c);
        assert!(is_within_tolerance(
            -1.0_f64.to_radians(),
            xtd.0,
            1e-12
        ));
        let atd = calculate_along_track_arc(&a, &b, &c);
        assert!(is_within_tolerance(5.0_f64.to_radians(), atd.0, 1e-12));

        // A position behind the start of the path.
        let d = LatLong::new(Degrees(-1.0), Degrees(-5.0));
        let xtd = calculate_cross_track_arc(&a, &b, &d);
        assert!(is_within_tolerance(1.0_f64.to_radians(), xtd.0, 1e-12));
        let atd = calculate_along_track_arc(&a, &b, &d);
        assert!(is_within_tolerance(-5.0_f64.to_radians(), atd.0, 1e-12));

        // A position on the path.
        let e = LatLong::new(Degrees(0.0), Degrees(3.0));
        assert!(libm::fabs(calculate_cross_track_arc(&a, &b, &e).0) < 1e-12);
    }

    #[test]
    fn test_calculate_midpoint() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let b = LatLong::new(Degrees(90.0), Degrees(0.0));
        let result = calculate_midpoint(&a, &b);
        assert!(is_within_tolerance(45.0, result.lat().0, 1e-12));
        assert_eq!(0.0, result.lon().0);

        let c = LatLong::new(Degrees(0.0), Degrees(90.0));
        let result = calculate_midpoint(&a, &c);
        assert!(libm::fabs(result.lat().0) < 1e-12);
        assert!(is_within_tolerance(45.0, result.lon().0, 1e-12));
    }

    #[test]
    fn test_calculate_offset() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));

        let result = calculate_offset(&a, Radians(0.0), Angle::from(Degrees(123.0)));
        assert_eq!(0.0, result.lat().0);
        assert_eq!(0.0, result.lon().0);

        let quarter = Radians(core::f64::consts::FRAC_PI_2);
        let result = calculate_offset(&a, quarter, Angle::from(Degrees(0.0)));
        assert!(is_within_tolerance(90.0, result.lat().0, 1e-12));

        let result = calculate_offset(&a, quarter, Angle::from(Degrees(90.0)));
        assert!(libm::fabs(result.lat().0) < 1e-12);
        assert!(is_within_tolerance(90.0, result.lon().0, 1e-12));

        // The bearing may be given in radians.
        let result = calculate_offset(
            &a,
            quarter,
            Angle::from(Radians(-core::f64::consts::FRAC_PI_2)),
        );
        assert!(is_within_tolerance(-90.0, result.lon().0, 1e-12));
    }

    #[test]
    fn test_maximum_latitude() {
        assert_eq!(1.0, maximum_latitude(Degrees(0.0), Degrees(45.0)));
        assert!(is_within_tolerance(
            libm::cos(1.0),
            maximum_latitude(Degrees(90.0), Degrees(0.0)),
            f64::EPSILON
        ));
        assert_eq!(
            maximum_latitude(Degrees(60.0), Degrees(30.0)),
            maximum_latitude(Degrees(-60.0), Degrees(30.0))
        );
    }

    #[test]
    fn test_to_compass() {
        assert_eq!(Degrees(0.0), to_compass(Degrees(0.0)));
        assert_eq!(Degrees(90.0), to_compass(Degrees(90.0)));
        assert_eq!(Degrees(180.0), to_compass(Degrees(-180.0)));
        assert_eq!(Degrees(359.0), to_compass(Degrees(-1.0)));
        assert_eq!(Degrees(10.0), to_compass(Degrees(730.0)));
        assert_eq!(Degrees(0.0), to_compass(Degrees(-1e-20)));
    }
}
