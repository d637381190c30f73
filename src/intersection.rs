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

//! The `intersection` module contains a function for calculating the
//! intersection of two great circle paths on the surface of a sphere.
//!
//! Each path is defined by a start position and an initial bearing.
//! The solution is Ed Williams' spherical triangle method from the
//! [Aviation Formulary](https://edwilliams.org/avform147.htm#Intersection):
//! the start positions and the intersection point form a spherical triangle
//! whose angles at the start positions are known from the bearings.
//!
//! The paths are great circles, so they also intersect at the antipode of the
//! calculated point. This module returns the intersection "in front of" both
//! start positions and reports no intersection when the paths diverge.

#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::sphere;
use angle_sc::{trig, Angle, Degrees, Radians};
use core::f64::consts::TAU;
use unit_sphere::{great_circle, LatLong};

/// The sine of the angle between paths below which they are parallel.
const MIN_SIN_ALPHA: f64 = 1e-12;

/// Calculate the intersection point of two great circle paths.
/// * `a` - the start position of the first path.
/// * `bearing_a` - the initial bearing of the first path.
/// * `b` - the start position of the second path.
/// * `bearing_b` - the initial bearing of the second path.
///
/// returns the intersection point, `a` if the start positions coincide, or
/// `None` if the paths lie on the same great circle or diverge.
/// If one path passes through the start of the other, returns that start
/// when the path heads towards it, otherwise `None`.
///
/// # Examples
/// ```
/// use spherical_geodesy::{intersection, Angle, Degrees, LatLong};
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let b = LatLong::new(Degrees(0.0), Degrees(10.0));
///
/// // North East from a and North West from b
/// let result = intersection::calculate_intersection_point(
///     &a,
///     Angle::from(Degrees(45.0)),
///     &b,
///     Angle::from(Degrees(-45.0)),
/// )
/// .unwrap();
/// assert!((5.0 - result.lon().0).abs() < 1e-12);
///
/// // North East from a and South East from b
/// let result = intersection::calculate_intersection_point(
///     &a,
///     Angle::from(Degrees(45.0)),
///     &b,
///     Angle::from(Degrees(135.0)),
/// );
/// assert!(result.is_none());
/// ```
#[must_use]
pub fn calculate_intersection_point(
    a: &LatLong,
    bearing_a: Angle,
    b: &LatLong,
    bearing_b: Angle,
) -> Option<LatLong> {
    let d12 = sphere::calculate_haversine_arc(a, b);
    if d12.0 < great_circle::MIN_VALUE {
        return Some(LatLong::new(a.lat(), a.lon()));
    }

    let lat1 = Angle::from(a.lat());
    let lat2 = Angle::from(b.lat());
    let delta_lon = Angle::from(Degrees(b.lon().0 - a.lon().0));
    let arc12 = Angle::from(d12);

    // the bearings of the great circle between the start positions
    let cos_theta_a =
        (lat2.sin().0 - lat1.sin().0 * arc12.cos().0) / (arc12.sin().0 * lat1.cos().0);
    let cos_theta_b =
        (lat1.sin().0 - lat2.sin().0 * arc12.cos().0) / (arc12.sin().0 * lat2.cos().0);
    let theta_a = libm::acos(cos_theta_a.clamp(-1.0, 1.0));
    let theta_b = libm::acos(cos_theta_b.clamp(-1.0, 1.0));
    let (theta12, theta21) = if 0.0 < delta_lon.sin().0 {
        (theta_a, TAU - theta_b)
    } else {
        (TAU - theta_a, theta_b)
    };

    // the angles of the spherical triangle at a and b
    let alpha1 = Angle::from(Radians(Radians::from(bearing_a).0 - theta12));
    let alpha2 = Angle::from(Radians(theta21 - Radians::from(bearing_b).0));
    let sin_alpha1 = alpha1.sin().0;
    let sin_alpha2 = alpha2.sin().0;
    let cos_alpha1 = alpha1.cos().0;
    let cos_alpha2 = alpha2.cos().0;

    let path1_through_b = libm::fabs(sin_alpha1) < MIN_SIN_ALPHA;
    let path2_through_a = libm::fabs(sin_alpha2) < MIN_SIN_ALPHA;

    // coincident great circles
    if path1_through_b && path2_through_a {
        return None;
    }

    // one path passes through the start of the other: the intersection is
    // that start if the path heads towards it, otherwise it is behind
    if path1_through_b {
        return (0.0 < cos_alpha1).then(|| LatLong::new(b.lat(), b.lon()));
    }
    if path2_through_a {
        return (0.0 < cos_alpha2).then(|| LatLong::new(a.lat(), a.lon()));
    }

    // the paths diverge
    if sin_alpha1 * sin_alpha2 < 0.0 {
        return None;
    }

    let cos_alpha3 = -cos_alpha1 * cos_alpha2 + sin_alpha1 * sin_alpha2 * arc12.cos().0;
    let arc13 = Angle::from_y_x(
        arc12.sin().0 * sin_alpha1 * sin_alpha2,
        cos_alpha2 + cos_alpha1 * cos_alpha3,
    );

    let sin_lat3 = lat1.sin().0 * arc13.cos().0 + lat1.cos().0 * arc13.sin().0 * bearing_a.cos().0;
    let sin_lat3 = trig::UnitNegRange(sin_lat3.clamp(-1.0, 1.0));
    let lat3 = Angle::new(sin_lat3, trig::swap_sin_cos(sin_lat3));
    let delta_lon13 = Angle::from_y_x(
        bearing_a.sin().0 * arc13.sin().0 * lat1.cos().0,
        arc13.cos().0 - lat1.sin().0 * lat3.sin().0,
    );

    Some(LatLong::new(
        Degrees::from(lat3),
        Degrees::from(Angle::from(a.lon()) + delta_lon13),
    ))
}
