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

//! The rhumb module contains functions for calculating rhumb lines
//! (loxodromes) on the surface of a unit sphere.
//!
//! A rhumb line crosses every meridian at the same bearing. It is longer than
//! the great circle path between the same positions, except along a meridian
//! or the Equator, but it can be followed with a constant compass bearing.
//!
//! Rhumb lines are straight lines on a Mercator projection, so the formulae use
//! the difference in projected (isometric) latitude, `delta_psi`.

#![allow(clippy::similar_names)]

use angle_sc::{Angle, Degrees, Radians};
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
use unit_sphere::LatLong;

/// The projected latitude difference below which a rhumb line is treated as
/// an East-West line.
const MIN_DELTA_PSI: f64 = 1e-12;

/// Calculate the difference in projected latitude on a Mercator projection.
/// * `lat1`, `lat2` - the start and finish latitudes in radians.
#[must_use]
fn calculate_delta_psi(lat1: f64, lat2: f64) -> f64 {
    libm::log(libm::tan(FRAC_PI_4 + 0.5 * lat2) / libm::tan(FRAC_PI_4 + 0.5 * lat1))
}

/// Calculate the ratio of the latitude difference to the projected latitude
/// difference, `cos(lat1)` on an East-West line.
#[must_use]
fn calculate_q(delta_lat: f64, delta_psi: f64, lat1: f64) -> f64 {
    if libm::fabs(delta_psi) > MIN_DELTA_PSI {
        delta_lat / delta_psi
    } else {
        libm::cos(lat1)
    }
}

/// Take the shorter way round if the longitude difference crosses the
/// antimeridian.
/// * `delta_lon` - the longitude difference in radians.
#[must_use]
fn shortest_delta_longitude(delta_lon: f64) -> f64 {
    if libm::fabs(delta_lon) > PI {
        if delta_lon > 0.0 {
            delta_lon - TAU
        } else {
            delta_lon + TAU
        }
    } else {
        delta_lon
    }
}

/// Calculate the rhumb line arc length between a pair of positions.
/// * `a`, `b` - the start and finish positions.
///
/// returns the arc length of the rhumb line in `Radians`.
#[must_use]
pub fn calculate_rhumb_arc(a: &LatLong, b: &LatLong) -> Radians {
    let lat1 = a.lat().0.to_radians();
    let lat2 = b.lat().0.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_psi = calculate_delta_psi(lat1, lat2);
    let q = calculate_q(delta_lat, delta_psi, lat1);
    let delta_lon = shortest_delta_longitude((b.lon().0 - a.lon().0).to_radians());

    Radians(libm::sqrt(delta_lat * delta_lat + q * q * delta_lon * delta_lon))
}

/// Calculate the constant bearing of the rhumb line from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing in the range -180° to 180°.
#[must_use]
pub fn calculate_rhumb_bearing(a: &LatLong, b: &LatLong) -> Degrees {
    let lat1 = a.lat().0.to_radians();
    let lat2 = b.lat().0.to_radians();
    let delta_psi = calculate_delta_psi(lat1, lat2);
    let delta_lon = shortest_delta_longitude((b.lon().0 - a.lon().0).to_radians());

    Degrees::from(Angle::from_y_x(delta_lon, delta_psi))
}

/// Calculate the destination position from a start position, rhumb line arc
/// length and bearing.
/// * `a` - the start position.
/// * `arc_length` - the rhumb line arc length to travel.
/// * `bearing` - the constant bearing.
///
/// returns the destination position. Its longitude is not normalised.
#[must_use]
pub fn calculate_rhumb_destination(a: &LatLong, arc_length: Radians, bearing: Angle) -> LatLong {
    let lat1 = a.lat().0.to_radians();
    let lon1 = a.lon().0.to_radians();

    let delta_lat = arc_length.0 * bearing.cos().0;
    let mut lat2 = lat1 + delta_lat;
    // a rhumb line past a pole comes back down the other side
    if libm::fabs(lat2) > FRAC_PI_2 {
        lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
    }

    let delta_psi = calculate_delta_psi(lat1, lat2);
    let q = calculate_q(delta_lat, delta_psi, lat1);
    let delta_lon = arc_length.0 * bearing.sin().0 / q;

    LatLong::new(
        Degrees(lat2.to_degrees()),
        Degrees((lon1 + delta_lon).to_degrees()),
    )
}
