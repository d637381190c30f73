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

//! spherical-geodesy
//!
//! A library for performing distance, bearing and position calculations on
//! the surface of a sphere, e.g. the Earth modelled as a sphere of radius
//! 6 371 km.
//!
//! The library provides the classical closed form spherical trigonometry
//! formulae described by Chris Veness at
//! [Movable Type Scripts](https://www.movable-type.co.uk/scripts/latlong.html):
//!
//! - great circle distances using the spherical law of cosines, the
//!   [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)
//!   and the equirectangular approximation;
//! - the initial and final bearings of a great circle path;
//! - the across and along track distances of a point from a great circle path;
//! - the mid point of a great circle path and the destination point from a
//!   start point, distance and bearing;
//! - the intersection of two great circle paths;
//! - and the distance, bearing and destination point of rhumb lines.
//!
//! ## Design
//!
//! The `sphere`, `rhumb` and `intersection` modules contain functions that
//! calculate on the surface of a unit sphere: distances are great circle arc
//! lengths in `Radians`.
//!
//! The `Sphere` class holds the radius of a sphere and converts arc lengths
//! to and from `Metres`. `EARTH` is a `Sphere` with the mean radius of the Earth.
//!
//! Positions are `LatLong`s, with latitude and longitude in `Degrees`.
//! Bearings are returned in `Degrees`, in the range -180° to 180°, they may be
//! converted to compass bearings by `sphere::to_compass`.
//! Bearings are passed to functions as `Angle`s, which may be constructed from
//! either `Degrees` or `Radians`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`.
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod error;
pub mod intersection;
pub mod rhumb;
pub mod sphere;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use error::Error;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

/// A sphere with a given radius.
///
/// All the calculations are pure functions of their arguments and the radius,
/// so a `Sphere` may be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// The radius of the sphere.
    radius: Metres,
}

impl Validate for Sphere {
    /// Test whether a `Sphere` is valid.
    /// Whether the radius is finite and greater than zero.
    fn is_valid(&self) -> bool {
        self.radius.0.is_finite() && 0.0 < self.radius.0
    }
}

impl Sphere {
    /// Constructor.
    /// * `radius` - the radius of the `Sphere`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRadius` if `radius` is not finite or not
    /// greater than zero.
    ///
    /// # Examples
    /// ```
    /// use spherical_geodesy::{Error, Metres, Sphere};
    ///
    /// assert!(Sphere::new(Metres(6_371_000.0)).is_ok());
    /// assert_eq!(Err(Error::InvalidRadius(0.0)), Sphere::new(Metres(0.0)));
    /// ```
    pub fn new(radius: Metres) -> Result<Self, Error> {
        let sphere = Self { radius };
        if sphere.is_valid() {
            Ok(sphere)
        } else {
            Err(Error::InvalidRadius(radius.0))
        }
    }

    /// Construct a `Sphere` with the mean radius of the Earth.
    #[must_use]
    pub const fn earth() -> Self {
        Self {
            radius: sphere::earth::MEAN_RADIUS,
        }
    }

    /// The radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> Metres {
        self.radius
    }

    /// Convert a distance in metres on the surface of the sphere to a
    /// great circle arc length.
    /// * `distance` - the distance in metres.
    #[must_use]
    pub const fn metres_to_radians(&self, distance: Metres) -> Radians {
        Radians(distance.0 / self.radius.0)
    }

    /// Convert a great circle arc length to a distance in metres on the
    /// surface of the sphere.
    /// * `arc_length` - the arc length in radians.
    #[must_use]
    pub const fn radians_to_metres(&self, arc_length: Radians) -> Metres {
        Metres(self.radius.0 * arc_length.0)
    }

    /// Calculate the great circle distance between a pair of positions
    /// using the spherical law of cosines.
    ///
    /// The law of cosines loses precision at short range: the distance
    /// between coincident positions may be a few centimetres on an Earth
    /// sized sphere instead of zero.
    /// Prefer `haversine_distance` for short distances.
    /// * `a`, `b` - the start and finish positions.
    #[must_use]
    pub fn cosine_distance(&self, a: &LatLong, b: &LatLong) -> Metres {
        self.radians_to_metres(sphere::calculate_cosine_arc(a, b))
    }

    /// Calculate the great circle distance between a pair of positions
    /// using the haversine formula.
    /// * `a`, `b` - the start and finish positions.
    ///
    /// # Examples
    /// ```
    /// use spherical_geodesy::{Degrees, LatLong, Metres, NauticalMiles, Sphere};
    ///
    /// let sphere = Sphere::new(Metres(6_371_000.0)).unwrap();
    /// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
    /// let b = LatLong::new(Degrees(1.0), Degrees(0.0));
    ///
    /// let distance = sphere.haversine_distance(&a, &b);
    /// assert!((111_194.9 - distance.0).abs() < 0.1);
    ///
    /// let distance_nm = NauticalMiles::from(distance);
    /// println!("1 degree of latitude: {:?}", distance_nm);
    /// ```
    #[must_use]
    pub fn haversine_distance(&self, a: &LatLong, b: &LatLong) -> Metres {
        self.radians_to_metres(sphere::calculate_haversine_arc(a, b))
    }

    /// Calculate the approximate distance between a pair of positions using
    /// an equirectangular projection.
    ///
    /// Only accurate over short distances.
    /// * `a`, `b` - the start and finish positions.
    #[must_use]
    pub fn equirectangular_distance(&self, a: &LatLong, b: &LatLong) -> Metres {
        self.radians_to_metres(sphere::calculate_equirectangular_arc(a, b))
    }

    /// Calculate the initial bearing of the great circle path from `a` to `b`.
    /// * `a`, `b` - the start and finish positions.
    ///
    /// returns the bearing in the range -180° to 180°.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn initial_bearing(&self, a: &LatLong, b: &LatLong) -> Degrees {
        sphere::calculate_initial_bearing(a, b)
    }

    /// Calculate the final bearing of the great circle path from `a` to `b`.
    /// * `a`, `b` - the start and finish positions.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn final_bearing(&self, a: &LatLong, b: &LatLong) -> Degrees {
        sphere::calculate_final_bearing(a, b)
    }

    /// Calculate the across track distance of position `c` from the great
    /// circle path from `a` to `b`.
    /// * `a`, `b` - the start and finish positions of the path.
    /// * `c` - the position.
    ///
    /// returns the distance, positive if `c` is to the right of the path.
    #[must_use]
    pub fn cross_track_distance(&self, a: &LatLong, b: &LatLong, c: &LatLong) -> Metres {
        self.radians_to_metres(sphere::calculate_cross_track_arc(a, b, c))
    }

    /// Calculate the along track distance of position `c` along the great
    /// circle path from `a` to `b`.
    /// * `a`, `b` - the start and finish positions of the path.
    /// * `c` - the position.
    ///
    /// returns the distance from `a` to the closest point on the path to `c`,
    /// negative if it is behind `a`.
    #[must_use]
    pub fn along_track_distance(&self, a: &LatLong, b: &LatLong, c: &LatLong) -> Metres {
        self.radians_to_metres(sphere::calculate_along_track_arc(a, b, c))
    }

    /// Calculate the mid point of the great circle path between `a` and `b`.
    /// * `a`, `b` - the start and finish positions.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn midpoint(&self, a: &LatLong, b: &LatLong) -> LatLong {
        sphere::calculate_midpoint(a, b)
    }

    /// Calculate the destination position from a start position, distance
    /// and initial bearing along a great circle.
    /// * `a` - the start position.
    /// * `distance` - the distance to travel.
    /// * `bearing` - the initial bearing.
    ///
    /// # Examples
    /// ```
    /// use spherical_geodesy::{Angle, Degrees, LatLong, Metres, EARTH};
    ///
    /// let a = LatLong::new(Degrees(51.0), Degrees(-1.0));
    /// let b = LatLong::new(Degrees(52.0), Degrees(1.0));
    ///
    /// let distance = EARTH.haversine_distance(&a, &b);
    /// let bearing = Angle::from(EARTH.initial_bearing(&a, &b));
    /// let result = EARTH.offset(&a, distance, bearing);
    /// assert!((52.0 - result.lat().0).abs() < 1e-9);
    /// assert!((1.0 - result.lon().0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn offset(&self, a: &LatLong, distance: Metres, bearing: Angle) -> LatLong {
        sphere::calculate_offset(a, self.metres_to_radians(distance), bearing)
    }

    /// The "maximum latitude" expression, see `sphere::maximum_latitude`.
    /// * `bearing` - the bearing of the great circle.
    /// * `latitude` - the latitude at which the great circle has `bearing`.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn maximum_latitude(&self, bearing: Degrees, latitude: Degrees) -> f64 {
        sphere::maximum_latitude(bearing, latitude)
    }

    /// Calculate the intersection point of two great circle paths,
    /// see `intersection::calculate_intersection_point`.
    /// * `a`, `bearing_a` - the start position and bearing of the first path.
    /// * `b`, `bearing_b` - the start position and bearing of the second path.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn intersection(
        &self,
        a: &LatLong,
        bearing_a: Angle,
        b: &LatLong,
        bearing_b: Angle,
    ) -> Option<LatLong> {
        intersection::calculate_intersection_point(a, bearing_a, b, bearing_b)
    }

    /// Calculate the rhumb line distance between a pair of positions.
    /// * `a`, `b` - the start and finish positions.
    #[must_use]
    pub fn rhumb_distance(&self, a: &LatLong, b: &LatLong) -> Metres {
        self.radians_to_metres(rhumb::calculate_rhumb_arc(a, b))
    }

    /// Calculate the bearing of the rhumb line from `a` to `b`.
    /// * `a`, `b` - the start and finish positions.
    ///
    /// returns the bearing in the range -180° to 180°.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn rhumb_bearing(&self, a: &LatLong, b: &LatLong) -> Degrees {
        rhumb::calculate_rhumb_bearing(a, b)
    }

    /// Calculate the destination position from a start position, distance
    /// and bearing along a rhumb line.
    /// * `a` - the start position.
    /// * `distance` - the distance to travel.
    /// * `bearing` - the constant bearing.
    #[must_use]
    pub fn rhumb_destination(&self, a: &LatLong, distance: Metres, bearing: Angle) -> LatLong {
        rhumb::calculate_rhumb_destination(a, self.metres_to_radians(distance), bearing)
    }
}

/// A `Sphere` with the mean radius of the Earth.
pub const EARTH: Sphere = Sphere::earth();
