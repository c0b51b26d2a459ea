//! Wheel-centered Cartesian frame
//!
//! The origin sits on the wheel's rotational axis. `x` is ground distance and
//! `y` is height, so the ground base lies directly below the origin at
//! `(0, -(radius + base_height))`.

use crate::core::{Coordinate, GeoCoordinate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFrame {
    radius: f64,
    base_height: f64,
    base_geo: GeoCoordinate,
    normalized_base: Coordinate,
}

impl CoordinateFrame {
    pub fn new(radius: f64, base_height: f64, base_geo: GeoCoordinate) -> Self {
        Self {
            radius,
            base_height,
            base_geo,
            normalized_base: Coordinate {
                x: 0.0,
                y: -(radius + base_height),
            },
        }
    }

    /// Ground base center expressed in the wheel frame
    pub fn normalized_base(&self) -> Coordinate {
        self.normalized_base
    }

    pub fn base_geo(&self) -> &GeoCoordinate {
        &self.base_geo
    }

    /// Real-world altitude of the rotational center
    pub fn origin_altitude(&self) -> f64 {
        self.base_geo.altitude + self.base_height + self.radius
    }

    /// Places a real-world altitude on the frame's Y axis.
    /// Altitudes above the center map to positive Y.
    pub fn altitude_to_frame_y(&self, altitude: f64) -> f64 {
        -(self.origin_altitude() - altitude)
    }

    /// Inverse of [`Self::altitude_to_frame_y`]
    pub fn frame_y_to_altitude(&self, y: f64) -> f64 {
        y + self.origin_altitude()
    }

    /// Height of a frame Y coordinate above the ground base
    pub fn height_above_base(&self, y: f64) -> f64 {
        y - self.normalized_base.y
    }
}
