//! Core data types for the ride model

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a cabin, assigned `0..cabin_count` at wheel construction
pub type CabinId = u32;

/// Point in the wheel frame (meters), origin at the rotational center.
/// `x` is ground distance, `y` is height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point in the same frame
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        nalgebra::distance(&Point2::from(*self), &Point2::from(*other))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Coordinate> for Point2<f64> {
    fn from(c: Coordinate) -> Self {
        Point2::new(c.x, c.y)
    }
}

impl From<Point2<f64>> for Coordinate {
    fn from(p: Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Real-world position of the wheel's ground base.
/// Only `altitude` takes part in the kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude above sea level in meters
    pub altitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

/// Motion state of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionState {
    #[default]
    Stopped,
    Running,
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionState::Stopped => write!(f, "STOPPED"),
            MotionState::Running => write!(f, "RUNNING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coordinate_distance() {
        let a = Coordinate::new(3.0, 0.0);
        let b = Coordinate::new(0.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0, epsilon = 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_conversion() {
        let c = Coordinate::new(-1.5, 2.25);
        let p: Point2<f64> = c.into();
        assert_eq!(Coordinate::from(p), c);
    }

    #[test]
    fn test_finite_check() {
        assert!(Coordinate::default().is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_default_state_is_stopped() {
        assert_eq!(MotionState::default(), MotionState::Stopped);
        assert_eq!(MotionState::Running.to_string(), "RUNNING");
    }
}
