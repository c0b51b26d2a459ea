//! Stateless rotational geometry helpers
//!
//! Every function here is a pure computation over `f64`. Callers are
//! responsible for the `> 0` guards on periods before dividing by them.

use crate::core::{Coordinate, FULL_REVOLUTION_RAD};
use nalgebra::Vector2;

/// Converts a revolution period (seconds per revolution) to angular speed (radians per second).
///
/// A zero period yields `inf` and a negative one a negative speed; guard with
/// [`is_positive_finite`] first.
pub fn angular_speed(seconds_per_revolution: f64) -> f64 {
    FULL_REVOLUTION_RAD / seconds_per_revolution
}

/// Length of the arc swept by `radians` on a circle of `radius`.
/// The sign of `radians` carries the direction.
pub fn arc_length(radius: f64, radians: f64) -> f64 {
    radius * radians
}

/// Length of the hypotenuse of a right triangle with legs `a` and `b`
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    Vector2::new(a, b).norm()
}

/// Point at `angle` radians on a circle of `radius` centered on the origin
pub fn point_on_circle(radius: f64, angle: f64) -> Coordinate {
    Coordinate {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
    }
}

pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_angular_speed() {
        assert_relative_eq!(angular_speed(60.0), 2.0 * PI / 60.0, epsilon = 1e-15);
        assert_relative_eq!(angular_speed(1.0), 2.0 * PI, epsilon = 1e-15);
        assert!(angular_speed(0.0).is_infinite());
        assert!(angular_speed(-10.0) < 0.0);
    }

    #[test]
    fn test_arc_length() {
        assert_relative_eq!(arc_length(10.0, FRAC_PI_2), 15.707963267948966, epsilon = 1e-12);
        assert_relative_eq!(arc_length(10.0, -PI), -10.0 * PI, epsilon = 1e-12);
        // Multiple revolutions accumulate
        assert_relative_eq!(arc_length(1.0, 4.0 * PI), 4.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_hypotenuse() {
        assert_relative_eq!(hypotenuse(3.0, 4.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(hypotenuse(-3.0, -4.0), 5.0, epsilon = 1e-12);
        assert_eq!(hypotenuse(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_point_on_circle() {
        let p = point_on_circle(10.0, FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 10.0, epsilon = 1e-12);

        let p = point_on_circle(10.0, PI);
        assert_relative_eq!(p.x, -10.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_finite_guard() {
        assert!(is_positive_finite(0.5));
        assert!(!is_positive_finite(0.0));
        assert!(!is_positive_finite(-1.0));
        assert!(!is_positive_finite(f64::NAN));
        assert!(!is_positive_finite(f64::INFINITY));
    }
}
