//! Rotational geometry and frame conversions

pub mod geometry;
pub mod frame;

pub use geometry::{angular_speed, arc_length, hypotenuse, point_on_circle};
pub use frame::CoordinateFrame;
