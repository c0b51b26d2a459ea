//! Ferris Wheel Kinematics
//!
//! Rotational kinematics of a circular ride: cabin positions over time,
//! ride motion state, and derived distance and timing queries.

pub mod core;
pub mod algorithms;
pub mod hardware;
pub mod ride;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use core::{CabinId, Coordinate, GeoCoordinate, MotionState};
pub use algorithms::{angular_speed, arc_length, hypotenuse, CoordinateFrame};
pub use hardware::{ActuationError, ActuationResult, ActuatorCommand, ActuatorStatus, CabinActuator, MockActuator};
pub use ride::{Cabin, Clock, ManualClock, SystemClock, Wheel};
pub use utils::{ActuationPolicy, ConfigError, WheelConfig};
pub use validation::{WheelError, WheelResult};
