//! Geometric constants and ride defaults

/// Radians in one full revolution
pub const FULL_REVOLUTION_RAD: f64 = std::f64::consts::TAU;

/// Default wheel radius (meters)
pub const DEFAULT_RADIUS_M: f64 = 10.0;

/// Default height of the wheel's lowest rim point above the ground base (meters)
pub const DEFAULT_BASE_HEIGHT_M: f64 = 5.0;

/// Default number of cabins
pub const DEFAULT_CABIN_COUNT: u32 = 4;

/// Default revolution period (seconds)
pub const DEFAULT_SECONDS_PER_REVOLUTION: f64 = 60.0;
