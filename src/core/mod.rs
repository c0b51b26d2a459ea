//! Core types and constants for the ride kinematics model

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
