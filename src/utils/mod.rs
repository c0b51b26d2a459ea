//! Utility modules for configuration

pub mod config;

pub use config::{ActuationPolicy, ConfigError, WheelConfig};
