use crate::core::{
    GeoCoordinate, DEFAULT_BASE_HEIGHT_M, DEFAULT_CABIN_COUNT, DEFAULT_RADIUS_M,
    DEFAULT_SECONDS_PER_REVOLUTION,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Cabin counts above this are accepted but reported as a warning
pub const LARGE_CABIN_COUNT: u32 = 1024;

/// How the wheel reacts when one cabin's actuator fails mid-way through
/// a start or stop sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActuationPolicy {
    /// Abort at the first failure and leave already-actuated cabins as they are
    #[default]
    FailFast,
    /// Abort at the first failure, then issue the opposite command, in
    /// reverse order, to every cabin whose engagement the failed call changed
    Rollback,
}

/// Physical and operational parameters of a wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Wheel radius (meters)
    pub radius_m: f64,
    /// Height of the base structure between the ground and the lowest rim point (meters)
    pub base_height_m: f64,
    /// Number of cabins evenly spaced on the rim
    pub cabin_count: u32,
    /// Revolution period (seconds). Zero means the wheel does not move.
    pub seconds_per_revolution: f64,
    /// Geographic position of the ground base center
    pub base_position: GeoCoordinate,
    /// Partial actuation failure handling
    #[serde(default)]
    pub actuation_policy: ActuationPolicy,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    #[error("config I/O error: {message}")]
    Io { message: String },
    /// JSON serialization/deserialization error
    #[error("config serialization error: {message}")]
    Serialization { message: String },
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors
    pub errors: Vec<ConfigError>,
    /// Validation warnings
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            base_height_m: DEFAULT_BASE_HEIGHT_M,
            cabin_count: DEFAULT_CABIN_COUNT,
            seconds_per_revolution: DEFAULT_SECONDS_PER_REVOLUTION,
            base_position: GeoCoordinate::default(),
            actuation_policy: ActuationPolicy::default(),
        }
    }
}

impl WheelConfig {
    pub fn new(radius_m: f64, base_height_m: f64, base_position: GeoCoordinate, cabin_count: u32) -> Self {
        Self {
            radius_m,
            base_height_m,
            cabin_count,
            base_position,
            ..Default::default()
        }
    }

    pub fn with_seconds_per_revolution(mut self, seconds: f64) -> Self {
        self.seconds_per_revolution = seconds;
        self
    }

    pub fn with_actuation_policy(mut self, policy: ActuationPolicy) -> Self {
        self.actuation_policy = policy;
        self
    }

    /// Validate all parameters, collecting every problem found
    pub fn validation_report(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !(self.radius_m.is_finite() && self.radius_m > 0.0) {
            result.errors.push(invalid("radius_m", self.radius_m, "Radius must be a positive number of meters"));
        }

        if !(self.base_height_m.is_finite() && self.base_height_m >= 0.0) {
            result.errors.push(invalid("base_height_m", self.base_height_m, "Base height must be zero or positive"));
        }

        if self.cabin_count == 0 {
            result.errors.push(invalid("cabin_count", self.cabin_count, "At least one cabin is required"));
        } else if self.cabin_count > LARGE_CABIN_COUNT {
            result.warnings.push(format!(
                "Unusually high cabin count {}; cabins are less than {:.4} degrees apart",
                self.cabin_count,
                360.0 / LARGE_CABIN_COUNT as f64
            ));
        }

        if let Err(e) = validate_seconds_per_revolution(self.seconds_per_revolution) {
            result.errors.push(e);
        } else if self.seconds_per_revolution == 0.0 {
            result.warnings.push("Revolution period is zero; the wheel will not move".to_string());
        }

        if !self.base_position.altitude.is_finite() {
            result.errors.push(invalid(
                "base_position.altitude",
                self.base_position.altitude,
                "Altitude must be finite",
            ));
        }

        result
    }

    /// Validate, returning the first error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.validation_report().errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_json::from_str(content).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }
}

/// A revolution period must be finite and not negative
pub fn validate_seconds_per_revolution(seconds: f64) -> Result<(), ConfigError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(invalid(
            "seconds_per_revolution",
            seconds,
            "Revolution period must be zero or a positive number of seconds",
        ))
    }
}

fn invalid<T: ToString>(parameter: &str, value: T, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
