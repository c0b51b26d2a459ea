use crate::core::CabinId;
use crate::hardware::ActuationError;
use crate::utils::ConfigError;
use thiserror::Error;

/// Errors raised by wheel operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    /// Wheel parameters rejected at construction or update
    #[error("invalid wheel configuration: {0}")]
    Config(#[from] ConfigError),

    /// No cabin with this id exists on the wheel
    #[error("cabin {cabin_id} not found")]
    CabinNotFound { cabin_id: CabinId },

    /// Cabin location is not a finite point
    #[error("location of cabin {cabin_id} is unavailable")]
    LocationUnavailable { cabin_id: CabinId },

    /// A cabin actuator refused or failed a start/stop command
    #[error("actuation failed for cabin {cabin_id}")]
    Actuation {
        cabin_id: CabinId,
        #[source]
        source: ActuationError,
    },

    /// Operation requires motion but the revolution period is zero
    #[error("wheel is stationary: revolution period is not positive")]
    Stationary,

    /// Caller-supplied argument is out of range
    #[error("invalid {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl From<ActuationError> for WheelError {
    fn from(source: ActuationError) -> Self {
        WheelError::Actuation {
            cabin_id: source.cabin_id(),
            source,
        }
    }
}

impl WheelError {
    pub(crate) fn invalid_parameter<T: ToString>(parameter: &str, value: T) -> Self {
        WheelError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether retrying the same call can succeed without changing inputs
    pub fn is_transient(&self) -> bool {
        matches!(self, WheelError::Actuation { .. })
    }
}

/// Result type for wheel operations
pub type WheelResult<T> = Result<T, WheelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::ActuatorCommand;
    use std::error::Error as _;

    #[test]
    fn test_actuation_conversion_keeps_source() {
        let err: WheelError = ActuationError::Refused {
            cabin_id: 7,
            command: ActuatorCommand::Stop,
        }
        .into();

        assert!(matches!(err, WheelError::Actuation { cabin_id: 7, .. }));
        assert!(err.is_transient());
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("cabin 7 refused stop command".to_string())
        );
    }

    #[test]
    fn test_config_conversion() {
        let err: WheelError = ConfigError::Io {
            message: "disk gone".to_string(),
        }
        .into();
        assert!(!err.is_transient());
        assert_eq!(
            err.to_string(),
            "invalid wheel configuration: config I/O error: disk gone"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            WheelError::CabinNotFound { cabin_id: 12 }.to_string(),
            "cabin 12 not found"
        );
        assert_eq!(
            WheelError::invalid_parameter("seconds", f64::NAN).to_string(),
            "invalid seconds = NaN"
        );
    }
}
