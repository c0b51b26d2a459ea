//! Actuation error types

use crate::core::CabinId;
use std::fmt;
use thiserror::Error;

/// Command issued to a cabin actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCommand {
    Start,
    Stop,
}

impl ActuatorCommand {
    /// Command that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            ActuatorCommand::Start => ActuatorCommand::Stop,
            ActuatorCommand::Stop => ActuatorCommand::Start,
        }
    }
}

impl fmt::Display for ActuatorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorCommand::Start => write!(f, "start"),
            ActuatorCommand::Stop => write!(f, "stop"),
        }
    }
}

/// Failure reported by a cabin actuator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActuationError {
    /// Actuator declined the command
    #[error("cabin {cabin_id} refused {command} command")]
    Refused { cabin_id: CabinId, command: ActuatorCommand },
    /// Hardware-specific fault
    #[error("cabin {cabin_id} actuator fault {code}: {description}")]
    Fault { cabin_id: CabinId, code: u32, description: String },
    /// Actuator is unreachable
    #[error("cabin {cabin_id} actuator disconnected")]
    Disconnected { cabin_id: CabinId },
}

impl ActuationError {
    pub fn cabin_id(&self) -> CabinId {
        match self {
            ActuationError::Refused { cabin_id, .. }
            | ActuationError::Fault { cabin_id, .. }
            | ActuationError::Disconnected { cabin_id } => *cabin_id,
        }
    }
}

/// Result type for actuation operations
pub type ActuationResult<T> = Result<T, ActuationError>;
