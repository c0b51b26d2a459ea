//! Cabin actuator interface

use crate::core::CabinId;
use crate::hardware::{ActuationResult, ActuatorCommand};

/// Hardware abstraction for the motor/brake unit driving one cabin.
///
/// The core only interprets success or failure; what "start" and "stop"
/// mean physically is up to the implementation.
pub trait CabinActuator: Send {
    /// Engage the cabin drive
    fn start(&mut self) -> ActuationResult<()>;

    /// Release the cabin drive
    fn stop(&mut self) -> ActuationResult<()>;

    /// Whether the drive is currently engaged
    fn is_engaged(&self) -> bool;

    /// Current actuator status
    fn get_status(&self) -> ActuatorStatus;

    /// Issue `command`, dispatching to [`Self::start`] or [`Self::stop`]
    fn execute(&mut self, command: ActuatorCommand) -> ActuationResult<()> {
        match command {
            ActuatorCommand::Start => self.start(),
            ActuatorCommand::Stop => self.stop(),
        }
    }
}

/// Actuator status information
#[derive(Debug, Clone, PartialEq)]
pub struct ActuatorStatus {
    pub cabin_id: CabinId,
    pub engaged: bool,
    pub start_count: u32,
    pub stop_count: u32,
    pub failure_count: u32,
}

impl ActuatorStatus {
    pub fn new(cabin_id: CabinId) -> Self {
        Self {
            cabin_id,
            engaged: false,
            start_count: 0,
            stop_count: 0,
            failure_count: 0,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.failure_count == 0
    }
}
