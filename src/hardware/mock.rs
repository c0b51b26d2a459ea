//! Mock actuator implementation for testing and offline simulation

use crate::core::CabinId;
use crate::hardware::{
    ActuationError, ActuationResult, ActuatorCommand, ActuatorStatus, CabinActuator,
};

/// Mock actuator that records every command it receives
#[derive(Debug, Clone)]
pub struct MockActuator {
    cabin_id: CabinId,
    status: ActuatorStatus,
    refuse_start: bool,
    refuse_stop: bool,
    simulate_faults: bool,
    fault_probability: f32,
    connected: bool,
    history: Vec<ActuatorCommand>,
}

impl MockActuator {
    /// Create a new mock actuator that accepts every command
    pub fn new(cabin_id: CabinId) -> Self {
        Self {
            cabin_id,
            status: ActuatorStatus::new(cabin_id),
            refuse_start: false,
            refuse_stop: false,
            simulate_faults: false,
            fault_probability: 0.0,
            connected: true,
            history: Vec::new(),
        }
    }

    /// Mock that refuses every start command
    pub fn refusing_start(cabin_id: CabinId) -> Self {
        Self {
            refuse_start: true,
            ..Self::new(cabin_id)
        }
    }

    /// Mock that refuses every stop command
    pub fn refusing_stop(cabin_id: CabinId) -> Self {
        Self {
            refuse_stop: true,
            ..Self::new(cabin_id)
        }
    }

    pub fn set_refuse_start(&mut self, refuse: bool) {
        self.refuse_start = refuse;
    }

    pub fn set_refuse_stop(&mut self, refuse: bool) {
        self.refuse_stop = refuse;
    }

    /// Enable fault simulation with given probability (0.0 to 1.0)
    pub fn simulate_faults(&mut self, enable: bool, probability: f32) {
        self.simulate_faults = enable;
        self.fault_probability = probability.clamp(0.0, 1.0);
    }

    /// Simulate connection loss
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Restore connection
    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    /// Commands that were accepted, in order
    pub fn history(&self) -> &[ActuatorCommand] {
        &self.history
    }

    fn should_simulate_fault(&self) -> bool {
        if !self.simulate_faults {
            return false;
        }

        use rand::Rng;
        let mut rng = rand::thread_rng();
        rng.gen::<f32>() < self.fault_probability
    }

    fn apply(&mut self, command: ActuatorCommand) -> ActuationResult<()> {
        if !self.connected {
            self.status.failure_count += 1;
            return Err(ActuationError::Disconnected {
                cabin_id: self.cabin_id,
            });
        }

        if self.should_simulate_fault() {
            self.status.failure_count += 1;
            return Err(ActuationError::Fault {
                cabin_id: self.cabin_id,
                code: 1001,
                description: format!("Simulated {} failure", command),
            });
        }

        let refused = match command {
            ActuatorCommand::Start => self.refuse_start,
            ActuatorCommand::Stop => self.refuse_stop,
        };
        if refused {
            self.status.failure_count += 1;
            return Err(ActuationError::Refused {
                cabin_id: self.cabin_id,
                command,
            });
        }

        match command {
            ActuatorCommand::Start => {
                self.status.engaged = true;
                self.status.start_count += 1;
            }
            ActuatorCommand::Stop => {
                self.status.engaged = false;
                self.status.stop_count += 1;
            }
        }
        self.history.push(command);
        Ok(())
    }
}

impl CabinActuator for MockActuator {
    fn start(&mut self) -> ActuationResult<()> {
        self.apply(ActuatorCommand::Start)
    }

    fn stop(&mut self) -> ActuationResult<()> {
        self.apply(ActuatorCommand::Stop)
    }

    fn is_engaged(&self) -> bool {
        self.status.engaged
    }

    fn get_status(&self) -> ActuatorStatus {
        self.status.clone()
    }
}
