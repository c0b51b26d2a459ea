//! Hardware abstraction layer for cabin actuation
//!
//! The wheel never drives motors itself. Each cabin owns a [`CabinActuator`]
//! and the wheel only propagates its success or failure.

pub mod actuator;
pub mod mock;
pub mod error;

pub use actuator::{CabinActuator, ActuatorStatus};
pub use mock::MockActuator;
pub use error::{ActuationError, ActuationResult, ActuatorCommand};
