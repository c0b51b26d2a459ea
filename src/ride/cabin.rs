//! Cabins attached to the wheel rim

use crate::algorithms::geometry::point_on_circle;
use crate::core::{CabinId, Coordinate};
use crate::hardware::{ActuationResult, ActuatorCommand, ActuatorStatus, CabinActuator};
use std::fmt;

/// Passenger carrier fixed to the rim.
///
/// `location` always equals `point_on_circle(radius, angle)`; the only
/// mutation is [`Cabin::rotate_by`], which keeps the two in step.
pub struct Cabin {
    id: CabinId,
    /// Radians, unbounded across revolutions
    angle: f64,
    location: Coordinate,
    actuator: Box<dyn CabinActuator>,
}

impl Cabin {
    pub(crate) fn new(id: CabinId, angle: f64, radius: f64, actuator: Box<dyn CabinActuator>) -> Self {
        Self {
            id,
            angle,
            location: point_on_circle(radius, angle),
            actuator,
        }
    }

    pub fn id(&self) -> CabinId {
        self.id
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Straight-line distance between the two cabins' locations
    pub fn distance_to(&self, other: &Cabin) -> f64 {
        self.location.distance_to(&other.location)
    }

    /// Engage this cabin's drive
    pub fn start(&mut self) -> ActuationResult<()> {
        self.actuator.start()
    }

    /// Release this cabin's drive
    pub fn stop(&mut self) -> ActuationResult<()> {
        self.actuator.stop()
    }

    pub fn is_engaged(&self) -> bool {
        self.actuator.is_engaged()
    }

    pub fn actuator_status(&self) -> ActuatorStatus {
        self.actuator.get_status()
    }

    pub(crate) fn execute(&mut self, command: ActuatorCommand) -> ActuationResult<()> {
        self.actuator.execute(command)
    }

    pub(crate) fn rotate_by(&mut self, radians: f64, radius: f64) {
        self.angle += radians;
        self.location = point_on_circle(radius, self.angle);
    }
}

impl fmt::Debug for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cabin")
            .field("id", &self.id)
            .field("angle", &self.angle)
            .field("location", &self.location)
            .field("engaged", &self.actuator.is_engaged())
            .finish_non_exhaustive()
    }
}
