//! Wheel state machine and kinematic queries
//!
//! The wheel owns every cabin and is the only entry point for motion
//! changes. Cabin positions move only through [`Wheel::advance`] (or
//! [`Wheel::sync`], which advances by clock time); every other query is a
//! pure function of stored state and elapsed time.

use crate::algorithms::geometry::{angular_speed, arc_length, hypotenuse, is_positive_finite};
use crate::algorithms::CoordinateFrame;
use crate::core::{CabinId, Coordinate, MotionState, FULL_REVOLUTION_RAD};
use crate::hardware::{ActuatorCommand, CabinActuator, MockActuator};
use crate::ride::clock::{seconds_between, Clock, SystemClock};
use crate::ride::Cabin;
use crate::utils::config::{validate_seconds_per_revolution, ActuationPolicy, WheelConfig};
use crate::validation::{WheelError, WheelResult};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};

pub struct Wheel {
    config: WheelConfig,
    frame: CoordinateFrame,
    state: MotionState,
    /// Latest successful start
    start_time: Option<DateTime<Utc>>,
    /// Latest successful stop
    stop_time: Option<DateTime<Utc>>,
    /// Instant cabin positions were last advanced to, while running
    last_sync: Option<DateTime<Utc>>,
    /// Indexed by cabin id
    cabins: Vec<Cabin>,
    clock: Box<dyn Clock>,
}

impl Wheel {
    /// Build a wheel tracking wall-clock time.
    ///
    /// `actuator_factory` is called once per cabin id, in ascending order.
    pub fn new<F>(config: WheelConfig, actuator_factory: F) -> WheelResult<Self>
    where
        F: FnMut(CabinId) -> Box<dyn CabinActuator>,
    {
        Self::with_clock(config, actuator_factory, Box::new(SystemClock))
    }

    /// Build a wheel reading time from `clock`
    pub fn with_clock<F>(config: WheelConfig, mut actuator_factory: F, clock: Box<dyn Clock>) -> WheelResult<Self>
    where
        F: FnMut(CabinId) -> Box<dyn CabinActuator>,
    {
        config.validate()?;

        let frame = CoordinateFrame::new(config.radius_m, config.base_height_m, config.base_position);

        // Evenly spaced, first cabin at angle 0
        let spacing = FULL_REVOLUTION_RAD / config.cabin_count as f64;
        let cabins = (0..config.cabin_count)
            .map(|id| Cabin::new(id, id as f64 * spacing, config.radius_m, actuator_factory(id)))
            .collect();

        info!(
            "Wheel initialized: radius={}m base_height={}m cabins={} period={}s",
            config.radius_m, config.base_height_m, config.cabin_count, config.seconds_per_revolution
        );

        Ok(Self {
            config,
            frame,
            state: MotionState::Stopped,
            start_time: None,
            stop_time: None,
            last_sync: None,
            cabins,
            clock,
        })
    }

    /// Build a wheel whose cabins are driven by [`MockActuator`]s
    pub fn with_mock_actuators(config: WheelConfig, clock: Box<dyn Clock>) -> WheelResult<Self> {
        Self::with_clock(config, |id| -> Box<dyn CabinActuator> { Box::new(MockActuator::new(id)) }, clock)
    }

    // Motion control

    /// Start every cabin's drive and begin running.
    ///
    /// On the first refusal the wheel keeps its state and start time and the
    /// error names the failing cabin. Cabins started before it are handled
    /// according to the configured [`ActuationPolicy`].
    /// Calling this while running re-anchors the start time.
    pub fn start(&mut self) -> WheelResult<()> {
        self.actuate_all(ActuatorCommand::Start)?;

        let now = self.clock.now();
        if self.state == MotionState::Running {
            self.advance_until(now)?;
        }
        self.start_time = Some(now);
        self.last_sync = Some(now);
        self.state = MotionState::Running;

        info!("Wheel started at {}", now);
        Ok(())
    }

    /// Stop every cabin's drive. Positions are advanced up to the stop instant.
    ///
    /// Stopping an already stopped wheel moves the stop time forward, so
    /// `elapsed_seconds` then spans from the latest start to this call.
    pub fn stop(&mut self) -> WheelResult<()> {
        self.actuate_all(ActuatorCommand::Stop)?;

        let now = self.clock.now();
        if self.state == MotionState::Running {
            self.advance_until(now)?;
        }
        self.stop_time = Some(now);
        self.last_sync = None;
        self.state = MotionState::Stopped;

        info!("Wheel stopped at {} after {:.3}s", now, self.elapsed_seconds());
        Ok(())
    }

    fn actuate_all(&mut self, command: ActuatorCommand) -> WheelResult<()> {
        // Cabins whose engagement this call flipped
        let mut changed = Vec::new();

        for index in 0..self.cabins.len() {
            let cabin = &mut self.cabins[index];
            let was_engaged = cabin.is_engaged();

            if let Err(source) = cabin.execute(command) {
                let cabin_id = cabin.id();
                warn!("Cabin {} failed to {}: {}", cabin_id, command, source);
                if self.config.actuation_policy == ActuationPolicy::Rollback {
                    self.roll_back(&changed, command.opposite());
                }
                return Err(WheelError::Actuation { cabin_id, source });
            }

            if cabin.is_engaged() != was_engaged {
                changed.push(index);
            }
        }

        Ok(())
    }

    /// Undo the cabins at `changed`, most recent first
    fn roll_back(&mut self, changed: &[usize], command: ActuatorCommand) {
        for &index in changed.iter().rev() {
            let cabin = &mut self.cabins[index];
            if let Err(e) = cabin.execute(command) {
                warn!("Rollback {} of cabin {} failed: {}", command, cabin.id(), e);
            }
        }
    }

    // Position updates

    /// Rotate every cabin by the angle covered in `seconds` at the current speed.
    /// A zero revolution period leaves positions unchanged.
    pub fn advance(&mut self, seconds: f64) -> WheelResult<()> {
        if !seconds.is_finite() {
            return Err(WheelError::invalid_parameter("seconds", seconds));
        }
        if !is_positive_finite(self.config.seconds_per_revolution) {
            debug!("Advance of {}s ignored: wheel is stationary", seconds);
            return Ok(());
        }

        let theta = angular_speed(self.config.seconds_per_revolution) * seconds;
        // Checked up front so a rejected advance moves no cabin
        if !theta.is_finite() || self.cabins.iter().any(|c| !(c.angle() + theta).is_finite()) {
            return Err(WheelError::invalid_parameter("seconds", seconds));
        }
        let radius = self.config.radius_m;
        for cabin in &mut self.cabins {
            cabin.rotate_by(theta, radius);
        }

        debug!("Advanced {}s ({:.6} rad)", seconds, theta);
        Ok(())
    }

    /// Advance positions by the clock time elapsed since the last sync.
    /// Returns the number of seconds advanced; zero while stopped.
    pub fn sync(&mut self) -> WheelResult<f64> {
        if self.state != MotionState::Running {
            return Ok(0.0);
        }
        let now = self.clock.now();
        self.advance_until(now)
    }

    fn advance_until(&mut self, now: DateTime<Utc>) -> WheelResult<f64> {
        let Some(last) = self.last_sync else {
            return Ok(0.0);
        };
        let seconds = seconds_between(last, now).max(0.0);
        self.advance(seconds)?;
        self.last_sync = Some(now);
        Ok(seconds)
    }

    // Queries

    /// Straight-line distance from a ground point to a cabin.
    ///
    /// The point sits `ground_distance` meters away horizontally, at
    /// `altitude` meters above sea level, or at the wheel base's level when
    /// `altitude` is `None`.
    pub fn distance_to_point(&self, cabin_id: CabinId, ground_distance: f64, altitude: Option<f64>) -> WheelResult<f64> {
        let location = self.cabin_location(cabin_id)?;
        let target_y = match altitude {
            Some(altitude) => self.frame.altitude_to_frame_y(altitude),
            None => self.frame.normalized_base().y,
        };
        Ok(hypotenuse(ground_distance, location.y - target_y))
    }

    /// Straight-line distance between two cabins
    pub fn distance_between(&self, a: CabinId, b: CabinId) -> WheelResult<f64> {
        let first = self.positioned_cabin(a)?;
        let second = self.positioned_cabin(b)?;
        Ok(first.distance_to(second))
    }

    /// Seconds of motion in the latest start/stop interval, or since the
    /// latest start if still running. Zero if never started.
    pub fn elapsed_seconds(&self) -> f64 {
        match (self.start_time, self.stop_time) {
            (Some(start), Some(stop)) if stop > start => seconds_between(start, stop),
            (Some(start), _) if self.state == MotionState::Running => {
                seconds_between(start, self.clock.now()).max(0.0)
            }
            _ => 0.0,
        }
    }

    /// Arc distance covered during [`Self::elapsed_seconds`]
    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled_for(self.elapsed_seconds())
    }

    /// Arc distance the wheel covers in `seconds` at its current speed,
    /// regardless of whether it is running
    pub fn distance_traveled_for(&self, seconds: f64) -> f64 {
        if seconds > 0.0 && is_positive_finite(self.config.seconds_per_revolution) {
            let radians = angular_speed(self.config.seconds_per_revolution) * seconds;
            arc_length(self.config.radius_m, radians)
        } else {
            0.0
        }
    }

    /// Seconds needed to cover `distance` meters of arc
    pub fn time_for_distance(&self, distance: f64) -> WheelResult<f64> {
        if !distance.is_finite() {
            return Err(WheelError::invalid_parameter("distance", distance));
        }
        if !is_positive_finite(self.config.seconds_per_revolution) {
            return Err(WheelError::Stationary);
        }
        let radians = distance / self.config.radius_m;
        Ok(radians / angular_speed(self.config.seconds_per_revolution))
    }

    pub fn find_cabin(&self, id: CabinId) -> Option<&Cabin> {
        self.cabins.get(id as usize)
    }

    pub fn cabins(&self) -> impl Iterator<Item = &Cabin> {
        self.cabins.iter()
    }

    /// Real-world altitude of a cabin
    pub fn cabin_altitude(&self, id: CabinId) -> WheelResult<f64> {
        let location = self.cabin_location(id)?;
        Ok(self.frame.frame_y_to_altitude(location.y))
    }

    /// Height of a cabin above the ground base
    pub fn cabin_height(&self, id: CabinId) -> WheelResult<f64> {
        let location = self.cabin_location(id)?;
        Ok(self.frame.height_above_base(location.y))
    }

    fn positioned_cabin(&self, id: CabinId) -> WheelResult<&Cabin> {
        let cabin = self.find_cabin(id).ok_or(WheelError::CabinNotFound { cabin_id: id })?;
        if !cabin.location().is_finite() {
            return Err(WheelError::LocationUnavailable { cabin_id: id });
        }
        Ok(cabin)
    }

    fn cabin_location(&self, id: CabinId) -> WheelResult<Coordinate> {
        self.positioned_cabin(id).map(Cabin::location)
    }

    // Parameters

    pub fn seconds_per_revolution(&self) -> f64 {
        self.config.seconds_per_revolution
    }

    /// Change the revolution period. While running, positions are first
    /// advanced to now at the old speed.
    pub fn set_seconds_per_revolution(&mut self, seconds: f64) -> WheelResult<()> {
        validate_seconds_per_revolution(seconds)?;
        self.sync()?;
        debug!(
            "Revolution period changed from {}s to {}s",
            self.config.seconds_per_revolution, seconds
        );
        self.config.seconds_per_revolution = seconds;
        Ok(())
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == MotionState::Running
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn stop_time(&self) -> Option<DateTime<Utc>> {
        self.stop_time
    }

    pub fn radius(&self) -> f64 {
        self.config.radius_m
    }

    pub fn base_height(&self) -> f64 {
        self.config.base_height_m
    }

    pub fn cabin_count(&self) -> u32 {
        self.config.cabin_count
    }

    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }
}

impl std::fmt::Debug for Wheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wheel")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("start_time", &self.start_time)
            .field("stop_time", &self.stop_time)
            .field("cabins", &self.cabins)
            .finish_non_exhaustive()
    }
}
