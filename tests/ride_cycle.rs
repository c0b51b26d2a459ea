use approx::assert_relative_eq;
use ferris_wheel::{
    angular_speed, arc_length, ActuationPolicy, CabinActuator, CabinId, GeoCoordinate, ManualClock, MockActuator,
    MotionState, Wheel, WheelConfig, WheelError,
};
use proptest::prelude::*;
use std::time::Duration;

fn config(radius: f64, period: f64, cabins: u32) -> WheelConfig {
    WheelConfig::new(radius, 5.0, GeoCoordinate::new(40.0, -74.0, 12.0), cabins).with_seconds_per_revolution(period)
}

fn simulated(config: WheelConfig) -> (Wheel, ManualClock) {
    let clock = ManualClock::at_epoch();
    let wheel = Wheel::with_mock_actuators(config, Box::new(clock.clone())).unwrap();
    (wheel, clock)
}

#[test]
fn test_full_ride_cycle() {
    let (mut wheel, clock) = simulated(config(10.0, 60.0, 4));

    wheel.start().unwrap();
    for _ in 0..60 {
        clock.advance_secs(1.0);
        wheel.sync().unwrap();
    }
    wheel.stop().unwrap();

    assert_eq!(wheel.state(), MotionState::Stopped);
    assert_relative_eq!(wheel.elapsed_seconds(), 60.0, epsilon = 1e-9);
    assert_relative_eq!(wheel.distance_traveled(), 20.0 * std::f64::consts::PI, epsilon = 1e-9);

    // One full revolution brings every cabin back to its initial location
    let (fresh, _) = simulated(config(10.0, 60.0, 4));
    for (moved, initial) in wheel.cabins().zip(fresh.cabins()) {
        assert_relative_eq!(moved.location().x, initial.location().x, epsilon = 1e-9);
        assert_relative_eq!(moved.location().y, initial.location().y, epsilon = 1e-9);
    }
}

#[test]
fn test_wall_clock_interval() {
    let mut wheel = Wheel::new(config(10.0, 60.0, 3), |id| -> Box<dyn CabinActuator> {
        Box::new(MockActuator::new(id))
    }).unwrap();

    wheel.start().unwrap();
    let started = std::time::Instant::now();
    std::thread::sleep(Duration::from_millis(50));
    wheel.stop().unwrap();
    let measured = started.elapsed().as_secs_f64();

    let elapsed = wheel.elapsed_seconds();
    assert!(elapsed >= 0.05);
    assert!((elapsed - measured).abs() < 0.05);
    assert_relative_eq!(
        wheel.distance_traveled(),
        arc_length(10.0, angular_speed(60.0) * elapsed),
        epsilon = 1e-9
    );
}

#[test]
fn test_partial_start_failure_recovers_on_retry() {
    struct FlakyStart {
        inner: MockActuator,
        failures_left: u32,
    }

    impl CabinActuator for FlakyStart {
        fn start(&mut self) -> ferris_wheel::ActuationResult<()> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                self.inner.set_refuse_start(true);
            } else {
                self.inner.set_refuse_start(false);
            }
            self.inner.start()
        }

        fn stop(&mut self) -> ferris_wheel::ActuationResult<()> {
            self.inner.stop()
        }

        fn is_engaged(&self) -> bool {
            self.inner.is_engaged()
        }

        fn get_status(&self) -> ferris_wheel::ActuatorStatus {
            self.inner.get_status()
        }
    }

    let clock = ManualClock::at_epoch();
    let mut wheel = Wheel::with_clock(
        config(10.0, 60.0, 5).with_actuation_policy(ActuationPolicy::Rollback),
        |id: CabinId| -> Box<dyn CabinActuator> {
            Box::new(FlakyStart {
                inner: MockActuator::new(id),
                failures_left: if id == 3 { 1 } else { 0 },
            })
        },
        Box::new(clock.clone()),
    )
    .unwrap();

    // No automatic retry: the first attempt surfaces the failure
    let err = wheel.start().unwrap_err();
    assert!(matches!(err, WheelError::Actuation { cabin_id: 3, .. }));
    assert!(err.is_transient());
    assert!(wheel.cabins().all(|c| !c.is_engaged()));
    assert!(wheel.start_time().is_none());

    clock.advance_secs(2.0);
    wheel.start().unwrap();
    assert!(wheel.is_running());
    assert!(wheel.cabins().all(|c| c.is_engaged()));
}

proptest! {
    #[test]
    fn distance_is_linear_in_time(
        radius in 0.5f64..200.0,
        period in 1.0f64..600.0,
        t in 0.0f64..10_000.0,
        k in 0.0f64..10.0,
    ) {
        let (wheel, _) = simulated(config(radius, period, 8));
        let base = wheel.distance_traveled_for(t);
        let scaled = wheel.distance_traveled_for(t * k);
        prop_assert!((scaled - base * k).abs() <= 1e-9 * scaled.abs().max(1.0));
        prop_assert_eq!(wheel.distance_traveled_for(0.0), 0.0);
    }

    #[test]
    fn time_for_distance_inverts_distance(
        radius in 0.5f64..200.0,
        period in 1.0f64..600.0,
        t in 0.0f64..10_000.0,
    ) {
        let (wheel, _) = simulated(config(radius, period, 6));
        let distance = wheel.distance_traveled_for(t);
        let back = wheel.time_for_distance(distance).unwrap();
        prop_assert!((back - t).abs() <= 1e-9 * t.max(1.0));
    }

    #[test]
    fn locations_stay_on_rim(
        radius in 0.5f64..200.0,
        cabins in 1u32..64,
        seconds in -1_000.0f64..1_000.0,
    ) {
        let (mut wheel, _) = simulated(config(radius, 45.0, cabins));
        wheel.advance(seconds).unwrap();
        for cabin in wheel.cabins() {
            let location = cabin.location();
            prop_assert!((location.x - radius * cabin.angle().cos()).abs() < 1e-9);
            prop_assert!((location.y - radius * cabin.angle().sin()).abs() < 1e-9);
            prop_assert_eq!(wheel.distance_between(cabin.id(), cabin.id()).unwrap(), 0.0);
        }
    }
}
