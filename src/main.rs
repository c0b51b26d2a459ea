use ferris_wheel::{ManualClock, Wheel, WheelConfig};

const STEPS: u32 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!(
            "Usage: {} [config_json]",
            args.first().map_or("ferris_wheel", |s| s.as_str())
        );
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => WheelConfig::from_file(path)?,
        None => WheelConfig::default(),
    };

    let clock = ManualClock::at_epoch();
    let mut wheel = Wheel::with_mock_actuators(config, Box::new(clock.clone()))?;

    println!(
        "Wheel: radius {:.2}m, base height {:.2}m, {} cabins, {:.1}s per revolution",
        wheel.radius(),
        wheel.base_height(),
        wheel.cabin_count(),
        wheel.seconds_per_revolution()
    );
    let base = wheel.frame().base_geo();
    println!(
        "Base at {:.6}, {:.6} ({:.1}m); hub at {:.1}m; actuation policy {:?}",
        base.latitude,
        base.longitude,
        base.altitude,
        wheel.frame().origin_altitude(),
        wheel.config().actuation_policy
    );
    print_cabins(&wheel);

    // Simulate a quarter revolution
    let quarter = wheel.seconds_per_revolution() / 4.0;
    wheel.start()?;
    for _ in 0..STEPS {
        clock.advance_secs(quarter / STEPS as f64);
        wheel.sync()?;
        println!(
            "t={:>7.2}s  traveled {:>8.3}m  cabin 0 at {}",
            wheel.elapsed_seconds(),
            wheel.distance_traveled(),
            wheel.find_cabin(0).map(|c| c.location()).unwrap_or_default()
        );
    }
    wheel.stop()?;

    println!("State: {}", wheel.state());
    print_cabins(&wheel);

    if wheel.cabin_count() > 1 {
        println!("Distance cabin 0 -> 1: {:.3}m", wheel.distance_between(0, 1)?);
    }
    println!(
        "Distance from a point 20m away at base level to cabin 0: {:.3}m",
        wheel.distance_to_point(0, 20.0, None)?
    );
    match wheel.time_for_distance(100.0) {
        Ok(seconds) => println!("Time to travel 100m: {:.3}s", seconds),
        Err(e) => println!("Time to travel 100m: {}", e),
    }

    Ok(())
}

fn print_cabins(wheel: &Wheel) {
    for cabin in wheel.cabins() {
        println!(
            "  cabin {:>3}  angle {:>8.4} rad  at {}  altitude {:.2}m",
            cabin.id(),
            cabin.angle(),
            cabin.location(),
            wheel.cabin_altitude(cabin.id()).unwrap_or(f64::NAN)
        );
    }
}
