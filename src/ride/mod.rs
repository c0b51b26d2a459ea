//! Ride model: cabins, the wheel that owns them, and its time source

pub mod cabin;
pub mod clock;
pub mod wheel;

pub use cabin::Cabin;
pub use clock::{Clock, ManualClock, SystemClock};
pub use wheel::Wheel;
