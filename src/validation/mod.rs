//! Error classification for wheel operations

pub mod error;

pub use error::{WheelError, WheelResult};
