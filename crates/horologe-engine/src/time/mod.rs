//! Time subsystem.
//!
//! Provides wall-clock sampling decoupled from the system clock:
//! - a `WallClock` seam (`SystemClock` for real use, `FixedClock` for tests and stills)
//! - `TimeSample`, the fractional hour/minute/second breakdown a dial is drawn from

mod clock;
mod sample;

pub use clock::{FixedClock, SystemClock, WallClock};
pub use sample::TimeSample;
