use chrono::{DateTime, FixedOffset, Local};

use super::TimeSample;

/// Source of the current wall-clock time.
///
/// Implementations must be shareable across the timer task, hence the
/// `Send + Sync` bound.
pub trait WallClock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Samples the clock into dial units.
    fn sample(&self) -> TimeSample {
        TimeSample::from_datetime(&self.now())
    }
}

/// The host's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant. Useful for deterministic renders.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl WallClock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
