use chrono::{DateTime, FixedOffset, TimeZone, Timelike};

/// Wall-clock time broken into fractional dial units.
///
/// Every unit folds in everything below it down to milliseconds, so hands
/// sweep smoothly instead of jumping: at 03:30:00 `hours` is `3.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Fractional hours in `[0, 24)`.
    pub hours: f64,
    /// Fractional minutes in `[0, 60)`.
    pub minutes: f64,
    /// Fractional seconds in `[0, 60)`.
    pub seconds: f64,
    /// The instant the sample was taken from.
    pub timestamp: DateTime<FixedOffset>,
}

impl TimeSample {
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        let timestamp = dt.fixed_offset();
        // Leap seconds report nanoseconds past 1e9; keep them inside the second.
        let millis = (timestamp.nanosecond() / 1_000_000).min(999);

        let seconds = timestamp.second() as f64 + millis as f64 / 1000.0;
        let minutes = timestamp.minute() as f64 + seconds / 60.0;
        let hours = timestamp.hour() as f64 + minutes / 60.0;

        Self { hours, minutes, seconds, timestamp }
    }

    /// `HH:MM:SS` from the whole hour, minute and second, zero-padded.
    pub fn digital(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.timestamp.hour(),
            self.timestamp.minute(),
            self.timestamp.second().min(59)
        )
    }

    /// Full human-readable timestamp, e.g. `Thu Jan 01 2015 09:05:03 GMT+0000`.
    pub fn title(&self) -> String {
        self.timestamp.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
    }
}
