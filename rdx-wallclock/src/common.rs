//! Contains the shared constants and the error type for the wallclock crate.
//!
//! The clock itself never fails; `ClockError` is only produced by the
//! validating constructors and by parsing `HH:MM` text.

use thiserror::Error;

/// Exclusive upper bound of the minute field.
pub const MINUTES_PER_HOUR: u8 = 60;

/// Exclusive upper bound of the hour field.
pub const HOURS_PER_DAY: u8 = 24;

/// Length of the day as a flattened minute counter.
pub const MINUTES_PER_DAY: u16 = MINUTES_PER_HOUR as u16 * HOURS_PER_DAY as u16;

/// Errors raised when building a `Clock` from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("hour {0} is out of range (expected 0-23)")]
    HourOutOfRange(u8),

    #[error("minute {0} is out of range (expected 0-59)")]
    MinuteOutOfRange(u8),

    #[error("'{0}' is not a time in HH:MM form")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_length_is_1440_minutes() {
        assert_eq!(MINUTES_PER_DAY, 1440);
    }

    #[test]
    fn errors_render_the_offending_value() {
        assert_eq!(
            ClockError::MinuteOutOfRange(75).to_string(),
            "minute 75 is out of range (expected 0-59)"
        );
        assert_eq!(
            ClockError::Parse("7:5".into()).to_string(),
            "'7:5' is not a time in HH:MM form"
        );
    }
}
