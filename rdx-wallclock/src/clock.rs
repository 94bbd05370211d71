//! The `Clock` entity: an hour/minute pair that advances one minute at a time.
//!
//! Advancing rolls the minute over into the hour at 60 and wraps the hour
//! back to midnight at 24. There is no date and no timezone.

use crate::common::{ClockError, HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use chrono::{NaiveTime, Timelike};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A 24-hour wall clock with minute resolution.
///
/// `Clock::new` stores its arguments verbatim, so a clock seeded with an
/// out-of-range value keeps it until the next rollover brings it back into
/// range. Use [`Clock::try_new`] to reject such values or [`Clock::wrapping`]
/// to normalize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct Clock {
    hour: u8,
    minute: u8,
}

impl Clock {
    /// Creates a clock at `hour:minute` without any range checks.
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Creates a clock, rejecting an hour above 23 or a minute above 59.
    pub fn try_new(hour: u8, minute: u8) -> Result<Self, ClockError> {
        if hour >= HOURS_PER_DAY {
            return Err(ClockError::HourOutOfRange(hour));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(ClockError::MinuteOutOfRange(minute));
        }
        Ok(Self::new(hour, minute))
    }

    /// Creates a clock by folding any hour/minute pair onto a single day.
    ///
    /// Negative values count backwards from midnight, so `wrapping(-1, 15)`
    /// is `23:15` and `wrapping(0, -160)` is `21:20`.
    pub fn wrapping(hour: i64, minute: i64) -> Self {
        let day = i64::from(MINUTES_PER_DAY);
        let hours = hour.rem_euclid(i64::from(HOURS_PER_DAY)) * i64::from(MINUTES_PER_HOUR);
        let total = (hours + minute.rem_euclid(day)).rem_euclid(day);
        let per_hour = i64::from(MINUTES_PER_HOUR);
        // Both quotient and remainder are bounded by the day length.
        Self::new((total / per_hour) as u8, (total % per_hour) as u8)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Advances the clock by one minute.
    ///
    /// When the minute reaches 60 it resets to 0 and the hour increments;
    /// when the hour then reaches 24 it resets to 0.
    pub fn advance(&mut self) {
        self.minute = self.minute.saturating_add(1);
        if self.minute >= MINUTES_PER_HOUR {
            self.minute = 0;
            self.hour = self.hour.saturating_add(1);
            if self.hour >= HOURS_PER_DAY {
                self.hour = 0;
                trace!("Clock wrapped past midnight.");
            } else {
                trace!("Minute rolled over into hour {:02}.", self.hour);
            }
        }
    }

    /// Advances the clock by `minutes`, with the same result as calling
    /// [`Clock::advance`] that many times.
    ///
    /// Whole days are skipped once the clock is in range, so the cost is
    /// bounded regardless of `minutes`.
    pub fn advance_by(&mut self, minutes: usize) {
        let mut remaining = minutes;
        // An out-of-range seed is back in range within one rollover.
        while remaining > 0 && self.minute_of_day().is_none() {
            self.advance();
            remaining -= 1;
        }
        for _ in 0..remaining % usize::from(MINUTES_PER_DAY) {
            self.advance();
        }
    }

    /// Returns the state as `HH:MM`, both fields zero-padded to two digits.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Minutes elapsed since midnight, or `None` if either field is out of range.
    pub fn minute_of_day(&self) -> Option<u16> {
        if self.hour < HOURS_PER_DAY && self.minute < MINUTES_PER_HOUR {
            Some(u16::from(self.hour) * u16::from(MINUTES_PER_HOUR) + u16::from(self.minute))
        } else {
            None
        }
    }

    /// Converts to a `chrono::NaiveTime` with zero seconds.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Clock {
    type Err = ClockError;

    /// Parses strict `HH:MM` text, e.g. `"07:05"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || ClockError::Parse(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(parse_error)?;
        let is_field = |field: &str| field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit());
        if !is_field(hour) || !is_field(minute) {
            return Err(parse_error());
        }
        let hour = hour.parse::<u8>().map_err(|_| parse_error())?;
        let minute = minute.parse::<u8>().map_err(|_| parse_error())?;
        Self::try_new(hour, minute)
    }
}

impl From<NaiveTime> for Clock {
    fn from(time: NaiveTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60.
        Self::new(time.hour() as u8, time.minute() as u8)
    }
}
