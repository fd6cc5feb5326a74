//! Time-of-week readings and the clock abstraction the controller consumes.

use crate::types::ConfigError;

/// A wall-clock reading at minute granularity: day-of-week, hour, minute.
///
/// Seconds are deliberately unrepresentable. The alarm trigger window is one
/// full minute and the scheduler edge-triggers within it, so finer resolution
/// would add nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeekTime {
    day: u8,
    hour: u8,
    minute: u8,
}

impl WeekTime {
    /// Creates a validated time-of-week reading.
    ///
    /// Day 0 is Sunday, matching common NTP client conventions.
    ///
    /// # Errors
    /// * `DayOutOfRange` - day not in 0-6
    /// * `HourOutOfRange` - hour not in 0-23
    /// * `MinuteOutOfRange` - minute not in 0-59
    pub fn new(day: u8, hour: u8, minute: u8) -> Result<Self, ConfigError> {
        if day > 6 {
            return Err(ConfigError::DayOutOfRange(day));
        }
        if hour > 23 {
            return Err(ConfigError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ConfigError::MinuteOutOfRange(minute));
        }

        Ok(Self { day, hour, minute })
    }

    /// Day-of-week (0-6, 0 = Sunday).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of day (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

/// Trait for supplying the current time-of-week.
///
/// Implement this over your NTP client, RTC, or host clock. The core never
/// fetches time itself; the host reads the clock once per tick and passes the
/// reading into [`Controller::tick`](crate::controller::Controller::tick).
pub trait WeekClock {
    /// Returns the current time-of-week reading.
    fn now(&self) -> WeekTime;
}
