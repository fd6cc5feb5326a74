//! Shared mode and configuration error types.

/// Output behavior mode for the controller.
///
/// Replaces the free-form string flags of typical sketch firmware with a
/// closed set of states, so invalid modes are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightMode {
    /// Fade toward the commanded target color and hold it.
    ColorSet,

    /// Pulse between a bright and a dim ember red.
    HeatPulse,
}

impl Default for LightMode {
    fn default() -> Self {
        LightMode::ColorSet
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Interpolation gain outside the (0, 1] range.
    GainOutOfRange,

    /// Day-of-week outside 0-6.
    DayOutOfRange(u8),

    /// Hour outside 0-23.
    HourOutOfRange(u8),

    /// Minute outside 0-59.
    MinuteOutOfRange(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::GainOutOfRange => {
                write!(f, "interpolation gain must be within (0, 1]")
            }
            ConfigError::DayOutOfRange(day) => {
                write!(f, "day-of-week {} out of range (expected 0-6)", day)
            }
            ConfigError::HourOutOfRange(hour) => {
                write!(f, "hour {} out of range (expected 0-23)", hour)
            }
            ConfigError::MinuteOutOfRange(minute) => {
                write!(f, "minute {} out of range (expected 0-59)", minute)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
