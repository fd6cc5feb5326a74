//! Weekly alarm scheduling with an edge-triggered color override.
//!
//! Provides [`AlarmScheduler`], a three-state machine that watches a weekly
//! trigger time and, once fired, holds an override color until the light has
//! faded onto it, then disarms itself. Rearming is an external operation.

use crate::interpolator::color_within;
use crate::time::WeekTime;
use crate::types::ConfigError;
use palette::Srgb;

/// Default channel tolerance for deciding the light has reached the override
/// color.
///
/// One 8-bit output step in the nominal 0.0-1.0 channel range. The fade
/// toward the override color is asymptotic and would never hit it exactly, so
/// the scheduler disarms once every channel is within this distance. Hosts
/// that run 0-255-scaled channel values should widen it with
/// [`AlarmScheduler::with_epsilon`].
pub const DEFAULT_CONVERGENCE_EPSILON: f32 = 1.0 / 255.0;

/// A weekly alarm trigger: day-of-week, hour, minute, and the color to force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlarmSchedule {
    day: u8,
    hour: u8,
    minute: u8,
    color: Srgb,
}

impl AlarmSchedule {
    /// Creates a validated alarm schedule.
    ///
    /// # Errors
    /// * `DayOutOfRange` - day not in 0-6 (0 = Sunday)
    /// * `HourOutOfRange` - hour not in 0-23
    /// * `MinuteOutOfRange` - minute not in 0-59
    pub fn new(day: u8, hour: u8, minute: u8, color: Srgb) -> Result<Self, ConfigError> {
        // Reuse the time-of-week range checks; the trigger fields share them.
        let trigger = WeekTime::new(day, hour, minute)?;

        Ok(Self {
            day: trigger.day(),
            hour: trigger.hour(),
            minute: trigger.minute(),
            color,
        })
    }

    /// Trigger day-of-week (0-6, 0 = Sunday).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Trigger hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Trigger minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The color forced onto the light while the alarm is firing.
    pub fn color(&self) -> Srgb {
        self.color
    }

    fn matches(&self, now: WeekTime) -> bool {
        now.day() == self.day && now.hour() == self.hour && now.minute() == self.minute
    }
}

/// The current state of an alarm scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// Watching for the trigger time.
    Armed,
    /// Trigger matched; the override color is being forced until the light
    /// converges onto it.
    Firing,
    /// Override complete. Stays here until externally rearmed.
    Disarmed,
}

/// Result of one per-tick alarm evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlarmPoll {
    /// No override active; the commanded target stands.
    Idle,

    /// The alarm is firing. Force this color as the fade target, overriding
    /// any manual command.
    Override(Srgb),

    /// The light converged onto the override color this tick and the alarm
    /// disarmed. Returned exactly once per firing; the controller re-applies
    /// the commanded target on it.
    Resolved,
}

/// Watches a weekly trigger and drives the override lifecycle.
///
/// State machine: `Armed --trigger match--> Firing --converged--> Disarmed`,
/// with [`rearm`](AlarmScheduler::rearm) as the only way back to `Armed`.
/// No other transitions exist.
///
/// The trigger check runs every tick and the match window is a full minute,
/// so the Armed state transitions to Firing immediately on first detection;
/// once in Firing the Armed check no longer runs and the alarm cannot
/// re-trigger within the same minute.
#[derive(Debug, Clone)]
pub struct AlarmScheduler {
    schedule: AlarmSchedule,
    state: AlarmState,
    epsilon: f32,
}

impl AlarmScheduler {
    /// Creates an armed scheduler with the default convergence tolerance.
    pub fn new(schedule: AlarmSchedule) -> Self {
        Self {
            schedule,
            state: AlarmState::Armed,
            epsilon: DEFAULT_CONVERGENCE_EPSILON,
        }
    }

    /// Sets the convergence tolerance. Must be positive; a zero or negative
    /// value would keep a firing alarm from ever disarming.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Evaluates the alarm for one tick.
    ///
    /// `now` is the current time-of-week reading and `current` the light's
    /// current color (used for the convergence check while firing).
    pub fn evaluate(&mut self, now: WeekTime, current: Srgb) -> AlarmPoll {
        match self.state {
            AlarmState::Armed => {
                if self.schedule.matches(now) {
                    // The transition must land before returning so the match
                    // cannot fire again on later ticks within the minute.
                    self.state = AlarmState::Firing;
                    AlarmPoll::Override(self.schedule.color)
                } else {
                    AlarmPoll::Idle
                }
            }
            AlarmState::Firing => {
                if color_within(current, self.schedule.color, self.epsilon) {
                    self.state = AlarmState::Disarmed;
                    AlarmPoll::Resolved
                } else {
                    AlarmPoll::Override(self.schedule.color)
                }
            }
            AlarmState::Disarmed => AlarmPoll::Idle,
        }
    }

    /// Forces the scheduler back to `Armed` from any state. Idempotent.
    pub fn rearm(&mut self) {
        self.state = AlarmState::Armed;
    }

    /// Replaces the schedule wholesale, leaving the state untouched.
    ///
    /// Intended to be called between ticks by whatever owns the alarm
    /// configuration (a settings store, a scheduling UI).
    pub fn set_schedule(&mut self, schedule: AlarmSchedule) {
        self.schedule = schedule;
    }

    /// Returns the current state.
    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Returns the active schedule.
    pub fn schedule(&self) -> AlarmSchedule {
        self.schedule
    }
}
