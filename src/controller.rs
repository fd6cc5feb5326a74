//! Tick-driven controller arbitrating manual commands and alarm overrides.
//!
//! Provides [`Controller`] which composes a [`ColorInterpolator`] and an
//! [`AlarmScheduler`], resolves the effective fade target each tick, and
//! pushes the result to the LED hardware. Also defines the [`RgbLed`] trait
//! for hardware abstraction.

use crate::COLOR_OFF;
use crate::alarm::{AlarmPoll, AlarmSchedule, AlarmScheduler, AlarmState, DEFAULT_CONVERGENCE_EPSILON};
use crate::command::ControllerAction;
use crate::interpolator::{ColorInterpolator, color_within};
use crate::time::WeekTime;
use crate::types::LightMode;
use palette::Srgb;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED output (GPIO PWM, SPI strip, a simulator) to
/// let the controller drive it.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Channel values are nominally 0.0-1.0 but arrive unclamped and possibly
    /// fractional; clamp into your hardware's representable range here, at
    /// the point of the physical write. Handle any hardware errors
    /// internally - this method cannot fail.
    fn set_color(&mut self, color: Srgb);
}

/// Fade endpoints for heat-pulse mode, nominal 0.0-1.0 range.
const HEAT_PULSE_BRIGHT: Srgb = Srgb::new(1.0, 0.07, 0.0);
const HEAT_PULSE_DIM: Srgb = Srgb::new(0.25, 0.01, 0.0);

/// Drives a single RGB light toward commanded colors, one tick at a time.
///
/// Each [`tick`](Controller::tick) resolves the effective fade target - the
/// alarm's override color takes precedence over the last manual command while
/// the alarm is firing - advances the interpolator exactly once, and writes
/// the resulting color to the LED. A command issued while the alarm is firing
/// is recorded and re-applied exactly once when the alarm resolves, so it is
/// not silently lost.
///
/// Construct one controller at process start and pass it by reference into
/// the tick loop and the command ingress; there is no hidden global state.
/// The controller is not internally synchronized: if the host lets
/// [`command_color`](Controller::command_color) and `tick` run on different
/// threads, wrap the controller in a mutex. All operations are O(1) and
/// non-blocking; the host loop owns tick pacing.
pub struct Controller<L: RgbLed> {
    led: L,
    interpolator: ColorInterpolator,
    alarm: AlarmScheduler,
    commanded: Srgb,
    mode: LightMode,
    pulse_rising: bool,
}

impl<L: RgbLed> Controller<L> {
    /// Creates a controller in `ColorSet` mode with the LED turned off.
    pub fn new(mut led: L, interpolator: ColorInterpolator, alarm: AlarmScheduler) -> Self {
        led.set_color(COLOR_OFF);

        Self {
            led,
            interpolator,
            alarm,
            commanded: COLOR_OFF,
            mode: LightMode::ColorSet,
            pulse_rising: true,
        }
    }

    /// Records a manual color command.
    ///
    /// The command becomes the fade target immediately unless the alarm is
    /// firing, in which case it is held back and applied when the alarm
    /// resolves.
    pub fn command_color(&mut self, color: Srgb) {
        self.commanded = color;
        if self.alarm.state() != AlarmState::Firing {
            self.interpolator.set_target(color);
        }
    }

    /// Runs one control cycle and returns the color for the output sink.
    ///
    /// Call once per tick at a fixed period. Evaluates the alarm against
    /// `now`, resolves the effective target, advances the fade exactly once,
    /// and writes the result to the LED. The returned color equals what was
    /// written.
    pub fn tick(&mut self, now: WeekTime) -> Srgb {
        match self.alarm.evaluate(now, self.interpolator.current_color()) {
            AlarmPoll::Override(color) => self.interpolator.set_target(color),
            AlarmPoll::Resolved => self.interpolator.set_target(self.commanded),
            AlarmPoll::Idle => {
                if self.mode == LightMode::HeatPulse {
                    self.advance_pulse();
                }
            }
        }

        self.interpolator.step();
        let color = self.interpolator.current_color();
        self.led.set_color(color);
        color
    }

    /// Switches the output behavior mode.
    ///
    /// Entering `ColorSet` restores the commanded color as the fade target
    /// (unless the alarm is firing); entering `HeatPulse` starts the pulse on
    /// its rising edge.
    pub fn set_mode(&mut self, mode: LightMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;

        match mode {
            LightMode::ColorSet => {
                if self.alarm.state() != AlarmState::Firing {
                    self.interpolator.set_target(self.commanded);
                }
            }
            LightMode::HeatPulse => {
                self.pulse_rising = true;
            }
        }
    }

    /// Applies a transport-level action by dispatching to the matching method.
    pub fn handle_action(&mut self, action: ControllerAction) {
        match action {
            ControllerAction::SetColor(color) => self.command_color(color),
            ControllerAction::SetMode(mode) => self.set_mode(mode),
            ControllerAction::SetSchedule(schedule) => self.set_schedule(schedule),
            ControllerAction::Rearm => self.rearm(),
        }
    }

    /// Rearms the alarm. Idempotent.
    pub fn rearm(&mut self) {
        self.alarm.rearm();
    }

    /// Replaces the alarm schedule wholesale.
    pub fn set_schedule(&mut self, schedule: AlarmSchedule) {
        self.alarm.set_schedule(schedule);
    }

    /// The last manually commanded color, for persistence collaborators.
    pub fn commanded_color(&self) -> Srgb {
        self.commanded
    }

    /// The color currently on the light.
    pub fn current_color(&self) -> Srgb {
        self.interpolator.current_color()
    }

    /// The color the light is currently fading toward.
    pub fn target_color(&self) -> Srgb {
        self.interpolator.target()
    }

    /// The current output behavior mode.
    pub fn mode(&self) -> LightMode {
        self.mode
    }

    /// The alarm scheduler's current state.
    pub fn alarm_state(&self) -> AlarmState {
        self.alarm.state()
    }

    // Fade between the two ember endpoints, flipping whenever the light has
    // effectively reached the one it was heading for.
    fn advance_pulse(&mut self) {
        let endpoint = if self.pulse_rising {
            HEAT_PULSE_BRIGHT
        } else {
            HEAT_PULSE_DIM
        };

        if color_within(
            self.interpolator.current_color(),
            endpoint,
            DEFAULT_CONVERGENCE_EPSILON,
        ) {
            self.pulse_rising = !self.pulse_rising;
        }

        let endpoint = if self.pulse_rising {
            HEAT_PULSE_BRIGHT
        } else {
            HEAT_PULSE_DIM
        };
        self.interpolator.set_target(endpoint);
    }
}
