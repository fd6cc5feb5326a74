//! Geometric color interpolation toward a target.

use crate::COLOR_OFF;
use crate::types::ConfigError;
use palette::{Mix, Srgb};

/// Drives a current color toward a target color, one fraction per step.
///
/// Each call to [`step`](ColorInterpolator::step) closes `gain` of the
/// remaining distance per channel, so the color approaches the target
/// geometrically: fast at first, slowing as it nears. The current color never
/// overshoots and there is no snap-to-target threshold; convergence is
/// asymptotic.
///
/// Channel values are never clamped here. Transient out-of-range values are
/// allowed so the interpolation math stays exact; the output sink clamps at
/// the point of the physical write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorInterpolator {
    current: Srgb,
    target: Srgb,
    gain: f32,
}

impl ColorInterpolator {
    /// Creates an interpolator at rest on black.
    ///
    /// The gain composes multiplicatively with the host's tick rate: the same
    /// gain fades twice as fast at twice the tick frequency.
    ///
    /// # Errors
    /// * `GainOutOfRange` - gain not within (0, 1]
    pub fn new(gain: f32) -> Result<Self, ConfigError> {
        if !(gain > 0.0 && gain <= 1.0) {
            return Err(ConfigError::GainOutOfRange);
        }

        Ok(Self {
            current: COLOR_OFF,
            target: COLOR_OFF,
            gain,
        })
    }

    /// Advances the current color one step toward the target.
    ///
    /// Call exactly once per tick; calling more or less often changes the
    /// effective fade speed.
    pub fn step(&mut self) {
        self.current = self.current.mix(self.target, self.gain);
    }

    /// Replaces the target color unconditionally.
    ///
    /// Takes effect from the next [`step`](ColorInterpolator::step). No range
    /// validation is performed; see the type-level note on clamping.
    pub fn set_target(&mut self, color: Srgb) {
        self.target = color;
    }

    /// Returns the current color.
    pub fn current_color(&self) -> Srgb {
        self.current
    }

    /// Returns the target color.
    pub fn target(&self) -> Srgb {
        self.target
    }

    /// Returns the interpolation gain.
    pub fn gain(&self) -> f32 {
        self.gain
    }
}

/// Returns true if every channel of `a` is within `epsilon` of `b`.
pub(crate) fn color_within(a: Srgb, b: Srgb, epsilon: f32) -> bool {
    channel_within(a.red, b.red, epsilon)
        && channel_within(a.green, b.green, epsilon)
        && channel_within(a.blue, b.blue, epsilon)
}

// Written without f32::abs so it builds on no_std without libm.
fn channel_within(a: f32, b: f32, epsilon: f32) -> bool {
    let diff = if a > b { a - b } else { b - a };
    diff <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_gain() {
        assert_eq!(
            ColorInterpolator::new(0.0),
            Err(ConfigError::GainOutOfRange)
        );
        assert_eq!(
            ColorInterpolator::new(-0.5),
            Err(ConfigError::GainOutOfRange)
        );
        assert_eq!(
            ColorInterpolator::new(1.5),
            Err(ConfigError::GainOutOfRange)
        );
        assert_eq!(
            ColorInterpolator::new(f32::NAN),
            Err(ConfigError::GainOutOfRange)
        );
        assert!(ColorInterpolator::new(1.0).is_ok());
    }

    #[test]
    fn starts_at_rest_on_black() {
        let interpolator = ColorInterpolator::new(0.3).unwrap();
        assert_eq!(interpolator.current_color(), COLOR_OFF);
        assert_eq!(interpolator.target(), COLOR_OFF);
    }

    #[test]
    fn set_target_takes_effect_on_next_step_only() {
        let mut interpolator = ColorInterpolator::new(0.5).unwrap();
        interpolator.set_target(Srgb::new(1.0, 1.0, 1.0));

        // Setting the target alone must not move the current color.
        assert_eq!(interpolator.current_color(), COLOR_OFF);

        interpolator.step();
        assert!(interpolator.current_color().red > 0.0);
    }

    #[test]
    fn gain_of_one_reaches_target_in_one_step() {
        let mut interpolator = ColorInterpolator::new(1.0).unwrap();
        interpolator.set_target(Srgb::new(0.2, 0.4, 0.6));
        interpolator.step();
        assert_eq!(interpolator.current_color(), Srgb::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn color_within_checks_all_channels() {
        let a = Srgb::new(0.5, 0.5, 0.5);
        assert!(color_within(a, Srgb::new(0.5, 0.5, 0.5), 0.0));
        assert!(color_within(a, Srgb::new(0.509, 0.491, 0.5), 0.01));
        assert!(!color_within(a, Srgb::new(0.5, 0.5, 0.52), 0.01));
    }
}
