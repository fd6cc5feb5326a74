//! Command-based control for the controller.

use crate::alarm::AlarmSchedule;
use crate::types::LightMode;
use palette::Srgb;

/// Actions a transport can apply to a [`Controller`](crate::controller::Controller).
///
/// Lets an ingress handler (HTTP endpoint, message queue) drive the
/// controller without matching on operations itself. Every action is total;
/// dispatching cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerAction {
    /// Set the commanded target color.
    SetColor(Srgb),
    /// Switch the light mode.
    SetMode(LightMode),
    /// Replace the alarm schedule.
    SetSchedule(AlarmSchedule),
    /// Rearm the alarm.
    Rearm,
}
