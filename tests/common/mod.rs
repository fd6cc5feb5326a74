//! Shared test infrastructure for rgb-fader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use palette::Srgb;
use rgb_fader::{RgbLed, WeekClock, WeekTime};
use std::rc::Rc;

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock clock with controllable time-of-week
pub struct MockClock {
    now: Cell<WeekTime>,
}

impl MockClock {
    pub fn new(day: u8, hour: u8, minute: u8) -> Self {
        Self {
            now: Cell::new(WeekTime::new(day, hour, minute).unwrap()),
        }
    }

    pub fn set(&self, day: u8, hour: u8, minute: u8) {
        self.now.set(WeekTime::new(day, hour, minute).unwrap());
    }
}

impl WeekClock for MockClock {
    fn now(&self) -> WeekTime {
        self.now.get()
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Handle to the colors a MockLed has been asked to display
pub type WriteLog = Rc<RefCell<heapless::Vec<Srgb, 128>>>;

/// Mock LED that records every color write
///
/// The LED is moved into the controller, so `new` also returns a shared
/// handle to the write log for inspection from the test.
pub struct MockLed {
    writes: WriteLog,
}

impl MockLed {
    pub fn new() -> (Self, WriteLog) {
        let log: WriteLog = Rc::new(RefCell::new(heapless::Vec::new()));
        (
            Self {
                writes: log.clone(),
            },
            log,
        )
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Srgb) {
        let _ = self.writes.borrow_mut().push(color);
    }
}

// ============================================================================
// Color helpers
// ============================================================================

pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);

pub fn colors_within(a: Srgb, b: Srgb, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}

pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    colors_within(a, b, 0.001)
}
