//! Turn-speed acceleration.
//!
//! Each completed notch earns a bonus of `start / slope - idle / slope` extra
//! sub-steps, where `idle` is the number of ticks since the previous bonus
//! point (saturating at `start`). Slow turns earn nothing.

use crate::config::EncoderConfig;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Acceleration {
    start: u16,
    slope: u16,
    idle_ticks: u16,
    enabled: bool,
}

impl Acceleration {
    pub(crate) fn new(config: &EncoderConfig) -> Self {
        let start = config.acceleration_start.value();
        Self {
            start,
            slope: config.acceleration_slope.value(),
            // Saturated, so the first movement after idle earns no bonus
            idle_ticks: start,
            enabled: config.acceleration_enabled,
        }
    }

    #[inline]
    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Forget recent movement so the next notch counts as a cold start.
    #[inline]
    pub(crate) fn rest(&mut self) {
        self.idle_ticks = self.start;
    }

    /// Advance one tick and return the signed bonus for this tick's movement.
    ///
    /// `on_notch` is whether the accumulator sits exactly on a notch boundary
    /// after the raw movement was applied.
    pub(crate) fn tick(&mut self, movement: i8, on_notch: bool) -> i16 {
        if self.idle_ticks < self.start {
            self.idle_ticks += 1;
        }

        if movement == 0 || !self.enabled || !on_notch {
            return 0;
        }

        let bonus = i32::from(self.start / self.slope) - i32::from(self.idle_ticks / self.slope);
        self.idle_ticks = 0;

        let bonus = bonus.clamp(0, i32::from(i16::MAX)) as i16;
        if movement > 0 {
            bonus
        } else {
            -bonus
        }
    }
}
