//! Push-button configuration.

use serde::Deserialize;

use super::units::Ticks;

/// Ticks between two button samples; also the debounce time.
pub const DEFAULT_DEBOUNCE_INTERVAL: Ticks = Ticks(20);

/// Ticks a press must last to be reported as held.
pub const DEFAULT_HOLD_TIME: Ticks = Ticks(1200);

/// Ticks within which a second click counts as a double click.
pub const DEFAULT_DOUBLE_CLICK_TIME: Ticks = Ticks(400);

/// Ticks between two long-press-repeat reports.
pub const DEFAULT_LONG_PRESS_REPEAT_INTERVAL: Ticks = Ticks(200);

/// Debounced button configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Minimum ticks between two samples of the pin (>= 1).
    #[serde(rename = "debounce_interval_ticks")]
    pub debounce_interval: Ticks,

    /// Press duration reported as `Held` (>= one debounce interval).
    #[serde(rename = "hold_time_ticks")]
    pub hold_time: Ticks,

    /// Window for a second click.
    #[serde(rename = "double_click_time_ticks")]
    pub double_click_time: Ticks,

    /// Period of `LongPressRepeat` reports once held.
    #[serde(rename = "long_press_repeat_interval_ticks")]
    pub long_press_repeat_interval: Ticks,

    /// Report `DoubleClicked` for two quick clicks.
    pub double_click_enabled: bool,

    /// Report `LongPressRepeat` instead of `Held` during a long press.
    pub long_press_repeat_enabled: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            hold_time: DEFAULT_HOLD_TIME,
            double_click_time: DEFAULT_DOUBLE_CLICK_TIME,
            long_press_repeat_interval: DEFAULT_LONG_PRESS_REPEAT_INTERVAL,
            double_click_enabled: false,
            long_press_repeat_enabled: false,
        }
    }
}

/// Button thresholds converted from ticks into sample counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SampleThresholds {
    pub(crate) debounce_interval: u16,
    pub(crate) hold: u16,
    pub(crate) long_press_repeat: u16,
    pub(crate) double_click: u16,
}

impl ButtonConfig {
    /// Convert tick thresholds into per-sample counts.
    ///
    /// `None` when the debounce interval is zero.
    pub(crate) fn sample_thresholds(&self) -> Option<SampleThresholds> {
        let interval = self.debounce_interval;
        Some(SampleThresholds {
            debounce_interval: interval.value(),
            hold: self.hold_time.intervals_of(interval)?,
            long_press_repeat: (self.hold_time + self.long_press_repeat_interval)
                .intervals_of(interval)?,
            double_click: self.double_click_time.intervals_of(interval)?,
        })
    }
}
