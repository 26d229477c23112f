//! Debounced push-button with click, double-click, hold and repeat detection.
//!
//! The pin is only looked at once per debounce interval; contact chatter
//! shorter than that never reaches the state machine. All thresholds are
//! counted in samples, i.e. in debounce intervals.

use embedded_hal::digital::InputPin;

use crate::config::{validate_button, ButtonConfig, SampleThresholds};
use crate::error::{ConfigError, Result};
use crate::pin::{read_level, ActiveLevel};

use super::state::ButtonState;

/// Push-button gesture decoder.
///
/// Call [`service`](Self::service) once per tick and read gestures with
/// [`get_button`](Self::get_button). Reports are not queued: each gesture must
/// be read before the next one replaces it.
pub struct DebouncedButton<P>
where
    P: InputPin,
{
    /// Button input.
    pin: P,

    /// Level meaning "pressed".
    active_level: ActiveLevel,

    /// Timing in samples.
    thresholds: SampleThresholds,

    double_click_enabled: bool,
    long_press_repeat_enabled: bool,

    /// Current state, cleared by `get_button`.
    state: ButtonState,

    /// Consecutive samples the button has been down.
    key_down_samples: u16,

    /// Samples left in the double-click window (0 = closed).
    double_click_samples: u16,

    /// Ticks since the pin was last sampled.
    ticks_since_sample: u16,
}

impl<P> DebouncedButton<P>
where
    P: InputPin,
{
    /// Create a button over an already-configured input.
    ///
    /// # Errors
    ///
    /// Returns an error if the debounce interval is zero or the hold time is
    /// shorter than one debounce interval.
    pub fn new(pin: P, active_level: ActiveLevel, config: &ButtonConfig) -> Result<Self> {
        validate_button(config)?;
        let thresholds = config
            .sample_thresholds()
            .ok_or(ConfigError::InvalidDebounceInterval(0))?;

        Ok(Self {
            pin,
            active_level,
            thresholds,
            double_click_enabled: config.double_click_enabled,
            long_press_repeat_enabled: config.long_press_repeat_enabled,
            state: ButtonState::Open,
            key_down_samples: 0,
            double_click_samples: 0,
            // First call samples immediately
            ticks_since_sample: thresholds.debounce_interval,
        })
    }

    /// Count one tick; sample the pin when a debounce interval has passed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::PinError`](crate::InputError::PinError) if the pin
    /// cannot be read. The sample is retried on the next tick.
    pub fn service(&mut self) -> Result<()> {
        self.ticks_since_sample = self.ticks_since_sample.saturating_add(1);
        if self.ticks_since_sample < self.thresholds.debounce_interval {
            return Ok(());
        }

        let level = read_level(&mut self.pin)?;
        self.ticks_since_sample = 0;
        self.sample(self.active_level.is_active(level));
        Ok(())
    }

    fn sample(&mut self, pressed: bool) {
        let previous = self.state;

        if pressed {
            self.on_pressed();
        } else {
            self.on_released();
        }

        if self.double_click_samples > 0 {
            self.double_click_samples -= 1;
        }

        if self.state != previous {
            trace!("button: {} -> {}", previous, self.state);
        }
    }

    fn on_pressed(&mut self) {
        self.key_down_samples = self.key_down_samples.saturating_add(1);

        self.state = if self.key_down_samples < self.thresholds.hold {
            ButtonState::Closed
        } else if self.long_press_repeat_enabled
            && self.key_down_samples > self.thresholds.long_press_repeat
        {
            ButtonState::LongPressRepeat
        } else {
            ButtonState::Held
        };
    }

    fn on_released(&mut self) {
        self.key_down_samples = 0;

        match self.state {
            ButtonState::Held | ButtonState::LongPressRepeat => {
                self.state = ButtonState::Released;
            }
            ButtonState::Closed => {
                self.state = ButtonState::Clicked;
                if !self.double_click_enabled {
                    return;
                }

                if self.double_click_samples == 0 {
                    // Wait for another click
                    self.double_click_samples = self.thresholds.double_click;
                } else {
                    self.state = ButtonState::DoubleClicked;
                    self.double_click_samples = 0;
                }
            }
            _ => {}
        }
    }

    /// Read the current state and clear one-shot reports.
    ///
    /// Everything except `Closed` reads back as `Open` afterwards. Reading
    /// `LongPressRepeat` rewinds the hold counter so the next repeat fires one
    /// repeat interval later.
    pub fn get_button(&mut self) -> ButtonState {
        let result = self.state;
        if result == ButtonState::LongPressRepeat {
            self.key_down_samples = self.thresholds.hold;
        }

        if result != ButtonState::Closed {
            self.state = ButtonState::Open;
        }

        result
    }

    /// Enable or disable double-click detection.
    ///
    /// A window opened before disabling keeps counting down and still pairs
    /// with a click made after re-enabling.
    #[inline]
    pub fn set_double_click_enabled(&mut self, enabled: bool) {
        self.double_click_enabled = enabled;
    }

    /// Enable or disable long-press-repeat.
    ///
    /// When enabled, `LongPressRepeat` overlays `Held`: a continued hold
    /// reports `Held` only until the first repeat fires.
    #[inline]
    pub fn set_long_press_repeat_enabled(&mut self, enabled: bool) {
        self.long_press_repeat_enabled = enabled;
    }

    /// Whether double-click detection is enabled.
    #[inline]
    pub fn double_click_enabled(&self) -> bool {
        self.double_click_enabled
    }

    /// Whether long-press-repeat is enabled.
    #[inline]
    pub fn long_press_repeat_enabled(&self) -> bool {
        self.long_press_repeat_enabled
    }

    /// Polarity of the input.
    #[inline]
    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Give back the input pin.
    pub fn release(self) -> P {
        self.pin
    }
}
