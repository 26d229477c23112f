//! Builder pattern for ClickEncoder.

use embedded_hal::digital::InputPin;

use crate::config::ClickEncoderConfig;
use crate::error::{ConfigError, Error, Result};
use crate::pin::ActiveLevel;

use super::driver::ClickEncoder;

/// Builder for creating ClickEncoder instances.
///
/// Starts from [`ClickEncoderConfig::default`].
pub struct ClickEncoderBuilder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    pin_a: Option<A>,
    pin_b: Option<B>,
    button_pin: Option<BTN>,
    config: ClickEncoderConfig,
}

impl<A, B, BTN> Default for ClickEncoderBuilder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B, BTN> ClickEncoderBuilder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pin_a: None,
            pin_b: None,
            button_pin: None,
            config: ClickEncoderConfig::default(),
        }
    }

    /// Set the channel A pin.
    pub fn pin_a(mut self, pin: A) -> Self {
        self.pin_a = Some(pin);
        self
    }

    /// Set the channel B pin.
    pub fn pin_b(mut self, pin: B) -> Self {
        self.pin_b = Some(pin);
        self
    }

    /// Set the push-button pin.
    pub fn button_pin(mut self, pin: BTN) -> Self {
        self.button_pin = Some(pin);
        self
    }

    /// Set the contact polarity.
    pub fn active_level(mut self, level: ActiveLevel) -> Self {
        self.config.active_level = level;
        self
    }

    /// Set raw sub-steps per notch.
    pub fn steps_per_notch(mut self, steps: u8) -> Self {
        self.config.encoder.steps_per_notch = steps;
        self
    }

    /// Enable acceleration from the start.
    pub fn acceleration_enabled(mut self, enabled: bool) -> Self {
        self.config.encoder.acceleration_enabled = enabled;
        self
    }

    /// Enable double-click detection from the start.
    pub fn double_click_enabled(mut self, enabled: bool) -> Self {
        self.config.button.double_click_enabled = enabled;
        self
    }

    /// Enable long-press-repeat from the start.
    pub fn long_press_repeat_enabled(mut self, enabled: bool) -> Self {
        self.config.button.long_press_repeat_enabled = enabled;
        self
    }

    /// Replace all settings with a loaded configuration.
    pub fn from_config(mut self, config: &ClickEncoderConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Build the ClickEncoder.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin is missing or the configuration is invalid.
    pub fn build(self) -> Result<ClickEncoder<A, B, BTN>> {
        let pin_a = self
            .pin_a
            .ok_or(Error::Config(ConfigError::MissingPin("pin_a")))?;

        let pin_b = self
            .pin_b
            .ok_or(Error::Config(ConfigError::MissingPin("pin_b")))?;

        let button_pin = self
            .button_pin
            .ok_or(Error::Config(ConfigError::MissingPin("button_pin")))?;

        ClickEncoder::new(pin_a, pin_b, button_pin, &self.config)
    }
}
