//! Rotary encoder with push-button.
//!
//! Generic over embedded-hal 1.0 input pin types.

use embedded_hal::digital::InputPin;

use crate::button::{ButtonState, DebouncedButton};
use crate::config::ClickEncoderConfig;
use crate::encoder::QuadratureDecoder;
use crate::error::Result;

use super::builder::ClickEncoderBuilder;

/// Encoder knob with integrated push-button.
///
/// Owns one [`QuadratureDecoder`] and one [`DebouncedButton`]. Call
/// [`service`](Self::service) from a 1 ms timer and poll the getters from the
/// main loop. To share it between an interrupt handler and the main loop, put
/// it in a [`SharedClickEncoder`](super::SharedClickEncoder).
///
/// Generic over:
/// - `A`, `B`: quadrature channel inputs
/// - `BTN`: push-button input
pub struct ClickEncoder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    encoder: QuadratureDecoder<A, B>,
    button: DebouncedButton<BTN>,
}

impl<A, B, BTN> ClickEncoder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    /// Create a click encoder from pins and a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(pin_a: A, pin_b: B, button_pin: BTN, config: &ClickEncoderConfig) -> Result<Self> {
        let encoder = QuadratureDecoder::new(pin_a, pin_b, &config.encoder)?;
        let button = DebouncedButton::new(button_pin, config.active_level, &config.button)?;

        debug!(
            "click encoder: {} steps/notch, accel {}, double-click {}, repeat {}",
            config.encoder.steps_per_notch,
            config.encoder.acceleration_enabled,
            config.button.double_click_enabled,
            config.button.long_press_repeat_enabled
        );

        Ok(Self::from_parts(encoder, button))
    }

    /// Combine an existing decoder and button.
    pub fn from_parts(encoder: QuadratureDecoder<A, B>, button: DebouncedButton<BTN>) -> Self {
        Self { encoder, button }
    }

    /// Create a builder.
    pub fn builder() -> ClickEncoderBuilder<A, B, BTN> {
        ClickEncoderBuilder::new()
    }

    /// Service the decoder, then the button. Call once per tick.
    ///
    /// Both are serviced even if the decoder fails to read its pins.
    ///
    /// # Errors
    ///
    /// Returns the first pin error encountered.
    pub fn service(&mut self) -> Result<()> {
        let encoder = self.encoder.service();
        let button = self.button.service();
        encoder.and(button)
    }

    /// Notches turned since the previous call.
    #[inline]
    pub fn get_increment(&mut self) -> i16 {
        self.encoder.get_increment()
    }

    /// Notches turned since start or the last reset.
    #[inline]
    pub fn get_accumulate(&self) -> i16 {
        self.encoder.get_accumulate()
    }

    /// Read and clear the button state.
    #[inline]
    pub fn get_button(&mut self) -> ButtonState {
        self.button.get_button()
    }

    /// Zero the notch count.
    #[inline]
    pub fn reset(&mut self) {
        self.encoder.reset();
    }

    /// Count over-proportionally when turned fast.
    #[inline]
    pub fn set_acceleration_enabled(&mut self, enabled: bool) {
        self.encoder.set_acceleration_enabled(enabled);
    }

    /// Enable or disable double-click detection.
    #[inline]
    pub fn set_double_click_enabled(&mut self, enabled: bool) {
        self.button.set_double_click_enabled(enabled);
    }

    /// Enable or disable long-press-repeat. Overlays `Held` when on.
    #[inline]
    pub fn set_long_press_repeat_enabled(&mut self, enabled: bool) {
        self.button.set_long_press_repeat_enabled(enabled);
    }

    /// The quadrature decoder.
    #[inline]
    pub fn encoder(&self) -> &QuadratureDecoder<A, B> {
        &self.encoder
    }

    /// The push-button.
    #[inline]
    pub fn button(&self) -> &DebouncedButton<BTN> {
        &self.button
    }

    /// Give back all three input pins.
    pub fn release(self) -> (A, B, BTN) {
        let (a, b) = self.encoder.release();
        (a, b, self.button.release())
    }
}
