//! Quadrature decoder.
//!
//! Generic over embedded-hal 1.0 input pins.

use embedded_hal::digital::InputPin;

use crate::config::{validate_encoder, EncoderConfig};
use crate::error::Result;
use crate::pin::read_level;

use super::acceleration::Acceleration;
use super::quadrature::{gray_code, step_delta};

/// Rotary encoder decoder with optional acceleration.
///
/// Call [`service`](Self::service) once per tick (nominally 1 ms, usually from
/// a timer interrupt) and poll [`get_increment`](Self::get_increment) or
/// [`get_accumulate`](Self::get_accumulate) from the main loop.
///
/// Swapping A and B makes the encoder count backwards.
pub struct QuadratureDecoder<A, B>
where
    A: InputPin,
    B: InputPin,
{
    /// Channel A input.
    pin_a: A,

    /// Channel B input.
    pin_b: B,

    /// Raw sub-steps per notch.
    steps_per_notch: i16,

    /// Code sampled on the previous tick.
    last_code: u8,

    /// Raw sub-steps plus acceleration bonuses since start or reset.
    accumulator: i16,

    /// Notch count handed out by the last `get_increment`.
    last_reported: i16,

    /// Turn-speed bonus tracking.
    acceleration: Acceleration,
}

impl<A, B> QuadratureDecoder<A, B>
where
    A: InputPin,
    B: InputPin,
{
    /// Create a decoder over two already-configured inputs.
    ///
    /// The inputs should be set up with [`ActiveLevel::pull`](crate::ActiveLevel::pull).
    ///
    /// # Errors
    ///
    /// Returns an error if `steps_per_notch` or the acceleration slope is zero.
    pub fn new(pin_a: A, pin_b: B, config: &EncoderConfig) -> Result<Self> {
        validate_encoder(config)?;

        Ok(Self {
            pin_a,
            pin_b,
            steps_per_notch: i16::from(config.steps_per_notch),
            last_code: 0,
            accumulator: 0,
            last_reported: 0,
            acceleration: Acceleration::new(config),
        })
    }

    /// Sample both channels and advance the count.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::PinError`](crate::InputError::PinError) if a pin
    /// cannot be read; the decoder state is left untouched.
    pub fn service(&mut self) -> Result<()> {
        let a = read_level(&mut self.pin_a)?;
        let b = read_level(&mut self.pin_b)?;
        self.advance(gray_code(a, b));
        Ok(())
    }

    fn advance(&mut self, code: u8) {
        let movement = step_delta(self.last_code, code);
        self.last_code = code;

        self.accumulator = self.accumulator.wrapping_add(i16::from(movement));
        let on_notch = self.accumulator % self.steps_per_notch == 0;
        let bonus = self.acceleration.tick(movement, on_notch);
        self.accumulator = self.accumulator.wrapping_add(bonus);
    }

    /// Notches turned since the previous call.
    ///
    /// This is a consuming read: a second call without an intervening
    /// `service()` returns 0.
    pub fn get_increment(&mut self) -> i16 {
        let notches = self.get_accumulate();
        let increment = notches.wrapping_sub(self.last_reported);
        self.last_reported = notches;
        increment
    }

    /// Notches turned since start or the last [`reset`](Self::reset).
    ///
    /// Partial notches truncate toward zero.
    #[inline]
    pub fn get_accumulate(&self) -> i16 {
        self.accumulator / self.steps_per_notch
    }

    /// Zero the notch count.
    ///
    /// Pin state, acceleration enablement and the last sampled code are kept.
    pub fn reset(&mut self) {
        self.accumulator = 0;
        self.last_reported = 0;
        self.acceleration.rest();
    }

    /// Enable or disable acceleration from the next tick on.
    #[inline]
    pub fn set_acceleration_enabled(&mut self, enabled: bool) {
        self.acceleration.set_enabled(enabled);
    }

    /// Whether acceleration is enabled.
    #[inline]
    pub fn acceleration_enabled(&self) -> bool {
        self.acceleration.enabled()
    }

    /// Raw sub-steps per notch.
    #[inline]
    pub fn steps_per_notch(&self) -> u8 {
        self.steps_per_notch as u8
    }

    /// Give back the input pins.
    pub fn release(self) -> (A, B) {
        (self.pin_a, self.pin_b)
    }
}
