//! Sharing a ClickEncoder between a timer interrupt and the main loop.
//!
//! Every access runs inside one `critical_section::with`. This is the only
//! synchronization point in the crate: it keeps the `LongPressRepeat` rearm in
//! `get_button` atomic with respect to `service()`.

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::digital::InputPin;

use crate::button::ButtonState;
use crate::error::{Error, InputError, Result};

use super::driver::ClickEncoder;

/// Interrupt-safe slot for a [`ClickEncoder`].
///
/// ```rust,ignore
/// static ENCODER: SharedClickEncoder<PinA, PinB, PinBtn> = SharedClickEncoder::new();
///
/// #[interrupt]
/// fn TIM2() {
///     let _ = ENCODER.service();
/// }
///
/// // main loop
/// let turned = ENCODER.get_increment()?;
/// ```
pub struct SharedClickEncoder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    inner: Mutex<RefCell<Option<ClickEncoder<A, B, BTN>>>>,
}

impl<A, B, BTN> Default for SharedClickEncoder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B, BTN> SharedClickEncoder<A, B, BTN>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
{
    /// Create an empty slot, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Put an encoder in the slot, returning the previous one.
    pub fn install(&self, encoder: ClickEncoder<A, B, BTN>) -> Option<ClickEncoder<A, B, BTN>> {
        critical_section::with(|cs| self.inner.replace(cs, Some(encoder)))
    }

    /// Remove the encoder from the slot.
    pub fn take(&self) -> Option<ClickEncoder<A, B, BTN>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Whether an encoder is installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` on the installed encoder inside a critical section.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotInitialized`] if nothing is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut ClickEncoder<A, B, BTN>) -> R) -> Result<R> {
        critical_section::with(|cs| {
            match self.inner.borrow_ref_mut(cs).as_mut() {
                Some(encoder) => Ok(f(encoder)),
                None => Err(Error::Input(InputError::NotInitialized)),
            }
        })
    }

    /// Service the encoder. Call from the timer interrupt.
    pub fn service(&self) -> Result<()> {
        self.with(|encoder| encoder.service())?
    }

    /// Notches turned since the previous call.
    pub fn get_increment(&self) -> Result<i16> {
        self.with(|encoder| encoder.get_increment())
    }

    /// Notches turned since start or the last reset.
    pub fn get_accumulate(&self) -> Result<i16> {
        self.with(|encoder| encoder.get_accumulate())
    }

    /// Read and clear the button state.
    pub fn get_button(&self) -> Result<ButtonState> {
        self.with(|encoder| encoder.get_button())
    }

    /// Zero the notch count.
    pub fn reset(&self) -> Result<()> {
        self.with(|encoder| encoder.reset())
    }

    /// Enable or disable acceleration.
    pub fn set_acceleration_enabled(&self, enabled: bool) -> Result<()> {
        self.with(|encoder| encoder.set_acceleration_enabled(enabled))
    }

    /// Enable or disable double-click detection.
    pub fn set_double_click_enabled(&self, enabled: bool) -> Result<()> {
        self.with(|encoder| encoder.set_double_click_enabled(enabled))
    }

    /// Enable or disable long-press-repeat.
    pub fn set_long_press_repeat_enabled(&self, enabled: bool) -> Result<()> {
        self.with(|encoder| encoder.set_long_press_repeat_enabled(enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClickEncoderConfig;
    use crate::pin::testing::LevelPin;

    type Shared = SharedClickEncoder<LevelPin, LevelPin, LevelPin>;

    #[test]
    fn test_empty_slot_reports_not_initialized() {
        let shared = Shared::new();
        assert!(!shared.is_installed());
        assert_eq!(
            shared.service(),
            Err(Error::Input(InputError::NotInitialized))
        );
        assert_eq!(
            shared.get_button(),
            Err(Error::Input(InputError::NotInitialized))
        );
    }

    #[test]
    fn test_forwards_to_installed_encoder() {
        let a = LevelPin::new(false);
        let b = LevelPin::new(false);
        let btn = LevelPin::new(true);
        let mut config = ClickEncoderConfig::default();
        config.encoder.steps_per_notch = 1;
        let encoder = ClickEncoder::new(a.clone(), b.clone(), btn.clone(), &config).unwrap();

        let shared = Shared::new();
        assert!(shared.install(encoder).is_none());

        b.set(true);
        shared.service().unwrap();
        assert_eq!(shared.get_increment(), Ok(1));
        assert_eq!(shared.get_accumulate(), Ok(1));

        btn.set(false);
        for _ in 0..20 {
            shared.service().unwrap();
        }
        assert_eq!(shared.get_button(), Ok(ButtonState::Closed));

        shared.reset().unwrap();
        assert_eq!(shared.get_accumulate(), Ok(0));

        assert!(shared.take().is_some());
        assert!(!shared.is_installed());
    }
}
