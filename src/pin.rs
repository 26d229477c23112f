//! Input pin polarity and sampling helpers.

use embedded_hal::digital::InputPin;
use serde::Deserialize;

use crate::error::InputError;

/// Electrical level at which a contact counts as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum ActiveLevel {
    /// Contact pulls the line to ground (the usual wiring).
    #[default]
    Low,
    /// Contact drives the line high.
    High,
}

/// Pull resistor configuration an input needs for a given polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Enable the internal pull-up.
    Up,
    /// Plain floating input; the board provides the bias.
    None,
}

impl ActiveLevel {
    /// Pull configuration to apply when creating the HAL input.
    ///
    /// Active-low contacts idle high through the pull-up; active-high contacts
    /// are expected to be biased externally.
    #[inline]
    pub const fn pull(self) -> Pull {
        match self {
            ActiveLevel::Low => Pull::Up,
            ActiveLevel::High => Pull::None,
        }
    }

    /// Whether a raw electrical level means "pressed".
    #[inline]
    pub const fn is_active(self, level_high: bool) -> bool {
        match self {
            ActiveLevel::Low => !level_high,
            ActiveLevel::High => level_high,
        }
    }
}

/// Sample a pin, collapsing the HAL's error type.
#[inline]
pub(crate) fn read_level<P: InputPin>(pin: &mut P) -> Result<bool, InputError> {
    pin.is_high().map_err(|_| InputError::PinError)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Level-settable pin for driving the state machines tick by tick.

    use core::cell::Cell;
    use std::rc::Rc;

    use embedded_hal::digital::{ErrorType, InputPin};

    #[derive(Clone, Default)]
    pub(crate) struct LevelPin {
        level: Rc<Cell<bool>>,
        reads: Rc<Cell<u32>>,
    }

    impl LevelPin {
        pub(crate) fn new(high: bool) -> Self {
            let pin = Self::default();
            pin.set(high);
            pin
        }

        pub(crate) fn set(&self, high: bool) {
            self.level.set(high);
        }

        pub(crate) fn reads(&self) -> u32 {
            self.reads.get()
        }
    }

    impl ErrorType for LevelPin {
        type Error = core::convert::Infallible;
    }

    impl InputPin for LevelPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.level.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }
}
