//! Shared test fixtures: level-settable pins and drivers for knob and button.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use loklift_encoder::{
    ActiveLevel, ButtonConfig, ButtonState, DebouncedButton, EncoderConfig, QuadratureDecoder,
};

/// Input pin whose level is set from the test, like a wire on a bench supply.
#[derive(Clone, Default)]
pub struct SharedPin {
    level: Rc<Cell<bool>>,
}

impl SharedPin {
    pub fn new(high: bool) -> Self {
        let pin = Self::default();
        pin.set(high);
        pin
    }

    pub fn set(&self, high: bool) {
        self.level.set(high);
    }
}

impl ErrorType for SharedPin {
    type Error = core::convert::Infallible;
}

impl InputPin for SharedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

/// Pin whose every read fails.
pub struct BrokenPin;

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = PinFault;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// Pin levels (A, B) for a Gray code position.
pub fn levels(code: u8) -> (bool, bool) {
    match code & 3 {
        0 => (false, false),
        1 => (false, true),
        2 => (true, true),
        _ => (true, false),
    }
}

/// A rotary encoder on the bench: set the shaft position, tick the decoder.
pub struct Knob {
    a: SharedPin,
    b: SharedPin,
    code: u8,
    pub decoder: QuadratureDecoder<SharedPin, SharedPin>,
}

impl Knob {
    pub fn new(config: &EncoderConfig) -> Self {
        let a = SharedPin::new(false);
        let b = SharedPin::new(false);
        let decoder = QuadratureDecoder::new(a.clone(), b.clone(), config).unwrap();
        Self {
            a,
            b,
            code: 0,
            decoder,
        }
    }

    /// Decoder with `steps` per notch and acceleration as given.
    pub fn with(steps: u8, acceleration: bool) -> Self {
        let mut config = EncoderConfig::with_steps_per_notch(steps);
        config.acceleration_enabled = acceleration;
        Self::new(&config)
    }

    /// Move the shaft to `code` and run one tick.
    pub fn goto(&mut self, code: u8) {
        self.code = code & 3;
        let (a, b) = levels(self.code);
        self.a.set(a);
        self.b.set(b);
        self.decoder.service().unwrap();
    }

    /// One sub-step clockwise (+1) or counter-clockwise (-1), one tick.
    pub fn step(&mut self, direction: i8) {
        let next = if direction >= 0 {
            self.code.wrapping_add(1)
        } else {
            self.code.wrapping_sub(1)
        };
        self.goto(next);
    }

    /// Tick without moving.
    pub fn idle(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.decoder.service().unwrap();
        }
    }
}

/// A push-button on the bench, active low.
pub struct Finger {
    pin: SharedPin,
    pub button: DebouncedButton<SharedPin>,
}

impl Finger {
    pub fn new(config: &ButtonConfig) -> Self {
        Self::with_level(config, ActiveLevel::Low)
    }

    pub fn with_level(config: &ButtonConfig, level: ActiveLevel) -> Self {
        let pin = SharedPin::new(level == ActiveLevel::Low);
        let button = DebouncedButton::new(pin.clone(), level, config).unwrap();
        Self { pin, button }
    }

    /// Default timing with both gesture features on.
    pub fn full_featured() -> Self {
        let config = ButtonConfig {
            double_click_enabled: true,
            long_press_repeat_enabled: true,
            ..ButtonConfig::default()
        };
        Self::new(&config)
    }

    pub fn press(&self) {
        let active_high = self.button.active_level() == ActiveLevel::High;
        self.pin.set(active_high);
    }

    pub fn lift(&self) {
        let active_high = self.button.active_level() == ActiveLevel::High;
        self.pin.set(!active_high);
    }

    pub fn wait(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.button.service().unwrap();
        }
    }

    pub fn read(&mut self) -> ButtonState {
        self.button.get_button()
    }
}
