//! Configuration module for loklift-encoder.
//!
//! Provides typed decoder and button settings with the reference tuning as
//! defaults, validation, and loading from TOML files (with `std` feature).

mod button;
mod encoder;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use button::{
    ButtonConfig, DEFAULT_DEBOUNCE_INTERVAL, DEFAULT_DOUBLE_CLICK_TIME, DEFAULT_HOLD_TIME,
    DEFAULT_LONG_PRESS_REPEAT_INTERVAL,
};
pub(crate) use button::SampleThresholds;
pub use encoder::{
    EncoderConfig, DEFAULT_ACCELERATION_SLOPE, DEFAULT_ACCELERATION_START,
    DEFAULT_STEPS_PER_NOTCH,
};
pub use system::ClickEncoderConfig;
pub use validation::{validate_button, validate_config, validate_encoder};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::Ticks;
