//! # loklift-encoder
//!
//! Rotary encoder and push-button input for the LokLift positioning rig, on
//! embedded-hal 1.0.
//!
//! ## Features
//!
//! - **Quadrature decoding**: Gray-code step detection, configurable steps per notch
//! - **Acceleration**: Fast turns count over-proportionally
//! - **Button gestures**: Click, double-click, held, long-press-repeat and release
//! - **Tick driven**: All timing derives from a fixed-rate `service()` call, nominally 1 ms
//! - **Interrupt sharing**: `critical-section` based slot for timer-ISR/main-loop use
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use loklift_encoder::{ActiveLevel, ClickEncoder, ButtonState};
//!
//! // Configure the inputs with ActiveLevel::Low.pull() (internal pull-up)
//! let mut knob = ClickEncoder::builder()
//!     .pin_a(pin_a)
//!     .pin_b(pin_b)
//!     .button_pin(button)
//!     .steps_per_notch(4)
//!     .acceleration_enabled(true)
//!     .double_click_enabled(true)
//!     .build()?;
//!
//! // Every millisecond, from a timer:
//! knob.service()?;
//!
//! // From the main loop:
//! let turned = knob.get_increment();
//! if knob.get_button() == ButtonState::Clicked {
//!     // ...
//! }
//! ```
//!
//! ## Known limitation
//!
//! When sampling misses a Gray-code state the direction cannot be recovered;
//! such a jump is always counted as -2.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging and `defmt::Format` on public types

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::result_large_err)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// Must come first so the logging macros are visible in the modules below
mod fmt;

// Core modules
pub mod button;
pub mod config;
pub mod device;
pub mod encoder;
pub mod error;
pub mod pin;

// Re-exports for ergonomic API
pub use button::{ButtonState, DebouncedButton};
pub use config::{validate_config, ButtonConfig, ClickEncoderConfig, EncoderConfig, Ticks};
pub use device::{ClickEncoder, ClickEncoderBuilder, SharedClickEncoder};
pub use encoder::QuadratureDecoder;
pub use error::{ConfigError, Error, InputError, Result};
pub use pin::{ActiveLevel, Pull};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
