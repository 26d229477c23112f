//! Device module for loklift-encoder.
//!
//! Combines the decoder and the button behind one `service()` entry point.

mod builder;
mod driver;
mod shared;

pub use builder::ClickEncoderBuilder;
pub use driver::ClickEncoder;
pub use shared::SharedClickEncoder;
