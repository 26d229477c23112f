//! Button module for loklift-encoder.

mod debounced;
mod state;

pub use debounced::DebouncedButton;
pub use state::ButtonState;
