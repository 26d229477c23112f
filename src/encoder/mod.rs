//! Encoder module for loklift-encoder.
//!
//! Decodes the A/B quadrature channels into notch counts with optional
//! acceleration.

mod acceleration;
mod decoder;
pub mod quadrature;

pub use decoder::QuadratureDecoder;
