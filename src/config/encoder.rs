//! Rotary encoder configuration.

use serde::Deserialize;

use super::units::Ticks;

/// Raw quadrature sub-steps per mechanical detent on most encoders.
pub const DEFAULT_STEPS_PER_NOTCH: u8 = 4;

/// Idle ticks after which a notch no longer earns an acceleration bonus.
///
/// The smaller this value, the quicker the knob must be turned to accelerate.
pub const DEFAULT_ACCELERATION_START: Ticks = Ticks(150);

/// Ticks per unit of acceleration bonus.
///
/// The smaller this value, the stronger fast turns are amplified.
pub const DEFAULT_ACCELERATION_SLOPE: Ticks = Ticks(75);

/// Quadrature decoder configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Raw sub-steps per reported notch (>= 1).
    pub steps_per_notch: u8,

    /// Amplify fast turns.
    pub acceleration_enabled: bool,

    /// Idle window below which consecutive notches are accelerated.
    #[serde(rename = "acceleration_start_ticks")]
    pub acceleration_start: Ticks,

    /// Divisor turning idle ticks into bonus units (>= 1).
    #[serde(rename = "acceleration_slope_ticks")]
    pub acceleration_slope: Ticks,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            steps_per_notch: DEFAULT_STEPS_PER_NOTCH,
            acceleration_enabled: false,
            acceleration_start: DEFAULT_ACCELERATION_START,
            acceleration_slope: DEFAULT_ACCELERATION_SLOPE,
        }
    }
}

impl EncoderConfig {
    /// Default configuration with a different detent resolution.
    pub fn with_steps_per_notch(steps_per_notch: u8) -> Self {
        Self {
            steps_per_notch,
            ..Self::default()
        }
    }
}
