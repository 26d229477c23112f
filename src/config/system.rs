//! Root configuration for an encoder with push-button.

use serde::Deserialize;

use crate::pin::ActiveLevel;

use super::button::ButtonConfig;
use super::encoder::EncoderConfig;

/// Complete configuration for a [`ClickEncoder`](crate::ClickEncoder).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ClickEncoderConfig {
    /// Polarity shared by the A, B and button contacts.
    pub active_level: ActiveLevel,

    /// Quadrature decoder settings.
    pub encoder: EncoderConfig,

    /// Push-button settings.
    pub button: ButtonConfig,
}

impl ClickEncoderConfig {
    /// Default configuration with every optional feature switched on.
    pub fn full_featured() -> Self {
        let mut config = Self::default();
        config.encoder.acceleration_enabled = true;
        config.button.double_click_enabled = true;
        config.button.long_press_repeat_enabled = true;
        config
    }
}
