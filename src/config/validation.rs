//! Configuration validation.

use crate::error::{ConfigError, Result};

use super::{ButtonConfig, ClickEncoderConfig, EncoderConfig};

/// Validate a complete encoder-with-button configuration.
///
/// Checks:
/// - Steps per notch is at least 1
/// - Acceleration slope is at least 1 tick
/// - Debounce interval is at least 1 tick
/// - Hold time spans at least one debounce interval
pub fn validate_config(config: &ClickEncoderConfig) -> Result<()> {
    validate_encoder(&config.encoder)?;
    validate_button(&config.button)?;
    Ok(())
}

/// Validate decoder settings.
pub fn validate_encoder(config: &EncoderConfig) -> Result<()> {
    // Divisor of every notch computation
    if config.steps_per_notch == 0 {
        return Err(ConfigError::InvalidStepsPerNotch(config.steps_per_notch).into());
    }

    if config.acceleration_slope.value() == 0 {
        return Err(
            ConfigError::InvalidAccelerationSlope(config.acceleration_slope.value()).into(),
        );
    }

    Ok(())
}

/// Validate button settings.
pub fn validate_button(config: &ButtonConfig) -> Result<()> {
    let debounce = config.debounce_interval.value();
    if debounce == 0 {
        return Err(ConfigError::InvalidDebounceInterval(debounce).into());
    }

    // A zero-sample hold threshold would report every press as held
    if config.hold_time.value() < debounce {
        return Err(ConfigError::InvalidHoldTime {
            hold: config.hold_time.value(),
            debounce,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Ticks;
    use crate::error::Error;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClickEncoderConfig::default()).is_ok());
        assert!(validate_config(&ClickEncoderConfig::full_featured()).is_ok());
    }

    #[test]
    fn test_zero_steps_per_notch() {
        let config = EncoderConfig::with_steps_per_notch(0);
        assert!(matches!(
            validate_encoder(&config),
            Err(Error::Config(ConfigError::InvalidStepsPerNotch(0)))
        ));
    }

    #[test]
    fn test_zero_acceleration_slope() {
        let config = EncoderConfig {
            acceleration_slope: Ticks(0),
            ..EncoderConfig::default()
        };
        assert!(matches!(
            validate_encoder(&config),
            Err(Error::Config(ConfigError::InvalidAccelerationSlope(0)))
        ));
    }

    #[test]
    fn test_hold_shorter_than_debounce() {
        let config = ButtonConfig {
            debounce_interval: Ticks(20),
            hold_time: Ticks(10),
            ..ButtonConfig::default()
        };
        assert_eq!(
            validate_button(&config),
            Err(Error::Config(ConfigError::InvalidHoldTime {
                hold: 10,
                debounce: 20
            }))
        );
    }

    #[test]
    fn test_zero_debounce_interval() {
        let config = ButtonConfig {
            debounce_interval: Ticks(0),
            ..ButtonConfig::default()
        };
        assert!(matches!(
            validate_button(&config),
            Err(Error::Config(ConfigError::InvalidDebounceInterval(0)))
        ));
    }
}
