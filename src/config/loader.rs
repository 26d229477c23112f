//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::ClickEncoderConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use loklift_encoder::load_config;
///
/// let config = load_config("encoder.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClickEncoderConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(e.to_string().as_str());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Missing tables and keys fall back to the defaults.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<ClickEncoderConfig> {
    let config: ClickEncoderConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

// Keep as much of the message as fits instead of dropping it entirely.
fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Ticks;
    use crate::pin::ActiveLevel;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ClickEncoderConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
active_level = "high"

[encoder]
steps_per_notch = 2
acceleration_enabled = true
acceleration_start_ticks = 200
acceleration_slope_ticks = 50

[button]
debounce_interval_ticks = 10
hold_time_ticks = 1000
double_click_time_ticks = 300
long_press_repeat_interval_ticks = 100
double_click_enabled = true
long_press_repeat_enabled = true
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.active_level, ActiveLevel::High);
        assert_eq!(config.encoder.steps_per_notch, 2);
        assert!(config.encoder.acceleration_enabled);
        assert_eq!(config.encoder.acceleration_start, Ticks(200));
        assert_eq!(config.encoder.acceleration_slope, Ticks(50));
        assert_eq!(config.button.debounce_interval, Ticks(10));
        assert_eq!(config.button.hold_time, Ticks(1000));
        assert_eq!(config.button.double_click_time, Ticks(300));
        assert_eq!(config.button.long_press_repeat_interval, Ticks(100));
        assert!(config.button.double_click_enabled);
        assert!(config.button.long_press_repeat_enabled);
    }

    #[test]
    fn test_parse_rejects_zero_steps() {
        let toml = r#"
[encoder]
steps_per_notch = 0
"#;
        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidStepsPerNotch(0)))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            parse_config("active_level = \"sideways\""),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_truncated_keeps_prefix() {
        let long = "x".repeat(300);
        assert_eq!(truncated(&long).len(), 128);
    }
}
