//! Error types for loklift-encoder.
//!
//! Configuration problems are caught when a component is constructed. Once
//! built, the only runtime failure is a HAL pin read error.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all loklift-encoder operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin sampling error
    Input(InputError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Steps per notch must be at least 1
    InvalidStepsPerNotch(u8),
    /// Acceleration slope must be at least 1 tick
    InvalidAccelerationSlope(u16),
    /// Button debounce interval must be at least 1 tick
    InvalidDebounceInterval(u16),
    /// Hold time shorter than one debounce interval
    InvalidHoldTime {
        /// Configured hold time in ticks
        hold: u16,
        /// Configured debounce interval in ticks
        debounce: u16,
    },
    /// A required pin was not handed to the builder
    MissingPin(&'static str),
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pin sampling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Reading an input pin failed
    PinError,
    /// Shared encoder accessed before one was installed
    NotInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Input(e) => write!(f, "Input error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStepsPerNotch(v) => {
                write!(f, "Invalid steps per notch: {}. Must be >= 1", v)
            }
            ConfigError::InvalidAccelerationSlope(v) => {
                write!(f, "Invalid acceleration slope: {} ticks. Must be >= 1", v)
            }
            ConfigError::InvalidDebounceInterval(v) => {
                write!(f, "Invalid debounce interval: {} ticks. Must be >= 1", v)
            }
            ConfigError::InvalidHoldTime { hold, debounce } => {
                write!(
                    f,
                    "Invalid hold time: {} ticks is shorter than the debounce interval ({} ticks)",
                    hold, debounce
                )
            }
            ConfigError::MissingPin(name) => write!(f, "{} is required", name),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::PinError => write!(f, "GPIO pin read failed"),
            InputError::NotInitialized => write!(f, "Shared encoder not initialized"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nests_messages() {
        let err = Error::from(ConfigError::InvalidStepsPerNotch(0));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid steps per notch: 0. Must be >= 1"
        );

        let err = Error::from(InputError::PinError);
        assert_eq!(err.to_string(), "Input error: GPIO pin read failed");
    }
}
