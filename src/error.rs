//! Unified error types for the widget.

use std::fmt;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Errors arising from widget input validation.
#[derive(Debug)]
pub enum ValidationError {
    /// A theme color was not a six-digit hex string.
    InvalidColor {
        channel: &'static str,
        value: String,
    },
    /// The theme name was empty or not usable as a class name.
    InvalidThemeName(String),
    /// The cursor blink interval must be non-zero.
    ZeroBlinkInterval,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { channel, value } => {
                write!(f, "invalid {channel} color: {value:?}")
            }
            Self::InvalidThemeName(name) => write!(f, "invalid theme name: {name:?}"),
            Self::ZeroBlinkInterval => write!(f, "cursor blink interval must be non-zero"),
        }
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// AlreadyPrompting
// ---------------------------------------------------------------------------

/// Returned when a line read is requested while another is still
/// outstanding. The widget answers one read at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyPrompting;

impl fmt::Display for AlreadyPrompting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a line read is already outstanding")
    }
}

impl std::error::Error for AlreadyPrompting {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(ValidationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<ValidationError> for ConfigError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

// ---------------------------------------------------------------------------
// TerminalError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the demo binary.
#[derive(Debug)]
pub enum TerminalError {
    Config(ConfigError),
    Validation(ValidationError),
    Prompting(AlreadyPrompting),
    Io(std::io::Error),
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Prompting(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for TerminalError {}

impl From<ConfigError> for TerminalError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ValidationError> for TerminalError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<AlreadyPrompting> for TerminalError {
    fn from(e: AlreadyPrompting) -> Self {
        Self::Prompting(e)
    }
}

impl From<std::io::Error> for TerminalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
