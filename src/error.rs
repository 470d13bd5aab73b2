//! Error types for stepper-jog.
//!
//! The jog core (sequencer, edge detector, decoder) is total and never fails.
//! Errors only come from configuration and from the hardware collaborators
//! around it: input pins, coil pins and the character display.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-jog operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Hardware collaborator error
    Io(IoError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A builder was finished without a required part
    MissingField(&'static str),
    /// Display is narrower than the fixed status messages
    DisplayTooNarrow {
        /// Configured column count
        columns: u8,
        /// Minimum column count
        minimum: u8,
    },
    /// Display is wider than the controller can address
    DisplayTooWide {
        /// Configured column count
        columns: u8,
        /// Maximum column count
        maximum: u8,
    },
    /// Display does not have exactly two rows
    InvalidDisplayRows(u8),
    /// Tick pacing selected with a zero tick rate
    InvalidTickRate(u16),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware collaborator errors.
///
/// The embedded-hal error types of the underlying pins are erased; only the
/// failing collaborator is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Reading an input switch or the jog button failed
    InputPin,
    /// Writing one of the H-bridge inputs IN1..IN4 failed
    CoilPin,
    /// Driving a character display line failed
    DisplayPin,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::DisplayTooNarrow { columns, minimum } => {
                write!(f, "Display has {} columns, at least {} are needed", columns, minimum)
            }
            ConfigError::DisplayTooWide { columns, maximum } => {
                write!(f, "Display has {} columns, at most {} are addressable", columns, maximum)
            }
            ConfigError::InvalidDisplayRows(rows) => {
                write!(f, "Display has {} rows, exactly 2 are needed", rows)
            }
            ConfigError::InvalidTickRate(hz) => {
                write!(f, "Invalid tick rate: {} Hz. Must be > 0", hz)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::InputPin => write!(f, "input pin read failed"),
            IoError::CoilPin => write!(f, "coil output pin write failed"),
            IoError::DisplayPin => write!(f, "display pin write failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for IoError {}
