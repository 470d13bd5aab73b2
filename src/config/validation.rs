//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::display::{MAX_COLUMNS, MIN_COLUMNS};
use super::timing::Pacing;
use super::BoardConfig;

/// Validate a board configuration.
///
/// Checks:
/// - The display is wide enough for the fixed status messages
/// - The display is no wider than an HD44780 row
/// - The display has exactly two rows
/// - Tick pacing has a non-zero tick rate
pub fn validate_config(config: &BoardConfig) -> Result<()> {
    if config.display.columns < MIN_COLUMNS {
        return Err(Error::Config(ConfigError::DisplayTooNarrow {
            columns: config.display.columns,
            minimum: MIN_COLUMNS,
        }));
    }

    if config.display.columns > MAX_COLUMNS {
        return Err(Error::Config(ConfigError::DisplayTooWide {
            columns: config.display.columns,
            maximum: MAX_COLUMNS,
        }));
    }

    if config.display.rows != 2 {
        return Err(Error::Config(ConfigError::InvalidDisplayRows(
            config.display.rows,
        )));
    }

    if config.timing.pacing == Pacing::Tick && config.timing.tick_hz == 0 {
        return Err(Error::Config(ConfigError::InvalidTickRate(
            config.timing.tick_hz,
        )));
    }

    Ok(())
}
