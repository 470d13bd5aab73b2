//! Character display configuration.

use serde::Deserialize;

/// Widest fixed status message, in columns.
pub const MIN_COLUMNS: u8 = 16;

/// Widest row an HD44780 controller can address.
pub const MAX_COLUMNS: u8 = 40;

/// Character display geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Visible columns per row.
    #[serde(default = "default_columns")]
    pub columns: u8,

    /// Visible rows.
    #[serde(default = "default_rows")]
    pub rows: u8,
}

fn default_columns() -> u8 {
    16
}

fn default_rows() -> u8 {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
        }
    }
}
