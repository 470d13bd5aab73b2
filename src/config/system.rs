//! Board configuration - root configuration structure.

use serde::Deserialize;

use super::display::DisplayConfig;
use super::inputs::InputConfig;
use super::outputs::OutputConfig;
use super::timing::TimingConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document describes the reference
/// board (active-low switches, 16x2 display, free-running loop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Input polarities.
    #[serde(default)]
    pub inputs: InputConfig,

    /// Coil output options.
    #[serde(default)]
    pub outputs: OutputConfig,

    /// Display geometry.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Main-loop pacing.
    #[serde(default)]
    pub timing: TimingConfig,
}
