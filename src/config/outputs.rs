//! Coil output configuration.

use serde::Deserialize;

/// H-bridge output configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputConfig {
    /// Drive IN1..IN4 inverted (energized coil input written low).
    #[serde(default)]
    pub invert_coils: bool,
}
