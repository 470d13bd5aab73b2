//! Input polarity configuration.

use serde::Deserialize;

/// Electrical level at which an input counts as asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Asserted when the pin reads low (switch to ground with pull-up).
    #[default]
    ActiveLow,
    /// Asserted when the pin reads high.
    ActiveHigh,
}

impl Polarity {
    /// Whether a sampled level counts as asserted.
    #[inline]
    pub const fn is_asserted(self, level: bool) -> bool {
        match self {
            Polarity::ActiveLow => !level,
            Polarity::ActiveHigh => level,
        }
    }

    /// The level an idle (released) input reads.
    #[inline]
    pub const fn idle_level(self) -> bool {
        match self {
            Polarity::ActiveLow => true,
            Polarity::ActiveHigh => false,
        }
    }
}

/// Polarity of every sampled input.
///
/// The defaults match the reference board: direction switches, jog button
/// and half-turn switches pull to ground, and the mode switch selects full
/// step when high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Polarity of the two direction switches.
    #[serde(default)]
    pub direction: Polarity,

    /// Polarity of the jog button.
    #[serde(default)]
    pub jog: Polarity,

    /// Polarity of the two half-turn switches.
    #[serde(default)]
    pub half_turn: Polarity,

    /// Level at which the mode switch selects full step.
    #[serde(default = "default_full_step")]
    pub full_step: Polarity,
}

fn default_full_step() -> Polarity {
    Polarity::ActiveHigh
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            direction: Polarity::ActiveLow,
            jog: Polarity::ActiveLow,
            half_turn: Polarity::ActiveLow,
            full_step: Polarity::ActiveHigh,
        }
    }
}
