//! Main-loop pacing configuration.

use serde::Deserialize;

/// How often the main cycle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pacing {
    /// One cycle per loop iteration.
    #[default]
    FreeRunning,
    /// One cycle per timer tick.
    Tick,
}

/// Main-loop timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Cycle pacing.
    #[serde(default)]
    pub pacing: Pacing,

    /// Timer tick rate in hertz, used with [`Pacing::Tick`].
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u16,
}

fn default_tick_hz() -> u16 {
    40
}

impl TimingConfig {
    /// Tick period in microseconds.
    ///
    /// Returns `None` for a zero tick rate.
    pub fn tick_period_us(&self) -> Option<u32> {
        if self.tick_hz == 0 {
            None
        } else {
            Some(1_000_000 / self.tick_hz as u32)
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            tick_hz: default_tick_hz(),
        }
    }
}
