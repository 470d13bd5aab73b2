//! Input sampling.
//!
//! The core consumes already-sampled levels; [`InputSampler`] is the seam to
//! whatever reads them. [`PinInputs`] samples embedded-hal input pins.

mod pins;

pub use pins::{NoPin, PinInputs};

use crate::config::InputConfig;
use crate::error::Result;

/// Raw levels of every input for one control cycle (`true` = high).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSample {
    /// Resolution mode switch.
    pub mode: bool,
    /// Direction-right switch.
    pub dir_right: bool,
    /// Direction-left switch.
    pub dir_left: bool,
    /// Jog button.
    pub jog: bool,
    /// Half-turn-right switch.
    pub half_turn_right: bool,
    /// Half-turn-left switch.
    pub half_turn_left: bool,
}

impl InputSample {
    /// Every input at its unasserted level.
    ///
    /// The mode switch reads as half step.
    pub const fn idle(inputs: &InputConfig) -> Self {
        Self {
            mode: inputs.full_step.idle_level(),
            dir_right: inputs.direction.idle_level(),
            dir_left: inputs.direction.idle_level(),
            jog: inputs.jog.idle_level(),
            half_turn_right: inputs.half_turn.idle_level(),
            half_turn_left: inputs.half_turn.idle_level(),
        }
    }
}

/// Source of one [`InputSample`] per control cycle.
pub trait InputSampler {
    /// Read every input once.
    ///
    /// # Errors
    ///
    /// Returns an error if an input could not be read.
    fn sample(&mut self) -> Result<InputSample>;
}

impl<T: InputSampler + ?Sized> InputSampler for &mut T {
    fn sample(&mut self) -> Result<InputSample> {
        (**self).sample()
    }
}
