//! Input sampling from embedded-hal pins.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};

use crate::config::InputConfig;
use crate::error::{IoError, Result};

use super::{InputSample, InputSampler};

/// Type placeholder for half-turn switches that are not wired.
///
/// [`PinInputs::new`] never reads it: unwired half-turn switches sample at
/// the idle level of the configured polarity. Read directly, it reports low.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl InputPin for NoPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Samples the jog switches from embedded-hal input pins.
///
/// Generic over:
/// - `MODE`: resolution mode switch
/// - `RIGHT`, `LEFT`: direction switches
/// - `JOG`: jog button
/// - `HTR`, `HTL`: optional half-turn switches (default [`NoPin`])
pub struct PinInputs<MODE, RIGHT, LEFT, JOG, HTR = NoPin, HTL = NoPin>
where
    MODE: InputPin,
    RIGHT: InputPin,
    LEFT: InputPin,
    JOG: InputPin,
    HTR: InputPin,
    HTL: InputPin,
{
    mode: MODE,
    right: RIGHT,
    left: LEFT,
    jog: JOG,
    half_turn: Option<(HTR, HTL)>,
    config: InputConfig,
}

impl<MODE, RIGHT, LEFT, JOG> PinInputs<MODE, RIGHT, LEFT, JOG>
where
    MODE: InputPin,
    RIGHT: InputPin,
    LEFT: InputPin,
    JOG: InputPin,
{
    /// Sample the four required inputs; half-turn switches read unasserted.
    pub fn new(mode: MODE, right: RIGHT, left: LEFT, jog: JOG, config: InputConfig) -> Self {
        Self {
            mode,
            right,
            left,
            jog,
            half_turn: None,
            config,
        }
    }

    /// Also sample the two half-turn switches.
    pub fn with_half_turn<HTR, HTL>(
        self,
        right: HTR,
        left: HTL,
    ) -> PinInputs<MODE, RIGHT, LEFT, JOG, HTR, HTL>
    where
        HTR: InputPin,
        HTL: InputPin,
    {
        PinInputs {
            mode: self.mode,
            right: self.right,
            left: self.left,
            jog: self.jog,
            half_turn: Some((right, left)),
            config: self.config,
        }
    }
}

impl<MODE, RIGHT, LEFT, JOG, HTR, HTL> PinInputs<MODE, RIGHT, LEFT, JOG, HTR, HTL>
where
    MODE: InputPin,
    RIGHT: InputPin,
    LEFT: InputPin,
    JOG: InputPin,
    HTR: InputPin,
    HTL: InputPin,
{
    /// Input polarities used for unwired switches.
    #[inline]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Release the pins.
    #[allow(clippy::type_complexity)]
    pub fn release(self) -> (MODE, RIGHT, LEFT, JOG, Option<(HTR, HTL)>) {
        (self.mode, self.right, self.left, self.jog, self.half_turn)
    }
}

fn read<P: InputPin>(pin: &mut P) -> Result<bool> {
    pin.is_high().map_err(|_| IoError::InputPin.into())
}

impl<MODE, RIGHT, LEFT, JOG, HTR, HTL> InputSampler for PinInputs<MODE, RIGHT, LEFT, JOG, HTR, HTL>
where
    MODE: InputPin,
    RIGHT: InputPin,
    LEFT: InputPin,
    JOG: InputPin,
    HTR: InputPin,
    HTL: InputPin,
{
    fn sample(&mut self) -> Result<InputSample> {
        let idle = self.config.half_turn.idle_level();
        let (half_turn_right, half_turn_left) = match self.half_turn.as_mut() {
            Some((right, left)) => (read(right)?, read(left)?),
            None => (idle, idle),
        };

        Ok(InputSample {
            mode: read(&mut self.mode)?,
            dir_right: read(&mut self.right)?,
            dir_left: read(&mut self.left)?,
            jog: read(&mut self.jog)?,
            half_turn_right,
            half_turn_left,
        })
    }
}
