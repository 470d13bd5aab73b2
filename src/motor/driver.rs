//! H-bridge coil driver.
//!
//! Generic over embedded-hal 1.0 output pins.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{IoError, Result};
use crate::motion::CoilPattern;

use super::CoilOutput;

/// Drives the four H-bridge inputs IN1..IN4.
///
/// Generic over:
/// - `IN1`..`IN4`: H-bridge input pins (must implement `OutputPin`)
///
/// The last written pattern stays on the pins between steps, keeping the
/// motor energized with holding torque.
pub struct CoilDriver<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    /// H-bridge input pins.
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,

    /// Whether pin logic is inverted.
    invert: bool,

    /// Last pattern written to the pins.
    current: Option<CoilPattern>,
}

impl<IN1, IN2, IN3, IN4> CoilDriver<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    /// Create a driver. Pins are left untouched until the first write.
    pub(crate) fn new(in1: IN1, in2: IN2, in3: IN3, in4: IN4, invert: bool) -> Self {
        Self {
            in1,
            in2,
            in3,
            in4,
            invert,
            current: None,
        }
    }

    /// Last pattern written, if any.
    #[inline]
    pub fn current(&self) -> Option<CoilPattern> {
        self.current
    }

    /// Whether pin logic is inverted.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Drive every coil input to its de-energized level.
    pub fn de_energize(&mut self) -> Result<()> {
        self.write(CoilPattern::OFF)
    }

    /// Release the pins.
    pub fn release(self) -> (IN1, IN2, IN3, IN4) {
        (self.in1, self.in2, self.in3, self.in4)
    }

    fn level(&self, energized: bool) -> PinState {
        PinState::from(energized != self.invert)
    }
}

impl<IN1, IN2, IN3, IN4> CoilOutput for CoilDriver<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    fn write(&mut self, pattern: CoilPattern) -> Result<()> {
        let [a, b, c, d] = pattern.levels();
        let (a, b, c, d) = (self.level(a), self.level(b), self.level(c), self.level(d));

        // Any partial write leaves the bridge in an unknown state.
        self.current = None;

        self.in1.set_state(a).map_err(|_| IoError::CoilPin)?;
        self.in2.set_state(b).map_err(|_| IoError::CoilPin)?;
        self.in3.set_state(c).map_err(|_| IoError::CoilPin)?;
        self.in4.set_state(d).map_err(|_| IoError::CoilPin)?;

        self.current = Some(pattern);
        Ok(())
    }
}
