//! Jog button edge detection.
//!
//! A press is recognised on the released -> pressed transition between two
//! consecutive samples. Holding the button yields nothing further until it
//! is released and pressed again.

use crate::config::Polarity;

/// Detect a press edge between the stored level and a new sample.
///
/// Returns `true` exactly when the level moves from released to pressed
/// for the given polarity. The stored level is always overwritten with
/// `current`, whether or not a step will follow.
///
/// ```rust
/// use stepper_jog::config::Polarity;
/// use stepper_jog::motion::detect;
///
/// let mut previous = true;
/// let fired: Vec<bool> = [true, false, false, true, false]
///     .iter()
///     .map(|&level| detect(level, &mut previous, Polarity::ActiveLow))
///     .collect();
///
/// assert_eq!(fired, [false, true, false, false, true]);
/// ```
#[inline]
pub fn detect(current: bool, previous: &mut bool, polarity: Polarity) -> bool {
    let fired = !polarity.is_asserted(*previous) && polarity.is_asserted(current);
    *previous = current;
    fired
}

/// Transition reported by [`JogButton::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JogEvent {
    /// Level unchanged.
    None,
    /// Released -> pressed. The only event that steps the motor.
    Pressed,
    /// Pressed -> released.
    Released,
}

/// Jog button with its one bit of edge memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JogButton {
    polarity: Polarity,
    previous: bool,
}

impl JogButton {
    /// Create a button that starts out released.
    ///
    /// A button already held at startup counts as one press on the first
    /// sample.
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            previous: polarity.idle_level(),
        }
    }

    /// Feed one sampled level.
    pub fn sample(&mut self, level: bool) -> JogEvent {
        let was_pressed = self.polarity.is_asserted(self.previous);
        if detect(level, &mut self.previous, self.polarity) {
            JogEvent::Pressed
        } else if was_pressed && !self.polarity.is_asserted(level) {
            JogEvent::Released
        } else {
            JogEvent::None
        }
    }

    /// Whether the last sample was pressed.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.polarity.is_asserted(self.previous)
    }

    /// Configured polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Forget the stored level and go back to released.
    pub fn reset(&mut self) {
        self.previous = self.polarity.idle_level();
    }
}

impl Default for JogButton {
    fn default() -> Self {
        Self::new(Polarity::ActiveLow)
    }
}
