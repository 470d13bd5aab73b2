//! Status display.
//!
//! The two status lines are a pure projection of the current resolution,
//! motion intent and half-turn request. They are recomputed every cycle and
//! written whole; nothing is diffed.

mod hd44780;
pub mod state;

pub use hd44780::Hd44780;
pub use state::{DisplayState, Ready, Uninitialized};

use crate::error::Result;
use crate::motion::{HalfTurn, MotionIntent, Resolution};

/// Fixed status messages.
///
/// These strings, trailing padding included, are what the display shows
/// and must not be reformatted.
pub mod messages {
    /// Row 0, full-step mode.
    pub const FULL_STEP: &str = "Modo: FULL STEP ";
    /// Row 0, half-step mode.
    pub const HALF_STEP: &str = "Modo: HALF STEP ";
    /// Row 1, rotating right.
    pub const ROTATING_RIGHT: &str = "Girando DERECHA ";
    /// Row 1, rotating left.
    pub const ROTATING_LEFT: &str = "Girando IZQUIER";
    /// Row 1, stopped.
    pub const STOPPED: &str = "Motor DETENIDO ";
    /// Row 1, half turn right requested.
    pub const HALF_TURN_RIGHT: &str = "Media vuelta DER";
    /// Row 1, half turn left requested.
    pub const HALF_TURN_LEFT: &str = "Media vuelta IZQ";
}

/// The two status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayText {
    /// Row 0: step mode.
    pub top: &'static str,
    /// Row 1: motor state.
    pub bottom: &'static str,
}

impl DisplayText {
    /// Both rows in order.
    #[inline]
    pub fn lines(&self) -> [&'static str; 2] {
        [self.top, self.bottom]
    }
}

/// Render the status lines.
///
/// A half-turn request takes priority over the rotating or stopped text.
///
/// ```rust
/// use stepper_jog::display::render;
/// use stepper_jog::motion::{HalfTurn, MotionIntent, Resolution};
///
/// let text = render(Resolution::Full, MotionIntent::Stopped, HalfTurn::None);
/// assert_eq!(text.top, "Modo: FULL STEP ");
/// assert_eq!(text.bottom, "Motor DETENIDO ");
/// ```
pub fn render(resolution: Resolution, intent: MotionIntent, half_turn: HalfTurn) -> DisplayText {
    let top = match resolution {
        Resolution::Full => messages::FULL_STEP,
        Resolution::Half => messages::HALF_STEP,
    };

    let bottom = match (half_turn, intent) {
        (HalfTurn::Right, _) => messages::HALF_TURN_RIGHT,
        (HalfTurn::Left, _) => messages::HALF_TURN_LEFT,
        (HalfTurn::None, MotionIntent::RotateRight) => messages::ROTATING_RIGHT,
        (HalfTurn::None, MotionIntent::RotateLeft) => messages::ROTATING_LEFT,
        (HalfTurn::None, MotionIntent::Stopped) => messages::STOPPED,
    };

    DisplayText { top, bottom }
}

/// Two-line text sink.
pub trait TextDisplay {
    /// Write both status lines, starting each at column zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the display could not be driven.
    fn show(&mut self, text: &DisplayText) -> Result<()>;
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    fn show(&mut self, text: &DisplayText) -> Result<()> {
        (**self).show(text)
    }
}
