//! Direction and resolution decoding.

use crate::config::{InputConfig, Polarity};
use crate::input::InputSample;

use super::intent::{HalfTurn, MotionIntent, Resolution};

/// Decode raw switch levels with the reference wiring.
///
/// Direction switches are asserted low and the mode switch selects full
/// step when high. Both direction switches asserted at once resolves to
/// [`MotionIntent::Stopped`], never to an arbitrary direction.
///
/// ```rust
/// use stepper_jog::motion::{decode, MotionIntent, Resolution};
///
/// assert_eq!(decode(false, true, true), (MotionIntent::RotateRight, Resolution::Full));
/// assert_eq!(decode(true, false, false), (MotionIntent::RotateLeft, Resolution::Half));
/// assert_eq!(decode(false, false, true).0, MotionIntent::Stopped);
/// ```
#[inline]
pub fn decode(right: bool, left: bool, mode: bool) -> (MotionIntent, Resolution) {
    decode_levels(right, left, mode, &InputConfig::default())
}

/// Decode a full input sample using the configured polarities.
#[inline]
pub fn decode_sample(sample: &InputSample, inputs: &InputConfig) -> (MotionIntent, Resolution) {
    decode_levels(sample.dir_right, sample.dir_left, sample.mode, inputs)
}

/// Decode the two half-turn levels.
///
/// Right wins when both are asserted.
#[inline]
pub fn decode_half_turn(right: bool, left: bool, polarity: Polarity) -> HalfTurn {
    if polarity.is_asserted(right) {
        HalfTurn::Right
    } else if polarity.is_asserted(left) {
        HalfTurn::Left
    } else {
        HalfTurn::None
    }
}

fn decode_levels(right: bool, left: bool, mode: bool, inputs: &InputConfig) -> (MotionIntent, Resolution) {
    let right = inputs.direction.is_asserted(right);
    let left = inputs.direction.is_asserted(left);

    let intent = match (right, left) {
        (true, false) => MotionIntent::RotateRight,
        (false, true) => MotionIntent::RotateLeft,
        _ => MotionIntent::Stopped,
    };

    let resolution = if inputs.full_step.is_asserted(mode) {
        Resolution::Full
    } else {
        Resolution::Half
    };

    (intent, resolution)
}
