//! Motion module for stepper-jog.
//!
//! The jog core: decoding switches into a motion intent, detecting jog
//! presses, and sequencing coil patterns one step at a time.

mod decoder;
mod intent;
mod jog;
mod sequencer;

pub use decoder::{decode, decode_half_turn, decode_sample};
pub use intent::{Direction, HalfTurn, MotionIntent, Resolution};
pub use jog::{detect, JogButton, JogEvent};
pub use sequencer::{pattern, table, CoilPattern, PhaseIndex, StepSequencer};
