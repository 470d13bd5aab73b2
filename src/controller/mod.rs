//! Main cycle for stepper-jog.
//!
//! Each cycle samples the inputs, decodes intent and resolution, detects a
//! jog press, advances the sequencer on a press while moving, and renders
//! the status lines.

mod cycle;
mod machine;
mod tick;

pub use cycle::{CycleReport, JogController};
pub use machine::JogMachine;
pub use tick::TickFlag;
