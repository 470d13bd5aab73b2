//! One control cycle, without I/O.

use crate::config::{BoardConfig, InputConfig};
use crate::display::{render, DisplayText};
use crate::input::InputSample;
use crate::motion::{
    decode_half_turn, decode_sample, CoilPattern, HalfTurn, JogButton, JogEvent, MotionIntent,
    Resolution, StepSequencer,
};

/// Everything one cycle decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Decoded motion intent.
    pub intent: MotionIntent,
    /// Decoded step resolution.
    pub resolution: Resolution,
    /// Decoded half-turn request. Display only, never moves the motor.
    pub half_turn: HalfTurn,
    /// Jog button transition seen this cycle.
    pub jog: JogEvent,
    /// Pattern to write to the coils, present only when a step was taken.
    pub step: Option<CoilPattern>,
    /// Status lines for this cycle.
    pub display: DisplayText,
}

/// The jog state machine: sequencer plus jog edge memory.
///
/// Pure composition of decode, edge detection, sequencing and rendering.
/// [`JogMachine`](super::JogMachine) wires it to hardware.
///
/// # Example
///
/// ```rust
/// use stepper_jog::config::InputConfig;
/// use stepper_jog::controller::JogController;
/// use stepper_jog::input::InputSample;
///
/// let mut controller = JogController::new(InputConfig::default());
/// let idle = InputSample::idle(&InputConfig::default());
/// let right = InputSample { dir_right: false, ..idle };
///
/// assert!(controller.cycle(&right).step.is_none());
/// let report = controller.cycle(&InputSample { jog: false, ..right });
/// assert!(report.step.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JogController {
    inputs: InputConfig,
    sequencer: StepSequencer,
    jog: JogButton,
}

impl JogController {
    /// Create a controller at phase zero with the jog button released.
    pub const fn new(inputs: InputConfig) -> Self {
        Self {
            inputs,
            sequencer: StepSequencer::new(),
            jog: JogButton::new(inputs.jog),
        }
    }

    /// Create a controller from a board configuration.
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.inputs)
    }

    /// Run one cycle on a sample.
    ///
    /// The jog edge memory is updated on every cycle, including stopped
    /// ones, so releasing the button while stopped never produces a step
    /// later. At most one step is taken per cycle.
    pub fn cycle(&mut self, sample: &InputSample) -> CycleReport {
        let (intent, resolution) = decode_sample(sample, &self.inputs);
        let half_turn = decode_half_turn(
            sample.half_turn_right,
            sample.half_turn_left,
            self.inputs.half_turn,
        );
        let jog = self.jog.sample(sample.jog);

        let step = match (jog, intent.direction()) {
            (JogEvent::Pressed, Some(direction)) => {
                Some(self.sequencer.advance(direction, resolution))
            }
            (JogEvent::Pressed, None) => {
                debug!("jog press ignored, motor stopped");
                None
            }
            _ => None,
        };

        CycleReport {
            intent,
            resolution,
            half_turn,
            jog,
            step,
            display: render(resolution, intent, half_turn),
        }
    }

    /// The step sequencer.
    #[inline]
    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    /// The jog button edge memory.
    #[inline]
    pub fn jog(&self) -> &JogButton {
        &self.jog
    }

    /// Input polarities in use.
    #[inline]
    pub fn inputs(&self) -> &InputConfig {
        &self.inputs
    }

    /// Back to the startup state: phase zero everywhere, button released.
    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.jog.reset();
    }
}

impl Default for JogController {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
