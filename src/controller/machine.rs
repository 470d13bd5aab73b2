//! Main loop facade over the jog hardware.

use crate::config::{BoardConfig, Pacing};
use crate::display::TextDisplay;
use crate::error::Result;
use crate::input::InputSampler;
use crate::motor::CoilOutput;

use super::cycle::{CycleReport, JogController};
use super::tick::TickFlag;

/// Owns the jog collaborators and runs the main cycle over them.
///
/// Generic over:
/// - `INPUTS`: input sampler
/// - `COILS`: H-bridge coil output
/// - `DISPLAY`: two-line text display
///
/// # Example
///
/// ```rust,ignore
/// use stepper_jog::controller::{JogMachine, TickFlag};
///
/// static TICK: TickFlag = TickFlag::new();
///
/// let mut machine = JogMachine::new(inputs, coils, lcd, &config);
/// loop {
///     machine.service(&TICK)?;
/// }
/// ```
pub struct JogMachine<INPUTS, COILS, DISPLAY>
where
    INPUTS: InputSampler,
    COILS: CoilOutput,
    DISPLAY: TextDisplay,
{
    inputs: INPUTS,
    coils: COILS,
    display: DISPLAY,
    controller: JogController,
    pacing: Pacing,
}

impl<INPUTS, COILS, DISPLAY> JogMachine<INPUTS, COILS, DISPLAY>
where
    INPUTS: InputSampler,
    COILS: CoilOutput,
    DISPLAY: TextDisplay,
{
    /// Create a machine at the startup state.
    pub fn new(inputs: INPUTS, coils: COILS, display: DISPLAY, config: &BoardConfig) -> Self {
        Self {
            inputs,
            coils,
            display,
            controller: JogController::from_config(config),
            pacing: config.timing.pacing,
        }
    }

    /// Run one cycle now: sample, decide, write coils on a step, show status.
    ///
    /// The status lines are shown even when the coil write fails. A failed
    /// coil write still counts as a step for the sequencer.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error of the cycle.
    pub fn poll(&mut self) -> Result<CycleReport> {
        let sample = self.inputs.sample().map_err(|e| {
            error!("input sampling failed");
            e
        })?;

        let report = self.controller.cycle(&sample);

        let stepped = match report.step {
            Some(pattern) => self.coils.write(pattern),
            None => Ok(()),
        };
        if stepped.is_err() {
            error!("coil write failed");
        }

        let shown = self.display.show(&report.display);
        if shown.is_err() {
            error!("display update failed");
        }

        stepped?;
        shown?;
        Ok(report)
    }

    /// Run one cycle only if the timer has ticked since the last one.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error of the cycle.
    pub fn poll_on_tick(&mut self, tick: &TickFlag) -> Result<Option<CycleReport>> {
        if !tick.take() {
            return Ok(None);
        }
        self.poll().map(Some)
    }

    /// Run the cycle according to the configured pacing.
    ///
    /// Free-running pacing ignores the tick flag entirely.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error of the cycle.
    pub fn service(&mut self, tick: &TickFlag) -> Result<Option<CycleReport>> {
        match self.pacing {
            Pacing::FreeRunning => self.poll().map(Some),
            Pacing::Tick => self.poll_on_tick(tick),
        }
    }

    /// The jog state machine.
    #[inline]
    pub fn controller(&self) -> &JogController {
        &self.controller
    }

    /// Configured pacing.
    #[inline]
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Release the collaborators.
    pub fn release(self) -> (INPUTS, COILS, DISPLAY) {
        (self.inputs, self.coils, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputConfig, TimingConfig};
    use crate::display::{messages, DisplayText};
    use crate::error::{Error, IoError};
    use crate::input::InputSample;
    use crate::motion::{table, CoilPattern, Direction, Resolution};

    struct Script(Vec<InputSample>);

    impl InputSampler for Script {
        fn sample(&mut self) -> Result<InputSample> {
            if self.0.is_empty() {
                Err(IoError::InputPin.into())
            } else {
                Ok(self.0.remove(0))
            }
        }
    }

    #[derive(Default)]
    struct Coils {
        written: Vec<CoilPattern>,
        broken: bool,
    }

    impl CoilOutput for Coils {
        fn write(&mut self, pattern: CoilPattern) -> Result<()> {
            if self.broken {
                return Err(IoError::CoilPin.into());
            }
            self.written.push(pattern);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Screen(Vec<DisplayText>);

    impl TextDisplay for Screen {
        fn show(&mut self, text: &DisplayText) -> Result<()> {
            self.0.push(*text);
            Ok(())
        }
    }

    fn idle() -> InputSample {
        InputSample::idle(&InputConfig::default())
    }

    fn jog_right_full() -> Vec<InputSample> {
        let right = InputSample {
            mode: true,
            dir_right: false,
            ..idle()
        };
        vec![right, InputSample { jog: false, ..right }]
    }

    #[test]
    fn test_poll_writes_step_and_display() {
        let config = BoardConfig::default();
        let mut machine = JogMachine::new(
            Script(jog_right_full()),
            Coils::default(),
            Screen::default(),
            &config,
        );

        machine.poll().unwrap();
        let report = machine.poll().unwrap();
        assert!(report.step.is_some());
        assert!(machine.poll().is_err());

        let (_, coils, screen) = machine.release();
        assert_eq!(coils.written, vec![table(Direction::Right, Resolution::Full)[1]]);
        assert_eq!(screen.0.len(), 2);
        assert_eq!(screen.0[1].bottom, messages::ROTATING_RIGHT);
    }

    #[test]
    fn test_display_shown_when_coils_fail() {
        let config = BoardConfig::default();
        let coils = Coils {
            broken: true,
            ..Coils::default()
        };
        let mut machine = JogMachine::new(Script(jog_right_full()), coils, Screen::default(), &config);

        machine.poll().unwrap();
        assert_eq!(machine.poll(), Err(Error::Io(IoError::CoilPin)));
        assert_eq!(
            machine
                .controller()
                .sequencer()
                .phase(Direction::Right, Resolution::Full)
                .value(),
            1
        );

        let (_, _, screen) = machine.release();
        assert_eq!(screen.0.len(), 2);
    }

    #[test]
    fn test_tick_pacing() {
        let config = BoardConfig {
            timing: TimingConfig {
                pacing: Pacing::Tick,
                tick_hz: 40,
            },
            ..BoardConfig::default()
        };
        let tick = TickFlag::new();
        let mut machine =
            JogMachine::new(Script(jog_right_full()), Coils::default(), Screen::default(), &config);

        assert_eq!(machine.service(&tick), Ok(None));

        tick.signal();
        assert!(machine.service(&tick).unwrap().is_some());
        assert_eq!(machine.service(&tick), Ok(None));

        tick.signal();
        let report = machine.service(&tick).unwrap().unwrap();
        assert!(report.step.is_some());
    }

    #[test]
    fn test_free_running_ignores_tick() {
        let config = BoardConfig::default();
        let tick = TickFlag::new();
        let mut machine =
            JogMachine::new(Script(jog_right_full()), Coils::default(), Screen::default(), &config);

        assert!(machine.service(&tick).unwrap().is_some());
        assert!(machine.service(&tick).unwrap().is_some());
        assert!(!tick.is_pending());
    }
}
