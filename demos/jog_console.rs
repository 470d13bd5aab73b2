//! Jog control example.
//!
//! Drives the full cycle with scripted switch levels and prints what the
//! coils and the display would show. Pins are plain in-memory stand-ins
//! built on embedded-hal traits.
//!
//! Run with: `cargo run --example jog_console`

use std::cell::Cell;
use std::rc::Rc;

use stepper_jog::{
    BoardConfig, CoilDriverBuilder, DisplayText, InputSample, InputSampler, JogMachine, Result,
    TextDisplay,
};

/// Output pin that remembers its level.
#[derive(Clone, Default)]
struct MockPin(Rc<Cell<bool>>);

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

/// Replays a fixed list of switch positions, then stops the motor.
struct Script {
    samples: Vec<InputSample>,
    next: usize,
    idle: InputSample,
}

impl InputSampler for Script {
    fn sample(&mut self) -> Result<InputSample> {
        let sample = self.samples.get(self.next).copied().unwrap_or(self.idle);
        self.next += 1;
        Ok(sample)
    }
}

/// Prints each frame as the 16x2 panel would show it.
struct Console;

impl TextDisplay for Console {
    fn show(&mut self, text: &DisplayText) -> Result<()> {
        println!("  +----------------+");
        for line in text.lines() {
            println!("  |{:<16}|", line);
        }
        println!("  +----------------+");
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Jog Control Example ===\n");

    let config = BoardConfig::default();
    let idle = InputSample::idle(&config.inputs);

    // Full step right: press three times, holding the second press.
    let right = InputSample {
        mode: true,
        dir_right: false,
        ..idle
    };
    let pressed = InputSample { jog: false, ..right };
    // Half step left with a half-turn request showing on the display.
    let left_half = InputSample {
        dir_left: false,
        half_turn_left: false,
        ..idle
    };

    let samples = vec![
        right,
        pressed,
        right,
        pressed,
        pressed,
        pressed,
        right,
        pressed,
        left_half,
        InputSample { jog: false, ..left_half },
        idle,
    ];
    let cycles = samples.len();

    let pins: [MockPin; 4] = Default::default();
    let coils = CoilDriverBuilder::new()
        .in1(pins[0].clone())
        .in2(pins[1].clone())
        .in3(pins[2].clone())
        .in4(pins[3].clone())
        .from_config(&config)
        .build()?;

    let script = Script {
        samples,
        next: 0,
        idle,
    };
    let mut machine = JogMachine::new(script, coils, Console, &config);

    for cycle in 0..cycles {
        println!("cycle {}:", cycle);
        let report = machine.poll()?;

        let levels: String = pins
            .iter()
            .map(|p| if p.0.get() { '1' } else { '0' })
            .collect();
        match report.step {
            Some(_) => println!("  step taken, IN1..IN4 = {}", levels),
            None => println!("  no step, IN1..IN4 hold {}", levels),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
