//! Example: Configuration-driven board setup.
//!
//! This example demonstrates how to:
//! - Load board wiring from TOML
//! - Validate it
//! - Run jog cycles with the configured polarities and pacing
//!
//! Run with: `cargo run --example config_driven --features std`

use stepper_jog::{
    config::Pacing, parse_config, CoilOutput, CoilPattern, DisplayText, InputSample, InputSampler,
    JogMachine, Result, TextDisplay, TickFlag,
};

/// Coil sink that prints each pattern.
struct PrintCoils;

impl CoilOutput for PrintCoils {
    fn write(&mut self, pattern: CoilPattern) -> Result<()> {
        println!("  coils <- {:04b}", pattern.bits());
        Ok(())
    }
}

/// Display sink that prints the motor-state row.
struct PrintStatus;

impl TextDisplay for PrintStatus {
    fn show(&mut self, text: &DisplayText) -> Result<()> {
        println!("  [{}] [{}]", text.top, text.bottom);
        Ok(())
    }
}

/// Toggles the jog button every cycle with direction right held.
struct Toggle {
    sample: InputSample,
}

impl InputSampler for Toggle {
    fn sample(&mut self) -> Result<InputSample> {
        self.sample.jog = !self.sample.jog;
        Ok(self.sample)
    }
}

fn main() -> Result<()> {
    println!("=== Configuration-Driven Board Example ===\n");

    // Active-high switches, ticked at 40 Hz like the reference timer.
    let toml_content = r#"
[inputs]
direction = "active_high"
jog = "active_high"
full_step = "active_high"

[display]
columns = 16
rows = 2

[timing]
pacing = "tick"
tick_hz = 40
"#;

    let config = parse_config(toml_content)?;
    println!("Configuration validated successfully!");
    println!("  pacing: {:?}", config.timing.pacing);
    if let Some(period) = config.timing.tick_period_us() {
        println!("  tick period: {} us", period);
    }

    let idle = InputSample::idle(&config.inputs);
    let inputs = Toggle {
        sample: InputSample {
            mode: false,
            dir_right: true,
            ..idle
        },
    };

    let tick = TickFlag::new();
    let mut machine = JogMachine::new(inputs, PrintCoils, PrintStatus, &config);
    assert_eq!(machine.pacing(), Pacing::Tick);

    // Stand-in for the timer interrupt: every other loop iteration ticks.
    for iteration in 0..12 {
        if iteration % 2 == 0 {
            tick.signal();
        }
        if let Some(report) = machine.service(&tick)? {
            println!("iteration {}: {:?} {:?}", iteration, report.intent, report.jog);
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
