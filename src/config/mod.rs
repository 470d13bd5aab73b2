//! Configuration module for stepper-jog.
//!
//! Describes how the board is wired: input polarities, coil output options,
//! display geometry and main-loop pacing. Loadable from TOML files with the
//! `std` feature, or built in code.

mod display;
mod inputs;
#[cfg(feature = "std")]
mod loader;
mod outputs;
mod system;
mod timing;
mod validation;

pub use display::{DisplayConfig, MAX_COLUMNS, MIN_COLUMNS};
pub use inputs::{InputConfig, Polarity};
pub use outputs::OutputConfig;
pub use system::BoardConfig;
pub use timing::{Pacing, TimingConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
