//! # stepper-jog
//!
//! Manual jog control for a bipolar stepper motor driven through an H-bridge.
//!
//! One press of the jog button advances the motor exactly one step, in the
//! direction and resolution selected by switches, while a two-line character
//! display shows the mode and motion state.
//!
//! ## Features
//!
//! - **Exact stepping**: one step per press, however long the button is held
//! - **Full and half step**: independent phase counters per direction and resolution
//! - **embedded-hal 1.0**: `InputPin` for switches, `OutputPin` for IN1..IN4, HD44780 over `OutputPin` + `DelayNs`
//! - **no_std compatible**: Core library works without standard library
//! - **Fail-safe decoding**: both direction switches at once means stopped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_jog::{BoardConfig, CoilDriverBuilder, Hd44780, JogMachine, PinInputs, TickFlag};
//!
//! static TICK: TickFlag = TickFlag::new();
//!
//! let config = BoardConfig::default();
//! let inputs = PinInputs::new(mode, right, left, jog, config.inputs);
//! let coils = CoilDriverBuilder::new()
//!     .in1(in1).in2(in2).in3(in3).in4(in4)
//!     .from_config(&config)
//!     .build()?;
//! let lcd = Hd44780::new(rs, en, d4, d5, d6, d7, delay).init().map_err(|(_, e)| e)?;
//!
//! let mut machine = JogMachine::new(inputs, coils, lcd, &config);
//! loop {
//!     machine.service(&TICK)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must stay first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod input;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, BoardConfig, InputConfig, Pacing, Polarity};
pub use controller::{CycleReport, JogController, JogMachine, TickFlag};
pub use display::{render, DisplayText, Hd44780, TextDisplay};
pub use error::{Error, Result};
pub use input::{InputSample, InputSampler, PinInputs};
pub use motion::{
    decode, detect, CoilPattern, Direction, HalfTurn, MotionIntent, PhaseIndex, Resolution,
    StepSequencer,
};
pub use motor::{CoilDriver, CoilDriverBuilder, CoilOutput};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
