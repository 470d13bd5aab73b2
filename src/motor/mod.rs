//! Motor module for stepper-jog.
//!
//! Writes coil patterns to the four H-bridge inputs.

mod builder;
mod driver;

pub use builder::CoilDriverBuilder;
pub use driver::CoilDriver;

use crate::error::Result;
use crate::motion::CoilPattern;

/// Sink for coil patterns, updated as a group on every accepted step.
pub trait CoilOutput {
    /// Write all four H-bridge inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin could not be driven.
    fn write(&mut self, pattern: CoilPattern) -> Result<()>;
}

impl<T: CoilOutput + ?Sized> CoilOutput for &mut T {
    fn write(&mut self, pattern: CoilPattern) -> Result<()> {
        (**self).write(pattern)
    }
}
