//! Builder pattern for CoilDriver.

use embedded_hal::digital::OutputPin;

use crate::config::{BoardConfig, OutputConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::CoilDriver;

/// Builder for creating CoilDriver instances.
pub struct CoilDriverBuilder<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    in1: Option<IN1>,
    in2: Option<IN2>,
    in3: Option<IN3>,
    in4: Option<IN4>,
    invert: bool,
}

impl<IN1, IN2, IN3, IN4> Default for CoilDriverBuilder<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IN1, IN2, IN3, IN4> CoilDriverBuilder<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            in1: None,
            in2: None,
            in3: None,
            in4: None,
            invert: false,
        }
    }

    /// Set the IN1 pin.
    pub fn in1(mut self, pin: IN1) -> Self {
        self.in1 = Some(pin);
        self
    }

    /// Set the IN2 pin.
    pub fn in2(mut self, pin: IN2) -> Self {
        self.in2 = Some(pin);
        self
    }

    /// Set the IN3 pin.
    pub fn in3(mut self, pin: IN3) -> Self {
        self.in3 = Some(pin);
        self
    }

    /// Set the IN4 pin.
    pub fn in4(mut self, pin: IN4) -> Self {
        self.in4 = Some(pin);
        self
    }

    /// Set output inversion.
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Configure from an OutputConfig.
    pub fn from_output_config(mut self, config: &OutputConfig) -> Self {
        self.invert = config.invert_coils;
        self
    }

    /// Configure from a BoardConfig.
    pub fn from_config(self, config: &BoardConfig) -> Self {
        self.from_output_config(&config.outputs)
    }

    /// Build the CoilDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the four pins is missing.
    pub fn build(self) -> Result<CoilDriver<IN1, IN2, IN3, IN4>> {
        let in1 = self.in1.ok_or(Error::Config(ConfigError::MissingField("in1")))?;
        let in2 = self.in2.ok_or(Error::Config(ConfigError::MissingField("in2")))?;
        let in3 = self.in3.ok_or(Error::Config(ConfigError::MissingField("in3")))?;
        let in4 = self.in4.ok_or(Error::Config(ConfigError::MissingField("in4")))?;

        Ok(CoilDriver::new(in1, in2, in3, in4, self.invert))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct NullPin;

    impl embedded_hal::digital::ErrorType for NullPin {
        type Error = Infallible;
    }

    impl OutputPin for NullPin {
        fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
            Ok(())
        }

        fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_build_requires_every_pin() {
        let result = CoilDriverBuilder::<NullPin, NullPin, NullPin, NullPin>::new()
            .in1(NullPin)
            .in2(NullPin)
            .in4(NullPin)
            .build();

        let err = match result {
            Err(e) => e,
            Ok(_) => panic!("builder accepted a missing pin"),
        };
        assert_eq!(err, Error::Config(ConfigError::MissingField("in3")));
    }

    #[test]
    fn test_build_from_config() {
        let config = BoardConfig {
            outputs: OutputConfig { invert_coils: true },
            ..BoardConfig::default()
        };

        let driver = CoilDriverBuilder::new()
            .in1(NullPin)
            .in2(NullPin)
            .in3(NullPin)
            .in4(NullPin)
            .from_config(&config)
            .build()
            .unwrap();

        assert!(driver.is_inverted());
        assert_eq!(driver.current(), None);
    }
}
