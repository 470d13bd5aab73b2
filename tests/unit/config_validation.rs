//! Unit tests for configuration validation.

use stepper_jog::config::{parse_config, validate_config, BoardConfig};
use stepper_jog::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[display]
columns = 16

[timing]
pacing = "tick"
tick_hz = 40
"#;

    let config: BoardConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test that a single-row display is rejected.
#[test]
fn test_single_row_display_rejected() {
    let toml_str = r#"
[display]
rows = 1
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidDisplayRows(1)))
    ));
}

/// Test that a display wider than an HD44780 row is rejected.
#[test]
fn test_wide_display_rejected() {
    let toml_str = r#"
[display]
columns = 41
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DisplayTooWide {
            columns: 41,
            maximum: 40
        }))
    ));
}

/// Test that a zero tick rate is rejected with tick pacing.
#[test]
fn test_zero_tick_rate_rejected() {
    let toml_str = r#"
[timing]
pacing = "tick"
tick_hz = 0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTickRate(0)))
    ));
}

/// Test error messages are readable.
#[test]
fn test_error_display() {
    let err = Error::Config(ConfigError::DisplayTooNarrow {
        columns: 8,
        minimum: 16,
    });
    assert_eq!(
        err.to_string(),
        "Configuration error: Display has 8 columns, at least 16 are needed"
    );
}
