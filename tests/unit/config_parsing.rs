//! Unit tests for TOML configuration parsing.

use stepper_jog::config::{BoardConfig, Pacing, Polarity};

/// Test parsing a complete board description.
#[test]
fn test_parse_board_config() {
    let toml_str = r#"
[inputs]
direction = "active_low"
jog = "active_high"
half_turn = "active_high"
full_step = "active_low"

[outputs]
invert_coils = true

[display]
columns = 20
rows = 2

[timing]
pacing = "tick"
tick_hz = 40
"#;

    let config: BoardConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.inputs.direction, Polarity::ActiveLow);
    assert_eq!(config.inputs.jog, Polarity::ActiveHigh);
    assert_eq!(config.inputs.half_turn, Polarity::ActiveHigh);
    assert_eq!(config.inputs.full_step, Polarity::ActiveLow);
    assert!(config.outputs.invert_coils);
    assert_eq!(config.display.columns, 20);
    assert_eq!(config.timing.pacing, Pacing::Tick);
    assert_eq!(config.timing.tick_period_us(), Some(25_000));
}

/// Test that missing sections fall back to the reference board.
#[test]
fn test_partial_config_uses_defaults() {
    let toml_str = r#"
[timing]
tick_hz = 100
"#;

    let config: BoardConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.inputs, BoardConfig::default().inputs);
    assert_eq!(config.display.columns, 16);
    assert_eq!(config.display.rows, 2);
    assert_eq!(config.timing.pacing, Pacing::FreeRunning);
    assert_eq!(config.timing.tick_hz, 100);
}

/// Test that unknown pacing values are rejected during parsing.
#[test]
fn test_invalid_pacing_rejected() {
    let toml_str = r#"
[timing]
pacing = "sometimes"
"#;

    let result: Result<BoardConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown pacing");
}
