#![cfg(feature = "serde")]

use windsynth::config::{ConfigError, WindConfig};
use windsynth::synth::ControlParameters;

#[test]
fn test_partial_config_uses_defaults() {
    let config = WindConfig::from_json(r#"{ "blockSize": 128, "params": { "windSpeed": 12.5 } }"#)
        .unwrap();
    assert_eq!(config.block_size, 128);
    assert_eq!(config.seed, None);
    assert!(config.midi_enabled);
    assert_eq!(config.params.wind_speed, 12.5);
    assert_eq!(config.params.master_gain, 0.5);
}

#[test]
fn test_empty_config_is_default() {
    let config = WindConfig::from_json("{}").unwrap();
    assert_eq!(config, WindConfig::default());
}

#[test]
fn test_config_params_are_clamped() {
    let config =
        WindConfig::from_json(r#"{ "params": { "windSpeed": 400.0, "howlPan1": -3.0 } }"#).unwrap();
    assert_eq!(config.params.wind_speed, 40.0);
    assert_eq!(config.params.howl_pan1, 0.0);
}

#[test]
fn test_zero_block_size_is_rejected() {
    let result = WindConfig::from_json(r#"{ "blockSize": 0 }"#);
    assert!(matches!(result, Err(ConfigError::ZeroBlockSize)));
}

#[test]
fn test_malformed_json_is_reported() {
    let result = WindConfig::from_json("{ blockSize: ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_file_is_reported() {
    let result = WindConfig::load("/nonexistent/windsynth/preset.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_survives_a_save() {
    let config = WindConfig {
        block_size: 512,
        seed: Some(42),
        midi_enabled: false,
        keyboard_enabled: true,
        params: ControlParameters {
            wind_speed: 22.0,
            whistle_pan2: 0.8,
            ..ControlParameters::default()
        },
    };
    let json = config.to_json().unwrap();
    assert!(json.contains("\"windSpeed\""));
    assert_eq!(WindConfig::from_json(&json).unwrap(), config);
}
