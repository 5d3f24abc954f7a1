//! Configuration file loading: round trips, partial files and load errors.

use std::fs;
use tempfile::TempDir;
use tilecaster::{GameState, RaycasterConfig, TilecasterError, TilecasterResult};

#[test]
fn test_config_round_trip() -> TilecasterResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");

    let mut config = RaycasterConfig::for_testing();
    config.fov_degrees = 75.0;
    config.show_minimap = false;
    config.save_to_file(&path)?;

    let loaded = RaycasterConfig::load_from_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_partial_config_uses_defaults() -> TilecasterResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "target_fps": 60, "player": { "angle_degrees": 180.0 } }"#)?;

    let config = RaycasterConfig::load_from_file(&path)?;
    let defaults = RaycasterConfig::default();
    assert_eq!(config.target_fps, 60);
    assert_eq!(config.player.angle_degrees, 180.0);
    assert_eq!(config.player.x, defaults.player.x);
    assert_eq!(config.map, defaults.map);

    let state = GameState::new(config)?;
    assert!((state.player().angle - std::f64::consts::PI).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = RaycasterConfig::load_from_file(dir.path().join("nope.json"));
    assert!(matches!(result, Err(TilecasterError::Io(_))));
}

#[test]
fn test_malformed_file_is_serde_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"tile_size\": ").unwrap();

    let result = RaycasterConfig::load_from_file(&path);
    assert!(matches!(result, Err(TilecasterError::Serde(_))));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.json");
    fs::write(&path, r#"{ "fov_degrees": 190.0 }"#).unwrap();

    let result = RaycasterConfig::load_from_file(&path);
    assert!(matches!(result, Err(TilecasterError::InvalidConfig(_))));
}
