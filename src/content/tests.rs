//! Content domain: tests for gameplay configuration parsing.

use std::path::Path;

use super::*;
use crate::movement::MovementTuning;

#[test]
fn test_empty_config_uses_defaults() {
    let defaults = parse_gameplay_defaults("()").unwrap();
    assert_eq!(defaults, GameplayDefaults::default());
    assert_eq!(defaults.schema_version, SCHEMA_VERSION);
    assert!(defaults.map_path.is_none());
}

#[test]
fn test_partial_config_overrides_only_given_fields() {
    let defaults = parse_gameplay_defaults(
        r#"(
            world: (width: 640.0, height: 480.0),
            tuning: (gravity: 0.25),
            map_path: "maps/custom.json",
            probe: (source: FacingAngle),
        )"#,
    )
    .unwrap();

    assert_eq!(defaults.world.width, 640.0);
    assert_eq!(defaults.world.tile_size, 40);
    assert_eq!(defaults.world.tick_hz, 60.0);

    assert_eq!(defaults.tuning.gravity, 0.25);
    assert_eq!(defaults.tuning.max_speed_x, MovementTuning::default().max_speed_x);

    // IMPLICIT_SOME lets the file omit `Some(...)`.
    assert_eq!(defaults.map_path.as_deref(), Some("maps/custom.json"));

    assert_eq!(defaults.probe.source, ProbeSource::FacingAngle);
    assert_eq!(defaults.probe.capacity, ProbeConfig::default().capacity);
    assert_eq!(defaults.player, PlayerSpawnConfig::default());
}

#[test]
fn test_world_config_bounds() {
    let world = WorldConfig {
        width: 800.0,
        height: 600.0,
        ..Default::default()
    };
    let bounds = world.bounds();
    assert_eq!((bounds.width, bounds.height), (800.0, 600.0));
}

#[test]
fn test_spawn_config_geometry() {
    let spawn = PlayerSpawnConfig::default();
    assert_eq!(spawn.position().x, 100.0);
    assert_eq!(spawn.size().y, 40.0);
    assert_eq!(spawn.rect().bottom(), 140.0);
}

#[test]
fn test_malformed_config_is_parse_error() {
    let err = parse_gameplay_defaults("(world: (width: \"wide\"))").unwrap_err();
    assert_eq!(err.file, "<inline>");
    assert!(err.message.starts_with("Parse error"), "{}", err);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_gameplay_defaults(Path::new("no/such/gameplay.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"), "{}", err);
    assert!(err.to_string().contains("gameplay.ron"));
}

#[test]
fn test_shipped_gameplay_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets/data")
        .join(GAMEPLAY_FILE);
    let defaults = load_gameplay_defaults(&path).unwrap();

    assert_eq!(defaults.schema_version, SCHEMA_VERSION);
    assert_eq!(defaults.tuning, MovementTuning::default());
    assert_eq!(
        defaults.map_path.as_deref(),
        Some("assets/maps/level_01.json")
    );
}
