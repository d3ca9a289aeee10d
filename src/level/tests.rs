use bevy::prelude::Vec2;

use super::generators::TILE_COLOR;
use super::*;

fn bounds() -> WorldBounds {
    WorldBounds::new(640.0, 480.0)
}

#[test]
fn test_aabb_edges_follow_y_down() {
    let rect = Aabb::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.left(), 10.0);
    assert_eq!(rect.right(), 40.0);
    assert_eq!(rect.top(), 20.0);
    assert_eq!(rect.bottom(), 60.0);
}

#[test]
fn test_aabb_overlap_is_strict() {
    let a = Aabb::new(0.0, 0.0, 40.0, 40.0);

    assert!(a.overlaps(&Aabb::new(39.5, 39.5, 10.0, 10.0)));
    // Shared edges.
    assert!(!a.overlaps(&Aabb::new(40.0, 0.0, 10.0, 40.0)));
    assert!(!a.overlaps(&Aabb::new(0.0, 40.0, 40.0, 10.0)));
}

#[test]
fn test_aabb_exceeds_bounds() {
    assert!(!Aabb::new(0.0, 0.0, 640.0, 480.0).exceeds(640.0, 480.0));
    assert!(Aabb::new(-1.0, 0.0, 10.0, 10.0).exceeds(640.0, 480.0));
    assert!(Aabb::new(600.0, 0.0, 41.0, 10.0).exceeds(640.0, 480.0));
    assert!(Aabb::new(0.0, 470.0, 10.0, 11.0).exceeds(640.0, 480.0));
}

#[test]
fn test_platform_defaults_and_degenerate() {
    let platform = Platform::new(0, 440, 640, 40);
    assert_eq!(platform.tag().color, DEFAULT_PLATFORM_COLOR);
    assert_eq!(platform.tag().kind, DEFAULT_PLATFORM_KIND);
    assert_eq!(platform.rect(), Aabb::new(0.0, 440.0, 640.0, 40.0));
    assert!(!platform.is_degenerate());

    assert!(Platform::new(5, 5, 0, 10).is_degenerate());
    assert!(Platform::new(5, 5, 10, 0).is_degenerate());
}

#[test]
fn test_overlapping_platforms_keep_insertion_order() {
    let world = CollisionWorld::with_platforms(
        bounds(),
        vec![
            Platform::new(100, 0, 50, 50),
            Platform::new(0, 0, 50, 50),
            Platform::new(500, 0, 50, 50),
            Platform::new(40, 0, 80, 50),
        ],
    );

    let hits: Vec<i32> = world
        .platforms_overlapping(Aabb::new(30.0, 10.0, 80.0, 10.0))
        .map(|platform| platform.x())
        .collect();

    assert_eq!(hits, vec![100, 0, 40]);
}

#[test]
fn test_collision_world_maintenance() {
    let mut world = CollisionWorld::new(bounds());
    assert!(world.is_empty());

    world.push(Platform::new(0, 0, 10, 10));
    world.push(Platform::new(20, 0, 10, 10));
    world.push(Platform::new(40, 0, 10, 10));
    assert_eq!(world.len(), 3);

    let removed = world.remove(1);
    assert_eq!(removed.map(|p| p.x()), Some(20));
    assert_eq!(
        world.iter().map(Platform::x).collect::<Vec<_>>(),
        vec![0, 40]
    );
    assert!(world.remove(7).is_none());

    world.replace_platforms(vec![Platform::new(5, 5, 5, 5)]);
    assert_eq!(
        world.iter().cloned().collect::<Vec<_>>(),
        vec![Platform::new(5, 5, 5, 5)]
    );
    assert_eq!(world.bounds(), bounds());

    world.clear();
    assert!(world.is_empty());
}

#[test]
fn test_display_mapping_centers_world() {
    let bounds = WorldBounds::default();
    assert_eq!(bounds.world_to_display(Vec2::ZERO), Vec2::new(-960.0, 540.0));
    assert_eq!(
        bounds.world_to_display(Vec2::new(960.0, 540.0)),
        Vec2::ZERO
    );

    let point = Vec2::new(123.0, 456.0);
    assert_eq!(
        bounds.display_to_world(bounds.world_to_display(point)),
        point
    );
}

// -----------------------------------------------------------------------------
// Map files
// -----------------------------------------------------------------------------

#[test]
fn test_parse_map_json_reads_records_in_order() {
    let json = r#"[
        {"x": 0, "y": 440, "width": 640, "height": 40, "color": [10, 20, 30], "ptype": "floor"},
        {"x": 200, "y": 300, "width": 120, "height": 20}
    ]"#;

    let platforms = parse_map_json(json).unwrap();
    assert_eq!(platforms.len(), 2);

    assert_eq!(platforms[0].rect(), Aabb::new(0.0, 440.0, 640.0, 40.0));
    assert_eq!(platforms[0].tag(), &PlatformTag::new([10, 20, 30], "floor"));

    assert_eq!(platforms[1].x(), 200);
    assert_eq!(platforms[1].tag(), &PlatformTag::default());
}

#[test]
fn test_parse_map_json_rejects_negative_size() {
    let json = r#"[
        {"x": 0, "y": 0, "width": 10, "height": 10},
        {"x": 0, "y": 0, "width": -5, "height": 10}
    ]"#;

    match parse_map_json(json) {
        Err(MapLoadError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn test_parse_map_json_reports_malformed_input() {
    let err = parse_map_json("[{\"x\": 0,").unwrap_err();
    assert!(matches!(err, MapLoadError::Parse { .. }));
    assert!(err.to_string().contains("<inline>"));

    let err = parse_map_json(r#"[{"x": 0, "y": 0}]"#).unwrap_err();
    assert!(matches!(err, MapLoadError::Parse { .. }));
}

#[test]
fn test_zero_size_platform_is_accepted() {
    let platforms = parse_map_json(r#"[{"x": 3, "y": 4, "width": 0, "height": 0}]"#).unwrap();
    assert!(platforms[0].is_degenerate());
}

#[test]
fn test_map_json_uses_four_space_indent_and_reloads() {
    let platforms = vec![
        Platform::new(0, 440, 640, 40),
        Platform::new(80, 160, 360, 40).with_tag(PlatformTag::new(TILE_COLOR, "tile")),
    ];

    let json = map_to_json(&platforms).unwrap();
    assert!(json.starts_with("[\n    {\n        \"x\": 0,"), "{}", json);
    assert!(json.contains("\"ptype\": \"tile\""));

    assert_eq!(parse_map_json(&json).unwrap(), platforms);
}

#[test]
fn test_load_map_file_reports_missing_file() {
    let err = load_map_file(std::path::Path::new("does/not/exist.json")).unwrap_err();
    match err {
        MapLoadError::Io { file, .. } => assert!(file.contains("exist.json")),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn test_save_then_load_map_file() {
    let path = std::env::temp_dir().join(format!("push_platformer_map_{}.json", std::process::id()));
    let platforms = vec![Platform::new(1, 2, 3, 4), Platform::new(5, 6, 7, 8)];

    save_map_file(&path, &platforms).unwrap();
    let loaded = load_map_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, platforms);
}

#[test]
fn test_shipped_map_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/maps/level_01.json");
    let platforms = load_map_file(&path).unwrap();
    assert!(!platforms.is_empty());

    let world = CollisionWorld::with_platforms(WorldBounds::default(), platforms);
    let spawn = crate::content::PlayerSpawnConfig::default().rect();
    assert!(validate_level(&world, spawn).is_empty());
}

// -----------------------------------------------------------------------------
// Generators
// -----------------------------------------------------------------------------

#[test]
fn test_tile_rows_merge_horizontal_runs() {
    let platforms = platforms_from_tile_rows(&["0110", "1001"], 10);

    let rects: Vec<Aabb> = platforms.iter().map(Platform::rect).collect();
    assert_eq!(
        rects,
        vec![
            Aabb::new(10.0, 0.0, 20.0, 10.0),
            Aabb::new(0.0, 10.0, 10.0, 10.0),
            Aabb::new(30.0, 10.0, 10.0, 10.0),
        ]
    );
    assert!(platforms.iter().all(|p| p.tag().color == TILE_COLOR));
}

#[test]
fn test_builtin_tile_level() {
    let platforms = platforms_from_tile_rows(&DEFAULT_TILE_ROWS, 40);

    assert_eq!(platforms.len(), 6);
    // Wide ledge on row 4.
    assert_eq!(platforms[2].rect(), Aabb::new(80.0, 160.0, 360.0, 40.0));
    // Floor spans the full width.
    assert_eq!(platforms[5].rect(), Aabb::new(0.0, 320.0, 600.0, 40.0));
}

#[test]
fn test_generate_grid_positions_row_major() {
    let spec = GridSpec {
        rows: 2,
        cols: 3,
        tile_size: 64,
        gap: 4,
        start_x: 50,
        start_y: 350,
        color: [1, 2, 3],
    };

    let platforms = generate_grid(&spec);
    assert_eq!(platforms.len(), 6);
    assert_eq!((platforms[0].x(), platforms[0].y()), (50, 350));
    assert_eq!((platforms[1].x(), platforms[1].y()), (118, 350));
    assert_eq!((platforms[3].x(), platforms[3].y()), (50, 418));
    assert_eq!((platforms[5].x(), platforms[5].y()), (186, 418));
    assert!(platforms.iter().all(|p| p.width() == 64 && p.height() == 64));
    assert_eq!(platforms[4].tag(), &PlatformTag::new([1, 2, 3], "grid"));
}

#[test]
fn test_generate_grid_empty_axis_yields_nothing() {
    let tall = GridSpec {
        rows: u32::MAX,
        cols: 0,
        tile_size: 32,
        gap: 0,
        start_x: 0,
        start_y: 0,
        color: TILE_COLOR,
    };
    assert!(generate_grid(&tall).is_empty());

    let wide = GridSpec {
        rows: 0,
        cols: u32::MAX,
        ..tall
    };
    assert!(generate_grid(&wide).is_empty());
}

#[test]
fn test_generate_grid_saturates_coordinates() {
    let spec = GridSpec {
        rows: 1,
        cols: 3,
        tile_size: 64,
        gap: 0,
        start_x: i32::MAX - 10,
        start_y: -5,
        color: TILE_COLOR,
    };

    let platforms = generate_grid(&spec);
    assert_eq!(platforms.len(), 3);
    assert_eq!(platforms[0].x(), i32::MAX - 10);
    assert_eq!(platforms[1].x(), i32::MAX);
    assert_eq!(platforms[2].x(), i32::MAX);
    assert!(platforms.iter().all(|p| p.y() == -5));
}

#[test]
fn test_grid_spec_defaults_from_ron() {
    let spec: GridSpec =
        ron::from_str("(rows: 1, cols: 4, tile_size: 32, start_x: 0, start_y: 0)").unwrap();
    assert_eq!(spec.gap, 0);
    assert_eq!(spec.color, TILE_COLOR);
    assert_eq!(generate_grid(&spec)[3].x(), 96);
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_validate_level_reports_each_problem() {
    let world = CollisionWorld::with_platforms(
        bounds(),
        vec![
            Platform::new(0, 440, 640, 40),
            Platform::new(300, 300, 0, 20),
            Platform::new(90, 90, 40, 40),
            Platform::new(620, 100, 40, 20),
        ],
    );
    let spawn = Aabb::new(100.0, 100.0, 40.0, 40.0);

    assert_eq!(
        validate_level(&world, spawn),
        vec![
            LevelWarning::DegeneratePlatform { index: 1 },
            LevelWarning::SpawnOverlap { index: 2 },
            LevelWarning::OutOfBounds { index: 3 },
        ]
    );
}

#[test]
fn test_builtin_level_is_clean_for_default_spawn() {
    let world = CollisionWorld::with_platforms(
        WorldBounds::default(),
        platforms_from_tile_rows(&DEFAULT_TILE_ROWS, 40),
    );
    let spawn = crate::content::PlayerSpawnConfig::default().rect();
    assert!(validate_level(&world, spawn).is_empty());
}
