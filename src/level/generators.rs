//! Level domain: procedural level builders.

use serde::{Deserialize, Serialize};

use crate::level::data::{Platform, PlatformTag};

pub const TILE_COLOR: [u8; 3] = [0, 255, 0];

/// Built-in fallback level, one character per tile (`'1'` = solid).
pub const DEFAULT_TILE_ROWS: [&str; 9] = [
    "000000000000000",
    "000000000000000",
    "000001110000000",
    "000000010000000",
    "001111111110000",
    "000000000000000",
    "000000000011100",
    "000000000001000",
    "111111111111111",
];

/// Turn a tile map into platforms, row-major.
///
/// Each horizontal run of consecutive `'1'` tiles becomes one platform, so a
/// floor has no internal seams for the body to catch on.
pub fn platforms_from_tile_rows(rows: &[&str], tile_size: i32) -> Vec<Platform> {
    let mut platforms = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let y = row_idx as i32 * tile_size;
        let mut run_start: Option<usize> = None;

        for (col_idx, tile) in row.chars().chain(std::iter::once('0')).enumerate() {
            match (tile == '1', run_start) {
                (true, None) => run_start = Some(col_idx),
                (false, Some(start)) => {
                    let run = (col_idx - start) as i32;
                    platforms.push(
                        Platform::new(start as i32 * tile_size, y, run * tile_size, tile_size)
                            .with_tag(PlatformTag::new(TILE_COLOR, "tile")),
                    );
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    platforms
}

/// Layout of a rectangular block of tiles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
    pub tile_size: i32,
    #[serde(default)]
    pub gap: i32,
    pub start_x: i32,
    pub start_y: i32,
    #[serde(default = "default_grid_color")]
    pub color: [u8; 3],
}

fn default_grid_color() -> [u8; 3] {
    TILE_COLOR
}

/// Tiles at `(start_x + col * (tile + gap), start_y + row * (tile + gap))`, row-major.
///
/// Coordinates saturate at the `i32` range instead of wrapping.
pub fn generate_grid(spec: &GridSpec) -> Vec<Platform> {
    if spec.rows == 0 || spec.cols == 0 {
        return Vec::new();
    }

    let stride = spec.tile_size.saturating_add(spec.gap);
    let offset = |start: i32, index: u32| {
        let index = i32::try_from(index).unwrap_or(i32::MAX);
        start.saturating_add(index.saturating_mul(stride))
    };

    (0..spec.rows)
        .flat_map(|row| (0..spec.cols).map(move |col| (row, col)))
        .map(|(row, col)| {
            Platform::new(
                offset(spec.start_x, col),
                offset(spec.start_y, row),
                spec.tile_size,
                spec.tile_size,
            )
            .with_tag(PlatformTag::new(spec.color, "grid"))
        })
        .collect()
}
