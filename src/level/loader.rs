//! Level domain: JSON map files shared with the map editor.
//!
//! A map is a JSON array of platform records in insertion order:
//! `{"x": 0, "y": 440, "width": 640, "height": 40, "color": [0, 200, 0], "ptype": "default"}`.
//! `color` and `ptype` are optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::level::data::{DEFAULT_PLATFORM_COLOR, DEFAULT_PLATFORM_KIND, Platform, PlatformTag};

/// Error type for map loading and saving failures.
#[derive(Debug)]
pub enum MapLoadError {
    Io { file: String, message: String },
    Parse { file: String, message: String },
    InvalidRecord { index: usize, reason: String },
    Serialize { message: String },
}

impl std::fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { file, message } => write!(f, "Failed to access map {}: {}", file, message),
            Self::Parse { file, message } => write!(f, "Failed to parse map {}: {}", file, message),
            Self::InvalidRecord { index, reason } => {
                write!(f, "Invalid platform record #{}: {}", index, reason)
            }
            Self::Serialize { message } => write!(f, "Failed to serialize map: {}", message),
        }
    }
}

impl std::error::Error for MapLoadError {}

fn default_color() -> [u8; 3] {
    DEFAULT_PLATFORM_COLOR
}

fn default_kind() -> String {
    DEFAULT_PLATFORM_KIND.to_string()
}

/// On-disk shape of a single platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PlatformRecord {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    #[serde(default = "default_color")]
    color: [u8; 3],
    #[serde(default = "default_kind")]
    ptype: String,
}

impl PlatformRecord {
    fn into_platform(self, index: usize) -> Result<Platform, MapLoadError> {
        if self.width < 0 || self.height < 0 {
            return Err(MapLoadError::InvalidRecord {
                index,
                reason: format!("negative size {}x{}", self.width, self.height),
            });
        }

        Ok(Platform::new(self.x, self.y, self.width, self.height)
            .with_tag(PlatformTag::new(self.color, self.ptype)))
    }
}

impl From<&Platform> for PlatformRecord {
    fn from(platform: &Platform) -> Self {
        Self {
            x: platform.x(),
            y: platform.y(),
            width: platform.width(),
            height: platform.height(),
            color: platform.tag().color,
            ptype: platform.tag().kind.clone(),
        }
    }
}

fn parse_records(file: &str, contents: &str) -> Result<Vec<Platform>, MapLoadError> {
    let records: Vec<PlatformRecord> =
        serde_json::from_str(contents).map_err(|e| MapLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_platform(index))
        .collect()
}

/// Parse a map from an in-memory JSON string.
pub fn parse_map_json(contents: &str) -> Result<Vec<Platform>, MapLoadError> {
    parse_records("<inline>", contents)
}

/// Load a map file, preserving record order.
pub fn load_map_file(path: &Path) -> Result<Vec<Platform>, MapLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| MapLoadError::Io {
        file: file_name.clone(),
        message: e.to_string(),
    })?;

    parse_records(&file_name, &contents)
}

/// Serialize platforms to the editor's pretty-printed JSON layout.
pub fn map_to_json(platforms: &[Platform]) -> Result<String, MapLoadError> {
    let records: Vec<PlatformRecord> = platforms.iter().map(PlatformRecord::from).collect();

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|e| MapLoadError::Serialize {
            message: e.to_string(),
        })?;

    String::from_utf8(buffer).map_err(|e| MapLoadError::Serialize {
        message: e.to_string(),
    })
}

pub fn save_map_file(path: &Path, platforms: &[Platform]) -> Result<(), MapLoadError> {
    let json = map_to_json(platforms)?;
    fs::write(path, json).map_err(|e| MapLoadError::Io {
        file: path.display().to_string(),
        message: e.to_string(),
    })
}
