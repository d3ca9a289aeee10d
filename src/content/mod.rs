//! Content domain: gameplay configuration loaded at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    GameplayDefaults, PlayerSpawnConfig, ProbeConfig, ProbeSource, SCHEMA_VERSION, WorldConfig,
};
pub use loader::{ContentLoadError, load_gameplay_defaults, parse_gameplay_defaults};

use bevy::prelude::*;
use std::path::PathBuf;

pub const GAMEPLAY_FILE: &str = "gameplay.ron";

/// Loads `gameplay.ron` from `base_path` while the app is being built, so
/// later plugins can read [`GameplayDefaults`] in their own `build`.
pub struct ContentPlugin {
    pub base_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets/data"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let path = self.base_path.join(GAMEPLAY_FILE);
        let defaults = match load_gameplay_defaults(&path) {
            Ok(defaults) => {
                info!(
                    "Loaded gameplay defaults from {} (schema v{})",
                    path.display(),
                    defaults.schema_version
                );
                defaults
            }
            Err(e) => {
                warn!("{}; using built-in gameplay defaults", e);
                GameplayDefaults::default()
            }
        };

        if defaults.schema_version != SCHEMA_VERSION {
            warn!(
                "gameplay defaults schema v{} differs from supported v{}",
                defaults.schema_version, SCHEMA_VERSION
            );
        }

        app.insert_resource(defaults);
    }
}
