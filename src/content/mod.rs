//! Content domain: data-driven locomotion tuning loaded from RON.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{LedgeExitCoyote, LocomotionConfig, LocomotionDefaults, MovementStats};
pub use loader::{LOCOMOTION_FILE, load_locomotion_defaults, parse_single};
pub use validation::{ConfigError, validate_defaults};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

/// Where content files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentSystems {
    Load,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(Startup, load_content.in_set(ContentSystems::Load));
    }
}

/// Load locomotion content at startup. Any fault stops the app.
fn load_content(
    mut commands: Commands,
    paths: Res<ContentPaths>,
    mut exit: MessageWriter<AppExit>,
) {
    match load_locomotion_defaults(&paths.data_dir) {
        Ok(defaults) => {
            info!(
                "Loaded {} (schema v{}): max_jumps={}, dash_distance={}, coyote_time={}",
                LOCOMOTION_FILE,
                defaults.schema_version,
                defaults.controller.max_jumps,
                defaults.controller.dash_distance,
                defaults.controller.coyote_time
            );
            if defaults.controller.ledge_exit_coyote == LedgeExitCoyote::CancelImmediately {
                debug!("Ledge-exit coyote timer is cancelled as soon as it starts");
            }
            commands.insert_resource(defaults.controller);
            commands.insert_resource(defaults.stats);
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            exit.write(AppExit::error());
        }
    }
}
