//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::validation::{ConfigError, validate_defaults};

/// File holding controller and stat defaults, relative to the data directory.
pub const LOCOMOTION_FILE: &str = "locomotion.ron";

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from text. `file` is only used for error reporting.
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ConfigError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
}

/// Load a single RON struct (not wrapped in a list).
fn load_single_file<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: file_name.clone(),
        message: e.to_string(),
    })?;

    parse_single(&file_name, &contents)
}

/// Load and validate `locomotion.ron` from `base_path`.
/// Returns every error found so they can all be reported in one go.
pub fn load_locomotion_defaults(base_path: &Path) -> Result<LocomotionDefaults, Vec<ConfigError>> {
    let path = base_path.join(LOCOMOTION_FILE);
    let defaults = load_single_file::<LocomotionDefaults>(&path).map_err(|e| vec![e])?;

    let errors = validate_defaults(&defaults);
    if errors.is_empty() {
        Ok(defaults)
    } else {
        Err(errors)
    }
}
