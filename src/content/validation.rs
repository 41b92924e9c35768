//! Range validation for locomotion content, run once at load time.

use super::data::*;

/// A configuration fault. Surfaced once at startup, never per tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io {
        file: String,
        message: String,
    },
    Parse {
        file: String,
        message: String,
    },
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    /// The character has no rectangular collider to derive extents from.
    MissingCollider,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { file, message } => {
                write!(f, "Failed to load {}: IO error: {}", file, message)
            }
            ConfigError::Parse { file, message } => {
                write!(f, "Failed to load {}: Parse error: {}", file, message)
            }
            ConfigError::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "'{}' is {} but must be {}", field, value, expected),
            ConfigError::MissingCollider => {
                write!(f, "character has no rectangular collider")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Helper macro for checking a numeric field against a lower (and optional upper) bound
macro_rules! check_range {
    ($errors:expr, $owner:expr, $field:ident, min $min:expr, $expected:expr) => {
        let value = $owner.$field as f64;
        if !value.is_finite() || value < $min {
            $errors.push(ConfigError::OutOfRange {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
    ($errors:expr, $owner:expr, $field:ident, $min:expr => $max:expr, $expected:expr) => {
        let value = $owner.$field as f64;
        if !value.is_finite() || value < $min || value > $max {
            $errors.push(ConfigError::OutOfRange {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Helper macro for fields with no range constraint that still must be finite
macro_rules! check_finite {
    ($errors:expr, $owner:expr, $field:ident) => {
        let value = $owner.$field as f64;
        if !value.is_finite() {
            $errors.push(ConfigError::OutOfRange {
                field: stringify!($field),
                value,
                expected: "a finite number",
            });
        }
    };
}

impl LocomotionConfig {
    /// Returns every range violation, empty if the config is usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        check_finite!(errors, self, gravity);
        check_finite!(errors, self, jump_force);
        check_range!(errors, self, max_jump_time, min 0.0, ">= 0");
        check_range!(errors, self, dash_distance, min 1.0, ">= 1");
        check_range!(errors, self, dash_speed, min 1.0, ">= 1");
        check_range!(errors, self, coyote_time, 0.0 => 5.0, "within [0, 5]");
        check_range!(errors, self, ground_check_offset, 0.0 => 1.0, "within [0, 1]");
        check_range!(errors, self, time_until_max_gravity, 0.0 => 2.0, "within [0, 2]");
        check_range!(errors, self, max_fall_speed, min 1.0, ">= 1");
        check_range!(errors, self, max_jumps, min 1.0, ">= 1");

        errors
    }
}

impl MovementStats {
    /// Returns every range violation, empty if the stats are usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        check_range!(errors, self, move_speed, min 0.0, ">= 0");
        check_range!(errors, self, acceleration, min 0.0, ">= 0");
        check_range!(errors, self, max_speed, min 0.0, ">= 0");

        errors
    }
}

/// Validate a whole content file.
pub fn validate_defaults(defaults: &LocomotionDefaults) -> Vec<ConfigError> {
    let mut errors = defaults.controller.validate();
    errors.extend(defaults.stats.validate());
    errors
}
