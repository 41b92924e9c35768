//! Content domain: tests for locomotion RON parsing and range validation.

use super::*;
use crate::movement::GameLayer;

const SANDBOX_RON: &str = r#"
(
    schema_version: 1,
    controller: (
        gravity: 30.0,
        jump_force: 420.0,
        max_jump_time: 0.25,
        dash_distance: 200.0,
        dash_speed: 900.0,
        coyote_time: 0.1,
        ground_check_offset: 0.2,
        time_until_max_gravity: 0.8,
        max_fall_speed: 900.0,
        max_jumps: 2,
        ground_tag: "Ground",
        ground_layer: Ground,
        collision_layers: [Ground, Wall],
        ledge_exit_coyote: Grace,
    ),
    stats: (
        move_speed: 60.0,
        acceleration: 40.0,
        max_speed: 320.0,
    ),
)
"#;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_defaults() {
    let defaults: LocomotionDefaults = parse_single("inline", SANDBOX_RON).unwrap();

    assert_eq!(defaults.schema_version, 1);
    assert_eq!(defaults.controller.max_jumps, 2);
    assert_eq!(defaults.controller.jump_force, 420.0);
    assert_eq!(defaults.controller.ground_layer, GameLayer::Ground);
    assert_eq!(
        defaults.controller.collision_layers,
        vec![GameLayer::Ground, GameLayer::Wall]
    );
    assert_eq!(defaults.controller.ledge_exit_coyote, LedgeExitCoyote::Grace);
    assert_eq!(defaults.stats.max_speed, 320.0);
    assert!(validate_defaults(&defaults).is_empty());
}

#[test]
fn test_parse_partial_controller_uses_defaults() {
    let ron = r#"
    (
        schema_version: 1,
        controller: (max_jumps: 3),
        stats: (move_speed: 5.0, acceleration: 2.0, max_speed: 10.0),
    )
    "#;
    let defaults: LocomotionDefaults = parse_single("inline", ron).unwrap();

    assert_eq!(defaults.controller.max_jumps, 3);
    assert_eq!(
        defaults.controller.ledge_exit_coyote,
        LedgeExitCoyote::CancelImmediately
    );
    assert_eq!(
        defaults.controller.dash_distance,
        LocomotionConfig::default().dash_distance
    );
}

#[test]
fn test_unknown_layer_rejected() {
    let ron = r#"
    (
        schema_version: 1,
        controller: (collision_layers: [Ground, Sensor]),
        stats: (move_speed: 5.0, acceleration: 2.0, max_speed: 10.0),
    )
    "#;
    let err = parse_single::<LocomotionDefaults>("inline", ron).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<LocomotionDefaults>("broken.ron", "(schema_version: )").unwrap_err();

    match &err {
        ConfigError::Parse { file, .. } => assert_eq!(file, "broken.ron"),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let errors = load_locomotion_defaults(std::path::Path::new("does/not/exist")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ConfigError::Io { .. }));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(LocomotionConfig::default().validate().is_empty());
    assert!(MovementStats::default().validate().is_empty());
}

#[test]
fn test_zero_max_jumps_rejected() {
    let config = LocomotionConfig {
        max_jumps: 0,
        ..default()
    };
    let errors = config.validate();

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        ConfigError::OutOfRange {
            field: "max_jumps",
            ..
        }
    ));
}

#[test]
fn test_negative_stats_rejected() {
    let stats = MovementStats {
        move_speed: -1.0,
        acceleration: 2.0,
        max_speed: -5.0,
    };
    let fields: Vec<_> = stats
        .validate()
        .into_iter()
        .filter_map(|e| match e {
            ConfigError::OutOfRange { field, .. } => Some(field),
            _ => None,
        })
        .collect();

    assert_eq!(fields, vec!["move_speed", "max_speed"]);
}

#[test]
fn test_bounded_fields_rejected_outside_range() {
    let config = LocomotionConfig {
        ground_check_offset: 1.5,
        time_until_max_gravity: -0.1,
        dash_speed: 0.5,
        ..default()
    };

    assert_eq!(config.validate().len(), 3);
}

#[test]
fn test_oversized_coyote_time_rejected() {
    let config = LocomotionConfig {
        coyote_time: 1e20,
        ..default()
    };
    let errors = config.validate();

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        ConfigError::OutOfRange {
            field: "coyote_time",
            ..
        }
    ));
}

#[test]
fn test_non_finite_values_rejected() {
    let config = LocomotionConfig {
        gravity: f32::NAN,
        jump_force: f32::INFINITY,
        ..default()
    };

    assert_eq!(config.validate().len(), 2);
}

#[test]
fn test_out_of_range_message() {
    let err = ConfigError::OutOfRange {
        field: "dash_speed",
        value: 0.5,
        expected: ">= 1",
    };

    assert_eq!(err.to_string(), "'dash_speed' is 0.5 but must be >= 1");
}
