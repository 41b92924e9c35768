//! Data definitions for locomotion content files (RON).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

// ============================================================================
// locomotion.ron - single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionDefaults {
    pub schema_version: u32,
    pub controller: LocomotionConfig,
    pub stats: MovementStats,
}

/// What the ledge-exit contact handler does with the coyote timer it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum LedgeExitCoyote {
    /// Start the timer and tear it down in the same step. Gravity stays gated
    /// off until the next fixed tick re-evaluates grounding.
    #[default]
    CancelImmediately,
    /// Start the timer and let it run for the full `coyote_time`.
    Grace,
}

/// Per-character controller tuning. Copied into each engine at spawn and
/// never mutated afterwards.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Subtracted from vertical velocity once per frame tick while falling.
    pub gravity: f32,
    /// Upward velocity held while the jump intent is active.
    pub jump_force: f32,
    /// Seconds a single jump may keep applying `jump_force`.
    pub max_jump_time: f32,
    pub dash_distance: f32,
    pub dash_speed: f32,
    /// Real-time seconds of gravity grace after walking off a ledge.
    pub coyote_time: f32,
    /// Extra reach of the ground cast below the collider.
    pub ground_check_offset: f32,
    /// Reserved for gravity ramp-up; not read by the controller.
    pub time_until_max_gravity: f32,
    pub max_fall_speed: f32,
    pub max_jumps: u32,
    /// Tag that marks colliders as ground for contact callbacks.
    pub ground_tag: String,
    /// Layer the ground cast runs against.
    pub ground_layer: GameLayer,
    /// Layers the contact-side rays run against.
    pub collision_layers: Vec<GameLayer>,
    pub ledge_exit_coyote: LedgeExitCoyote,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            jump_force: 10.81,
            max_jump_time: 0.5,
            dash_distance: 200.0,
            dash_speed: 2.0,
            coyote_time: 0.1,
            ground_check_offset: 0.2,
            time_until_max_gravity: 0.8,
            max_fall_speed: 1.0,
            max_jumps: 2,
            ground_tag: "Ground".to_string(),
            ground_layer: GameLayer::Ground,
            collision_layers: vec![GameLayer::Ground, GameLayer::Wall],
            ledge_exit_coyote: LedgeExitCoyote::default(),
        }
    }
}

/// Movement tuning supplied by the character's stat block.
#[derive(Component, Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MovementStats {
    pub move_speed: f32,
    pub acceleration: f32,
    pub max_speed: f32,
}

impl Default for MovementStats {
    fn default() -> Self {
        Self {
            move_speed: 60.0,
            acceleration: 40.0,
            max_speed: 320.0,
        }
    }
}
