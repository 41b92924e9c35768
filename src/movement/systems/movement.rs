//! Movement domain: frame, fixed and real-time locomotion systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MovementStats;
use crate::movement::host::{AvianBody, AvianProbe};
use crate::movement::{LocomotionEngine, Player};

/// Variable-rate tick: move force, jump force, gravity, ground alignment.
pub(crate) fn advance_frame_phase(
    time: Res<Time>,
    mut query: Query<(&mut LocomotionEngine, &MovementStats), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut engine, stats) in &mut query {
        engine.advance_frame(dt, stats);
    }
}

/// Coyote time runs on wall-clock time, unaffected by virtual time scaling.
pub(crate) fn tick_coyote_timers(
    time: Res<Time<Real>>,
    mut query: Query<&mut LocomotionEngine, With<Player>>,
) {
    let delta = time.delta();

    for mut engine in &mut query {
        engine.tick_real(delta);
    }
}

/// Fixed-rate tick: ground check and integration, or one dash step.
pub(crate) fn advance_fixed_phase(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &mut LocomotionEngine,
            &mut Position,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut engine, mut position, mut linear_velocity) in &mut query {
        let probe = AvianProbe {
            query: &spatial_query,
            owner: entity,
        };
        let mut body = AvianBody {
            position: &mut *position,
            linear_velocity: &mut *linear_velocity,
        };
        engine.advance_fixed(dt, &probe, &mut body);
    }
}
