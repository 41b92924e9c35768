//! Movement domain: ground contact callbacks fed from avian2d collision messages.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::host::AvianProbe;
use crate::movement::{LocomotionEngine, Player, Tag};

/// Forward collision begin/end messages touching a player to its engine.
/// Runs in the fixed schedule so `dt` is the physics step.
pub(crate) fn handle_ground_contacts(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut players: Query<(&mut LocomotionEngine, &Position), With<Player>>,
    tags: Query<&Tag>,
) {
    let dt = time.delta_secs();

    for event in collision_start_events.read() {
        for (player, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok((mut engine, position)) = players.get_mut(player) else {
                continue;
            };
            let probe = AvianProbe {
                query: &spatial_query,
                owner: player,
            };
            engine.on_contact_begin(&probe, position.0, dt, other, tags.get(other).ok());
        }
    }

    for event in collision_end_events.read() {
        for (player, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok((mut engine, position)) = players.get_mut(player) else {
                continue;
            };
            let probe = AvianProbe {
                query: &spatial_query,
                owner: player,
            };
            engine.on_contact_end(&probe, position.0, dt, other, tags.get(other).ok());
        }
    }
}
