//! Movement domain: player bootstrap from loaded locomotion content.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{ConfigError, LocomotionConfig, MovementStats};
use crate::movement::host::{AvianProbe, rectangle_half_extents};
use crate::movement::{GameLayer, LocomotionEngine, Player};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
pub const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, 100.0);

/// Spawn the player once content is loaded. Configuration faults stop the app.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Option<Res<LocomotionConfig>>,
    stats: Option<Res<MovementStats>>,
    existing_player: Query<Entity, With<Player>>,
    mut exit: MessageWriter<AppExit>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    // Content failed to load; the loader already reported why.
    let (Some(config), Some(stats)) = (config, stats) else {
        warn!("Locomotion content not available, player not spawned");
        return;
    };

    let collider = Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y);
    let engine = match build_engine(&config, &collider) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Cannot spawn player: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    commands.spawn((
        // Identity & Movement
        (Player, engine, *stats, PendingGroundSeed),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            collider,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The engine owns gravity
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    info!(
        "Spawning player: max_jumps={}, max_speed={}, dash_distance={}",
        config.max_jumps, stats.max_speed, config.dash_distance
    );
}

/// Marks a freshly spawned character whose initial ground check is pending.
#[derive(Component, Debug)]
pub struct PendingGroundSeed;

/// Initial grounded check, run on the first fixed tick after spawn so the
/// spatial query sees the character's surroundings.
pub(crate) fn seed_spawn_grounding(
    mut commands: Commands,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &mut LocomotionEngine, &Position), With<PendingGroundSeed>>,
) {
    for (entity, mut engine, position) in &mut query {
        let probe = AvianProbe {
            query: &spatial_query,
            owner: entity,
        };
        engine.seed_grounded(&probe, position.0);
        debug!(
            "Spawn ground check: apply_gravity={}",
            engine.state().apply_gravity
        );
        commands.entity(entity).remove::<PendingGroundSeed>();
    }
}

fn build_engine(
    config: &LocomotionConfig,
    collider: &Collider,
) -> Result<LocomotionEngine, ConfigError> {
    let half_extents = rectangle_half_extents(collider).ok_or(ConfigError::MissingCollider)?;
    LocomotionEngine::new(config.clone(), half_extents)
}
