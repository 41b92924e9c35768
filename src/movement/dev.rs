//! Movement domain: sandbox room and debug-only state logging.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LocomotionConfig;
use crate::movement::{GameLayer, LocomotionEngine, Player, Tag};

pub(crate) fn spawn_test_room(mut commands: Commands, config: Option<Res<LocomotionConfig>>) {
    let ground_tag = config
        .map(|c| c.ground_tag.clone())
        .unwrap_or_else(|| LocomotionConfig::default().ground_tag);

    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    spawn_block(
        &mut commands,
        &ground_tag,
        ground_color,
        Vec2::new(800.0, 40.0),
        Transform::from_xyz(0.0, -200.0, 0.0),
        ground_layers,
    );

    // Left and right walls
    for x in [-420.0, 420.0] {
        spawn_block(
            &mut commands,
            "Wall",
            wall_color,
            Vec2::new(40.0, 500.0),
            Transform::from_xyz(x, 50.0, 0.0),
            wall_layers,
        );
    }

    // Platforms at increasing height
    for (x, y, width) in [(-250.0, -50.0, 150.0), (250.0, 50.0, 150.0), (0.0, 150.0, 120.0)] {
        spawn_block(
            &mut commands,
            &ground_tag,
            platform_color,
            Vec2::new(width, 20.0),
            Transform::from_xyz(x, y, 0.0),
            ground_layers,
        );
    }

    // Slope for ground alignment
    spawn_block(
        &mut commands,
        &ground_tag,
        ground_color,
        Vec2::new(220.0, 20.0),
        Transform::from_xyz(-130.0, -160.0, 0.0).with_rotation(Quat::from_rotation_z(0.35)),
        ground_layers,
    );
}

fn spawn_block(
    commands: &mut Commands,
    tag: &str,
    color: Color,
    size: Vec2,
    transform: Transform,
    layers: CollisionLayers,
) {
    commands.spawn((
        Tag::new(tag),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        transform,
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}

/// F3 dumps the current locomotion state of every player.
pub(crate) fn log_locomotion_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(&LocomotionEngine, &Transform), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (engine, transform) in &query {
        let state = engine.state();
        info!(
            "[LOCOMOTION] pos={:?} vel={:?} grounded={} (was {}) jumping={} jumps={} t_jump={:.3} dashing={} gravity={} coyote={:?}",
            transform.translation.truncate(),
            state.velocity,
            state.is_grounded,
            state.was_grounded_last_frame,
            state.is_jumping,
            state.times_jumped,
            state.time_jumping,
            state.is_dashing,
            state.apply_gravity,
            engine.coyote().remaining_secs(),
        );
    }
}
