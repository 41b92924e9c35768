//! Movement domain: input sampling and intent dispatch.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    DashIntent, IntentPhase, JumpIntent, LocomotionEngine, MoveIntent, MovementInput, Player,
};

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

/// Turn keyboard state into intent edges.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
    mut move_intents: MessageWriter<MoveIntent>,
    mut jump_intents: MessageWriter<JumpIntent>,
    mut dash_intents: MessageWriter<DashIntent>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (dash direction)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let axis = Vec2::new(x, y).normalize_or_zero();
    if let Some(phase) = input.sample(axis) {
        move_intents.write(MoveIntent { phase, value: axis });
    }

    if keyboard.any_just_pressed(JUMP_KEYS) {
        jump_intents.write(JumpIntent {
            phase: IntentPhase::Started,
        });
    }
    if keyboard.any_just_released(JUMP_KEYS) {
        jump_intents.write(JumpIntent {
            phase: IntentPhase::Canceled,
        });
    }
    if keyboard.any_just_pressed(DASH_KEYS) {
        dash_intents.write(DashIntent {
            phase: IntentPhase::Started,
        });
    }
}

/// Deliver intents to every controlled character, in arrival order per kind.
pub(crate) fn apply_intents(
    mut move_intents: MessageReader<MoveIntent>,
    mut jump_intents: MessageReader<JumpIntent>,
    mut dash_intents: MessageReader<DashIntent>,
    mut query: Query<&mut LocomotionEngine, With<Player>>,
) {
    let moves: Vec<MoveIntent> = move_intents.read().copied().collect();
    let jumps: Vec<JumpIntent> = jump_intents.read().copied().collect();
    let dashes: Vec<DashIntent> = dash_intents.read().copied().collect();

    for mut engine in &mut query {
        for intent in &moves {
            engine.on_move(intent.phase, intent.value);
        }
        for intent in &jumps {
            engine.on_jump(intent.phase);
        }
        // Dash reads the movement input, so it goes after moves.
        for intent in &dashes {
            engine.on_dash(intent.phase);
        }
    }
}
