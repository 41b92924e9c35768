//! Movement domain: intent messages produced by the input layer.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Edge of an intent. `Performed` marks a value change while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentPhase {
    Started,
    Performed,
    Canceled,
}

/// Directional move intent
#[derive(Debug, Clone, Copy)]
pub struct MoveIntent {
    pub phase: IntentPhase,
    pub value: Vec2,
}

impl Message for MoveIntent {}

#[derive(Debug, Clone, Copy)]
pub struct JumpIntent {
    pub phase: IntentPhase,
}

impl Message for JumpIntent {}

#[derive(Debug, Clone, Copy)]
pub struct DashIntent {
    pub phase: IntentPhase,
}

impl Message for DashIntent {}
