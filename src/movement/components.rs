//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, slopes)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

impl GameLayer {
    /// Combine a list of layers into a single query mask.
    pub fn mask_of(layers: &[GameLayer]) -> LayerMask {
        layers
            .iter()
            .fold(LayerMask::NONE, |mask, layer| mask | LayerMask::from(*layer))
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Free-form tag on a collider, compared against the configured ground tag
/// by the contact callbacks.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Tag(pub String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

/// Side of the character a contacted object was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitDirection {
    Right,
    Left,
    Up,
    Down,
}

/// Result of the downward ground cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub entity: Entity,
    pub point: Vec2,
    pub normal: Vec2,
    pub distance: f32,
}
