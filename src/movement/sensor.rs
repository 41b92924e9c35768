//! Movement domain: ground sensing and contact-side classification.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GroundHit, HitDirection};

/// Spatial queries the controller needs from the host physics world.
pub trait SpatialProbe {
    /// Sweep an axis-aligned box of full `size` from `origin` along `direction`.
    fn box_cast(
        &self,
        origin: Vec2,
        size: Vec2,
        direction: Dir2,
        distance: f32,
        mask: LayerMask,
    ) -> Option<GroundHit>;

    /// Cast a ray and return the first entity it hits.
    fn ray_cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        distance: f32,
        mask: LayerMask,
    ) -> Option<Entity>;
}

/// Box-cast ground check and four-way contact rays around a rectangular collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    /// Half width and half height of the character's collider.
    pub half_extents: Vec2,
    pub check_offset: f32,
    pub ground_mask: LayerMask,
    pub collision_mask: LayerMask,
}

impl GroundSensor {
    /// Cast a box half as tall as the collider's vertical extent down from
    /// `anchor`. Must run every fixed tick since ground normals change.
    pub fn cast_ground(&self, probe: &impl SpatialProbe, anchor: Vec2) -> Option<GroundHit> {
        let size = Vec2::new(self.half_extents.x, self.half_extents.y * 0.5);
        let distance = self.half_extents.y + self.check_offset;

        probe.box_cast(anchor, size, Dir2::NEG_Y, distance, self.ground_mask)
    }

    /// Classify which side of the collider `target` lies on. Rays reach one
    /// tick of travel past the collider's extent on their axis.
    pub fn direction_of_hit(
        &self,
        probe: &impl SpatialProbe,
        center: Vec2,
        velocity: Vec2,
        dt: f32,
        target: Entity,
    ) -> Option<HitDirection> {
        let travel = velocity.length() * dt;
        let vertical = travel + self.half_extents.y;
        let horizontal = travel + self.half_extents.x;

        let hits = |direction: Dir2, distance: f32| {
            probe.ray_cast(center, direction, distance, self.collision_mask) == Some(target)
        };

        // Priority order matters when a collider touches more than one side.
        if hits(Dir2::X, horizontal) {
            debug!("Contact {:?} is right of the player", target);
            Some(HitDirection::Right)
        } else if hits(Dir2::NEG_X, horizontal) {
            debug!("Contact {:?} is left of the player", target);
            Some(HitDirection::Left)
        } else if hits(Dir2::Y, vertical) {
            debug!("Contact {:?} is on top of the player", target);
            Some(HitDirection::Up)
        } else if hits(Dir2::NEG_Y, vertical) {
            debug!("Contact {:?} is below the player", target);
            Some(HitDirection::Down)
        } else {
            None
        }
    }
}
