//! Movement domain: avian2d adapters for the engine's host traits.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GroundHit;
use crate::movement::engine::PositionIntegrator;
use crate::movement::sensor::SpatialProbe;

/// Spatial queries against the avian2d world, never hitting `owner` itself.
pub struct AvianProbe<'a, 'w, 's> {
    pub query: &'a SpatialQuery<'w, 's>,
    pub owner: Entity,
}

impl AvianProbe<'_, '_, '_> {
    fn filter(&self, mask: LayerMask) -> SpatialQueryFilter {
        SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.owner])
    }
}

impl SpatialProbe for AvianProbe<'_, '_, '_> {
    fn box_cast(
        &self,
        origin: Vec2,
        size: Vec2,
        direction: Dir2,
        distance: f32,
        mask: LayerMask,
    ) -> Option<GroundHit> {
        let shape = Collider::rectangle(size.x, size.y);
        let config = ShapeCastConfig::from_max_distance(distance);

        self.query
            .cast_shape(&shape, origin, 0.0, direction, &config, &self.filter(mask))
            .map(|hit| GroundHit {
                entity: hit.entity,
                point: hit.point1,
                normal: hit.normal1,
                distance: hit.distance,
            })
    }

    fn ray_cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        distance: f32,
        mask: LayerMask,
    ) -> Option<Entity> {
        self.query
            .cast_ray(origin, direction, distance, true, &self.filter(mask))
            .map(|hit| hit.entity)
    }
}

/// Moves a rigid body by writing its `Position` directly; the solver resolves
/// any resulting overlap. Linear velocity is zeroed so the engine stays the
/// only source of motion.
pub struct AvianBody<'a> {
    pub position: &'a mut Position,
    pub linear_velocity: &'a mut LinearVelocity,
}

impl PositionIntegrator for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position.0
    }

    fn move_position(&mut self, position: Vec2) {
        self.position.0 = position;
        self.linear_velocity.0 = Vec2::ZERO;
    }
}

/// Half extents of a rectangular collider, `None` for any other shape.
pub fn rectangle_half_extents(collider: &Collider) -> Option<Vec2> {
    collider
        .shape_scaled()
        .as_cuboid()
        .map(|c| Vec2::new(c.half_extents.x, c.half_extents.y))
}
