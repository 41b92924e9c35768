//! Movement domain: fixed-distance dash, stepped once per fixed tick.

use bevy::prelude::*;

/// Outcome of a single dash step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashStep {
    /// Position to move the body to this tick.
    pub target: Vec2,
    /// The dash has covered its distance and must end after this move.
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashRunner {
    direction: Vec2,
    already_dashed_distance: f32,
}

impl DashRunner {
    /// Returns `None` for a zero direction; such a dash ends on the spot.
    pub fn new(direction: Vec2) -> Option<Self> {
        if direction == Vec2::ZERO {
            return None;
        }
        Some(Self {
            direction,
            already_dashed_distance: 0.0,
        })
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn already_dashed_distance(&self) -> f32 {
        self.already_dashed_distance
    }

    /// Advance one fixed tick from `position`. Distance is measured between
    /// consecutive positions, so a non-unit direction still covers exactly
    /// `dash_distance`.
    pub fn step(&mut self, position: Vec2, dash_speed: f32, dash_distance: f32, dt: f32) -> DashStep {
        let mut target = position + self.direction * (dash_speed * dt);
        self.already_dashed_distance += target.distance(position);

        if self.already_dashed_distance >= dash_distance {
            let overshoot = self.already_dashed_distance - dash_distance;
            if overshoot > 0.0 {
                debug!("Dash overshot by {}, pulling back", overshoot);
            }
            target -= self.direction * overshoot;
            return DashStep {
                target,
                finished: true,
            };
        }

        DashStep {
            target,
            finished: false,
        }
    }
}
