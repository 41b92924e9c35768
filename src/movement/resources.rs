//! Movement domain: input sampling resources.

use bevy::prelude::*;

use crate::movement::IntentPhase;

/// Last sampled movement axis, kept so axis changes can be turned into
/// started/performed/canceled edges.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
}

impl MovementInput {
    /// Record a new axis sample and return the edge it produced, if any.
    pub fn sample(&mut self, axis: Vec2) -> Option<IntentPhase> {
        let previous = std::mem::replace(&mut self.axis, axis);

        match (previous == Vec2::ZERO, axis == Vec2::ZERO) {
            (true, false) => Some(IntentPhase::Started),
            (false, true) => Some(IntentPhase::Canceled),
            (false, false) if previous != axis => Some(IntentPhase::Performed),
            _ => None,
        }
    }
}
