//! Movement domain: platformer locomotion (jumps with coyote time and
//! multi-jump, gravity, ground alignment, fixed-distance dash).

mod bootstrap;
mod components;
mod coyote;
mod dash;
#[cfg(feature = "dev-tools")]
mod dev;
mod engine;
mod events;
pub mod host;
mod resources;
mod sensor;
mod systems;

pub use bootstrap::{PLAYER_SIZE, PLAYER_SPAWN, PendingGroundSeed};
pub use components::{GameLayer, GroundHit, HitDirection, Player, Tag};
pub use coyote::CoyoteTimer;
pub use dash::{DashRunner, DashStep};
pub use engine::{
    LocomotionEngine, LocomotionState, PositionIntegrator, TuningProvider, project_on_plane,
};
pub use events::{DashIntent, IntentPhase, JumpIntent, MoveIntent};
pub use resources::MovementInput;
pub use sensor::{GroundSensor, SpatialProbe};

use bevy::prelude::*;

use crate::content::ContentSystems;
use crate::movement::bootstrap::{seed_spawn_grounding, spawn_player};
use crate::movement::systems::{
    advance_fixed_phase, advance_frame_phase, apply_intents, handle_ground_contacts, read_input,
    tick_coyote_timers,
};

/// Ordering of the locomotion systems within each schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSystems {
    /// Input edges into intents, intents into the engine.
    Intents,
    /// Variable-rate frame phase and real-time timers.
    Frame,
    /// Contact callbacks and the fixed phase.
    Fixed,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<MoveIntent>()
            .add_message::<JumpIntent>()
            .add_message::<DashIntent>()
            .configure_sets(
                Update,
                (LocomotionSystems::Intents, LocomotionSystems::Frame).chain(),
            )
            .add_systems(Startup, spawn_player.after(ContentSystems::Load))
            .add_systems(
                Update,
                (read_input, apply_intents)
                    .chain()
                    .in_set(LocomotionSystems::Intents),
            )
            .add_systems(
                Update,
                (advance_frame_phase, tick_coyote_timers)
                    .chain()
                    .in_set(LocomotionSystems::Frame),
            )
            .add_systems(
                FixedUpdate,
                (
                    seed_spawn_grounding,
                    handle_ground_contacts,
                    advance_fixed_phase,
                )
                    .chain()
                    .in_set(LocomotionSystems::Fixed),
            );

        #[cfg(feature = "dev-tools")]
        {
            app.add_systems(Startup, dev::spawn_test_room.after(ContentSystems::Load))
                .add_systems(Update, dev::log_locomotion_state);
        }
    }
}
