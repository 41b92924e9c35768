//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::handle_ground_contacts;
pub(crate) use input::{apply_intents, read_input};
pub(crate) use movement::{advance_fixed_phase, advance_frame_phase, tick_coyote_timers};
