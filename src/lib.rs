//! Platformer locomotion controller.
//!
//! - [`movement`]: the locomotion engine (frame/fixed phases, ground sensor,
//!   coyote timer, dash runner) and its bevy/avian2d integration
//! - [`content`]: RON-backed tuning with load-time validation

pub mod content;
pub mod movement;
