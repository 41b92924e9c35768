//! Movement domain: the locomotion state machine.
//!
//! The engine runs on two cadences driven by the host:
//!
//! - [`LocomotionEngine::advance_frame`] once per variable frame tick
//!   (move force, jump force, gravity, ground alignment)
//! - [`LocomotionEngine::advance_fixed`] once per fixed physics tick
//!   (ground check and position integration, or a dash step)
//!
//! plus [`LocomotionEngine::tick_real`] for the real-time coyote window and
//! the contact callbacks fed from the physics step. The engine owns no host
//! resources: spatial queries, the body and tuning stats are passed in per call.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::{ConfigError, LedgeExitCoyote, LocomotionConfig, MovementStats};
use crate::movement::coyote::CoyoteTimer;
use crate::movement::dash::DashRunner;
use crate::movement::sensor::{GroundSensor, SpatialProbe};
use crate::movement::{GameLayer, GroundHit, HitDirection, IntentPhase, Tag};

/// Supplies the stat-driven part of horizontal movement. All values are >= 0.
pub trait TuningProvider {
    fn move_speed(&self) -> f32;
    fn acceleration(&self) -> f32;
    fn max_speed(&self) -> f32;
}

impl TuningProvider for MovementStats {
    fn move_speed(&self) -> f32 {
        self.move_speed
    }

    fn acceleration(&self) -> f32 {
        self.acceleration
    }

    fn max_speed(&self) -> f32 {
        self.max_speed
    }
}

/// The body the engine moves. The host resolves any overlap a move creates.
pub trait PositionIntegrator {
    fn position(&self) -> Vec2;
    fn move_position(&mut self, position: Vec2);
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionState {
    pub velocity: Vec2,
    pub is_grounded: bool,
    pub was_grounded_last_frame: bool,
    pub is_moving: bool,
    pub is_jumping: bool,
    pub times_jumped: u32,
    pub time_jumping: f32,
    pub is_dashing: bool,
    pub apply_gravity: bool,
    pub current_movement_input: Vec2,
    pub current_ground_hit: Option<GroundHit>,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            is_grounded: false,
            was_grounded_last_frame: false,
            // A held-but-zero input leaves velocity.x untouched until the first move intent.
            is_moving: true,
            is_jumping: false,
            times_jumped: 0,
            time_jumping: 0.0,
            is_dashing: false,
            apply_gravity: false,
            current_movement_input: Vec2::ZERO,
            current_ground_hit: None,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionEngine {
    config: LocomotionConfig,
    sensor: GroundSensor,
    state: LocomotionState,
    coyote: CoyoteTimer,
    dash: Option<DashRunner>,
}

impl LocomotionEngine {
    /// Build an engine for a character whose collider has the given half
    /// extents. Rejects invalid configuration up front.
    pub fn new(config: LocomotionConfig, half_extents: Vec2) -> Result<Self, ConfigError> {
        if let Some(err) = config.validate().into_iter().next() {
            return Err(err);
        }
        if !half_extents.is_finite() || half_extents.x <= 0.0 || half_extents.y <= 0.0 {
            return Err(ConfigError::MissingCollider);
        }

        let sensor = GroundSensor {
            half_extents,
            check_offset: config.ground_check_offset,
            ground_mask: GameLayer::mask_of(&[config.ground_layer]),
            collision_mask: GameLayer::mask_of(&config.collision_layers),
        };

        Ok(Self {
            config,
            sensor,
            state: LocomotionState::default(),
            coyote: CoyoteTimer::default(),
            dash: None,
        })
    }

    /// Initial ground check at spawn. Airborne characters start falling.
    pub fn seed_grounded(&mut self, probe: &impl SpatialProbe, anchor: Vec2) {
        self.state.current_ground_hit = self.sensor.cast_ground(probe, anchor);
        if self.state.current_ground_hit.is_none() {
            self.state.apply_gravity = true;
        }
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded
    }

    pub fn coyote(&self) -> &CoyoteTimer {
        &self.coyote
    }

    pub fn dash(&self) -> Option<&DashRunner> {
        self.dash.as_ref()
    }

    // ------------------------------------------------------------------------
    // Intent intake
    // ------------------------------------------------------------------------

    pub fn on_move(&mut self, phase: IntentPhase, value: Vec2) {
        match phase {
            IntentPhase::Started => {
                self.state.is_moving = true;
                self.state.current_movement_input = value;
            }
            IntentPhase::Canceled => {
                self.state.is_moving = false;
                self.state.current_movement_input = value;
            }
            IntentPhase::Performed => {}
        }
    }

    pub fn on_jump(&mut self, phase: IntentPhase) {
        if phase == IntentPhase::Started && self.state.times_jumped < self.config.max_jumps {
            self.coyote.cancel();
            self.state.times_jumped += 1;
            self.state.is_jumping = true;
            debug!(
                "Jump {}/{} started",
                self.state.times_jumped, self.config.max_jumps
            );
        } else if phase == IntentPhase::Canceled {
            self.state.is_jumping = false;
            self.state.time_jumping = 0.0;
        }
    }

    pub fn on_dash(&mut self, phase: IntentPhase) {
        if phase != IntentPhase::Started || self.state.is_dashing {
            return;
        }

        self.state.is_dashing = true;
        let direction = self.state.current_movement_input;
        debug!("Dash started towards {:?}", direction);

        match DashRunner::new(direction) {
            Some(runner) => self.dash = Some(runner),
            None => self.end_dash(),
        }
    }

    // ------------------------------------------------------------------------
    // Frame phase
    // ------------------------------------------------------------------------

    pub fn advance_frame(&mut self, dt: f32, stats: &impl TuningProvider) {
        self.apply_move_force(dt, stats);
        self.apply_jump_force(dt);
        self.apply_gravity();
        self.align_move_force_to_ground();
    }

    pub fn apply_move_force(&mut self, dt: f32, stats: &impl TuningProvider) {
        if self.state.is_dashing {
            return;
        }

        if self.state.is_moving {
            let max_speed = stats.max_speed();
            self.state.velocity.x += self.state.current_movement_input.x
                * stats.move_speed()
                * stats.acceleration()
                * dt;
            self.state.velocity.x = self.state.velocity.x.clamp(-max_speed, max_speed);
        } else {
            self.state.velocity.x = 0.0;
        }
    }

    pub fn apply_jump_force(&mut self, dt: f32) {
        if self.state.is_dashing {
            return;
        }

        let can_jump = self.state.time_jumping < self.config.max_jump_time;
        if !can_jump && !self.coyote.is_active() {
            self.state.is_jumping = false;
        } else if self.state.is_jumping && self.state.times_jumped <= self.config.max_jumps {
            self.state.time_jumping += dt;
            self.state.velocity.y = self.config.jump_force;
        }
    }

    /// Gravity is applied per tick, not scaled by `dt`.
    pub fn apply_gravity(&mut self) {
        if self.state.is_grounded || self.state.is_dashing {
            return;
        }

        if !self.state.is_jumping && self.state.apply_gravity {
            self.state.velocity.y -= self.config.gravity;
            self.state.velocity.y = self.state.velocity.y.max(-self.config.max_fall_speed);
        }
    }

    /// Keep motion tangent to the ground under the character.
    pub fn align_move_force_to_ground(&mut self) {
        if !self.state.is_grounded || self.state.is_jumping {
            return;
        }

        if let Some(hit) = self.state.current_ground_hit {
            self.state.velocity = project_on_plane(self.state.velocity, hit.normal);
        }
    }

    // ------------------------------------------------------------------------
    // Fixed phase
    // ------------------------------------------------------------------------

    /// While dashing, the dash owns position integration.
    pub fn advance_fixed(
        &mut self,
        dt: f32,
        probe: &impl SpatialProbe,
        body: &mut impl PositionIntegrator,
    ) {
        if self.state.is_dashing {
            self.step_dash(dt, body);
            return;
        }

        self.state.was_grounded_last_frame = self.state.is_grounded;
        self.state.current_ground_hit = self.sensor.cast_ground(probe, body.position());
        self.state.is_grounded = self.state.current_ground_hit.is_some();
        self.state.apply_gravity = match self.config.ledge_exit_coyote {
            LedgeExitCoyote::CancelImmediately => !self.state.is_grounded,
            // An open grace window keeps gravity off until it elapses.
            LedgeExitCoyote::Grace => !self.state.is_grounded && !self.coyote.is_active(),
        };

        if self.state.is_grounded != self.state.was_grounded_last_frame {
            debug!("Grounded changed: is_grounded={}", self.state.is_grounded);
        }

        body.move_position(body.position() + self.state.velocity * dt);
    }

    fn step_dash(&mut self, dt: f32, body: &mut impl PositionIntegrator) {
        let Some(runner) = self.dash.as_mut() else {
            return;
        };

        let step = runner.step(
            body.position(),
            self.config.dash_speed,
            self.config.dash_distance,
            dt,
        );
        body.move_position(step.target);

        if step.finished {
            self.end_dash();
        }
    }

    /// Stop dashing and drop vertical momentum so falling resumes cleanly.
    pub fn end_dash(&mut self) {
        self.state.is_dashing = false;
        self.state.velocity.y = 0.0;
        if self.dash.take().is_some() {
            debug!("Dash ended");
        }
    }

    // ------------------------------------------------------------------------
    // Real-time timers
    // ------------------------------------------------------------------------

    /// Advance the coyote window by wall-clock time, independent of either tick.
    pub fn tick_real(&mut self, delta: Duration) {
        if self.coyote.tick(delta) {
            self.state.apply_gravity = true;
            debug!("Coyote time elapsed, gravity applies");
        }
    }

    // ------------------------------------------------------------------------
    // Ground contact callbacks
    // ------------------------------------------------------------------------

    pub fn is_ground_tag(&self, tag: Option<&Tag>) -> bool {
        tag.is_some_and(|tag| tag.0 == self.config.ground_tag)
    }

    /// Collision-begin with `other`. Only ground-tagged contacts below matter.
    pub fn on_contact_begin(
        &mut self,
        probe: &impl SpatialProbe,
        center: Vec2,
        dt: f32,
        other: Entity,
        tag: Option<&Tag>,
    ) {
        if !self.is_ground_tag(tag) {
            return;
        }
        let direction = self
            .sensor
            .direction_of_hit(probe, center, self.state.velocity, dt, other);
        self.land(direction);
    }

    /// Collision-end with `other`. Only ground-tagged contacts below matter.
    pub fn on_contact_end(
        &mut self,
        probe: &impl SpatialProbe,
        center: Vec2,
        dt: f32,
        other: Entity,
        tag: Option<&Tag>,
    ) {
        if !self.is_ground_tag(tag) {
            return;
        }
        let direction = self
            .sensor
            .direction_of_hit(probe, center, self.state.velocity, dt, other);
        self.leave_ground(direction);
    }

    /// Landing from above resets the jump session and supersedes coyote time.
    pub fn land(&mut self, direction: Option<HitDirection>) {
        if direction != Some(HitDirection::Down) {
            return;
        }

        self.state.velocity.y = 0.0;
        self.state.time_jumping = 0.0;
        self.state.times_jumped = 0;
        self.state.apply_gravity = false;
        self.coyote.cancel();
        debug!("Landed: jump session reset");
    }

    pub fn leave_ground(&mut self, direction: Option<HitDirection>) {
        if direction != Some(HitDirection::Down) {
            return;
        }

        match self.config.ledge_exit_coyote {
            LedgeExitCoyote::CancelImmediately => {
                if !self.coyote.is_active() && !self.state.is_jumping {
                    self.start_coyote();
                }
                if self.coyote.cancel() {
                    debug!("Left ground: coyote timer cancelled on start");
                }
            }
            LedgeExitCoyote::Grace => {
                // A second exit while the window is open tears it down.
                if self.coyote.cancel() {
                    debug!("Left ground again: coyote timer cancelled");
                } else if !self.state.is_jumping {
                    self.start_coyote();
                }
            }
        }
    }

    fn start_coyote(&mut self) {
        self.state.apply_gravity = false;
        self.coyote.start(self.config.coyote_time);
        debug!("Left ground: coyote time {}s", self.config.coyote_time);
    }
}

/// Remove the component of `vector` along `normal`.
pub fn project_on_plane(vector: Vec2, normal: Vec2) -> Vec2 {
    let sqr_len = normal.length_squared();
    if sqr_len < f32::EPSILON {
        return vector;
    }
    vector - normal * (vector.dot(normal) / sqr_len)
}
