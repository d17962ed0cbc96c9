//! Character controller facade.
//!
//! [`CharacterController`] owns one physics body + capsule collider and drives
//! them once per simulation tick:
//!
//! 1. probe the ground below the capsule
//! 2. map the held keys to a camera-relative direction
//! 3. ramp the planar speed and decide on a jump
//! 4. write the velocity command (vertical part preserved), then the jump impulse
//! 5. blend the facing toward the direction of travel
//! 6. mirror the physics position and facing into the visual transform
//!
//! The host must step the physics engine before calling [`CharacterController::tick`].

use crate::{
    BodyDesc, CapsuleDesc, ConfigError, ControllerError, ControllerOptions, InputState,
    JumpEdge, MovementParameters, PhysicsBackend, Quat, SpeedRamp, Vec2, Vec3, VisualTransform,
    direction::movement_direction,
    ground::probe_ground,
    orientation::smooth_facing,
    types::up,
    utils::to_planar,
};
use std::fmt;

/// Read-only snapshot of a character after its latest tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterState {
    pub position: Vec3,
    pub orientation: Quat,
    /// Commanded planar velocity `(x, z)`.
    pub horizontal_velocity: Vec2,
    /// Vertical velocity as read from the physics body.
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub current_speed: f32,
}

/// Player-driven capsule on top of a [`PhysicsBackend`].
pub struct CharacterController<B: PhysicsBackend> {
    params: MovementParameters,
    body: B::BodyHandle,
    collider: B::ColliderHandle,
    facing: Quat,
    grounded: bool,
    ramp: SpeedRamp,
    jump: JumpEdge,
    position: Vec3,
    horizontal_velocity: Vec3,
    vertical_velocity: f32,
}

impl<B: PhysicsBackend> fmt::Debug for CharacterController<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterController")
            .field("body", &self.body)
            .field("collider", &self.collider)
            .field("grounded", &self.grounded)
            .field("speed", &self.ramp.current())
            .field("position", &self.position)
            .finish()
    }
}

impl<B: PhysicsBackend> CharacterController<B> {
    /// Validate `options` and create the body and collider in `physics`.
    ///
    /// Nothing is created if validation fails.
    pub fn new(physics: &mut B, options: &ControllerOptions) -> Result<Self, ConfigError> {
        let resolved = options.resolve()?;
        let params = resolved.params;

        let body = physics.create_body(&BodyDesc::character(resolved.position, &resolved.material));
        let collider = physics.create_capsule(
            body,
            &CapsuleDesc {
                half_height: params.segment_half_height(),
                radius: params.radius,
                friction: resolved.material.friction,
                restitution: resolved.material.restitution,
            },
        );

        log::info!(
            "character created at {:?}: radius {}, height {}, max speed {}",
            resolved.position,
            params.radius,
            params.height,
            params.max_speed
        );

        Ok(Self {
            params,
            body,
            collider,
            facing: Quat::identity(),
            grounded: false,
            ramp: SpeedRamp::default(),
            jump: JumpEdge::default(),
            position: resolved.position,
            horizontal_velocity: Vec3::zeros(),
            vertical_velocity: 0.0,
        })
    }

    /// Run one simulation tick. See the module docs for the order of operations.
    ///
    /// `reference` is the camera orientation movement is relative to; `None`
    /// means the world axes. Fails only if the body has vanished from `physics`.
    pub fn tick(
        &mut self,
        physics: &mut B,
        visual: &mut impl VisualTransform,
        input: &InputState,
        dt: f32,
        reference: Option<Quat>,
    ) -> Result<(), ControllerError> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let center = self.require(physics.translation(self.body))?;

        let was_grounded = self.grounded;
        self.grounded = probe_ground(physics, &self.params, center, self.collider).grounded();
        if was_grounded != self.grounded {
            log::debug!("grounded: {} -> {}", was_grounded, self.grounded);
        }

        let direction = movement_direction(input, reference);

        let planar = self.ramp.step(&self.params, direction, self.grounded, dt);
        let jump = self.jump.update(input.jump, self.grounded);

        let vertical = self.require(physics.linear_velocity(self.body))?.y;
        if !physics.set_linear_velocity(self.body, Vec3::new(planar.x, vertical, planar.z)) {
            return self.missing();
        }
        if jump {
            if !physics.apply_impulse(self.body, up() * self.params.jump_impulse) {
                return self.missing();
            }
            // Optimistic until the next probe confirms lift-off.
            self.grounded = false;
            log::debug!("jump impulse {}", self.params.jump_impulse);
        }

        self.facing = smooth_facing(self.facing, direction, self.params.rotation_speed, dt);

        self.position = self.require(physics.translation(self.body))?;
        self.horizontal_velocity = planar;
        self.vertical_velocity = vertical;

        visual.set_translation(self.position);
        visual.set_rotation(self.facing);
        Ok(())
    }

    /// Remove the body and collider from `physics`.
    pub fn dispose(self, physics: &mut B) {
        if physics.remove_body(self.body) {
            log::info!("character disposed");
        } else {
            log::warn!("character body {:?} was already gone on dispose", self.body);
        }
    }

    pub fn state(&self) -> CharacterState {
        CharacterState {
            position: self.position,
            orientation: self.facing,
            horizontal_velocity: to_planar(self.horizontal_velocity),
            vertical_velocity: self.vertical_velocity,
            grounded: self.grounded,
            current_speed: self.ramp.current(),
        }
    }

    pub fn parameters(&self) -> &MovementParameters {
        &self.params
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn facing(&self) -> Quat {
        self.facing
    }

    pub fn current_speed(&self) -> f32 {
        self.ramp.current()
    }

    pub fn body(&self) -> B::BodyHandle {
        self.body
    }

    pub fn collider(&self) -> B::ColliderHandle {
        self.collider
    }

    fn require<T>(&self, value: Option<T>) -> Result<T, ControllerError> {
        match value {
            Some(value) => Ok(value),
            None => self.missing(),
        }
    }

    fn missing<T>(&self) -> Result<T, ControllerError> {
        log::error!("character body {:?} missing from physics world", self.body);
        Err(ControllerError::MissingBody)
    }
}
