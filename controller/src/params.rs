//! Construction-time configuration.
//!
//! [`ControllerOptions`] is what callers fill in; every field is optional and
//! falls back to the defaults in [`crate::constants`]. [`ControllerOptions::resolve`]
//! validates the result and splits it into the immutable [`MovementParameters`]
//! the controller runs on and the [`BodyMaterial`] handed to the physics engine.

use crate::{
    ConfigError, Vec3,
    constants::{
        DEFAULT_ACCELERATION, DEFAULT_AIR_CONTROL, DEFAULT_ANGULAR_DAMPING, DEFAULT_DECELERATION,
        DEFAULT_FRICTION, DEFAULT_GROUND_PROBE_DISTANCE, DEFAULT_HEIGHT, DEFAULT_JUMP_IMPULSE,
        DEFAULT_LINEAR_DAMPING, DEFAULT_MAX_SPEED, DEFAULT_POSITION, DEFAULT_RADIUS,
        DEFAULT_RESTITUTION, DEFAULT_ROTATION_SPEED,
    },
};

/// Optional overrides for a new character controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerOptions {
    pub radius: Option<f32>,
    pub height: Option<f32>,
    pub position: Option<Vec3>,
    pub max_speed: Option<f32>,
    pub acceleration: Option<f32>,
    pub deceleration: Option<f32>,
    pub rotation_speed: Option<f32>,
    pub jump_impulse: Option<f32>,
    pub air_control: Option<f32>,
    pub linear_damping: Option<f32>,
    pub angular_damping: Option<f32>,
    pub friction: Option<f32>,
    pub restitution: Option<f32>,
    pub ground_probe_distance: Option<f32>,
}

impl ControllerOptions {
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    pub fn acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = Some(acceleration);
        self
    }

    pub fn deceleration(mut self, deceleration: f32) -> Self {
        self.deceleration = Some(deceleration);
        self
    }

    pub fn rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = Some(rotation_speed);
        self
    }

    pub fn jump_impulse(mut self, jump_impulse: f32) -> Self {
        self.jump_impulse = Some(jump_impulse);
        self
    }

    pub fn air_control(mut self, air_control: f32) -> Self {
        self.air_control = Some(air_control);
        self
    }

    pub fn friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn restitution(mut self, restitution: f32) -> Self {
        self.restitution = Some(restitution);
        self
    }

    pub fn damping(mut self, linear: f32, angular: f32) -> Self {
        self.linear_damping = Some(linear);
        self.angular_damping = Some(angular);
        self
    }

    pub fn ground_probe_distance(mut self, distance: f32) -> Self {
        self.ground_probe_distance = Some(distance);
        self
    }

    /// Fill in defaults and validate.
    pub fn resolve(&self) -> Result<ResolvedOptions, ConfigError> {
        let params = MovementParameters {
            radius: self.radius.unwrap_or(DEFAULT_RADIUS),
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
            max_speed: self.max_speed.unwrap_or(DEFAULT_MAX_SPEED),
            acceleration: self.acceleration.unwrap_or(DEFAULT_ACCELERATION),
            deceleration: self.deceleration.unwrap_or(DEFAULT_DECELERATION),
            rotation_speed: self.rotation_speed.unwrap_or(DEFAULT_ROTATION_SPEED),
            jump_impulse: self.jump_impulse.unwrap_or(DEFAULT_JUMP_IMPULSE),
            air_control: self.air_control.unwrap_or(DEFAULT_AIR_CONTROL),
            ground_probe_distance: self
                .ground_probe_distance
                .unwrap_or(DEFAULT_GROUND_PROBE_DISTANCE),
        };
        params.validate()?;

        let material = BodyMaterial {
            linear_damping: self.linear_damping.unwrap_or(DEFAULT_LINEAR_DAMPING),
            angular_damping: self.angular_damping.unwrap_or(DEFAULT_ANGULAR_DAMPING),
            friction: self.friction.unwrap_or(DEFAULT_FRICTION),
            restitution: self.restitution.unwrap_or(DEFAULT_RESTITUTION),
        };
        material.validate()?;

        let position = self.position.unwrap_or_else(|| Vec3::from(DEFAULT_POSITION));
        if let Some(&value) = position.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::NotFinite {
                field: "position",
                value,
            });
        }

        Ok(ResolvedOptions {
            params,
            material,
            position,
        })
    }
}

/// Output of [`ControllerOptions::resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedOptions {
    pub params: MovementParameters,
    pub material: BodyMaterial,
    pub position: Vec3,
}

/// Immutable movement tuning, fixed for the controller's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementParameters {
    pub radius: f32,
    /// Tip-to-tip capsule height.
    pub height: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub rotation_speed: f32,
    pub jump_impulse: f32,
    /// Fraction of `max_speed` available while airborne, in `[0, 1]`.
    pub air_control: f32,
    pub ground_probe_distance: f32,
}

impl Default for MovementParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            max_speed: DEFAULT_MAX_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            deceleration: DEFAULT_DECELERATION,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            air_control: DEFAULT_AIR_CONTROL,
            ground_probe_distance: DEFAULT_GROUND_PROBE_DISTANCE,
        }
    }
}

impl MovementParameters {
    /// Half-height of the cylindrical segment, the value rapier's `capsule_y` takes.
    #[inline]
    pub fn segment_half_height(&self) -> f32 {
        (self.height - 2.0 * self.radius) * 0.5
    }

    /// Distance from the capsule center to its bottom tip.
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// Planar speed cap for the given support state.
    #[inline]
    pub fn speed_cap(&self, grounded: bool) -> f32 {
        if grounded {
            self.max_speed
        } else {
            self.max_speed * self.air_control
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("radius", self.radius),
            ("height", self.height),
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("rotation_speed", self.rotation_speed),
            ("jump_impulse", self.jump_impulse),
            ("air_control", self.air_control),
            ("ground_probe_distance", self.ground_probe_distance),
        ] {
            finite(field, value)?;
        }

        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.height <= 2.0 * self.radius {
            return Err(ConfigError::DegenerateCapsule {
                radius: self.radius,
                height: self.height,
            });
        }

        non_negative("max_speed", self.max_speed)?;
        non_negative("rotation_speed", self.rotation_speed)?;
        non_negative("jump_impulse", self.jump_impulse)?;
        non_negative("ground_probe_distance", self.ground_probe_distance)?;
        positive("acceleration", self.acceleration)?;
        positive("deceleration", self.deceleration)?;

        if !(0.0..=1.0).contains(&self.air_control) {
            return Err(ConfigError::AirControlOutOfRange(self.air_control));
        }

        Ok(())
    }
}

/// Rigid-body and collider material for the character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMaterial {
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl Default for BodyMaterial {
    fn default() -> Self {
        Self {
            linear_damping: DEFAULT_LINEAR_DAMPING,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl BodyMaterial {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
            ("friction", self.friction),
            ("restitution", self.restitution),
        ] {
            finite(field, value)?;
            non_negative(field, value)?;
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value <= 0.0 {
        Err(ConfigError::NonPositive { field, value })
    } else {
        Ok(())
    }
}
