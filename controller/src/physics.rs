//! Physics backend abstraction.
//!
//! The controller never touches a physics engine directly. It issues commands
//! and queries through [`PhysicsBackend`], which keeps the movement logic
//! testable against a recording double and leaves room for another engine.
//! [`crate::RapierPhysicsWorld`] is the rapier3d implementation.

use crate::{BodyMaterial, Vec3};

/// Dynamic character body to create.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDesc {
    pub translation: Vec3,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Lock all rotations so the capsule cannot tip over.
    pub lock_rotations: bool,
}

impl BodyDesc {
    pub fn character(translation: Vec3, material: &BodyMaterial) -> Self {
        Self {
            translation,
            linear_damping: material.linear_damping,
            angular_damping: material.angular_damping,
            lock_rotations: true,
        }
    }
}

/// Y-aligned capsule collider to attach to a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapsuleDesc {
    /// Half-height of the cylindrical segment (excludes the caps).
    pub half_height: f32,
    pub radius: f32,
    pub friction: f32,
    pub restitution: f32,
}

/// Downward (or any) ray query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayQuery<C> {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
    pub max_distance: f32,
    /// Treat the inside of shapes as solid (a ray starting inside hits at 0).
    pub solid: bool,
    /// Collider to ignore, usually the caster's own.
    pub exclude: Option<C>,
}

/// First surface hit by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Time of impact: distance along the unit ray direction.
    pub toi: f32,
}

/// Narrow command/query surface the controller needs from a physics engine.
///
/// Lookups on unknown handles return `None`; mutations on unknown handles are
/// ignored and reported as `false`.
pub trait PhysicsBackend {
    type BodyHandle: Copy + std::fmt::Debug + PartialEq;
    type ColliderHandle: Copy + std::fmt::Debug + PartialEq;

    fn create_body(&mut self, desc: &BodyDesc) -> Self::BodyHandle;

    fn create_capsule(&mut self, body: Self::BodyHandle, desc: &CapsuleDesc)
    -> Self::ColliderHandle;

    /// Remove a body together with every collider attached to it.
    fn remove_body(&mut self, body: Self::BodyHandle) -> bool;

    fn linear_velocity(&self, body: Self::BodyHandle) -> Option<Vec3>;

    fn set_linear_velocity(&mut self, body: Self::BodyHandle, velocity: Vec3) -> bool;

    /// Instantaneous change of momentum, waking the body.
    fn apply_impulse(&mut self, body: Self::BodyHandle, impulse: Vec3) -> bool;

    fn translation(&self, body: Self::BodyHandle) -> Option<Vec3>;

    fn cast_ray(&self, query: &RayQuery<Self::ColliderHandle>) -> Option<RayHit>;

    /// Advance the simulation by the engine-owned timestep.
    fn step(&mut self);
}
