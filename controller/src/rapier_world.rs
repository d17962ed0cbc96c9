//! rapier3d-backed physics world.
//!
//! Owns every Rapier structure needed to simulate the character against static
//! world geometry and implements [`PhysicsBackend`] on top of them.
//!
//! Conventions
//! - Units are meters, gravity points down -Y.
//! - Static geometry is described with [`WorldStaticDef`] and inserted as a
//!   fixed rigid-body + attached collider.
//! - Scene queries run on the broad-phase BVH refreshed by [`PhysicsBackend::step`];
//!   geometry added after the last step is not visible to ray casts until the
//!   next step.

use rapier3d::na::{Translation3, UnitQuaternion};
use rapier3d::prelude::*;

use crate::{BodyDesc, CapsuleDesc, PhysicsBackend, RayHit, RayQuery, Vec3};

/// Earth gravity along -Y (m/s^2).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];

/// Definition of an immutable world collider.
///
/// Conventions
/// - Rotation is a unit quaternion.
/// - For planes, the normal is pose-derived: `normal = rotation * +Y`.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// World-space translation.
    pub translation: Vector<f32>,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
    pub friction: f32,
}

impl WorldStaticDef {
    /// Axis-aligned box centered at `translation`.
    pub fn cuboid(translation: Vec3, half_extents: Vec3) -> Self {
        Self {
            translation,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid { half_extents },
            friction: 1.0,
        }
    }

    /// Infinite horizontal ground through `translation`.
    pub fn ground_plane(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
            friction: 1.0,
        }
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space), offset along the pose-derived normal.
    ///
    /// A half-space is infinite; any "size" of the ground mesh is purely a
    /// rendering concern.
    Plane {
        /// Offset along the plane normal (meters).
        offset_along_normal: f32,
    },

    /// Oriented cuboid with given half-extents (meters).
    Cuboid { half_extents: Vector<f32> },
}

/// Rapier simulation state: bodies, colliders, phases, solver and pipeline.
pub struct RapierPhysicsWorld {
    pub gravity: Vector<f32>,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub islands: IslandManager,
    pub broad_phase: BroadPhaseBvh,
    pub narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for RapierPhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl RapierPhysicsWorld {
    /// Empty world with Earth gravity and a 1/60 s timestep.
    pub fn new() -> Self {
        Self {
            gravity: Vector::from(DEFAULT_GRAVITY),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    pub fn with_timestep(mut self, dt: f32) -> Self {
        self.integration_parameters.dt = dt;
        self
    }

    /// Seconds advanced by one [`PhysicsBackend::step`].
    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Insert static world geometry as a fixed body with one collider.
    pub fn add_static(&mut self, def: &WorldStaticDef) -> ColliderHandle {
        let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);
        let rb = RigidBodyBuilder::fixed().pose(iso).build();
        let rb_handle = self.bodies.insert(rb);

        let collider = collider_from_def(def);
        self.colliders
            .insert_with_parent(collider, rb_handle, &mut self.bodies)
    }

    /// Borrowed query view over the current broad-phase.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

impl PhysicsBackend for RapierPhysicsWorld {
    type BodyHandle = RigidBodyHandle;
    type ColliderHandle = ColliderHandle;

    fn create_body(&mut self, desc: &BodyDesc) -> RigidBodyHandle {
        let mut builder = RigidBodyBuilder::dynamic()
            .translation(desc.translation)
            .linear_damping(desc.linear_damping)
            .angular_damping(desc.angular_damping);
        if desc.lock_rotations {
            builder = builder.lock_rotations();
        }
        self.bodies.insert(builder.build())
    }

    fn create_capsule(&mut self, body: RigidBodyHandle, desc: &CapsuleDesc) -> ColliderHandle {
        let collider = ColliderBuilder::capsule_y(desc.half_height, desc.radius)
            .friction(desc.friction)
            .restitution(desc.restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, body, &mut self.bodies)
    }

    fn remove_body(&mut self, body: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                body,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    fn linear_velocity(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(body).map(|rb| *rb.linvel())
    }

    fn set_linear_velocity(&mut self, body: RigidBodyHandle, velocity: Vec3) -> bool {
        let Some(rb) = self.bodies.get_mut(body) else {
            return false;
        };
        rb.set_linvel(velocity, true);
        true
    }

    fn apply_impulse(&mut self, body: RigidBodyHandle, impulse: Vec3) -> bool {
        let Some(rb) = self.bodies.get_mut(body) else {
            return false;
        };
        rb.apply_impulse(impulse, true);
        true
    }

    fn translation(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(body).map(|rb| *rb.translation())
    }

    fn cast_ray(&self, query: &RayQuery<ColliderHandle>) -> Option<RayHit> {
        let mut filter = QueryFilter::new();
        if let Some(own) = query.exclude {
            filter = filter.exclude_collider(own);
        }
        let ray = Ray::new(Point::from(query.origin), query.direction);
        self.query_pipeline(filter)
            .cast_ray(&ray, query.max_distance, query.solid)
            .map(|(_, toi)| RayHit { toi })
    }

    fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// The pose lives on the parent rigid-body, so the collider is created with an
/// identity local transform.
fn collider_from_def(def: &WorldStaticDef) -> Collider {
    match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // Local frame of the fixed body: the plane passes through the body
            // origin, shifted along +Y by the offset.
            let halfspace = HalfSpace::new(Vector::y_axis());
            ColliderBuilder::new(SharedShape::new(halfspace))
                .translation(Vector::y() * *offset_along_normal)
                .friction(def.friction)
                .build()
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
                .friction(def.friction)
                .build()
        }
    }
}
