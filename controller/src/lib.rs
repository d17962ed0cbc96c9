pub mod constants;
pub mod controller;
pub mod direction;
pub mod error;
pub mod ground;
pub mod input;
pub mod jump;
pub mod orientation;
pub mod params;
pub mod physics;
pub mod rapier_world;
pub mod speed;
pub mod types;
pub mod utils;
pub mod visual;

#[cfg(test)]
mod mock;

// Re-export Rapier so downstream crates can reach Rapier types without
// depending on `rapier3d` directly.
pub use rapier3d;

pub use constants::{
    DEFAULT_AIR_CONTROL, DEFAULT_GROUND_PROBE_DISTANCE, DEFAULT_HEIGHT, DEFAULT_JUMP_IMPULSE,
    DEFAULT_MAX_SPEED, DEFAULT_RADIUS, DEFAULT_ROTATION_SPEED, GROUND_PROBE_EPSILON,
};
pub use controller::{CharacterController, CharacterState};
pub use direction::{GroundBasis, movement_direction};
pub use error::{ConfigError, ControllerError};
pub use ground::{GroundProbeResult, ground_ray, probe_ground};
pub use input::InputState;
pub use jump::JumpEdge;
pub use orientation::{facing_for, smooth_facing};
pub use params::{BodyMaterial, ControllerOptions, MovementParameters, ResolvedOptions};
pub use physics::{BodyDesc, CapsuleDesc, PhysicsBackend, RayHit, RayQuery};
pub use rapier_world::{ColliderShapeDef, RapierPhysicsWorld, WorldStaticDef};
pub use speed::{SpeedRamp, target_speed};
pub use types::{Quat, Vec2, Vec3};
pub use utils::{flatten_to_ground, to_planar, yaw_from_xz, yaw_rotation};
pub use visual::{Pose, VisualTransform};
