use bevy::prelude::*;
use capsule_controller::{PhysicsBackend, RapierPhysicsWorld};

/// Fixed simulation rate. The Rapier timestep matches it.
pub const PHYSICS_HZ: f64 = 60.0;

/// The one physics world shared by the scene and the player.
#[derive(Resource, Deref, DerefMut)]
pub struct PhysicsWorld(pub RapierPhysicsWorld);

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self(RapierPhysicsWorld::new().with_timestep((1.0 / PHYSICS_HZ) as f32))
    }
}

/// Physics runs before anything that reads body state in the same fixed tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicsStep;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ));
    app.init_resource::<PhysicsWorld>();
    app.add_systems(FixedUpdate, step_physics.in_set(PhysicsStep));
}

fn step_physics(mut physics: ResMut<PhysicsWorld>) {
    physics.step();
}
