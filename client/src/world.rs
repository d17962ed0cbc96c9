use crate::{convert::vec3_to_na, physics::PhysicsWorld};
use bevy::prelude::*;
use capsule_controller::{RapierPhysicsWorld, Vec3 as NaVec3, WorldStaticDef};

/// Visible extent of the ground. The collider under it is an infinite plane.
const GROUND_SIZE: f32 = 50.0;
const CUBE_SIZE: f32 = 1.0;
const CUBE_POSITION: Vec3 = Vec3::new(5.0, 0.5, 0.0);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup);
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut physics: ResMut<PhysicsWorld>,
) {
    info!("World setup");

    add_static_colliders(&mut physics.0);

    commands.spawn((
        Name::new("Ground"),
        Transform::from_xyz(0., 0., 0.),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE).build())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::linear_rgb(0.2, 0.3, 0.25),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    // cube
    commands.spawn((
        Name::new("Cube"),
        Mesh3d(meshes.add(Cuboid::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb_u8(124, 144, 255))),
        Transform::from_translation(CUBE_POSITION),
    ));

    // lights
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));
}

/// Colliders matching the visible ground and cube.
fn add_static_colliders(physics: &mut RapierPhysicsWorld) {
    physics.add_static(&WorldStaticDef::ground_plane(NaVec3::zeros()));
    physics.add_static(&WorldStaticDef::cuboid(
        vec3_to_na(CUBE_POSITION),
        vec3_to_na(Vec3::splat(CUBE_SIZE * 0.5)),
    ));
}
