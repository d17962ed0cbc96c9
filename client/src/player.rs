use crate::{
    convert::{quat_from_na, quat_to_na, vec3_from_na},
    input::{InputAction, movement_input},
    physics::{PhysicsStep, PhysicsWorld},
};
use bevy::prelude::*;
use capsule_controller::{self as cc, CharacterController, ControllerOptions, RapierPhysicsWorld};
use leafwing_input_manager::prelude::ActionState;

const PLAYER_HEIGHT: f32 = 1.75;
const PLAYER_JUMP_IMPULSE: f32 = 10.0;
/// Box that marks the front of the capsule.
const FACING_INDICATOR_SIZE: Vec3 = Vec3::new(0.2, 0.2, 0.4);
/// How quickly the rendered transform catches up with the simulated one.
const INTERPOLATION_DECAY_RATE: f32 = 24.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_player);
    app.add_systems(FixedUpdate, drive_player.after(PhysicsStep));
    app.add_systems(Update, (respawn_player, interpolate));
}

#[derive(Component)]
pub struct Player;

/// The controller driving the player's body in [`PhysicsWorld`].
#[derive(Component, Deref, DerefMut)]
pub struct PlayerController(pub CharacterController<RapierPhysicsWorld>);

/// Pose written by the controller every fixed tick. The render `Transform`
/// follows it in [`interpolate`].
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct SimTransform {
    pub translation: Vec3,
    pub rotation: Quat,
}

/// Lets the controller write into the simulated pose.
struct SimSink<'a>(&'a mut SimTransform);

impl cc::VisualTransform for SimSink<'_> {
    fn set_translation(&mut self, translation: cc::Vec3) {
        self.0.translation = vec3_from_na(translation);
    }

    fn set_rotation(&mut self, rotation: cc::Quat) {
        self.0.rotation = quat_from_na(rotation);
    }
}

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut physics: ResMut<PhysicsWorld>,
) {
    spawn_player_entity(&mut commands, &mut meshes, &mut materials, &mut physics.0);
}

fn spawn_player_entity(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    physics: &mut RapierPhysicsWorld,
) {
    let options = ControllerOptions::default()
        .height(PLAYER_HEIGHT)
        .jump_impulse(PLAYER_JUMP_IMPULSE);
    let controller = match CharacterController::new(physics, &options) {
        Ok(controller) => controller,
        Err(err) => {
            error!("Failed to create player controller: {err}");
            return;
        }
    };

    let params = *controller.parameters();
    let half_length = params.segment_half_height();
    let translation = vec3_from_na(controller.state().position);

    commands
        .spawn((
            Name::new("Player"),
            Mesh3d(meshes.add(Mesh::from(Capsule3d {
                radius: params.radius,
                half_length,
            }))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::linear_rgb(0.2, 0.9, 0.8),
                ..default()
            })),
            Transform::from_translation(translation),
            SimTransform {
                translation,
                rotation: Quat::IDENTITY,
            },
            Player,
            PlayerController(controller),
        ))
        .with_children(|parent| {
            // Facing indicator, sticking out of the front (-Z is forward).
            parent.spawn((
                Name::new("FacingIndicator"),
                Mesh3d(meshes.add(Cuboid::from_size(FACING_INDICATOR_SIZE))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::BLACK,
                    unlit: true,
                    ..default()
                })),
                Transform::from_translation(facing_indicator_offset(params.radius)),
            ));
        });

    info!("Player spawned at {translation}");
}

/// Centre of the facing indicator, `radius + 0.1` ahead of the capsule axis.
fn facing_indicator_offset(radius: f32) -> Vec3 {
    Vec3::new(0.0, 0.0, -(radius + 0.1))
}

/// Remove the player's body and collider from [`PhysicsWorld`], then despawn
/// the player together with its children.
pub fn despawn_player(world: &mut World, entity: Entity) {
    let Ok(mut player) = world.get_entity_mut(entity) else {
        warn!("Player {entity} already despawned");
        return;
    };
    let controller = player.take::<PlayerController>();
    player.despawn();

    let Some(PlayerController(controller)) = controller else {
        return;
    };
    match world.get_resource_mut::<PhysicsWorld>() {
        Some(mut physics) => controller.dispose(&mut physics.0),
        None => warn!("No physics world to dispose player {entity} from"),
    }
    info!("Player {entity} despawned");
}

fn respawn_player(
    mut commands: Commands,
    actions: Res<ActionState<InputAction>>,
    player: Option<Single<Entity, With<Player>>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut physics: ResMut<PhysicsWorld>,
) {
    if !actions.just_pressed(&InputAction::Respawn) {
        return;
    }
    if let Some(player) = player {
        let entity = *player;
        commands.queue(move |world: &mut World| despawn_player(world, entity));
    }
    spawn_player_entity(&mut commands, &mut meshes, &mut materials, &mut physics.0);
}

fn drive_player(
    time: Res<Time>,
    actions: Res<ActionState<InputAction>>,
    mut physics: ResMut<PhysicsWorld>,
    camera: Option<Single<&Transform, With<Camera3d>>>,
    player: Option<Single<(&mut PlayerController, &mut SimTransform), With<Player>>>,
) {
    let Some(player) = player else {
        return;
    };
    let (mut controller, mut sim) = player.into_inner();
    let input = movement_input(&actions);
    let reference = camera.map(|camera| quat_to_na(camera.rotation));

    if let Err(err) = controller.tick(
        &mut physics.0,
        &mut SimSink(&mut *sim),
        &input,
        time.delta_secs(),
        reference,
    ) {
        error!("Player tick failed: {err}");
    }
}

fn interpolate(time: Res<Time>, mut query: Query<(&mut Transform, &SimTransform)>) {
    let dt = time.delta_secs();
    for (mut render_transform, sim_transform) in &mut query {
        nudge_toward(
            &mut render_transform,
            sim_transform,
            INTERPOLATION_DECAY_RATE,
            dt,
        );
    }
}

/// Frame-rate independent exponential approach of `render` toward `sim`.
fn nudge_toward(render: &mut Transform, sim: &SimTransform, decay_rate: f32, dt: f32) {
    render
        .translation
        .smooth_nudge(&sim.translation, decay_rate, dt);
    let t = 1.0 - (-decay_rate * dt).exp();
    render.rotation = render.rotation.slerp(sim.rotation, t);
}
