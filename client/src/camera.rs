use crate::{input::InputAction, player::Player};
use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<OrbitCamera>();
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, orbit);
    app.add_systems(PostUpdate, follow_player);
}

const CAMERA_DECAY_RATE: f32 = 12.0;
/// Radians of orbit per pixel of mouse motion.
const ORBIT_SENSITIVITY: f32 = 0.005;
const MIN_PITCH: f32 = -0.3;
const MAX_PITCH: f32 = 1.2;

/// Third-person orbit around the player.
///
/// At `yaw = 0` the camera sits behind the player on +Z and looks down -Z,
/// so "forward" on the keyboard walks away from the camera.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub height: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 5.0,
            height: 2.0,
        }
    }
}

impl OrbitCamera {
    /// Camera position relative to the followed target.
    pub fn offset(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        rotation * Vec3::new(0.0, 0.0, self.distance) + Vec3::Y * self.height
    }
}

fn add_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        bevy::core_pipeline::tonemapping::Tonemapping::AcesFitted,
        Camera3d::default(),
        Transform::from_translation(orbit.offset()).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: Color::srgba(0.35, 0.48, 0.66, 1.0),
            directional_light_color: Color::srgba(1.0, 0.95, 0.85, 0.5),
            directional_light_exponent: 30.0,
            falloff: FogFalloff::from_visibility_colors(
                1000.0, // Fog distance
                Color::srgb(0.35, 0.5, 0.66),
                Color::srgb(0.8, 0.8, 0.7),
            ),
        },
    ));
}

fn orbit(actions: Res<ActionState<InputAction>>, mut orbit: ResMut<OrbitCamera>) {
    if !actions.pressed(&InputAction::Orbit) {
        return;
    }
    let delta = actions.axis_pair(&InputAction::Look);
    if delta == Vec2::ZERO {
        return;
    }
    orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
    orbit.pitch = (orbit.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
}

fn follow_player(
    mut camera: Single<&mut Transform, With<Camera3d>>,
    player: Option<Single<&Transform, (With<Player>, Without<Camera3d>)>>,
    orbit: Res<OrbitCamera>,
    time: Res<Time>,
) {
    let Some(player) = player else {
        return;
    };
    let target = player.translation;
    camera
        .translation
        .smooth_nudge(&(target + orbit.offset()), CAMERA_DECAY_RATE, time.delta_secs());
    camera.look_at(target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_sits_behind_and_above() {
        let offset = OrbitCamera::default().offset();
        assert!((offset - Vec3::new(0.0, 2.0, 5.0)).length() < 1.0e-5);
    }

    #[test]
    fn orbit_keeps_horizontal_distance() {
        let orbit = OrbitCamera {
            yaw: 1.3,
            ..default()
        };
        let offset = orbit.offset();
        assert!((Vec2::new(offset.x, offset.z).length() - 5.0).abs() < 1.0e-4);
        assert!((offset.y - 2.0).abs() < 1.0e-5);
    }
}
