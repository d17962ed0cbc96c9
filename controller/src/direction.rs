use crate::{
    InputState, Quat, Vec3,
    constants::DIRECTION_EPS_SQ,
    types::{forward, right},
    utils::flatten_to_ground,
};

/// Camera-relative movement basis flattened onto the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl GroundBasis {
    /// World forward (-Z) and right (+X).
    pub fn world() -> Self {
        Self {
            forward: forward(),
            right: right(),
        }
    }

    /// Rotate the world axes by `reference` and flatten them.
    ///
    /// Pitch and roll of the reference are discarded so movement stays on the
    /// ground plane. If the reference looks straight up or down its forward axis
    /// has no horizontal part; the heading is then recovered from the flattened
    /// right axis, and if both collapse the world basis is used.
    pub fn from_reference(reference: Option<Quat>) -> Self {
        let Some(rotation) = reference else {
            return Self::world();
        };

        let fwd = flatten_to_ground(rotation * forward());
        let rgt = flatten_to_ground(rotation * right());

        match (fwd, rgt) {
            (Some(forward), Some(right)) => Self { forward, right },
            // up × right = forward for a -Z forward, +X right, +Y up basis.
            (None, Some(right)) => Self {
                forward: Vec3::y().cross(&right),
                right,
            },
            (Some(forward), None) => Self {
                forward,
                right: forward.cross(&Vec3::y()),
            },
            (None, None) => Self::world(),
        }
    }
}

/// Map the held keys to a normalized world-space direction.
///
/// Returns the zero vector when nothing is held or opposing keys cancel; callers
/// treat zero as "not moving".
pub fn movement_direction(input: &InputState, reference: Option<Quat>) -> Vec3 {
    if !input.any_direction() {
        return Vec3::zeros();
    }

    let basis = GroundBasis::from_reference(reference);
    let mut dir = Vec3::zeros();

    if input.forward {
        dir += basis.forward;
    }
    if input.backward {
        dir -= basis.forward;
    }
    if input.left {
        dir -= basis.right;
    }
    if input.right {
        dir += basis.right;
    }

    if dir.norm_squared() <= DIRECTION_EPS_SQ {
        return Vec3::zeros();
    }
    dir.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::yaw_rotation;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1.0e-5
    }

    fn keys(forward: bool, backward: bool, left: bool, right: bool) -> InputState {
        InputState {
            forward,
            backward,
            left,
            right,
            jump: false,
        }
    }

    #[test]
    fn cancelling_pairs_yield_zero() {
        // Every combination where each axis is either both-held or both-released.
        for fb in [false, true] {
            for lr in [false, true] {
                let input = keys(fb, fb, lr, lr);
                assert_eq!(movement_direction(&input, None), Vec3::zeros(), "{input:?}");
                assert_eq!(
                    movement_direction(&input, Some(yaw_rotation(1.0))),
                    Vec3::zeros()
                );
            }
        }
    }

    #[test]
    fn identity_reference_uses_world_axes() {
        assert!(close(movement_direction(&keys(true, false, false, false), None), Vec3::new(0.0, 0.0, -1.0)));
        assert!(close(movement_direction(&keys(false, true, false, false), None), Vec3::new(0.0, 0.0, 1.0)));
        assert!(close(movement_direction(&keys(false, false, true, false), None), Vec3::new(-1.0, 0.0, 0.0)));
        assert!(close(movement_direction(&keys(false, false, false, true), None), Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(
            movement_direction(&keys(true, false, false, false), Some(Quat::identity())),
            movement_direction(&keys(true, false, false, false), None)
        );
    }

    #[test]
    fn diagonal_is_normalized() {
        let dir = movement_direction(&keys(true, false, false, true), None);
        assert!((dir.norm() - 1.0).abs() < 1.0e-6);
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!(close(dir, Vec3::new(s, 0.0, -s)));
    }

    #[test]
    fn forward_follows_camera_yaw() {
        // Camera turned 90 degrees left looks down -X.
        let dir = movement_direction(&keys(true, false, false, false), Some(yaw_rotation(FRAC_PI_2)));
        assert!(close(dir, Vec3::new(-1.0, 0.0, 0.0)), "{dir:?}");
    }

    #[test]
    fn camera_pitch_is_ignored() {
        let pitch = Quat::from_axis_angle(&Vec3::x_axis(), -0.7);
        let rotation = yaw_rotation(FRAC_PI_2) * pitch;
        let dir = movement_direction(&keys(true, false, false, false), Some(rotation));
        assert!(dir.y.abs() < 1.0e-6);
        assert!(close(dir, Vec3::new(-1.0, 0.0, 0.0)), "{dir:?}");
    }

    #[test]
    fn straight_down_camera_keeps_a_heading() {
        let down = Quat::from_axis_angle(&Vec3::x_axis(), -FRAC_PI_2);
        let dir = movement_direction(&keys(true, false, false, false), Some(down));
        assert!(close(dir, Vec3::new(0.0, 0.0, -1.0)), "{dir:?}");
    }

    #[test]
    fn rolled_camera_recovers_right_from_forward() {
        // A quarter roll about Z stands the right axis upright.
        let roll = Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2);
        let basis = GroundBasis::from_reference(Some(roll));
        assert!(close(basis.forward, Vec3::new(0.0, 0.0, -1.0)), "{basis:?}");
        assert!(close(basis.right, Vec3::new(1.0, 0.0, 0.0)), "{basis:?}");

        let rotation = yaw_rotation(FRAC_PI_2) * roll;
        let right = movement_direction(&keys(false, false, false, true), Some(rotation));
        assert!(close(right, Vec3::new(0.0, 0.0, -1.0)), "{right:?}");
        let forward = movement_direction(&keys(true, false, false, false), Some(rotation));
        assert!(close(forward, Vec3::new(-1.0, 0.0, 0.0)), "{forward:?}");
    }

    #[test]
    fn basis_is_orthonormal_on_ground() {
        let basis = GroundBasis::from_reference(Some(yaw_rotation(0.3) * Quat::from_axis_angle(&Vec3::x_axis(), 0.4)));
        assert!(basis.forward.y.abs() < 1.0e-6);
        assert!(basis.right.y.abs() < 1.0e-6);
        assert!(basis.forward.dot(&basis.right).abs() < 1.0e-5);
        assert!((basis.forward.norm() - 1.0).abs() < 1.0e-6);
    }
}
