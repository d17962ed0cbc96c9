use crate::{
    Quat, Vec3,
    constants::DIRECTION_EPS_SQ,
    utils::{to_planar, yaw_from_xz, yaw_rotation},
};

/// Facing that turns the character's local forward (-Z) onto `direction`.
///
/// Yaw only, so the capsule never tilts. `None` for a zero or vertical direction.
pub fn facing_for(direction: Vec3) -> Option<Quat> {
    yaw_from_xz(to_planar(direction)).map(yaw_rotation)
}

/// Blend `current` toward the facing of `direction`.
///
/// The slerp factor is `rotation_speed * dt` clamped to `[0, 1]`, so facing lags
/// direction changes by an amount inversely proportional to the rotation speed.
/// A zero direction leaves the facing untouched.
pub fn smooth_facing(current: Quat, direction: Vec3, rotation_speed: f32, dt: f32) -> Quat {
    if direction.norm_squared() <= DIRECTION_EPS_SQ {
        return current;
    }
    let Some(target) = facing_for(direction) else {
        return current;
    };

    let t = (rotation_speed * dt).clamp(0.0, 1.0);
    if !t.is_finite() || t <= 0.0 {
        return current;
    }

    current
        .try_slerp(&target, t, 1.0e-6)
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::forward;

    fn facing_dir(q: Quat) -> Vec3 {
        q * forward()
    }

    #[test]
    fn target_faces_movement() {
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let q = facing_for(dir).unwrap();
        assert!((facing_dir(q) - dir).norm() < 1.0e-5);
    }

    #[test]
    fn zero_direction_leaves_facing_unchanged() {
        let current = yaw_rotation(0.7);
        assert_eq!(smooth_facing(current, Vec3::zeros(), 5.0, 0.1), current);
        assert_eq!(smooth_facing(current, Vec3::zeros(), 5.0, 10.0), current);
    }

    #[test]
    fn full_factor_snaps_to_target() {
        let dir = Vec3::new(1.0, 0.0, 0.0);
        let q = smooth_facing(Quat::identity(), dir, 10.0, 0.5);
        assert!((facing_dir(q) - dir).norm() < 1.0e-5);
    }

    #[test]
    fn interpolation_contracts_toward_target() {
        let dir = Vec3::new(0.6, 0.0, 0.8);
        let target = facing_for(dir).unwrap();
        for factor in [0.05_f32, 0.25, 0.5, 0.9, 1.0] {
            let mut q = yaw_rotation(-1.2);
            for _ in 0..20 {
                let before = q.angle_to(&target);
                q = smooth_facing(q, dir, factor, 1.0);
                let after = q.angle_to(&target);
                assert!(after <= before + 1.0e-5, "factor {factor}: {after} > {before}");
            }
        }
    }

    #[test]
    fn half_turn_is_well_defined() {
        // Facing -Z, asked to face +Z: the 180 degree case must still progress.
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let target = facing_for(dir).unwrap();
        let q = smooth_facing(Quat::identity(), dir, 5.0, 0.1);
        assert!(q.angle_to(&target) < Quat::identity().angle_to(&target));
    }

    #[test]
    fn zero_dt_or_speed_does_not_rotate() {
        let dir = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(smooth_facing(Quat::identity(), dir, 5.0, 0.0), Quat::identity());
        assert_eq!(smooth_facing(Quat::identity(), dir, 0.0, 0.1), Quat::identity());
    }

    #[test]
    fn facing_stays_yaw_only() {
        let q = smooth_facing(yaw_rotation(0.3), Vec3::new(-1.0, 0.0, 0.2), 5.0, 0.05);
        let up = q * Vec3::y();
        assert!((up - Vec3::y()).norm() < 1.0e-5);
    }
}
