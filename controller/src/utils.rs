use crate::{
    Quat, Vec2, Vec3,
    constants::{DIRECTION_EPS_SQ, YAW_EPS},
};

/// Drop the vertical component of a world vector: `(x, y, z) -> (x, z)`.
#[inline]
pub fn to_planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Project onto the ground plane and renormalize.
///
/// Returns `None` when the vector is (nearly) vertical and has no usable
/// horizontal heading.
#[inline]
pub fn flatten_to_ground(v: Vec3) -> Option<Vec3> {
    let flat = Vec3::new(v.x, 0.0, v.z);
    if flat.norm_squared() <= DIRECTION_EPS_SQ {
        return None;
    }
    Some(flat.normalize())
}

/// Yaw angle (radians, about +Y) that turns the -Z forward axis onto `xz`.
pub fn yaw_from_xz(xz: Vec2) -> Option<f32> {
    if xz.norm_squared() > YAW_EPS {
        return Some((-xz[0]).atan2(-xz[1]));
    }

    None
}

/// Yaw-only rotation about the world up axis.
#[inline]
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_axis_angle(&Vec3::y_axis(), yaw)
}
