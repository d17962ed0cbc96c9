//! Bevy (glam) <-> controller (nalgebra) value conversions.

use bevy::prelude::*;
use capsule_controller as cc;
use nalgebra::Quaternion;

#[inline]
pub fn vec3_to_na(v: Vec3) -> cc::Vec3 {
    cc::Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn vec3_from_na(v: cc::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn quat_to_na(q: Quat) -> cc::Quat {
    cc::Quat::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z))
}

#[inline]
pub fn quat_from_na(q: cc::Quat) -> Quat {
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}
