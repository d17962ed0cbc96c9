/*!
Math aliases shared by the controller modules.

nalgebra types are used throughout so values can be handed to rapier3d without
conversion.
*/

use nalgebra as na;

pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// World up axis.
#[inline]
pub fn up() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

/// World forward axis. Characters and cameras look down -Z.
#[inline]
pub fn forward() -> Vec3 {
    Vec3::new(0.0, 0.0, -1.0)
}

/// World right axis.
#[inline]
pub fn right() -> Vec3 {
    Vec3::new(1.0, 0.0, 0.0)
}
