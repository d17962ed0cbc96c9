use crate::{Quat, Vec3};

/// Scene-graph transform the controller mirrors the character into.
///
/// Write-only from the controller's side: it pushes the physics position and
/// its own facing every tick and never reads them back.
pub trait VisualTransform {
    fn set_translation(&mut self, translation: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
}

/// Plain position + orientation, for hosts without a scene graph and for tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl VisualTransform for Pose {
    fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
