use crate::{
    MovementParameters, PhysicsBackend, RayQuery, Vec3, constants::GROUND_PROBE_EPSILON,
};

/// Outcome of one ground probe. Never carried across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundProbeResult {
    /// Time of impact along the downward ray, if something was hit in range.
    pub toi: Option<f32>,
}

impl GroundProbeResult {
    pub const MISS: Self = Self { toi: None };

    #[inline]
    pub fn grounded(&self) -> bool {
        self.toi.is_some()
    }
}

/// Downward ray that starts just inside the capsule's bottom tip.
///
/// The origin sits `GROUND_PROBE_EPSILON` above the tip and the ray reaches
/// `ground_probe_distance` below it. The caster's own collider is excluded.
pub fn ground_ray<C>(
    params: &MovementParameters,
    center: Vec3,
    own_collider: C,
) -> RayQuery<C> {
    let origin = center - Vec3::new(0.0, params.half_height() - GROUND_PROBE_EPSILON, 0.0);
    RayQuery {
        origin,
        direction: Vec3::new(0.0, -1.0, 0.0),
        max_distance: GROUND_PROBE_EPSILON + params.ground_probe_distance,
        solid: true,
        exclude: Some(own_collider),
    }
}

/// Probe for supporting ground below a capsule centered at `center`.
///
/// A hit beyond the ray length, or any miss, reads as airborne.
pub fn probe_ground<B: PhysicsBackend>(
    physics: &B,
    params: &MovementParameters,
    center: Vec3,
    own_collider: B::ColliderHandle,
) -> GroundProbeResult {
    let query = ground_ray(params, center, own_collider);
    match physics.cast_ray(&query) {
        Some(hit) if hit.toi.is_finite() && hit.toi <= query.max_distance => {
            GroundProbeResult { toi: Some(hit.toi) }
        }
        _ => GroundProbeResult::MISS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_starts_inside_capsule_bottom() {
        let params = MovementParameters {
            radius: 0.5,
            height: 2.0,
            ground_probe_distance: 0.15,
            ..MovementParameters::default()
        };
        let ray = ground_ray(&params, Vec3::new(1.0, 5.0, -2.0), 7u32);

        assert!((ray.origin - Vec3::new(1.0, 4.01, -2.0)).norm() < 1.0e-5);
        assert_eq!(ray.direction, Vec3::new(0.0, -1.0, 0.0));
        assert!((ray.max_distance - 0.16).abs() < 1.0e-6);
        assert!(ray.solid);
        assert_eq!(ray.exclude, Some(7));
    }

    #[test]
    fn miss_is_airborne() {
        assert!(!GroundProbeResult::MISS.grounded());
        assert!(GroundProbeResult { toi: Some(0.0) }.grounded());
    }
}
