//! Planar speed ramp.
//!
//! The controller keeps a single scalar speed that ramps toward a target instead
//! of snapping. The heading it is applied along is remembered separately so a
//! released key coasts to a stop in the last direction of travel.

use crate::{MovementParameters, Vec3, constants::DIRECTION_EPS_SQ};

/// Persistent planar speed state of one controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRamp {
    current: f32,
    heading: Vec3,
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self {
            current: 0.0,
            heading: Vec3::zeros(),
        }
    }
}

/// Speed the ramp steers toward this tick.
///
/// - moving and grounded: `max_speed`
/// - moving and airborne: `max_speed * air_control`
/// - not moving: `0`
#[inline]
pub fn target_speed(params: &MovementParameters, moving: bool, grounded: bool) -> f32 {
    if moving {
        params.speed_cap(grounded)
    } else {
        0.0
    }
}

impl SpeedRamp {
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Last non-zero movement direction (unit, horizontal), or zero before the
    /// first movement.
    pub fn heading(&self) -> Vec3 {
        self.heading
    }

    /// Advance one tick and return the commanded horizontal velocity.
    ///
    /// `direction` is the normalized output of the direction mapper, zero when
    /// not moving. `dt` is clamped to non-negative.
    pub fn step(
        &mut self,
        params: &MovementParameters,
        direction: Vec3,
        grounded: bool,
        dt: f32,
    ) -> Vec3 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let moving = direction.norm_squared() > DIRECTION_EPS_SQ;

        if moving {
            self.heading = direction;
        }

        // The active cap applies immediately, including the tick we leave the ground.
        self.current = self.current.min(params.speed_cap(grounded));

        let target = target_speed(params, moving, grounded);
        if moving {
            if target > self.current {
                self.current = (self.current + params.acceleration * dt).min(target);
            }
        } else {
            self.current = (self.current - params.deceleration * dt).max(0.0);
        }

        if self.current <= 0.0 {
            self.current = 0.0;
            return Vec3::zeros();
        }
        self.heading * self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> MovementParameters {
        MovementParameters {
            max_speed: 5.0,
            acceleration: 20.0,
            deceleration: 25.0,
            air_control: 0.3,
            ..MovementParameters::default()
        }
    }

    fn fwd() -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0)
    }

    #[test]
    fn first_tick_accelerates_by_rate_times_dt() {
        let mut ramp = SpeedRamp::default();
        let vel = ramp.step(&params(), fwd(), true, 0.1);
        assert!((ramp.current() - 2.0).abs() < 1.0e-6);
        assert!((vel - Vec3::new(0.0, 0.0, -2.0)).norm() < 1.0e-6);
    }

    #[test]
    fn acceleration_does_not_overshoot() {
        let p = MovementParameters {
            max_speed: 1.5,
            ..params()
        };
        let mut ramp = SpeedRamp::default();
        ramp.step(&p, fwd(), true, 0.1);
        assert_eq!(ramp.current(), 1.5);
    }

    #[test]
    fn deceleration_floors_at_zero_and_stays_there() {
        let mut ramp = SpeedRamp::default();
        for _ in 0..10 {
            ramp.step(&params(), fwd(), true, 0.1);
        }
        assert_eq!(ramp.current(), 5.0);

        // 5 m/s at 25 m/s^2 needs 0.2 s; a single long tick must clamp at zero.
        let vel = ramp.step(&params(), Vec3::zeros(), true, 1.0);
        assert_eq!(ramp.current(), 0.0);
        assert_eq!(vel, Vec3::zeros());

        for _ in 0..5 {
            let vel = ramp.step(&params(), Vec3::zeros(), true, 0.1);
            assert_eq!(ramp.current(), 0.0);
            assert_eq!(vel, Vec3::zeros());
        }
    }

    #[test]
    fn release_coasts_along_last_heading() {
        let mut ramp = SpeedRamp::default();
        let right = Vec3::new(1.0, 0.0, 0.0);
        for _ in 0..10 {
            ramp.step(&params(), right, true, 0.1);
        }
        let vel = ramp.step(&params(), Vec3::zeros(), true, 0.1);
        assert!((ramp.current() - 2.5).abs() < 1.0e-6);
        assert!((vel - right * 2.5).norm() < 1.0e-6);
        assert_eq!(ramp.heading(), right);
    }

    #[test]
    fn airborne_caps_speed_immediately() {
        let mut ramp = SpeedRamp::default();
        for _ in 0..10 {
            ramp.step(&params(), fwd(), true, 0.1);
        }
        ramp.step(&params(), fwd(), false, 0.1);
        assert!((ramp.current() - 1.5).abs() < 1.0e-6);

        // Also while coasting without input.
        let mut ramp = SpeedRamp::default();
        for _ in 0..10 {
            ramp.step(&params(), fwd(), true, 0.1);
        }
        ramp.step(&params(), Vec3::zeros(), false, 0.01);
        assert!(ramp.current() <= 1.5 + 1.0e-6);
    }

    #[test]
    fn speed_never_exceeds_cap_for_any_sequence() {
        let p = params();
        let mut ramp = SpeedRamp::default();
        let dts = [0.0, 0.016, 0.1, 0.5, 2.0, 0.033, 10.0];
        let dirs = [fwd(), Vec3::zeros(), Vec3::new(0.6, 0.0, 0.8)];
        for i in 0..200usize {
            let grounded = (i / 3) % 2 == 0;
            let dt = dts[i % dts.len()];
            let dir = dirs[(i / 2) % dirs.len()];
            let vel = ramp.step(&p, dir, grounded, dt);
            let cap = p.speed_cap(grounded);
            assert!(ramp.current() <= cap + 1.0e-6, "tick {i}: {} > {cap}", ramp.current());
            assert!(ramp.current() >= 0.0);
            assert!(vel.norm() <= cap + 1.0e-5);
            assert_eq!(vel.y, 0.0);
        }
    }

    #[test]
    fn negative_or_nan_dt_is_a_no_op() {
        let mut ramp = SpeedRamp::default();
        ramp.step(&params(), fwd(), true, -1.0);
        assert_eq!(ramp.current(), 0.0);
        ramp.step(&params(), fwd(), true, f32::NAN);
        assert_eq!(ramp.current(), 0.0);
    }

    #[test]
    fn instant_response_with_huge_rates() {
        let p = MovementParameters {
            acceleration: 1.0e9,
            deceleration: 1.0e9,
            ..params()
        };
        let mut ramp = SpeedRamp::default();
        ramp.step(&p, fwd(), true, 1.0 / 60.0);
        assert_eq!(ramp.current(), 5.0);
        ramp.step(&p, Vec3::zeros(), true, 1.0 / 60.0);
        assert_eq!(ramp.current(), 0.0);
    }

    #[test]
    fn target_speed_table() {
        let p = params();
        assert_eq!(target_speed(&p, true, true), 5.0);
        assert!((target_speed(&p, true, false) - 1.5).abs() < 1.0e-6);
        assert_eq!(target_speed(&p, false, true), 0.0);
        assert_eq!(target_speed(&p, false, false), 0.0);
    }
}
