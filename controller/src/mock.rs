//! Recording physics double for deterministic controller tests.

use crate::{BodyDesc, CapsuleDesc, PhysicsBackend, RayHit, RayQuery, Vec3};

#[derive(Clone, Debug)]
pub struct MockBody {
    pub desc: BodyDesc,
    pub translation: Vec3,
    pub linvel: Vec3,
}

/// Bodies never move on their own; tests script ground hits and velocities.
#[derive(Debug, Default)]
pub struct MockPhysics {
    pub bodies: Vec<Option<MockBody>>,
    pub colliders: Vec<Option<(usize, CapsuleDesc)>>,
    /// Time of impact returned by every ray cast, `None` for a miss.
    pub ground_toi: Option<f32>,
    pub impulses: Vec<(usize, Vec3)>,
    pub velocity_writes: Vec<(usize, Vec3)>,
    pub rays: std::cell::RefCell<Vec<RayQuery<usize>>>,
    pub steps: usize,
}

impl MockPhysics {
    pub fn grounded() -> Self {
        Self {
            ground_toi: Some(0.01),
            ..Self::default()
        }
    }

    pub fn airborne() -> Self {
        Self::default()
    }

    pub fn body(&self, handle: usize) -> &MockBody {
        self.bodies[handle].as_ref().expect("live body")
    }

    pub fn body_mut(&mut self, handle: usize) -> &mut MockBody {
        self.bodies[handle].as_mut().expect("live body")
    }
}

impl PhysicsBackend for MockPhysics {
    type BodyHandle = usize;
    type ColliderHandle = usize;

    fn create_body(&mut self, desc: &BodyDesc) -> usize {
        self.bodies.push(Some(MockBody {
            desc: *desc,
            translation: desc.translation,
            linvel: Vec3::zeros(),
        }));
        self.bodies.len() - 1
    }

    fn create_capsule(&mut self, body: usize, desc: &CapsuleDesc) -> usize {
        self.colliders.push(Some((body, *desc)));
        self.colliders.len() - 1
    }

    fn remove_body(&mut self, body: usize) -> bool {
        let Some(slot) = self.bodies.get_mut(body) else {
            return false;
        };
        if slot.take().is_none() {
            return false;
        }
        for collider in self.colliders.iter_mut() {
            if matches!(collider, Some((owner, _)) if *owner == body) {
                *collider = None;
            }
        }
        true
    }

    fn linear_velocity(&self, body: usize) -> Option<Vec3> {
        self.bodies.get(body)?.as_ref().map(|b| b.linvel)
    }

    fn set_linear_velocity(&mut self, body: usize, velocity: Vec3) -> bool {
        match self.bodies.get_mut(body).and_then(Option::as_mut) {
            Some(b) => {
                b.linvel = velocity;
                self.velocity_writes.push((body, velocity));
                true
            }
            None => false,
        }
    }

    fn apply_impulse(&mut self, body: usize, impulse: Vec3) -> bool {
        match self.bodies.get_mut(body).and_then(Option::as_mut) {
            Some(b) => {
                // Unit mass.
                b.linvel += impulse;
                self.impulses.push((body, impulse));
                true
            }
            None => false,
        }
    }

    fn translation(&self, body: usize) -> Option<Vec3> {
        self.bodies.get(body)?.as_ref().map(|b| b.translation)
    }

    fn cast_ray(&self, query: &RayQuery<usize>) -> Option<RayHit> {
        self.rays.borrow_mut().push(*query);
        self.ground_toi.map(|toi| RayHit { toi })
    }

    fn step(&mut self) {
        self.steps += 1;
    }
}
