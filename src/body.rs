//! Rigid body state for the chain links and the card.

use crate::float::Float;
use crate::vec::{Quat, Vec3};

/// How a body's position is produced each step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionMode {
    /// Never moves (the chain anchor).
    Fixed,
    /// Driven by gravity and joint constraints.
    Dynamic,
    /// Position is written from outside each step (the card while dragged).
    Kinematic,
}

/// Collision volume attached to a body.
///
/// Chain links never collide with one another; the shape is carried as
/// data for hosts that run their own broad phase.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Collider<F: Float> {
    None,
    Ball { radius: F },
    Cuboid { half_extents: Vec3<F> },
}

/// A rigid body owned by the [`PhysicsWorld`](crate::world::PhysicsWorld).
///
/// The simulation reads transforms every frame and writes them only
/// through the kinematic-target and angular-velocity setters.
#[derive(Clone, Debug)]
pub struct RigidBody<F: Float> {
    pub position: Vec3<F>,
    pub rotation: Quat<F>,
    pub linvel: Vec3<F>,
    pub angvel: Vec3<F>,
    pub linear_damping: F,
    pub angular_damping: F,
    pub mode: MotionMode,
    pub collider: Collider<F>,
    pub can_sleep: bool,
    sleeping: bool,
    idle_steps: u32,
    next_kinematic_translation: Option<Vec3<F>>,
}

impl<F: Float> RigidBody<F> {
    pub fn new(mode: MotionMode, position: Vec3<F>) -> Self {
        RigidBody {
            position,
            rotation: Quat::identity(),
            linvel: Vec3::zero(),
            angvel: Vec3::zero(),
            linear_damping: F::zero(),
            angular_damping: F::zero(),
            mode,
            collider: Collider::None,
            can_sleep: true,
            sleeping: false,
            idle_steps: 0,
            next_kinematic_translation: None,
        }
    }

    pub fn with_damping(mut self, linear: F, angular: F) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    pub fn with_collider(mut self, collider: Collider<F>) -> Self {
        self.collider = collider;
        self
    }

    pub fn with_can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Wake the body and reset its idle counter.
    pub fn wake(&mut self) {
        self.sleeping = false;
        self.idle_steps = 0;
    }

    /// Switch motion mode. Entering or leaving kinematic mode wakes the
    /// body and clears velocities and any pending target so the new mode
    /// starts clean.
    pub fn set_motion_mode(&mut self, mode: MotionMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.linvel = Vec3::zero();
        self.angvel = Vec3::zero();
        self.next_kinematic_translation = None;
        self.wake();
    }

    /// Queue the position this body will be moved to at the next step.
    /// Ignored unless the body is kinematic.
    pub fn set_next_kinematic_translation(&mut self, target: Vec3<F>) {
        if self.mode == MotionMode::Kinematic {
            self.next_kinematic_translation = Some(target);
        }
    }

    pub fn next_kinematic_translation(&self) -> Option<Vec3<F>> {
        self.next_kinematic_translation
    }

    pub fn set_angvel(&mut self, angvel: Vec3<F>) {
        self.angvel = angvel;
    }

    pub(crate) fn take_kinematic_target(&mut self) -> Option<Vec3<F>> {
        self.next_kinematic_translation.take()
    }

    /// Sleep bookkeeping: called once per step with the squared velocity
    /// threshold and the number of consecutive idle steps required.
    pub(crate) fn update_sleep(&mut self, threshold_sq: F, steps_to_sleep: u32) {
        if !self.can_sleep || self.mode != MotionMode::Dynamic {
            return;
        }
        let energy = self.linvel.length_sq() + self.angvel.length_sq();
        if energy < threshold_sq {
            self.idle_steps += 1;
            if self.idle_steps >= steps_to_sleep {
                self.sleeping = true;
                self.linvel = Vec3::zero();
                self.angvel = Vec3::zero();
            }
        } else {
            self.idle_steps = 0;
        }
    }
}
