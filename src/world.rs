//! Physics world: body table, joint list, and the fixed-step integrator.
//!
//! The band simulation holds opaque [`BodyHandle`]s into this table and
//! reads transforms through the accessors; a missing handle means "not
//! ready this frame", never a panic.

use crate::body::{MotionMode, RigidBody};
use crate::error::LanyardError;
use crate::float::Float;
use crate::joint::Joint;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Opaque index into the world's body table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

impl BodyHandle {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Configuration for the world integrator.
///
/// # Builder Pattern
/// ```
/// use lanyard::world::WorldConfig;
/// use lanyard::vec::Vec3;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec3::new(0.0, -40.0, 0.0))
///     .with_iterations(8);
/// ```
pub struct WorldConfig<F: Float> {
    /// Gravity acceleration vector. Default: (0, -40, 0), matching the
    /// snappy fall the band is tuned for.
    pub gravity: Vec3<F>,
    /// Joint correction passes per step. Default: 8.
    pub iterations: usize,
    /// Fixed step length hosts are expected to advance by. Default: 1/60.
    pub timestep: F,
    /// Bodies slower than this (combined linear + angular speed) start
    /// counting toward sleep. Default: 0.1.
    pub sleep_threshold: F,
    /// Consecutive idle steps before a sleep-eligible body sleeps.
    /// Default: 30.
    pub steps_to_sleep: u32,
}

impl<F: Float> WorldConfig<F> {
    pub fn new() -> Self {
        WorldConfig {
            gravity: Vec3::new(F::zero(), F::from_f32(-40.0), F::zero()),
            iterations: 8,
            timestep: F::one() / F::from_f32(60.0),
            sleep_threshold: F::from_f32(0.1),
            steps_to_sleep: 30,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_sleep_threshold(mut self, threshold: F) -> Self {
        self.sleep_threshold = threshold;
        self
    }

    pub fn with_steps_to_sleep(mut self, steps: u32) -> Self {
        self.steps_to_sleep = steps;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns every rigid body and joint, and advances them at a fixed step.
pub struct PhysicsWorld<F: Float> {
    bodies: AllocVec<RigidBody<F>>,
    joints: AllocVec<Joint<F>>,
    config: WorldConfig<F>,
    prev_positions: AllocVec<Vec3<F>>,
}

impl<F: Float> PhysicsWorld<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        PhysicsWorld {
            bodies: AllocVec::new(),
            joints: AllocVec::new(),
            config,
            prev_positions: AllocVec::new(),
        }
    }

    pub fn config(&self) -> &WorldConfig<F> {
        &self.config
    }

    pub fn add_body(&mut self, body: RigidBody<F>) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(body);
        handle
    }

    /// Register a joint. Both bodies must already exist; joints may not
    /// dangle, so creation against an unregistered body is rejected and
    /// should be retried once the body is in the table.
    pub fn add_joint(&mut self, joint: Joint<F>) -> Result<(), LanyardError> {
        let (a, b) = joint.bodies();
        for handle in [a, b] {
            if handle.index() >= self.bodies.len() {
                return Err(LanyardError::BodyOutOfBounds {
                    index: handle.index(),
                    count: self.bodies.len(),
                });
            }
        }
        self.joints.push(joint);
        Ok(())
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody<F>> {
        self.bodies.get(handle.index())
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody<F>> {
        self.bodies.get_mut(handle.index())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn joints(&self) -> &[Joint<F>] {
        &self.joints
    }

    /// Wake every body in the world.
    pub fn wake_all(&mut self) {
        for body in self.bodies.iter_mut() {
            body.wake();
        }
    }

    /// Advance the world by `dt`.
    ///
    /// Semi-implicit velocity integration under gravity with
    /// `1 / (1 + dt * damping)` velocity decay, kinematic target
    /// application, iterative joint position correction, velocity
    /// recovery from the positional change, and sleep bookkeeping.
    pub fn step(&mut self, dt: F) {
        if !(dt > F::zero()) {
            return;
        }
        let inv_dt = F::one() / dt;

        self.prev_positions.clear();
        self.prev_positions.extend(self.bodies.iter().map(|b| b.position));

        for body in self.bodies.iter_mut() {
            match body.mode {
                MotionMode::Fixed => {}
                MotionMode::Kinematic => {
                    if let Some(target) = body.take_kinematic_target() {
                        body.linvel = (target - body.position).scale(inv_dt);
                        body.position = target;
                    }
                }
                MotionMode::Dynamic => {
                    if body.is_sleeping() {
                        continue;
                    }
                    body.linvel = body.linvel + self.config.gravity.scale(dt);
                    body.linvel = body
                        .linvel
                        .scale(F::one() / (F::one() + dt * body.linear_damping));
                    body.angvel = body
                        .angvel
                        .scale(F::one() / (F::one() + dt * body.angular_damping));
                    body.position = body.position + body.linvel.scale(dt);
                    body.rotation = body.rotation.integrate(body.angvel, dt);
                }
            }
        }

        for _ in 0..self.config.iterations {
            for joint in self.joints.iter() {
                joint.solve(&mut self.bodies);
            }
        }

        // Constraint corrections moved positions directly; fold the net
        // displacement back into velocity so the next step sees it.
        let threshold_sq = self.config.sleep_threshold * self.config.sleep_threshold;
        for (body, prev) in self.bodies.iter_mut().zip(self.prev_positions.iter()) {
            if body.mode == MotionMode::Dynamic && !body.is_sleeping() {
                body.linvel = (body.position - *prev).scale(inv_dt);
            }
            body.update_sleep(threshold_sq, self.config.steps_to_sleep);
        }
    }
}

impl<F: Float> Default for PhysicsWorld<F> {
    fn default() -> Self {
        Self::new(WorldConfig::new())
    }
}
