//! Joint constraints between chain bodies: rope and spherical.

use crate::body::{MotionMode, RigidBody};
use crate::float::Float;
use crate::vec::Vec3;
use crate::world::BodyHandle;

/// Maximum-distance constraint between two anchor points. Relative
/// rotation stays free; no correction is applied while the anchors are
/// within `max_length` of each other.
#[derive(Clone, Debug)]
pub struct RopeJoint<F: Float> {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    /// Anchor in body A's local frame.
    pub anchor_a: Vec3<F>,
    /// Anchor in body B's local frame.
    pub anchor_b: Vec3<F>,
    pub max_length: F,
}

/// Ball-and-socket constraint: pins the two world-space anchor points
/// together while leaving all rotation free.
#[derive(Clone, Debug)]
pub struct SphericalJoint<F: Float> {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    pub anchor_a: Vec3<F>,
    pub anchor_b: Vec3<F>,
}

/// A constraint between two adjacent chain bodies. Created once at chain
/// assembly and immutable afterwards.
#[derive(Clone, Debug)]
pub enum Joint<F: Float> {
    Rope(RopeJoint<F>),
    Spherical(SphericalJoint<F>),
}

impl<F: Float> Joint<F> {
    pub fn rope(body_a: BodyHandle, body_b: BodyHandle, max_length: F) -> Self {
        Joint::Rope(RopeJoint {
            body_a,
            body_b,
            anchor_a: Vec3::zero(),
            anchor_b: Vec3::zero(),
            max_length,
        })
    }

    pub fn spherical(
        body_a: BodyHandle,
        body_b: BodyHandle,
        anchor_a: Vec3<F>,
        anchor_b: Vec3<F>,
    ) -> Self {
        Joint::Spherical(SphericalJoint { body_a, body_b, anchor_a, anchor_b })
    }

    pub fn bodies(&self) -> (BodyHandle, BodyHandle) {
        match self {
            Joint::Rope(j) => (j.body_a, j.body_b),
            Joint::Spherical(j) => (j.body_a, j.body_b),
        }
    }

    /// One position-correction pass over the two bodies.
    pub(crate) fn solve(&self, bodies: &mut [RigidBody<F>]) {
        let (ha, hb, anchor_a, anchor_b, max_length) = match self {
            Joint::Rope(j) => (j.body_a, j.body_b, j.anchor_a, j.anchor_b, Some(j.max_length)),
            Joint::Spherical(j) => (j.body_a, j.body_b, j.anchor_a, j.anchor_b, None),
        };

        // Anchors are small offsets on near-upright bodies; treating them
        // as translation-only keeps the solve cheap and is plenty for a
        // hanging band.
        let pa = bodies[ha.index()].position + anchor_a;
        let pb = bodies[hb.index()].position + anchor_b;

        let delta = pb - pa;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return; // degenerate
        }

        let error = match max_length {
            // Rope: only pull back when overstretched.
            Some(max) => {
                if dist <= max {
                    return;
                }
                dist - max
            }
            // Spherical: anchors must coincide.
            None => dist,
        };

        let wa = correction_weight(&bodies[ha.index()]);
        let wb = correction_weight(&bodies[hb.index()]);
        let w_total = wa + wb;
        if w_total.is_near_zero(F::from_f32(1e-10)) {
            return; // both immovable
        }

        let correction = delta.scale(error / dist);
        if wa > F::zero() {
            let share = wa / w_total;
            bodies[ha.index()].position = bodies[ha.index()].position + correction.scale(share);
        }
        if wb > F::zero() {
            let share = wb / w_total;
            bodies[hb.index()].position = bodies[hb.index()].position - correction.scale(share);
        }
    }
}

fn correction_weight<F: Float>(body: &RigidBody<F>) -> F {
    match body.mode {
        MotionMode::Dynamic if !body.is_sleeping() => F::one(),
        _ => F::zero(),
    }
}
