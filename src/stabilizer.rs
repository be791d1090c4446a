//! Angular-velocity correction that tilts the card back toward the viewer.

use crate::body::RigidBody;
use crate::float::Float;
use crate::vec::Vec3;

/// Restoring term applied to the card's spin every frame.
///
/// Reduces the yaw angular velocity by a fraction of the rotation
/// quaternion's y component, so the card damps its spin and settles
/// facing forward whether or not it is being dragged.
pub struct Stabilizer<F: Float> {
    /// Fraction of the facing rotation fed back as counter-spin per
    /// frame. Default: 0.25.
    pub fraction: F,
}

impl<F: Float> Stabilizer<F> {
    pub fn new(fraction: F) -> Self {
        Stabilizer { fraction }
    }

    /// Read the card's rotation and angular velocity, write back the
    /// corrected angular velocity. Only the y axis is touched.
    pub fn apply(&self, card: &mut RigidBody<F>) {
        let ang = card.angvel;
        let rot = card.rotation;
        card.set_angvel(Vec3::new(ang.x, ang.y - rot.y * self.fraction, ang.z));
    }
}

impl<F: Float> Default for Stabilizer<F> {
    fn default() -> Self {
        Stabilizer::new(F::from_f32(0.25))
    }
}
