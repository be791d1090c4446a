//! Jitter filter for the two innermost chain links.
//!
//! The raw link positions coming out of the solver wobble when the card
//! is over-pulled; feeding them straight into the curve makes the ribbon
//! shimmer. Each filtered link keeps a lagged copy that lerps toward the
//! true position with a speed proportional to how far behind it is:
//! small residual jitter moves slowly, big drag displacements catch up
//! fast.

use crate::error::LanyardError;
use crate::float::Float;
use crate::vec::Vec3;

/// Number of links that get smoothed (links 1 and 2, the innermost pair).
pub const SMOOTHED_LINKS: usize = 2;

/// Interpolation speed range, in 1/second.
pub struct SmoothingConfig<F: Float> {
    /// Speed when the lagged copy is (nearly) caught up. Default: 10.
    pub min_speed: F,
    /// Speed when the lagged copy is a full unit behind. Default: 50.
    pub max_speed: F,
}

impl<F: Float> SmoothingConfig<F> {
    pub fn new() -> Self {
        SmoothingConfig {
            min_speed: F::from_f32(10.0),
            max_speed: F::from_f32(50.0),
        }
    }

    pub fn with_speeds(mut self, min_speed: F, max_speed: F) -> Self {
        self.min_speed = min_speed;
        self.max_speed = max_speed;
        self
    }

    pub fn validate(&self) -> Result<(), LanyardError> {
        if !(self.min_speed > F::zero()) || self.max_speed < self.min_speed {
            return Err(LanyardError::InvalidSmoothingSpeeds);
        }
        Ok(())
    }

    /// The lerp factor applied this frame for a lagged copy `distance`
    /// away from the true position. The distance is clamped to [0.1, 1.0]
    /// so the factor always lands in [min_speed * dt, max_speed * dt].
    pub fn blend_factor(&self, distance: F, dt: F) -> F {
        let clamped = distance.clamp(F::from_f32(0.1), F::one());
        (self.min_speed + clamped * (self.max_speed - self.min_speed)) * dt
    }
}

impl<F: Float> Default for SmoothingConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-link lagged positions. Slots initialize lazily from the first
/// observed position; fixed-size, no allocation.
pub struct LinkSmoother<F: Float> {
    slots: [Option<Vec3<F>>; SMOOTHED_LINKS],
    config: SmoothingConfig<F>,
}

impl<F: Float> LinkSmoother<F> {
    pub fn new(config: SmoothingConfig<F>) -> Self {
        LinkSmoother { slots: [None; SMOOTHED_LINKS], config }
    }

    pub fn config(&self) -> &SmoothingConfig<F> {
        &self.config
    }

    /// Advance slot `slot` toward `target` and return the smoothed
    /// position. First call for a slot snaps to the target.
    pub fn update(&mut self, slot: usize, target: Vec3<F>, dt: F) -> Vec3<F> {
        let lagged = self.slots[slot].get_or_insert(target);
        let factor = self.config.blend_factor(lagged.distance(target), dt);
        *lagged = lagged.lerp(target, factor);
        *lagged
    }

    /// Last smoothed position for a slot, if it has been touched.
    pub fn smoothed(&self, slot: usize) -> Option<Vec3<F>> {
        self.slots[slot]
    }

    /// Forget all lagged positions; the next update re-initializes them.
    pub fn reset(&mut self) {
        self.slots = [None; SMOOTHED_LINKS];
    }
}
