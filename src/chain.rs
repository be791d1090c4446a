//! Assembly of the band chain: anchor, three swing links, and the card.

use crate::body::{Collider, MotionMode, RigidBody};
use crate::error::LanyardError;
use crate::float::Float;
use crate::joint::Joint;
use crate::vec::Vec3;
use crate::world::{BodyHandle, PhysicsWorld};

/// Number of bodies in an assembled chain.
pub const CHAIN_BODIES: usize = 5;
/// Number of intermediate swing links between anchor and card.
pub const SWING_LINKS: usize = 3;

/// Configuration for assembling a chain.
pub struct ChainConfig<F: Float> {
    /// World position of the fixed anchor. Default: (0, 4, 0).
    pub origin: Vec3<F>,
    /// Spacing between successive bodies along local +x. Default: 0.5.
    pub spacing: F,
    /// Maximum separation enforced by each rope segment. Default: 1.0.
    pub rope_length: F,
    /// Hanging point on the card, in its local frame. Default: (0, 1.45, 0).
    pub card_anchor: Vec3<F>,
    /// Collision ball radius on each swing link. Default: 0.1.
    pub link_radius: F,
    /// Card collision box half-extents. Default: (0.8, 1.125, 0.01).
    pub card_half_extents: Vec3<F>,
    /// Linear velocity damping on every non-fixed body. Default: 2.0.
    pub linear_damping: F,
    /// Angular velocity damping on every non-fixed body. Default: 2.0.
    pub angular_damping: F,
    /// Whether bodies may fall asleep at rest. Default: true.
    pub can_sleep: bool,
}

impl<F: Float> ChainConfig<F> {
    pub fn new() -> Self {
        ChainConfig {
            origin: Vec3::new(F::zero(), F::from_f32(4.0), F::zero()),
            spacing: F::half(),
            rope_length: F::one(),
            card_anchor: Vec3::new(F::zero(), F::from_f32(1.45), F::zero()),
            link_radius: F::from_f32(0.1),
            card_half_extents: Vec3::new(F::from_f32(0.8), F::from_f32(1.125), F::from_f32(0.01)),
            linear_damping: F::two(),
            angular_damping: F::two(),
            can_sleep: true,
        }
    }

    pub fn with_origin(mut self, origin: Vec3<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_rope_length(mut self, rope_length: F) -> Self {
        self.rope_length = rope_length;
        self
    }

    pub fn with_card_anchor(mut self, card_anchor: Vec3<F>) -> Self {
        self.card_anchor = card_anchor;
        self
    }

    pub fn with_damping(mut self, linear: F, angular: F) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    pub fn with_can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    pub fn validate(&self) -> Result<(), LanyardError> {
        if !(self.rope_length > F::zero()) {
            return Err(LanyardError::InvalidRopeLength);
        }
        Ok(())
    }
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles to the five chain bodies: one fixed anchor, three free swing
/// links, one draggable card. A strict linear path with no branching.
#[derive(Debug)]
pub struct BandChain {
    pub anchor: BodyHandle,
    pub links: [BodyHandle; SWING_LINKS],
    pub card: BodyHandle,
}

impl BandChain {
    /// Create the five bodies and four joints in `world`.
    ///
    /// Bodies are registered before any joint references them, so joint
    /// creation never dangles; `world.add_joint` would reject it anyway.
    pub fn assemble<F: Float>(
        world: &mut PhysicsWorld<F>,
        config: &ChainConfig<F>,
    ) -> Result<Self, LanyardError> {
        config.validate()?;

        let anchor = world.add_body(RigidBody::new(MotionMode::Fixed, config.origin));

        let mut links = [anchor; SWING_LINKS];
        for (i, link) in links.iter_mut().enumerate() {
            let offset = config.spacing * F::from_f32((i + 1) as f32);
            let position = config.origin + Vec3::new(offset, F::zero(), F::zero());
            *link = world.add_body(
                RigidBody::new(MotionMode::Dynamic, position)
                    .with_damping(config.linear_damping, config.angular_damping)
                    .with_collider(Collider::Ball { radius: config.link_radius })
                    .with_can_sleep(config.can_sleep),
            );
        }

        let card_offset = config.spacing * F::from_f32((SWING_LINKS + 1) as f32);
        let card_position = config.origin + Vec3::new(card_offset, F::zero(), F::zero());
        let card = world.add_body(
            RigidBody::new(MotionMode::Dynamic, card_position)
                .with_damping(config.linear_damping, config.angular_damping)
                .with_collider(Collider::Cuboid { half_extents: config.card_half_extents })
                .with_can_sleep(config.can_sleep),
        );

        world.add_joint(Joint::rope(anchor, links[0], config.rope_length))?;
        world.add_joint(Joint::rope(links[0], links[1], config.rope_length))?;
        world.add_joint(Joint::rope(links[1], links[2], config.rope_length))?;
        world.add_joint(Joint::spherical(
            links[2],
            card,
            Vec3::zero(),
            config.card_anchor,
        ))?;

        Ok(BandChain { anchor, links, card })
    }

    /// All five handles, anchor first, card last.
    pub fn handles(&self) -> [BodyHandle; CHAIN_BODIES] {
        [self.anchor, self.links[0], self.links[1], self.links[2], self.card]
    }

    /// Wake the whole chain (sleeping bodies ignore kinematic writes).
    pub fn wake_all<F: Float>(&self, world: &mut PhysicsWorld<F>) {
        for handle in self.handles() {
            if let Some(body) = world.body_mut(handle) {
                body.wake();
            }
        }
    }
}
