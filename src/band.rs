//! Per-frame orchestration: drag, smoothing, curve, ribbon, stabilizer.

use crate::chain::BandChain;
use crate::config::BandConfig;
use crate::curve::CatmullRom;
use crate::drag::{Camera, CursorHint, DragController};
use crate::error::LanyardError;
use crate::float::Float;
use crate::observer::FrameObserver;
use crate::smoothing::LinkSmoother;
use crate::stabilizer::Stabilizer;
use crate::vec::Vec3;
use crate::world::PhysicsWorld;
use alloc::vec::Vec as AllocVec;

/// The band simulation: a chain of bodies in a [`PhysicsWorld`] plus the
/// per-frame logic that turns their positions into a ribbon and pointer
/// input into card motion.
///
/// Call [`Band::update`] once per rendered frame, after stepping the
/// world. Pointer events are forwarded through the `pointer_*` methods.
pub struct Band<F: Float> {
    chain: BandChain,
    smoother: LinkSmoother<F>,
    drag: DragController<F>,
    stabilizer: Stabilizer<F>,
    curve: CatmullRom<F>,
    ribbon: AllocVec<Vec3<F>>,
    ribbon_samples: usize,
}

impl<F: Float> Band<F> {
    /// Assemble the chain in `world` and wire up the frame logic.
    pub fn new(world: &mut PhysicsWorld<F>, config: BandConfig<F>) -> Result<Self, LanyardError> {
        config.validate()?;
        let chain = BandChain::assemble(world, &config.chain)?;
        Ok(Band {
            chain,
            smoother: LinkSmoother::new(config.smoothing),
            drag: DragController::new(),
            stabilizer: Stabilizer::new(config.stabilizer_fraction),
            curve: CatmullRom::default(),
            ribbon: AllocVec::with_capacity(config.ribbon_samples),
            ribbon_samples: config.ribbon_samples,
        })
    }

    pub fn chain(&self) -> &BandChain {
        &self.chain
    }

    /// The sampled ribbon strip from the last update, card end first.
    pub fn ribbon(&self) -> &[Vec3<F>] {
        &self.ribbon
    }

    /// The current curve control points.
    pub fn curve(&self) -> &CatmullRom<F> {
        &self.curve
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn grab_offset(&self) -> Option<Vec3<F>> {
        self.drag.grab_offset()
    }

    /// Pointer affordance for the host UI this frame.
    pub fn cursor_hint(&self) -> CursorHint {
        self.drag.cursor_hint()
    }

    /// Pointer-down on the card's interactive surface, with the
    /// world-space hit point.
    pub fn pointer_down(&mut self, hit_point: Vec3<F>, world: &mut PhysicsWorld<F>) {
        self.drag.pointer_down(hit_point, world, &self.chain);
    }

    /// Pointer released. Safe to call without a matching pointer-down.
    pub fn pointer_up(&mut self, world: &mut PhysicsWorld<F>) {
        self.drag.pointer_up(world, &self.chain);
    }

    pub fn pointer_enter(&mut self) {
        self.drag.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.pointer_leave();
    }

    /// One frame of band logic, in order: drive the drag target, smooth
    /// the innermost links, rebuild the curve, resample the ribbon, apply
    /// the facing stabilizer.
    ///
    /// Everything after the drag step is skipped if any chain body fails
    /// to resolve (startup race with the world); that frame self-heals on
    /// the next call.
    pub fn update<O: FrameObserver>(
        &mut self,
        world: &mut PhysicsWorld<F>,
        camera: &Camera<F>,
        pointer_ndc_x: F,
        pointer_ndc_y: F,
        dt: F,
        observer: &mut O,
    ) {
        if self
            .drag
            .drive(pointer_ndc_x, pointer_ndc_y, camera, world, &self.chain)
        {
            observer.on_drag_applied();
        }

        let positions = (
            world.body(self.chain.anchor),
            world.body(self.chain.links[0]),
            world.body(self.chain.links[1]),
            world.body(self.chain.card),
        );
        let (Some(anchor), Some(link1), Some(link2), Some(card)) = positions else {
            observer.on_frame_complete();
            return;
        };
        let (anchor_pos, link1_pos, link2_pos, card_pos) =
            (anchor.position, link1.position, link2.position, card.position);

        let smoothed1 = self.smoother.update(0, link1_pos, dt);
        let smoothed2 = self.smoother.update(1, link2_pos, dt);
        observer.on_links_smoothed();

        self.curve
            .set_points([card_pos, smoothed2, smoothed1, anchor_pos]);
        self.curve.sample_into(self.ribbon_samples, &mut self.ribbon);
        observer.on_ribbon_rebuilt();

        if let Some(card) = world.body_mut(self.chain.card) {
            self.stabilizer.apply(card);
        }
        observer.on_frame_complete();
    }
}
