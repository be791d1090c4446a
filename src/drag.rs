//! Pointer drag interaction: 2D pointer to 3D card target.

use crate::chain::BandChain;
use crate::float::Float;
use crate::body::MotionMode;
use crate::vec::Vec3;
use crate::world::PhysicsWorld;

/// Minimal perspective camera for unprojecting pointer coordinates.
pub struct Camera<F: Float> {
    pub position: Vec3<F>,
    /// Point the camera looks at. Default: the origin.
    pub target: Vec3<F>,
    /// Vertical field of view, radians. Default: 35 degrees.
    pub fov_y: F,
    /// Viewport width / height.
    pub aspect: F,
}

impl<F: Float> Camera<F> {
    pub fn new(position: Vec3<F>, aspect: F) -> Self {
        Camera {
            position,
            target: Vec3::zero(),
            fov_y: F::from_f32(35.0) * F::pi() / F::from_f32(180.0),
            aspect,
        }
    }

    /// World-space direction of the view ray through a pointer position
    /// in normalized device coordinates (x right, y up, both in [-1, 1]).
    pub fn ray_dir(&self, ndc_x: F, ndc_y: F) -> Vec3<F> {
        let world_up = Vec3::new(F::zero(), F::one(), F::zero());
        let mut forward = (self.target - self.position).normalize();
        if forward == Vec3::zero() {
            forward = Vec3::new(F::zero(), F::zero(), -F::one());
        }
        let mut right = forward.cross(world_up).normalize();
        if right == Vec3::zero() {
            // Looking straight up or down; any horizontal axis works.
            right = Vec3::new(F::one(), F::zero(), F::zero());
        }
        let up = right.cross(forward);

        let tan_half = (self.fov_y * F::half()).tan();
        (forward + right.scale(ndc_x * tan_half * self.aspect) + up.scale(ndc_y * tan_half))
            .normalize()
    }

    /// Project a pointer position onto the plane at the same distance
    /// from the camera as the camera is from the world origin.
    ///
    /// This keeps a dragged object at roughly constant depth instead of
    /// doing true surface picking. Deliberate: changing it alters the
    /// drag feel.
    pub fn pointer_to_world(&self, ndc_x: F, ndc_y: F) -> Vec3<F> {
        self.position + self.ray_dir(ndc_x, ndc_y).scale(self.position.length())
    }
}

/// Pointer affordance the host UI should show.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Hovering the card, not dragging: open hand.
    Grab,
    /// Drag in progress: closed hand.
    Grabbing,
}

#[derive(Copy, Clone)]
enum DragState<F: Float> {
    Free,
    Dragging { grab_offset: Vec3<F> },
}

/// Two-state drag machine for the card.
///
/// `Free`: the card is dynamic and the solver owns it. `Dragging`: the
/// card is kinematic and follows the pointer, offset by where on the card
/// it was grabbed. Exclusive pointer delivery during a drag (pointer
/// capture) is the host's responsibility.
pub struct DragController<F: Float> {
    state: DragState<F>,
    hovered: bool,
}

impl<F: Float> DragController<F> {
    pub fn new() -> Self {
        DragController { state: DragState::Free, hovered: false }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// World-space vector from the card's center to the grab point, while
    /// a drag session is active.
    pub fn grab_offset(&self) -> Option<Vec3<F>> {
        match self.state {
            DragState::Dragging { grab_offset } => Some(grab_offset),
            DragState::Free => None,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn cursor_hint(&self) -> CursorHint {
        if self.is_dragging() {
            CursorHint::Grabbing
        } else if self.hovered {
            CursorHint::Grab
        } else {
            CursorHint::Default
        }
    }

    /// Begin a drag from a pointer-down whose hit point (world space)
    /// lies on the card. Records the grab offset and flips the card
    /// kinematic. No-op if the card body is not ready.
    pub fn pointer_down(
        &mut self,
        hit_point: Vec3<F>,
        world: &mut PhysicsWorld<F>,
        chain: &BandChain,
    ) {
        let Some(card) = world.body_mut(chain.card) else {
            return;
        };
        let grab_offset = hit_point - card.position;
        card.set_motion_mode(MotionMode::Kinematic);
        self.state = DragState::Dragging { grab_offset };
    }

    /// End the drag session and hand the card back to the solver.
    /// Releasing twice is harmless.
    pub fn pointer_up(&mut self, world: &mut PhysicsWorld<F>, chain: &BandChain) {
        if !self.is_dragging() {
            return;
        }
        self.state = DragState::Free;
        if let Some(card) = world.body_mut(chain.card) {
            card.set_motion_mode(MotionMode::Dynamic);
        }
    }

    /// While dragging: unproject the pointer, subtract the grab offset,
    /// wake the whole chain, and queue the card's kinematic target.
    /// Returns true if a target was written this frame.
    pub fn drive(
        &self,
        ndc_x: F,
        ndc_y: F,
        camera: &Camera<F>,
        world: &mut PhysicsWorld<F>,
        chain: &BandChain,
    ) -> bool {
        let DragState::Dragging { grab_offset } = self.state else {
            return false;
        };
        let target = camera.pointer_to_world(ndc_x, ndc_y) - grab_offset;
        // Sleeping bodies ignore kinematic writes; wake everything first.
        chain.wake_all(world);
        if let Some(card) = world.body_mut(chain.card) {
            card.set_next_kinematic_translation(target);
            true
        } else {
            false
        }
    }
}

impl<F: Float> Default for DragController<F> {
    fn default() -> Self {
        Self::new()
    }
}
