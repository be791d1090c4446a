//! Frame observer trait for monitoring the per-frame band update.

/// Trait for observing the phases of a band frame update.
///
/// Implement this to monitor orchestration (e.g., for debugging or
/// tests asserting phase order). All methods have default no-op
/// implementations.
pub trait FrameObserver {
    /// Called after the drag controller wrote the card's kinematic target.
    /// Not called on frames without an active drag.
    fn on_drag_applied(&mut self) {}

    /// Called after the innermost link positions were smoothed.
    fn on_links_smoothed(&mut self) {}

    /// Called after the ribbon buffer was resampled from the curve.
    fn on_ribbon_rebuilt(&mut self) {}

    /// Called when a frame update is fully complete.
    fn on_frame_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation
/// is needed.
pub struct NoOpFrameObserver;

impl FrameObserver for NoOpFrameObserver {}
