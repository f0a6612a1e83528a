//! Camera command contract
//!
//! The frame loop does not integrate camera motion itself. It hands the
//! per-frame inputs to a [`CameraController`] and consumes the pose that
//! comes back; how heading and position respond to commands (acceleration,
//! smoothing, collision) is the controller's business.

use crate::foundation::math::Vec3;
use crate::input::{MouseDelta, MoveCommand};

/// Position and view direction produced by a camera controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space
    pub position: Vec3,
    /// Unit view direction in world space
    pub heading: Vec3,
}

impl CameraPose {
    /// Create a pose from a position and heading.
    #[must_use]
    pub fn new(position: Vec3, heading: Vec3) -> Self {
        Self { position, heading }
    }
}

/// Integrates movement commands and mouse deltas into a camera pose.
///
/// Called exactly once per frame with the elapsed time for that frame, the
/// currently held [`MoveCommand`] mask, and the mouse movement sampled this
/// frame. A larger elapsed time means "move further this frame"; the loop
/// clamps elapsed time to a configured ceiling before calling in.
pub trait CameraController {
    /// Advance the camera by one frame and return the new pose.
    fn update(&mut self, elapsed_millis: u64, commands: MoveCommand, mouse: MouseDelta)
        -> CameraPose;

    /// Current pose without advancing.
    fn pose(&self) -> CameraPose;
}
