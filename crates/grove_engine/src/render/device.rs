//! Render device abstraction
//!
//! This trait is the engine-side view of the graphics collaborator. Surface
//! management, rasterization, and resource loading live behind it; the
//! engine only sequences state changes and draws.

use crate::foundation::math::{Mat4, Vec3};

/// Handle to a mesh resource owned by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Texture stage a draw samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

/// Handle to a light owned by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightHandle(pub u64);

/// Frame-oriented rendering backend.
///
/// All operations are expected failure-free except [`begin_frame`], which
/// reports whether the device can draw this frame at all. A `false` there
/// means "skip drawing this frame", not "the device is gone"; unrecoverable
/// device loss is surfaced by the platform layer outside this trait.
///
/// [`begin_frame`]: RenderDevice::begin_frame
pub trait RenderDevice {
    /// Start drawing a frame. Returns whether drawing may proceed.
    fn begin_frame(&mut self) -> bool;

    /// Flip the finished frame to the screen.
    ///
    /// The only call in the loop that may block, briefly, awaiting vsync.
    fn present(&mut self);

    /// Set the world-to-view transform for subsequent draws.
    fn set_view(&mut self, view: &Mat4);

    /// Set the model-to-world transform for the next draw.
    fn set_model(&mut self, model: &Mat4);

    /// The currently active world-to-view transform.
    fn view_transform(&self) -> Mat4;

    /// Enable alpha blending for subsequent draws.
    fn enable_blending(&mut self);

    /// Disable alpha blending.
    fn disable_blending(&mut self);

    /// Enable fog for subsequent draws.
    fn enable_fog(&mut self);

    /// Disable fog.
    fn disable_fog(&mut self);

    /// Move a light to a new world position.
    fn update_light(&mut self, light: LightHandle, position: Vec3);

    /// Draw a mesh with the current view/model state.
    fn draw_mesh(&mut self, mesh: MeshHandle, texture: TextureSlot);
}
