//! # Grove Engine
//!
//! Frame-loop core for small 3D walkthrough scenes.
//!
//! The engine owns one job: advancing a scene one frame at a time. Each
//! iteration translates raw input into movement commands, animates an
//! orbiting light/sound emitter from a single shared rotation, depth-sorts
//! translucent billboards back-to-front, and keeps the audio listener and
//! emitters in lockstep with the visuals. Graphics, audio, and input
//! platforms plug in behind small traits; the engine never talks to a
//! device API directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grove_engine::prelude::*;
//!
//! fn run_walkthrough<D, A, I, C>(
//!     device: D,
//!     audio: A,
//!     input: I,
//!     camera: C,
//!     scene: Scene,
//! ) -> Result<(), EngineError>
//! where
//!     D: RenderDevice,
//!     A: AudioOutput,
//!     I: InputSource,
//!     C: CameraController,
//! {
//!     let mut engine = Engine::new(
//!         EngineConfig::default(),
//!         scene,
//!         device,
//!         audio,
//!         input,
//!         camera,
//!         MonotonicTime::new(),
//!     );
//!     engine.run()
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod audio;
pub mod camera;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

mod engine;

pub use engine::{Engine, EngineConfig, EngineError, EngineState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        audio::{AudioOutput, SoundHandle},
        camera::{CameraController, CameraPose},
        foundation::{
            math::{Mat4, Vec2, Vec3},
            time::{FrameClock, MonotonicTime, TimeSource},
        },
        input::{InputEvent, InputSource, InputState, KeyCode, MouseDelta, MoveCommand},
        render::{
            billboard::{AnchorId, BillboardAnchor, DepthSorter, ViewSample},
            device::{LightHandle, MeshHandle, RenderDevice, TextureSlot},
        },
        scene::{orbit::OrbitAnimator, Scene, SceneMesh},
        Engine, EngineConfig, EngineError, EngineState,
    };
}
