//! Core engine implementation
//!
//! The engine is a small state machine around one frame loop. Each frame it
//! advances the orbit animation, ticks the clock, drains input, runs the
//! camera controller, depth-sorts the billboards, and issues the draw
//! sequence, strictly in that order, on one thread. All scene state is
//! owned here and lent to sub-components one call at a time.

use thiserror::Error;

use crate::audio::AudioOutput;
use crate::camera::CameraController;
use crate::foundation::math::{self, Mat4, Vec3};
use crate::foundation::time::{FrameClock, TimeSource};
use crate::input::{InputSource, InputState, MoveCommand};
use crate::render::billboard::{DepthSorter, ViewSample};
use crate::render::device::RenderDevice;
use crate::scene::Scene;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Ceiling applied to the per-frame elapsed time before it reaches the
    /// camera controller, so a stall cannot blow up motion integration
    pub max_frame_millis: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_frame_millis: 100,
        }
    }
}

/// Loop lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, setup not yet run
    Initializing,
    /// Frame loop active
    Running,
    /// Loop finished; terminal
    Terminating,
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Setup failed before the loop started
    #[error("engine setup failed: {0}")]
    Setup(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// The frame loop, generic over its platform collaborators.
///
/// `D`, `A`, `I` are the graphics, audio, and input backends; `C`
/// integrates camera motion; `T` supplies timestamps. The engine owns the
/// [`Scene`] and all per-frame state.
pub struct Engine<D, A, I, C, T> {
    device: D,
    audio: A,
    input: I,
    camera: C,
    time: T,
    scene: Scene,
    config: EngineConfig,
    clock: FrameClock,
    input_state: InputState,
    sorter: DepthSorter,
    state: EngineState,
    frames_rendered: u64,
    frames_skipped: u64,
}

impl<D, A, I, C, T> Engine<D, A, I, C, T>
where
    D: RenderDevice,
    A: AudioOutput,
    I: InputSource,
    C: CameraController,
    T: TimeSource,
{
    /// Create an engine in the `Initializing` state.
    pub fn new(
        config: EngineConfig,
        scene: Scene,
        device: D,
        audio: A,
        input: I,
        camera: C,
        time: T,
    ) -> Self {
        Self {
            device,
            audio,
            input,
            camera,
            time,
            scene,
            config,
            clock: FrameClock::new(),
            input_state: InputState::new(),
            sorter: DepthSorter::new(),
            state: EngineState::Initializing,
            frames_rendered: 0,
            frames_skipped: 0,
        }
    }

    /// One-time setup: validate the scene, push the starting camera pose to
    /// the renderer and the audio listener, and start looping playback.
    ///
    /// On success the engine transitions to `Running`. On failure the loop
    /// never starts and the engine stays terminal-safe to drop.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::Initializing {
            return Err(EngineError::Setup("engine already started".to_string()));
        }
        if self.config.max_frame_millis == 0 {
            return Err(EngineError::Config(
                "max_frame_millis must be nonzero".to_string(),
            ));
        }
        let mut ids: Vec<u32> = self.scene.anchors.iter().map(|a| a.id.0).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Err(EngineError::Setup(
                "billboard anchor ids must be unique".to_string(),
            ));
        }

        let pose = self.camera.pose();
        let view = math::look_at(pose.position, pose.heading, Vec3::y());
        self.device.set_view(&view);
        self.audio.set_listener_pose(pose.position, pose.heading);

        self.audio.play_sound(self.scene.music, true);
        self.audio.play_sound(self.scene.chime, true);

        self.state = EngineState::Running;
        log::info!(
            "entering main loop: {} billboard anchors, frame ceiling {} ms",
            self.scene.anchors.len(),
            self.config.max_frame_millis
        );
        Ok(())
    }

    /// Run the loop to completion: setup, step until terminating, shutdown.
    pub fn run(&mut self) -> Result<(), EngineError> {
        self.initialize()?;
        while self.state == EngineState::Running {
            self.step();
        }
        self.shutdown();
        Ok(())
    }

    /// Execute one frame iteration.
    ///
    /// Does nothing unless the engine is `Running`. A frame whose
    /// `begin_frame` fails still advances the simulation (orbit, clock,
    /// input, camera, billboard order); only drawing and present are
    /// skipped.
    pub fn step(&mut self) {
        if self.state != EngineState::Running {
            return;
        }

        // One rotation drives both the light and the chime this frame;
        // deriving them from separate advances would let sight and sound
        // drift apart.
        let rotation = self.scene.orbit.advance();
        let light_position = math::transform_point(&rotation, self.scene.light_base);
        let chime_position = math::transform_point(&rotation, self.scene.chime_base);
        self.device.update_light(self.scene.light, light_position);
        self.audio
            .set_emitter_position(self.scene.chime, chime_position);

        let now = self.time.now_millis();
        let elapsed = self.clock.tick(now).min(self.config.max_frame_millis);

        // At most one event per frame; the mask persists regardless.
        if let Some(event) = self.input.poll_event() {
            self.input_state.handle_event(event);
            if self.input_state.exit_requested() {
                log::info!("exit requested, leaving main loop");
                self.state = EngineState::Terminating;
                return;
            }
        }

        // Single sample per frame; the source resets its accumulator here.
        let mouse = self.input.sample_mouse_delta();

        let pose = self
            .camera
            .update(elapsed, self.input_state.commands(), mouse);
        self.audio.set_listener_pose(pose.position, pose.heading);
        let view = math::look_at(pose.position, pose.heading, Vec3::y());
        self.device.set_view(&view);

        let view_transform = self.device.view_transform();
        let ordered = self.sorter.sort(&self.scene.anchors, &view_transform);

        if !self.device.begin_frame() {
            log::debug!("begin_frame refused, skipping draw for this frame");
            self.frames_skipped += 1;
            return;
        }
        Self::draw_scene(&mut self.device, &self.scene, pose.heading, ordered);
        self.device.present();
        self.frames_rendered += 1;
    }

    /// Issue the fixed draw sequence: opaque pass, blended pass, then the
    /// depth-ordered billboards, with alpha blending enabled only for the
    /// translucent phases.
    fn draw_scene(device: &mut D, scene: &Scene, heading: Vec3, ordered: &[ViewSample]) {
        for entry in &scene.opaque {
            device.set_model(&Mat4::identity());
            device.draw_mesh(entry.mesh, entry.texture);
        }

        device.enable_blending();
        for entry in &scene.blended {
            if entry.fogged {
                device.enable_fog();
            }
            device.set_model(&Mat4::identity());
            device.draw_mesh(entry.mesh, entry.texture);
            if entry.fogged {
                device.disable_fog();
            }
        }

        let facing = math::billboard_face_rotation(heading);
        for sample in ordered {
            if let Some(anchor) = scene.anchor(sample.id) {
                let model = Mat4::new_translation(&anchor.world_position) * facing;
                device.set_model(&model);
                device.draw_mesh(scene.billboard_mesh, scene.billboard_texture);
            }
        }
        device.disable_blending();
    }

    fn shutdown(&mut self) {
        self.audio.stop_sound(self.scene.music);
        self.audio.stop_sound(self.scene.chime);
        self.input_state.clear();
        log::info!(
            "main loop finished: {} frames rendered, {} skipped",
            self.frames_rendered,
            self.frames_skipped
        );
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Scene owned by the engine.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Frames drawn and presented so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Frames whose draw was skipped after a refused `begin_frame`.
    #[must_use]
    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Movement commands currently held.
    #[must_use]
    pub fn held_commands(&self) -> MoveCommand {
        self.input_state.commands()
    }

    /// Render device collaborator.
    #[must_use]
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Input source collaborator.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Audio collaborator.
    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Camera controller collaborator.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }
}
