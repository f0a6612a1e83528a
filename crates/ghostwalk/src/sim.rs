//! Headless platform collaborators
//!
//! Stand-ins for the graphics, audio, and input engines so the walkthrough
//! runs end-to-end without a window, GPU, or sound device. The device
//! honors the frame contract (including a simulated vsync wait in
//! `present`), the audio backend tracks listener/emitter state, and input
//! is replayed from a pre-built script.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use grove_engine::audio::{AudioOutput, SoundHandle};
use grove_engine::foundation::math::{Mat4, Vec3};
use grove_engine::input::{InputEvent, InputSource, KeyCode, MouseDelta};
use grove_engine::render::device::{LightHandle, MeshHandle, RenderDevice, TextureSlot};

/// Render device that draws into the log.
pub struct HeadlessDevice {
    meshes: Vec<String>,
    lights: u64,
    view: Mat4,
    model: Mat4,
    blending: bool,
    fog: bool,
    pacing: Duration,
    frames: u64,
    draw_calls: u64,
}

impl HeadlessDevice {
    /// Create a device that sleeps `pacing_millis` per present (0 = uncapped).
    pub fn new(pacing_millis: u64) -> Self {
        Self {
            meshes: Vec::new(),
            lights: 0,
            view: Mat4::identity(),
            model: Mat4::identity(),
            blending: false,
            fog: false,
            pacing: Duration::from_millis(pacing_millis),
            frames: 0,
            draw_calls: 0,
        }
    }

    /// Register a named mesh and hand back its handle.
    pub fn register_mesh(&mut self, name: &str) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len() as u64);
        self.meshes.push(name.to_string());
        log::debug!("registered mesh '{name}' as {}", handle.0);
        handle
    }

    /// Create a light and hand back its handle.
    pub fn create_light(&mut self) -> LightHandle {
        self.lights += 1;
        LightHandle(self.lights)
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls issued so far.
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    fn mesh_name(&self, mesh: MeshHandle) -> &str {
        self.meshes
            .get(mesh.0 as usize)
            .map_or("<unknown>", String::as_str)
    }
}

impl RenderDevice for HeadlessDevice {
    fn begin_frame(&mut self) -> bool {
        true
    }

    fn present(&mut self) {
        // Stand-in for the vsync wait; the only blocking point in the loop
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
        self.frames += 1;
    }

    fn set_view(&mut self, view: &Mat4) {
        self.view = *view;
    }

    fn set_model(&mut self, model: &Mat4) {
        self.model = *model;
    }

    fn view_transform(&self) -> Mat4 {
        self.view
    }

    fn enable_blending(&mut self) {
        self.blending = true;
    }

    fn disable_blending(&mut self) {
        self.blending = false;
    }

    fn enable_fog(&mut self) {
        self.fog = true;
    }

    fn disable_fog(&mut self) {
        self.fog = false;
    }

    fn update_light(&mut self, light: LightHandle, position: Vec3) {
        log::trace!(
            "light {} at ({:.1}, {:.1}, {:.1})",
            light.0,
            position.x,
            position.y,
            position.z
        );
    }

    fn draw_mesh(&mut self, mesh: MeshHandle, _texture: TextureSlot) {
        self.draw_calls += 1;
        log::trace!(
            "draw '{}' at ({:.1}, {:.1}, {:.1}) blend={} fog={}",
            self.mesh_name(mesh),
            self.model.m14,
            self.model.m24,
            self.model.m34,
            self.blending,
            self.fog
        );
    }
}

/// Audio backend that tracks positions and logs playback.
pub struct HeadlessAudio {
    enabled: bool,
    master_volume: f32,
    sounds: Vec<String>,
    listener: Vec3,
}

impl HeadlessAudio {
    /// Create a backend; `enabled = false` mutes playback logging.
    pub fn new(enabled: bool, master_volume: f32) -> Self {
        Self {
            enabled,
            master_volume,
            sounds: Vec::new(),
            listener: Vec3::zeros(),
        }
    }

    /// Register a named sound and hand back its handle.
    pub fn load_sound(&mut self, name: &str) -> SoundHandle {
        let handle = SoundHandle(self.sounds.len() as u64);
        self.sounds.push(name.to_string());
        log::debug!("loaded sound '{name}' as {}", handle.0);
        handle
    }

    /// Current listener position.
    pub fn listener_position(&self) -> Vec3 {
        self.listener
    }

    fn sound_name(&self, sound: SoundHandle) -> &str {
        self.sounds
            .get(sound.0 as usize)
            .map_or("<unknown>", String::as_str)
    }
}

impl AudioOutput for HeadlessAudio {
    fn set_listener_pose(&mut self, position: Vec3, _heading: Vec3) {
        self.listener = position;
    }

    fn set_emitter_position(&mut self, sound: SoundHandle, position: Vec3) {
        log::trace!(
            "emitter '{}' at ({:.1}, {:.1}, {:.1})",
            self.sound_name(sound),
            position.x,
            position.y,
            position.z
        );
    }

    fn play_sound(&mut self, sound: SoundHandle, looped: bool) {
        if self.enabled {
            log::info!(
                "playing '{}' (looped: {looped}, volume {:.1})",
                self.sound_name(sound),
                self.master_volume
            );
        }
    }

    fn stop_sound(&mut self, sound: SoundHandle) {
        if self.enabled {
            log::info!("stopped '{}'", self.sound_name(sound));
        }
    }
}

struct ScriptStep {
    event: Option<InputEvent>,
    mouse: MouseDelta,
}

/// Input source replaying a pre-built walkthrough script.
///
/// One step is consumed per frame. When the script runs out the exit key
/// is pressed, so a scripted run always terminates.
pub struct ScriptedInput {
    steps: VecDeque<ScriptStep>,
    pending_mouse: MouseDelta,
    exit_key: KeyCode,
}

impl ScriptedInput {
    /// Create an empty script that exits with `exit_key`.
    pub fn new(exit_key: KeyCode) -> Self {
        Self {
            steps: VecDeque::new(),
            pending_mouse: MouseDelta::default(),
            exit_key,
        }
    }

    /// Append a key press.
    #[must_use]
    pub fn press(mut self, key: KeyCode) -> Self {
        self.steps.push_back(ScriptStep {
            event: Some(InputEvent::KeyPress(key)),
            mouse: MouseDelta::default(),
        });
        self
    }

    /// Append a key release.
    #[must_use]
    pub fn release(mut self, key: KeyCode) -> Self {
        self.steps.push_back(ScriptStep {
            event: Some(InputEvent::KeyRelease(key)),
            mouse: MouseDelta::default(),
        });
        self
    }

    /// Append `frames` empty frames.
    #[must_use]
    pub fn wait(mut self, frames: u64) -> Self {
        for _ in 0..frames {
            self.steps.push_back(ScriptStep {
                event: None,
                mouse: MouseDelta::default(),
            });
        }
        self
    }

    /// Append `frames` frames of steady mouse movement.
    #[must_use]
    pub fn look(mut self, dx: i32, dy: i32, frames: u64) -> Self {
        for _ in 0..frames {
            self.steps.push_back(ScriptStep {
                event: None,
                mouse: MouseDelta { dx, dy },
            });
        }
        self
    }

    /// Frames remaining before the automatic exit.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        match self.steps.pop_front() {
            Some(step) => {
                self.pending_mouse = step.mouse;
                step.event
            }
            None => {
                self.pending_mouse = MouseDelta::default();
                Some(InputEvent::KeyPress(self.exit_key))
            }
        }
    }

    fn sample_mouse_delta(&mut self) -> MouseDelta {
        // Taking the value is the accumulator reset
        std::mem::take(&mut self.pending_mouse)
    }
}
