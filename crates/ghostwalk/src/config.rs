//! Walkthrough configuration
//!
//! Loaded from `ghostwalk.toml` next to the binary; any missing file,
//! section, or key falls back to defaults so the demo always starts.

use std::path::Path;

use grove_engine::input::KeyCode;
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Movement and mouse-look settings
    pub walk: WalkConfig,

    /// Audio settings
    pub audio: AudioConfig,

    /// Key bindings
    pub controls: ControlsConfig,

    /// Scene population settings
    pub scene: SceneConfig,

    /// Frame loop settings
    pub frame: FrameConfig,
}

/// Movement and mouse-look configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Run speed in world units per second
    pub run_speed: f32,

    /// Mouse-look sensitivity in radians per count
    pub mouse_sensitivity: f32,

    /// Pitch clamp in degrees, applied symmetrically
    pub max_pitch_degrees: f32,
}

/// Audio configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Whether playback is enabled at all
    pub enabled: bool,

    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

/// Key binding configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Forward movement key
    pub forward_key: String,

    /// Backward movement key
    pub back_key: String,

    /// Strafe-left key
    pub left_key: String,

    /// Strafe-right key
    pub right_key: String,

    /// Exit key
    pub exit_key: String,
}

/// Scene population configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of ghost billboards scattered through the grove
    pub ghost_count: u32,
}

/// Frame loop configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Orbit advance per frame in degrees
    pub orbit_step_degrees: f32,

    /// Elapsed-time ceiling handed to the camera controller
    pub max_frame_millis: u64,

    /// Simulated vsync interval for the headless device (0 = uncapped)
    pub pacing_millis: u64,

    /// Length of the scripted walkthrough in frames
    pub demo_frames: u64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            run_speed: 12.0,
            mouse_sensitivity: 0.003,
            max_pitch_degrees: 85.0,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 0.9,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            forward_key: "W".to_string(),
            back_key: "S".to_string(),
            left_key: "A".to_string(),
            right_key: "D".to_string(),
            exit_key: "Escape".to_string(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { ghost_count: 20 }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            orbit_step_degrees: 0.5,
            max_frame_millis: 100,
            pacing_millis: 16,
            demo_frames: 240,
        }
    }
}

impl GameConfig {
    /// Load configuration from `path`, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    log::info!("loaded configuration from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("no {} found, using defaults", path.display());
                Self::default()
            }
        }
    }
}

impl ControlsConfig {
    /// Forward movement key code.
    pub fn forward(&self) -> KeyCode {
        parse_key(&self.forward_key)
    }

    /// Backward movement key code.
    pub fn back(&self) -> KeyCode {
        parse_key(&self.back_key)
    }

    /// Strafe-left key code.
    pub fn left(&self) -> KeyCode {
        parse_key(&self.left_key)
    }

    /// Strafe-right key code.
    pub fn right(&self) -> KeyCode {
        parse_key(&self.right_key)
    }

    /// Exit key code.
    pub fn exit(&self) -> KeyCode {
        parse_key(&self.exit_key)
    }
}

/// Map a configured key name onto an engine key code.
///
/// Names the engine does not distinguish fall through to `Other` with the
/// first byte as the raw code, which the input translator ignores.
pub fn parse_key(name: &str) -> KeyCode {
    match name.to_ascii_uppercase().as_str() {
        "W" => KeyCode::W,
        "A" => KeyCode::A,
        "S" => KeyCode::S,
        "D" => KeyCode::D,
        "ESC" | "ESCAPE" => KeyCode::Escape,
        other => KeyCode::Other(u32::from(other.bytes().next().unwrap_or(0))),
    }
}
