//! First-person camera rig
//!
//! Integrates the engine's movement commands and mouse deltas into a
//! walking camera: yaw/pitch from the mouse, planar movement at a fixed
//! run speed. Speed scales with elapsed time so movement is frame-rate
//! independent.

use grove_engine::camera::{CameraController, CameraPose};
use grove_engine::foundation::math::Vec3;
use grove_engine::input::{MouseDelta, MoveCommand};

use crate::config::WalkConfig;

/// Walking camera controller.
#[derive(Debug)]
pub struct FirstPersonRig {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    run_speed: f32,
    sensitivity: f32,
    max_pitch: f32,
}

impl FirstPersonRig {
    /// Create a rig at `position` looking along `heading`.
    pub fn new(position: Vec3, heading: Vec3, config: &WalkConfig) -> Self {
        let planar = (heading.x * heading.x + heading.z * heading.z).sqrt();
        Self {
            position,
            yaw: heading.x.atan2(heading.z),
            pitch: heading.y.atan2(planar),
            run_speed: config.run_speed,
            sensitivity: config.mouse_sensitivity,
            max_pitch: config.max_pitch_degrees.to_radians(),
        }
    }

    fn heading(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }
}

impl CameraController for FirstPersonRig {
    fn update(
        &mut self,
        elapsed_millis: u64,
        commands: MoveCommand,
        mouse: MouseDelta,
    ) -> CameraPose {
        // Positive dx turns right, positive dy (mouse moved down) looks down
        self.yaw -= mouse.dx as f32 * self.sensitivity;
        self.pitch = (self.pitch - mouse.dy as f32 * self.sensitivity)
            .clamp(-self.max_pitch, self.max_pitch);

        let heading = self.heading();
        let mut forward = Vec3::new(heading.x, 0.0, heading.z);
        if forward.magnitude() > 1e-6 {
            forward = forward.normalize();
        }
        let right = forward.cross(&Vec3::y());

        let step = self.run_speed * (elapsed_millis as f32 / 1000.0);
        if commands.contains(MoveCommand::FORWARD) {
            self.position += forward * step;
        }
        if commands.contains(MoveCommand::BACK) {
            self.position -= forward * step;
        }
        if commands.contains(MoveCommand::RIGHT) {
            self.position += right * step;
        }
        if commands.contains(MoveCommand::LEFT) {
            self.position -= right * step;
        }

        CameraPose::new(self.position, heading)
    }

    fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.heading())
    }
}
