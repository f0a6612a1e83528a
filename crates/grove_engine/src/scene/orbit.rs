//! Orbit animation for the rotating light and chime emitter
//!
//! One angular parameter advances each frame and produces a single rotation
//! about the world Y axis. Both the point light and the 3D sound emitter
//! derive their world positions from that one transform, which is what keeps
//! what you see and what you hear in the same place.

use crate::foundation::math::{self, Mat4};

/// Per-frame rotation driver.
///
/// The angle advances by a fixed step per *frame*, not per unit time, so
/// animation speed tracks frame rate. That matches the scene this loop was
/// built for; callers wanting frame-rate independence can scale the step
/// they configure by their expected frame time.
#[derive(Debug)]
pub struct OrbitAnimator {
    angle_degrees: f32,
    step_degrees: f32,
}

impl OrbitAnimator {
    /// Create an animator at angle 0 with the given per-frame step.
    #[must_use]
    pub fn new(step_degrees: f32) -> Self {
        Self {
            angle_degrees: 0.0,
            step_degrees,
        }
    }

    /// Advance one frame and return the rotation for the new angle.
    ///
    /// All positions derived for this frame must come from this one
    /// returned transform; deriving the light from one advance and the
    /// emitter from another would let them drift apart.
    pub fn advance(&mut self) -> Mat4 {
        self.angle_degrees = (self.angle_degrees + self.step_degrees).rem_euclid(360.0);
        math::rotate_y_degrees(self.angle_degrees)
    }

    /// Current angle in degrees, in `[0, 360)`.
    #[must_use]
    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{transform_point, Vec3};
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_after_k_advances() {
        let mut orbit = OrbitAnimator::new(0.5);
        for _ in 0..7 {
            orbit.advance();
        }
        assert_relative_eq!(orbit.angle_degrees(), 3.5);
    }

    #[test]
    fn test_wraps_to_zero_at_full_circle() {
        // 360 / 0.5 = 720 advances come back to exactly 0
        let mut orbit = OrbitAnimator::new(0.5);
        for _ in 0..720 {
            orbit.advance();
        }
        assert_eq!(orbit.angle_degrees(), 0.0);
    }

    #[test]
    fn test_wraps_modulo_not_past_360() {
        let mut orbit = OrbitAnimator::new(100.0);
        for _ in 0..4 {
            orbit.advance();
        }
        assert_relative_eq!(orbit.angle_degrees(), 40.0, epsilon = 1e-4);
    }

    #[test]
    fn test_light_and_emitter_share_the_rotation() {
        let mut orbit = OrbitAnimator::new(30.0);
        let rotation = orbit.advance();

        let light_base = Vec3::new(10.0, 20.0, 0.0);
        let chime_base = Vec3::new(50.0, 10.0, 0.0);
        let light = transform_point(&rotation, light_base);
        let chime = transform_point(&rotation, chime_base);

        // Same angle applied to both: heights unchanged, planar radii preserved
        assert_relative_eq!(light.y, 20.0, epsilon = 1e-4);
        assert_relative_eq!(chime.y, 10.0, epsilon = 1e-4);
        let light_radius = (light.x * light.x + light.z * light.z).sqrt();
        let chime_radius = (chime.x * chime.x + chime.z * chime.z).sqrt();
        assert_relative_eq!(light_radius, 10.0, epsilon = 1e-3);
        assert_relative_eq!(chime_radius, 50.0, epsilon = 1e-3);
        // And both sit at the same phase around the axis
        assert_relative_eq!(light.x / light_radius, chime.x / chime_radius, epsilon = 1e-4);
        assert_relative_eq!(light.z / light_radius, chime.z / chime_radius, epsilon = 1e-4);
    }
}
