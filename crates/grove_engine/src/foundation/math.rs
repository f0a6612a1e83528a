//! Math utilities and types
//!
//! Provides fundamental math types for 3D scene work, backed by nalgebra.

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math helper functions
pub mod utils {
    /// Convert degrees to radians
    #[must_use]
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees.to_radians()
    }
}

/// Rotation about the world +Y axis, angle in degrees.
#[must_use]
pub fn rotate_y_degrees(degrees: f32) -> Mat4 {
    Mat4::from_axis_angle(&Vector3::y_axis(), utils::deg_to_rad(degrees))
}

/// Transform a point (w = 1) through a homogeneous matrix.
#[must_use]
pub fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    matrix.transform_point(&nalgebra::Point3::from(point)).coords
}

/// Build a right-handed view matrix from a camera position and view direction.
///
/// View space has the camera forward axis along -Z; depth along the forward
/// axis therefore grows with `-view.z`.
#[must_use]
pub fn look_at(position: Vec3, heading: Vec3, up: Vec3) -> Mat4 {
    let target = position + heading;
    Mat4::look_at_rh(
        &nalgebra::Point3::from(position),
        &nalgebra::Point3::from(target),
        &up,
    )
}

/// Rotation about +Y that turns a +Z-facing quad to face back along `heading`.
///
/// Used to orient billboard sprites toward the viewer while keeping their
/// up axis locked to world Y.
#[must_use]
pub fn billboard_face_rotation(heading: Vec3) -> Mat4 {
    let yaw = (-heading.x).atan2(-heading.z);
    Mat4::from_axis_angle(&Vector3::y_axis(), yaw)
}
