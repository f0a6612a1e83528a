//! Scene assembly for the grove walkthrough
//!
//! Builds the fixed world: sandy ground and trees in the opaque pass, sky
//! and cloud domes in the blended pass (fog wraps the clouds), a scatter of
//! ghost billboards, an orbiting point light, and the chime that rides the
//! same orbit.

use grove_engine::foundation::math::Vec3;
use grove_engine::render::billboard::{AnchorId, BillboardAnchor};
use grove_engine::render::device::TextureSlot;
use grove_engine::scene::{orbit::OrbitAnimator, Scene, SceneMesh};
use rand::Rng;

use crate::config::GameConfig;
use crate::sim::{HeadlessAudio, HeadlessDevice};

/// Camera start position for the walkthrough.
pub const START_POSITION: Vec3 = Vec3::new(0.0, 5.0, -120.0);

/// Camera start heading for the walkthrough.
pub const START_HEADING: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Assemble the walkthrough scene against the given backends.
pub fn build_scene<R: Rng>(
    config: &GameConfig,
    device: &mut HeadlessDevice,
    audio: &mut HeadlessAudio,
    rng: &mut R,
) -> Scene {
    let ground = device.register_mesh("ground");
    let trunk = device.register_mesh("tree_trunk");
    let leaves = device.register_mesh("tree_leaves");
    let skydome = device.register_mesh("skydome");
    let clouddome = device.register_mesh("clouddome");
    let ghost = device.register_mesh("ghost");

    let music = audio.load_sound("eyes_without_a_face");
    let chime = audio.load_sound("chimes");

    // Ghosts scatter across the grove floor at eye height
    let anchors: Vec<BillboardAnchor> = (0..config.scene.ghost_count)
        .map(|i| {
            let x = rng.gen::<f32>() * 100.0 - 50.0;
            let z = rng.gen::<f32>() * -100.0;
            BillboardAnchor::new(AnchorId(i), Vec3::new(x, 1.0, z))
        })
        .collect();

    Scene {
        anchors,
        billboard_mesh: ghost,
        billboard_texture: TextureSlot(0),
        opaque: vec![
            SceneMesh::new(ground, TextureSlot(0)),
            SceneMesh::new(trunk, TextureSlot(0)),
            SceneMesh::new(leaves, TextureSlot(0)),
        ],
        blended: vec![
            SceneMesh::new(skydome, TextureSlot(0)),
            SceneMesh::new(clouddome, TextureSlot(0)).with_fog(),
        ],
        light: device.create_light(),
        light_base: Vec3::new(10.0, 20.0, 0.0),
        chime,
        chime_base: Vec3::new(50.0, 10.0, 0.0),
        music,
        orbit: OrbitAnimator::new(config.frame.orbit_step_degrees),
    }
}
