//! Scene context
//!
//! Everything the frame loop animates or draws lives in one explicit
//! [`Scene`] value owned by the engine. Sub-components receive references
//! for the duration of a single call; nothing holds long-lived aliases into
//! the scene.

pub mod orbit;

use crate::audio::SoundHandle;
use crate::foundation::math::Vec3;
use crate::render::billboard::{AnchorId, BillboardAnchor};
use crate::render::device::{LightHandle, MeshHandle, TextureSlot};
use orbit::OrbitAnimator;

/// Static mesh entry in a scene draw list.
#[derive(Debug, Clone, Copy)]
pub struct SceneMesh {
    /// Mesh resource to draw
    pub mesh: MeshHandle,
    /// Texture stage the mesh samples from
    pub texture: TextureSlot,
    /// Whether fog wraps this draw (cloud dome)
    pub fogged: bool,
}

impl SceneMesh {
    /// Plain mesh entry without fog.
    #[must_use]
    pub fn new(mesh: MeshHandle, texture: TextureSlot) -> Self {
        Self {
            mesh,
            texture,
            fogged: false,
        }
    }

    /// Mark this entry as drawn with fog enabled.
    #[must_use]
    pub fn with_fog(mut self) -> Self {
        self.fogged = true;
        self
    }
}

/// World state for one walkthrough scene.
#[derive(Debug)]
pub struct Scene {
    /// Billboard sprite anchors; count and identity order are fixed for the
    /// lifetime of the scene
    pub anchors: Vec<BillboardAnchor>,
    /// Mesh drawn at every anchor position
    pub billboard_mesh: MeshHandle,
    /// Texture for the billboard mesh
    pub billboard_texture: TextureSlot,
    /// Draw list for the opaque pass
    pub opaque: Vec<SceneMesh>,
    /// Draw list for the alpha-blended pass
    pub blended: Vec<SceneMesh>,
    /// Orbiting point light
    pub light: LightHandle,
    /// Light position at orbit angle 0
    pub light_base: Vec3,
    /// Looping 3D chime riding the same orbit
    pub chime: SoundHandle,
    /// Chime position at orbit angle 0
    pub chime_base: Vec3,
    /// Looping background music (not positional)
    pub music: SoundHandle,
    /// Rotation driver shared by the light and the chime
    pub orbit: OrbitAnimator,
}

impl Scene {
    /// Look up an anchor by identity.
    #[must_use]
    pub fn anchor(&self, id: AnchorId) -> Option<&BillboardAnchor> {
        self.anchors.iter().find(|anchor| anchor.id == id)
    }
}
