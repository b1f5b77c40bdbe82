use glam::Vec3;
use uuid::Uuid;

use crate::scene::TextureKey;

#[derive(Debug, Clone, Default)]
pub struct DirectionalLight;

#[derive(Debug, Clone)]
pub struct PointLight {
    pub range: f32,
}

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub range: f32,
    pub inner_cone: f32,
    pub outer_cone: f32,
}

/// Light component kinds in the scene.
#[derive(Debug, Clone)]
pub enum LightKind {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

/// Light component.
///
/// Direction and position come from the enclosing transform chain; shading
/// semantics live with the renderer.
#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight),
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Point(PointLight { range }),
        }
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32, range: f32, inner_cone: f32, outer_cone: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Spot(SpotLight {
                range,
                inner_cone,
                outer_cone,
            }),
        }
    }
}

/// Image-based environment light, optionally backed by a texture asset.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentLight {
    texture: Option<TextureKey>,
}

impl EnvironmentLight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_texture(mut self, texture: TextureKey) -> Self {
        self.texture = Some(texture);
        self
    }

    #[inline]
    #[must_use]
    pub fn texture(&self) -> Option<TextureKey> {
        self.texture
    }

    pub fn set_texture(&mut self, texture: Option<TextureKey>) {
        self.texture = texture;
    }
}
