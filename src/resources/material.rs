use std::borrow::Cow;

use glam::{Vec3, Vec4};
use uuid::Uuid;

/// Physically based material carrying a Disney-style parameter set.
///
/// Only the parameters the flattening step summarizes are kept on the CPU
/// side; the shading model itself is a downstream concern.
#[derive(Debug, Clone)]
pub struct PhysicalMaterial {
    /// Base color (linear RGBA).
    pub base_color: Vec4,
    /// Roughness factor.
    pub roughness: f32,
    /// Metalness factor.
    pub metalness: f32,
    /// Specular color.
    pub specular_color: Vec3,
    /// Emissive color.
    pub emissive: Vec3,
}

impl PhysicalMaterial {
    #[must_use]
    pub fn new(base_color: Vec4) -> Self {
        Self {
            base_color,
            roughness: 1.0,
            metalness: 0.0,
            specular_color: Vec3::ZERO,
            emissive: Vec3::ZERO,
        }
    }
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}

/// Classic diffuse/specular material.
#[derive(Debug, Clone)]
pub struct PhongMaterial {
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl PhongMaterial {
    #[must_use]
    pub fn new(diffuse: Vec3) -> Self {
        Self {
            diffuse,
            specular: Vec3::ZERO,
            shininess: 30.0,
        }
    }
}

/// Flat, unshaded color.
#[derive(Debug, Clone)]
pub struct BasicMaterial {
    pub color: Vec4,
}

impl BasicMaterial {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self { color }
    }
}

/// Material data enum.
///
/// A closed variant set so that every consumer (the flat-material
/// conversion in particular) can match totally over it.
#[derive(Debug, Clone)]
pub enum MaterialData {
    Basic(BasicMaterial),
    Phong(PhongMaterial),
    Physical(PhysicalMaterial),
}

/// A named material asset.
///
/// Materials are compared by identity (their pool key, or secondarily the
/// uuid), never by value: two materials with equal parameters are still two
/// distinct assets.
#[derive(Debug, Clone)]
pub struct Material {
    pub uuid: Uuid,
    pub name: Option<Cow<'static, str>>,
    pub data: MaterialData,
}

impl Material {
    #[must_use]
    pub fn new(data: MaterialData) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: None,
            data,
        }
    }

    #[must_use]
    pub fn new_basic(color: Vec4) -> Self {
        Self::new(MaterialData::Basic(BasicMaterial::new(color)))
    }

    #[must_use]
    pub fn new_phong(diffuse: Vec3) -> Self {
        Self::new(MaterialData::Phong(PhongMaterial::new(diffuse)))
    }

    #[must_use]
    pub fn new_physical(base_color: Vec4) -> Self {
        Self::new(MaterialData::Physical(PhysicalMaterial::new(base_color)))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn as_basic(&self) -> Option<&BasicMaterial> {
        match &self.data {
            MaterialData::Basic(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_phong(&self) -> Option<&PhongMaterial> {
        match &self.data {
            MaterialData::Phong(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_physical(&self) -> Option<&PhysicalMaterial> {
        match &self.data {
            MaterialData::Physical(m) => Some(m),
            _ => None,
        }
    }
}
