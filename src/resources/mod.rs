//! Asset and geometry resources referenced by scene nodes.

pub mod geometry;
pub mod material;
pub mod texture;

pub use geometry::{BoundingBox, Sphere, TriangleMesh};
pub use material::{BasicMaterial, Material, MaterialData, PhongMaterial, PhysicalMaterial};
pub use texture::Texture;
