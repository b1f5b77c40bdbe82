#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod errors;
pub mod model;
pub mod resources;
pub mod scene;

pub use errors::{GlintError, Result};
pub use model::{Model, ModelMaterial, Triangle};
pub use resources::geometry::{BoundingBox, Sphere, TriangleMesh};
pub use resources::material::{BasicMaterial, Material, MaterialData, PhongMaterial, PhysicalMaterial};
pub use resources::texture::Texture;
pub use scene::camera::{Camera, ProjectionType};
pub use scene::flatten::{SPHERE_RESOLUTION, flatten};
pub use scene::graph::{NodeBuilder, SceneGraph};
pub use scene::light::{EnvironmentLight, Light, LightKind};
pub use scene::node::{Node, NodeFlags, NodeKind, SurfaceProperties};
pub use scene::visitor::{Flow, MAX_TRAVERSAL_DEPTH, NodeVisitor, Traversal, traverse};
pub use scene::{MaterialKey, NodeKey, TextureKey};
