//! Scene graph system.
//!
//! Manages the scene hierarchy and its traversal:
//! - `Node` / `NodeKind`: graph entities (transforms, geometry, lights, ...)
//! - `SceneGraph`: arena container owning nodes and asset pools
//! - `NodeVisitor` / `traverse`: generic traversal protocol
//! - `flatten`: conversion into the flat triangle-soup [`Model`]
//!
//! [`Model`]: crate::model::Model

pub mod camera;
pub mod flatten;
pub mod graph;
pub mod light;
pub mod node;
pub mod visitor;

pub use camera::{Camera, ProjectionType};
pub use flatten::flatten;
pub use graph::{NodeBuilder, SceneGraph};
pub use light::{EnvironmentLight, Light, LightKind};
pub use node::{Node, NodeFlags, NodeKind, SurfaceProperties};
pub use visitor::{Flow, NodeVisitor, Traversal, traverse};

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a node in a [`SceneGraph`] arena.
    pub struct NodeKey;
    /// Handle to a material in the graph's material pool.
    pub struct MaterialKey;
    /// Handle to a texture in the graph's texture pool.
    pub struct TextureKey;
}
