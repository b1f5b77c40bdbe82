use glam::Mat4;

use crate::errors::{GlintError, Result};
use crate::resources::geometry::{Sphere, TriangleMesh};
use crate::scene::NodeKey;
use crate::scene::camera::Camera;
use crate::scene::graph::SceneGraph;
use crate::scene::light::{EnvironmentLight, Light};
use crate::scene::node::{NodeKind, SurfaceProperties};

/// Traversal direction, fixed per visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Recurse into child edges (downward)
    Children,
    /// Resolve parent back-references and recurse upward
    Parents,
}

/// Whether traversal continues past the visited node.
///
/// Returned by every `visit_*` handler, making the continue-into-children
/// decision explicit at each node instead of an implicit convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue into the node's children (or parents)
    Descend,
    /// Skip the subtree below (or above) this node
    Prune,
}

/// Depth budget for [`traverse`]. Scene graphs are required to be acyclic;
/// the budget turns an accidental cycle into a reported error instead of
/// unbounded recursion.
pub const MAX_TRAVERSAL_DEPTH: usize = 1024;

/// Generic traversal protocol over the node variants.
///
/// A traversal algorithm overrides only the handlers it cares about; every
/// default handler falls through to [`visit_node`](Self::visit_node), whose
/// default descends. [`leave`](Self::leave) runs after a node's subtree has
/// been walked (only when the handler returned [`Flow::Descend`]), which is
/// where stateful visitors restore per-branch state.
pub trait NodeVisitor {
    /// The traversal direction; fixed for the visitor's lifetime.
    fn traversal(&self) -> Traversal {
        Traversal::Children
    }

    /// Variant-independent fallback handler.
    fn visit_node(&mut self, _graph: &SceneGraph, _key: NodeKey) -> Result<Flow> {
        Ok(Flow::Descend)
    }

    fn visit_camera(&mut self, graph: &SceneGraph, key: NodeKey, _camera: &Camera) -> Result<Flow> {
        self.visit_node(graph, key)
    }

    fn visit_light(&mut self, graph: &SceneGraph, key: NodeKey, _light: &Light) -> Result<Flow> {
        self.visit_node(graph, key)
    }

    fn visit_environment_light(
        &mut self,
        graph: &SceneGraph,
        key: NodeKey,
        _light: &EnvironmentLight,
    ) -> Result<Flow> {
        self.visit_node(graph, key)
    }

    fn visit_transform(&mut self, graph: &SceneGraph, key: NodeKey, _matrix: &Mat4) -> Result<Flow> {
        self.visit_node(graph, key)
    }

    fn visit_surface_properties(
        &mut self,
        graph: &SceneGraph,
        key: NodeKey,
        _props: &SurfaceProperties,
    ) -> Result<Flow> {
        self.visit_node(graph, key)
    }

    fn visit_triangle_mesh(
        &mut self,
        graph: &SceneGraph,
        key: NodeKey,
        _mesh: &TriangleMesh,
    ) -> Result<Flow> {
        self.visit_node(graph, key)
    }

    fn visit_sphere(&mut self, graph: &SceneGraph, key: NodeKey, _sphere: &Sphere) -> Result<Flow> {
        self.visit_node(graph, key)
    }

    /// Post-order hook, invoked after the node's edges were walked.
    /// Not invoked for pruned nodes.
    fn leave(&mut self, _graph: &SceneGraph, _key: NodeKey) -> Result<()> {
        Ok(())
    }
}

/// Depth-first traversal from `root`, dispatching on each node's variant.
///
/// Shared subtrees (multiple parents) are visited once per incoming edge —
/// there is deliberately no visited-set, since a shared mesh under two
/// transforms must be processed under both. Parent traversal resolves
/// back-references through the arena; a handle that no longer resolves
/// yields [`GlintError::DanglingParent`].
pub fn traverse<V: NodeVisitor>(graph: &SceneGraph, root: NodeKey, visitor: &mut V) -> Result<()> {
    traverse_at(graph, root, visitor, 0)
}

fn traverse_at<V: NodeVisitor>(
    graph: &SceneGraph,
    key: NodeKey,
    visitor: &mut V,
    depth: usize,
) -> Result<()> {
    if depth > MAX_TRAVERSAL_DEPTH {
        return Err(GlintError::TraversalDepthExceeded {
            max_depth: MAX_TRAVERSAL_DEPTH,
        });
    }

    let node = graph.node(key).ok_or(GlintError::NodeNotFound(key))?;
    log::trace!("visiting {key:?} ({})", node.kind.label());

    let flow = match &node.kind {
        NodeKind::Camera(camera) => visitor.visit_camera(graph, key, camera)?,
        NodeKind::Light(light) => visitor.visit_light(graph, key, light)?,
        NodeKind::EnvironmentLight(light) => visitor.visit_environment_light(graph, key, light)?,
        NodeKind::Transform(matrix) => visitor.visit_transform(graph, key, matrix)?,
        NodeKind::SurfaceProperties(props) => {
            visitor.visit_surface_properties(graph, key, props)?
        }
        NodeKind::TriangleMesh(mesh) => visitor.visit_triangle_mesh(graph, key, mesh)?,
        NodeKind::Sphere(sphere) => visitor.visit_sphere(graph, key, sphere)?,
    };

    if flow == Flow::Prune {
        return Ok(());
    }

    match visitor.traversal() {
        Traversal::Children => {
            for &child in node.children() {
                traverse_at(graph, child, visitor, depth + 1)?;
            }
        }
        Traversal::Parents => {
            for &parent in node.parents() {
                if !graph.contains(parent) {
                    return Err(GlintError::DanglingParent { node: key, parent });
                }
                traverse_at(graph, parent, visitor, depth + 1)?;
            }
        }
    }

    visitor.leave(graph, key)
}
