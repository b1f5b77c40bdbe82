use slotmap::SlotMap;

use crate::resources::material::Material;
use crate::resources::texture::Texture;
use crate::scene::node::{Node, NodeFlags, NodeKind};
use crate::scene::{MaterialKey, NodeKey, TextureKey};

/// Arena container for the scene graph.
///
/// Owns the node arena plus the material and texture pools nodes refer
/// into. The graph is pure data: it has no notion of a root (callers keep
/// the handles they care about) and performs no validation beyond what the
/// individual operations document.
#[derive(Debug, Default)]
pub struct SceneGraph {
    pub nodes: SlotMap<NodeKey, Node>,

    // ==== Asset pools ====
    pub materials: SlotMap<MaterialKey, Material>,
    pub textures: SlotMap<TextureKey, Texture>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            materials: SlotMap::with_key(),
            textures: SlotMap::with_key(),
        }
    }

    /// Inserts a node and returns its handle. The node starts unparented;
    /// wire it with [`add_child`](Self::add_child).
    pub fn insert(&mut self, node: Node) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Starts building a node with the chainable [`NodeBuilder`].
    pub fn build_node(&mut self, kind: NodeKind) -> NodeBuilder<'_> {
        NodeBuilder::new(self, kind)
    }

    #[inline]
    #[must_use]
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Links `child` under `parent`: appends the child handle to the
    /// parent's child list and the parent handle to the child's
    /// back-reference list.
    ///
    /// No cycle, self-reference, or duplicate-edge checks are performed —
    /// graph well-formedness is the caller's responsibility. Adding the
    /// same child twice creates two edges (the child is visited once per
    /// edge during traversal). Both handles must be live; a stale handle
    /// makes the call a logged no-op.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            log::error!("add_child with stale handle: parent {parent:?}, child {child:?}");
            return;
        }
        if parent == child {
            log::warn!("adding node {parent:?} as a child of itself");
        }

        self.nodes[child].parents.push(parent);
        self.nodes[parent].children.push(child);
    }

    /// Removes a node, detaching every edge to and from it.
    ///
    /// Children are not removed — they may be shared with other parents;
    /// only the edges are cleaned up. Returns the node, or `None` if the
    /// handle was stale.
    pub fn remove(&mut self, key: NodeKey) -> Option<Node> {
        let node = self.nodes.remove(key)?;
        for &parent in &node.parents {
            if let Some(p) = self.nodes.get_mut(parent) {
                p.children.retain(|&c| c != key);
            }
        }
        for &child in &node.children {
            if let Some(c) = self.nodes.get_mut(child) {
                c.parents.retain(|&p| p != key);
            }
        }
        Some(node)
    }

    // === Asset pool API ===

    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    #[inline]
    #[must_use]
    pub fn material(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureKey {
        self.textures.insert(texture)
    }

    #[inline]
    #[must_use]
    pub fn texture(&self, key: TextureKey) -> Option<&Texture> {
        self.textures.get(key)
    }
}

/// Chainable construction of a node inside a [`SceneGraph`].
pub struct NodeBuilder<'a> {
    graph: &'a mut SceneGraph,
    node: Node,
    parent: Option<NodeKey>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(graph: &'a mut SceneGraph, kind: NodeKind) -> Self {
        Self {
            graph,
            node: Node::new(kind),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.node.set_name(name);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.node.set_flags(flags);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeKey) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Inserts the node, wiring it under the chosen parent if one was set.
    pub fn build(self) -> NodeKey {
        let key = self.graph.nodes.insert(self.node);
        if let Some(parent) = self.parent {
            self.graph.add_child(parent, key);
        }
        key
    }
}
