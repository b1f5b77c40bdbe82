use bitflags::bitflags;
use glam::Mat4;

use crate::resources::geometry::{Sphere, TriangleMesh};
use crate::scene::camera::Camera;
use crate::scene::light::{EnvironmentLight, Light};
use crate::scene::{MaterialKey, NodeKey, TextureKey};

bitflags! {
    /// Per-node flag word.
    ///
    /// Importers may store arbitrary bits; unknown bits are retained.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u64 {
        const HIDDEN = 1 << 0;
        const STATIC = 1 << 1;

        const _ = !0;
    }
}

/// Node metadata, materialized on first write.
///
/// Most nodes in a large scene never get a name or flags, so the block is
/// boxed behind an `Option` and reads fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct NodeMeta {
    pub name: String,
    pub flags: NodeFlags,
}

/// Material and texture references scoping a subtree.
///
/// At most one material; textures are an ordered list and duplicates are
/// allowed.
#[derive(Debug, Clone, Default)]
pub struct SurfaceProperties {
    material: Option<MaterialKey>,
    textures: Vec<TextureKey>,
}

impl SurfaceProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_material(mut self, material: MaterialKey) -> Self {
        self.material = Some(material);
        self
    }

    #[inline]
    #[must_use]
    pub fn material(&self) -> Option<MaterialKey> {
        self.material
    }

    pub fn set_material(&mut self, material: Option<MaterialKey>) {
        self.material = material;
    }

    #[inline]
    #[must_use]
    pub fn textures(&self) -> &[TextureKey] {
        &self.textures
    }

    pub fn add_texture(&mut self, texture: TextureKey) {
        self.textures.push(texture);
    }
}

/// The closed set of node variants.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Camera(Camera),
    Light(Light),
    EnvironmentLight(EnvironmentLight),
    /// Local transform, composed onto the ancestor transform during
    /// traversal (local matrix applied first).
    Transform(Mat4),
    SurfaceProperties(SurfaceProperties),
    TriangleMesh(TriangleMesh),
    Sphere(Sphere),
}

impl NodeKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Camera(_) => "camera",
            NodeKind::Light(_) => "light",
            NodeKind::EnvironmentLight(_) => "environment_light",
            NodeKind::Transform(_) => "transform",
            NodeKind::SurfaceProperties(_) => "surface_properties",
            NodeKind::TriangleMesh(_) => "triangle_mesh",
            NodeKind::Sphere(_) => "sphere",
        }
    }
}

/// A scene graph entity.
///
/// # Hierarchy
///
/// Nodes form a directed acyclic graph: `children` are ordered, owning
/// (arena-owned) links and a child may appear under several parents;
/// `parents` are non-owning back-references kept purely for upward
/// traversal, one entry per [`SceneGraph::add_child`] call (duplicate adds
/// create duplicate edges on purpose). Acyclicity is the caller's
/// responsibility; see [`traverse`] for how cycles surface.
///
/// [`SceneGraph::add_child`]: crate::scene::graph::SceneGraph::add_child
/// [`traverse`]: crate::scene::visitor::traverse
#[derive(Debug, Clone)]
pub struct Node {
    meta: Option<Box<NodeMeta>>,
    pub(crate) parents: Vec<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub kind: NodeKind,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            meta: None,
            parents: Vec::new(),
            children: Vec::new(),
            kind,
        }
    }

    #[must_use]
    pub fn camera(camera: Camera) -> Self {
        Self::new(NodeKind::Camera(camera))
    }

    #[must_use]
    pub fn light(light: Light) -> Self {
        Self::new(NodeKind::Light(light))
    }

    #[must_use]
    pub fn environment_light(light: EnvironmentLight) -> Self {
        Self::new(NodeKind::EnvironmentLight(light))
    }

    /// A transform node; pass [`Mat4::IDENTITY`] for the default.
    #[must_use]
    pub fn transform(matrix: Mat4) -> Self {
        Self::new(NodeKind::Transform(matrix))
    }

    #[must_use]
    pub fn surface_properties(props: SurfaceProperties) -> Self {
        Self::new(NodeKind::SurfaceProperties(props))
    }

    #[must_use]
    pub fn triangle_mesh(mesh: TriangleMesh) -> Self {
        Self::new(NodeKind::TriangleMesh(mesh))
    }

    #[must_use]
    pub fn sphere() -> Self {
        Self::new(NodeKind::Sphere(Sphere))
    }

    // === Metadata ===

    /// The node name; empty if no metadata has been written yet.
    /// Reading never allocates.
    #[must_use]
    pub fn name(&self) -> &str {
        self.meta.as_deref().map_or("", |m| m.name.as_str())
    }

    /// Mutable access to the name, materializing the metadata block.
    pub fn name_mut(&mut self) -> &mut String {
        &mut self.meta_mut().name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.meta_mut().name = name.into();
    }

    /// The node flag word; empty if no metadata has been written yet.
    #[must_use]
    pub fn flags(&self) -> NodeFlags {
        self.meta.as_deref().map_or(NodeFlags::empty(), |m| m.flags)
    }

    /// Mutable access to the flags, materializing the metadata block.
    pub fn flags_mut(&mut self) -> &mut NodeFlags {
        &mut self.meta_mut().flags
    }

    pub fn set_flags(&mut self, flags: NodeFlags) {
        self.meta_mut().flags = flags;
    }

    /// Whether the metadata block has been materialized.
    #[must_use]
    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        self.meta.get_or_insert_with(Box::default)
    }

    // === Hierarchy ===

    /// Ordered child handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Non-owning parent back-references.
    #[inline]
    #[must_use]
    pub fn parents(&self) -> &[NodeKey] {
        &self.parents
    }

    /// Appends a child handle. Prefer [`SceneGraph::add_child`] which keeps
    /// the child's back-reference list in sync. This is exposed for
    /// low-level construction.
    ///
    /// [`SceneGraph::add_child`]: crate::scene::graph::SceneGraph::add_child
    #[inline]
    pub fn push_child(&mut self, child: NodeKey) {
        self.children.push(child);
    }

    /// Appends a parent back-reference. Prefer [`SceneGraph::add_child`].
    ///
    /// [`SceneGraph::add_child`]: crate::scene::graph::SceneGraph::add_child
    #[inline]
    pub fn push_parent(&mut self, parent: NodeKey) {
        self.parents.push(parent);
    }
}
