use glam::{Vec2, Vec3};

use crate::resources::geometry::BoundingBox;

/// A world-space triangle in the flat output.
///
/// Encoded as one base vertex plus the two edge vectors to the remaining
/// vertices, the canonical primitive encoding of the downstream
/// intersection engine. `prim_id` is globally sequential across the model;
/// `geom_id` indexes [`Model::materials`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Base vertex
    pub v1: Vec3,
    /// Edge to the second vertex (`v2 - v1`)
    pub e1: Vec3,
    /// Edge to the third vertex (`v3 - v1`)
    pub e2: Vec3,
    pub prim_id: u32,
    pub geom_id: u32,
}

impl Triangle {
    #[must_use]
    pub fn new(v1: Vec3, e1: Vec3, e2: Vec3, prim_id: u32, geom_id: u32) -> Self {
        Self {
            v1,
            e1,
            e2,
            prim_id,
            geom_id,
        }
    }

    /// The three absolute vertex positions.
    #[must_use]
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v1, self.v1 + self.e1, self.v1 + self.e2]
    }
}

/// Flat material record indexed by geometry id.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelMaterial {
    /// Diffuse color
    pub diffuse: Vec3,
    /// Specular color
    pub specular: Vec3,
}

/// The flat triangle-soup output of scene flattening.
///
/// Append-only during a single flatten invocation, then handed to the
/// acceleration-structure build. Per-triangle streams stay aligned:
/// `shading_normals` and `tex_coords` always hold 3 entries per triangle
/// (zero-filled when the source geometry carried none — consumers decide
/// from the geometry's origin whether they are meaningful), and
/// `geometric_normals` holds exactly one valid entry per triangle.
#[derive(Debug, Default)]
pub struct Model {
    pub primitives: Vec<Triangle>,
    pub shading_normals: Vec<Vec3>,
    pub geometric_normals: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>,
    pub materials: Vec<ModelMaterial>,
    pub bbox: BoundingBox,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
