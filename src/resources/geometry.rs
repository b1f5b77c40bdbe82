use glam::{Vec2, Vec3};

/// Pre-triangulated vertex soup attached to a scene node.
///
/// Positions are stored flat, three consecutive entries per triangle. The
/// optional per-vertex streams are either empty or exactly as long as
/// `positions`; both layouts are valid variant states, not errors. The
/// length invariants are enforced by assertion when the mesh is flattened.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions, length a multiple of 3
    pub positions: Vec<Vec3>,
    /// Per-vertex shading normals, empty or length-matched
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates, empty or length-matched
    pub tex_coords: Vec<Vec2>,
}

impl TriangleMesh {
    #[must_use]
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            normals: Vec::new(),
            tex_coords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Self {
        self.normals = normals;
        self
    }

    #[must_use]
    pub fn with_tex_coords(mut self, tex_coords: Vec<Vec2>) -> Self {
        self.tex_coords = tex_coords;
        self
    }

    /// Number of triangles described by the position stream.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Procedural unit sphere centered at the origin.
///
/// No geometry is stored; triangles are generated on demand during
/// flattening at a fixed tessellation resolution. Size and placement come
/// from the enclosing transform chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// The empty box: inserting any point makes it that point.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Grows the box to contain `point`.
    #[inline]
    pub fn insert(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// True if no point has been inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.min.cmple(self.max).all()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_contains_nothing() {
        let bbox = BoundingBox::EMPTY;
        assert!(bbox.is_empty());
        assert!(!bbox.contains(Vec3::ZERO));
    }

    #[test]
    fn insert_grows_box() {
        let mut bbox = BoundingBox::EMPTY;
        bbox.insert(Vec3::new(1.0, 2.0, 3.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.min, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.max, Vec3::new(1.0, 2.0, 3.0));

        bbox.insert(Vec3::new(-1.0, 0.0, 5.0));
        assert_eq!(bbox.min, Vec3::new(-1.0, 0.0, 3.0));
        assert_eq!(bbox.max, Vec3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn union_covers_both() {
        let mut a = BoundingBox::EMPTY;
        a.insert(Vec3::ZERO);
        a.insert(Vec3::ONE);

        let mut b = BoundingBox::EMPTY;
        b.insert(Vec3::splat(2.0));

        let u = a.union(&b);
        assert_eq!(u.min, Vec3::ZERO);
        assert_eq!(u.max, Vec3::splat(2.0));
        assert!(u.contains(Vec3::splat(1.5)));
    }

    #[test]
    fn center_and_size() {
        let mut bbox = BoundingBox::EMPTY;
        bbox.insert(Vec3::new(-1.0, -2.0, -3.0));
        bbox.insert(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.center(), Vec3::ZERO);
        assert_eq!(bbox.size(), Vec3::new(2.0, 4.0, 6.0));
    }
}
