//! Scene flattening.
//!
//! Converts a scene graph into the flat triangle-soup [`Model`]: a single
//! depth-first walk composes transforms and material scope along each
//! branch and emits world-space triangles as geometry nodes are visited.

use glam::{Mat4, Vec2, Vec3};

use crate::errors::{GlintError, Result};
use crate::model::{Model, ModelMaterial, Triangle};
use crate::resources::geometry::{Sphere, TriangleMesh};
use crate::resources::material::{Material, MaterialData};
use crate::scene::graph::SceneGraph;
use crate::scene::node::{NodeKind, SurfaceProperties};
use crate::scene::visitor::{Flow, NodeVisitor, traverse};
use crate::scene::{MaterialKey, NodeKey};

/// Tessellation resolution for procedural spheres: longitude steps around
/// a full turn; latitude uses half as many steps pole to pole.
pub const SPHERE_RESOLUTION: u32 = 64;

/// The stateful traversal performing the conversion.
///
/// `current_transform` and `current_geom_id` are scoped per branch: the
/// handlers for transform and surface-properties nodes save the incoming
/// value before computing the subtree's, and `leave` restores it, so
/// siblings never observe each other's context.
struct FlattenVisitor<'a> {
    /// The model to add triangles to
    model: &'a mut Model,

    /// Distinct materials in first-seen order; geom_ids index this list
    materials: Vec<MaterialKey>,

    /// Composed world matrix along the path from the root
    current_transform: Mat4,

    /// Geometry id of the nearest enclosing surface-properties ancestor
    current_geom_id: u32,

    // Saved outer values, restored in leave()
    transform_stack: Vec<Mat4>,
    geom_id_stack: Vec<u32>,
}

impl<'a> FlattenVisitor<'a> {
    fn new(model: &'a mut Model) -> Self {
        Self {
            model,
            materials: Vec::new(),
            current_transform: Mat4::IDENTITY,
            current_geom_id: 0,
            transform_stack: Vec::new(),
            geom_id_stack: Vec::new(),
        }
    }

    /// Inverse-transpose of the current transform, the matrix that carries
    /// normals to world space correctly under non-uniform scale.
    fn normal_matrix(&self) -> Mat4 {
        self.current_transform.inverse().transpose()
    }
}

impl NodeVisitor for FlattenVisitor<'_> {
    fn visit_transform(&mut self, _graph: &SceneGraph, _key: NodeKey, matrix: &Mat4) -> Result<Flow> {
        self.transform_stack.push(self.current_transform);
        // Local matrix first, then the ancestor chain: children nest inside
        // their parents.
        self.current_transform *= *matrix;
        Ok(Flow::Descend)
    }

    fn visit_surface_properties(
        &mut self,
        _graph: &SceneGraph,
        _key: NodeKey,
        props: &SurfaceProperties,
    ) -> Result<Flow> {
        self.geom_id_stack.push(self.current_geom_id);

        // Identity-based dedup; a node without a material inherits the
        // ancestor's geometry id. Material counts are small enough that a
        // linear scan wins over a map, and it keeps first-seen order.
        if let Some(material) = props.material() {
            self.current_geom_id = match self.materials.iter().position(|&m| m == material) {
                Some(index) => index as u32,
                None => {
                    self.materials.push(material);
                    (self.materials.len() - 1) as u32
                }
            };
        }

        Ok(Flow::Descend)
    }

    fn visit_triangle_mesh(
        &mut self,
        _graph: &SceneGraph,
        _key: NodeKey,
        mesh: &TriangleMesh,
    ) -> Result<Flow> {
        assert!(
            mesh.positions.len() % 3 == 0,
            "triangle mesh position count must be a multiple of 3"
        );
        assert!(
            mesh.normals.is_empty() || mesh.normals.len() == mesh.positions.len(),
            "per-vertex normal count must match position count"
        );
        assert!(
            mesh.tex_coords.is_empty() || mesh.tex_coords.len() == mesh.positions.len(),
            "per-vertex tex coord count must match position count"
        );

        let normal_matrix = self.normal_matrix();

        for (tri, corners) in mesh.positions.chunks_exact(3).enumerate() {
            let v1 = self.current_transform.transform_point3(corners[0]);
            let v2 = self.current_transform.transform_point3(corners[1]);
            let v3 = self.current_transform.transform_point3(corners[2]);

            let prim_id = self.model.primitives.len() as u32;
            self.model
                .primitives
                .push(Triangle::new(v1, v2 - v1, v3 - v1, prim_id, self.current_geom_id));

            if mesh.normals.is_empty() {
                self.model.shading_normals.extend_from_slice(&[Vec3::ZERO; 3]);
            } else {
                for &n in &mesh.normals[tri * 3..tri * 3 + 3] {
                    self.model.shading_normals.push(normal_matrix.transform_vector3(n));
                }
            }

            // Geometric normal from the transformed edges, then through the
            // normal matrix like the shading normals.
            let gn = (v2 - v1).cross(v3 - v1).normalize();
            self.model
                .geometric_normals
                .push(normal_matrix.transform_vector3(gn));

            if mesh.tex_coords.is_empty() {
                self.model.tex_coords.extend_from_slice(&[Vec2::ZERO; 3]);
            } else {
                self.model
                    .tex_coords
                    .extend_from_slice(&mesh.tex_coords[tri * 3..tri * 3 + 3]);
            }

            self.model.bbox.insert(v1);
            self.model.bbox.insert(v2);
            self.model.bbox.insert(v3);
        }

        Ok(Flow::Descend)
    }

    fn visit_sphere(&mut self, _graph: &SceneGraph, _key: NodeKey, _sphere: &Sphere) -> Result<Flow> {
        let normal_matrix = self.normal_matrix();

        let resolution = SPHERE_RESOLUTION;
        let res = resolution as f32;
        let tau = std::f32::consts::TAU;

        for i in 0..resolution {
            let x2 = (i + 1) % resolution;

            let theta1 = i as f32 * tau / res - std::f32::consts::FRAC_PI_2;
            let theta2 = x2 as f32 * tau / res - std::f32::consts::FRAC_PI_2;

            for j in 0..resolution / 2 {
                let y2 = (j + 1) % resolution;

                let phi1 = j as f32 * tau / res;
                let phi2 = y2 as f32 * tau / res;

                // Unit-sphere corner positions of this quad; these double
                // as the shading normals.
                let p1 = Vec3::new(theta1.cos() * phi1.cos(), theta1.sin(), theta1.cos() * phi1.sin());
                let p2 = Vec3::new(theta2.cos() * phi1.cos(), theta2.sin(), theta2.cos() * phi1.sin());
                let p3 = Vec3::new(theta2.cos() * phi2.cos(), theta2.sin(), theta2.cos() * phi2.sin());
                let p4 = Vec3::new(theta1.cos() * phi2.cos(), theta1.sin(), theta1.cos() * phi2.sin());

                // Geometric normals from the untransformed quad edges.
                let gn1 = (p2 - p1).cross(p3 - p1).normalize();
                let gn2 = (p3 - p1).cross(p4 - p1).normalize();

                // The lower longitude half flips its shading normals.
                // Inherited policy, preserved as-is; see DESIGN.md.
                let sign = if i >= resolution / 2 { -1.0 } else { 1.0 };
                let n1 = normal_matrix.transform_vector3(p1 * sign);
                let n2 = normal_matrix.transform_vector3(p2 * sign);
                let n3 = normal_matrix.transform_vector3(p3 * sign);
                let n4 = normal_matrix.transform_vector3(p4 * sign);

                let tc1 = Vec2::new(i as f32 / res, j as f32 / (res / 2.0));
                let tc2 = Vec2::new((i + 1) as f32 / res, j as f32 / (res / 2.0));
                let tc3 = Vec2::new((i + 1) as f32 / res, (j + 1) as f32 / (res / 2.0));
                let tc4 = Vec2::new(i as f32 / res, (j + 1) as f32 / (res / 2.0));

                let v1 = self.current_transform.transform_point3(p1);
                let v2 = self.current_transform.transform_point3(p2);
                let v3 = self.current_transform.transform_point3(p3);
                let v4 = self.current_transform.transform_point3(p4);

                let prim_id = self.model.primitives.len() as u32;
                self.model
                    .primitives
                    .push(Triangle::new(v1, v2 - v1, v3 - v1, prim_id, self.current_geom_id));

                let prim_id = self.model.primitives.len() as u32;
                self.model
                    .primitives
                    .push(Triangle::new(v1, v3 - v1, v4 - v1, prim_id, self.current_geom_id));

                self.model
                    .shading_normals
                    .extend_from_slice(&[n1, n2, n3, n1, n3, n4]);

                self.model
                    .geometric_normals
                    .push(normal_matrix.transform_vector3(gn1));
                self.model
                    .geometric_normals
                    .push(normal_matrix.transform_vector3(gn2));

                self.model
                    .tex_coords
                    .extend_from_slice(&[tc1, tc2, tc3, tc1, tc3, tc4]);

                self.model.bbox.insert(v1);
                self.model.bbox.insert(v2);
                self.model.bbox.insert(v3);
                self.model.bbox.insert(v4);
            }
        }

        Ok(Flow::Descend)
    }

    fn leave(&mut self, graph: &SceneGraph, key: NodeKey) -> Result<()> {
        let node = graph.node(key).ok_or(GlintError::NodeNotFound(key))?;
        match &node.kind {
            NodeKind::Transform(_) => {
                if let Some(previous) = self.transform_stack.pop() {
                    self.current_transform = previous;
                }
            }
            NodeKind::SurfaceProperties(_) => {
                if let Some(previous) = self.geom_id_stack.pop() {
                    self.current_geom_id = previous;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Flat summary of a material asset; total over every variant.
fn flat_material(material: &Material) -> ModelMaterial {
    match &material.data {
        MaterialData::Basic(m) => ModelMaterial {
            diffuse: m.color.truncate(),
            specular: Vec3::ZERO,
        },
        MaterialData::Phong(m) => ModelMaterial {
            diffuse: m.diffuse,
            specular: m.specular,
        },
        MaterialData::Physical(m) => ModelMaterial {
            diffuse: m.base_color.truncate(),
            specular: m.specular_color,
        },
    }
}

/// Flattens the graph below `root` into `model`.
///
/// Walks the graph depth-first, emitting one world-space triangle stream,
/// then converts the deduplicated material list into the model's flat
/// records (geometry ids index it in first-seen order). The model is
/// append-only during the call, so a pre-populated model keeps its
/// existing content and ids keep counting from where it left off.
pub fn flatten(model: &mut Model, graph: &SceneGraph, root: NodeKey) -> Result<()> {
    let mut visitor = FlattenVisitor::new(model);
    traverse(graph, root, &mut visitor)?;

    let materials = visitor.materials;
    for key in materials {
        let material = graph
            .material(key)
            .ok_or(GlintError::MaterialNotFound(key))?;
        model.materials.push(flat_material(material));
    }

    log::debug!(
        "flattened scene: {} triangles, {} materials",
        model.primitives.len(),
        model.materials.len()
    );

    Ok(())
}
