use glam::Mat4;
use uuid::Uuid;

/// Camera projection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionType {
    Perspective,
    Orthographic,
}

/// Camera component.
///
/// Only projection parameters are kept here; view matrices, picking and
/// frame logic belong to the renderer that consumes the graph. The camera's
/// placement comes from the enclosing transform chain, like any other node.
#[derive(Debug, Clone)]
pub struct Camera {
    pub uuid: Uuid,
    pub projection_type: ProjectionType,
    /// Vertical field of view in radians (perspective only)
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Half-height of the view volume (orthographic only)
    pub ortho_size: f32,
}

impl Camera {
    /// Perspective camera; `fov` is the vertical field of view in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            projection_type: ProjectionType::Perspective,
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            ortho_size: 10.0,
        }
    }

    #[must_use]
    pub fn new_orthographic(ortho_size: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            projection_type: ProjectionType::Orthographic,
            fov: 0.0,
            aspect,
            near,
            far,
            ortho_size,
        }
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection_type {
            ProjectionType::Perspective => {
                Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
            }
            ProjectionType::Orthographic => {
                let w = self.ortho_size * self.aspect;
                let h = self.ortho_size;
                Mat4::orthographic_rh(-w, w, -h, h, self.near, self.far)
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(45.0, 1.0, 0.1, 1000.0)
    }
}
