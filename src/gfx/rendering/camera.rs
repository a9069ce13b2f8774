//! Fixed viewpoint for the scene composer
//!
//! The composer renders static scenes, so the camera is a plain set of
//! look-at parameters with no controller attached.

use cgmath::{perspective, Deg, Matrix4, Point3, Vector3};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Look-at camera with a perspective projection
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix for the given aspect ratio
    pub fn view_projection(&self, aspect: f32) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj = OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, aspect, self.znear, self.zfar);
        proj * view
    }

    /// Camera position as a homogeneous coordinate for the frame uniform
    pub fn position(&self) -> [f32; 4] {
        [self.eye.x, self.eye.y, self.eye.z, 1.0]
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 1.0, 10.0),
            target: Point3::new(0.0, -8.0, -35.0),
            up: Vector3::unit_y(),
            fovy: Deg(60.0),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
