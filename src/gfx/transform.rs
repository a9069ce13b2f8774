//! # Model Transform Composition
//!
//! Builds the model matrix pushed ahead of every draw call. The composition
//! order is fixed: scale first, then rotations about X, Y, and Z in that
//! order, then translation. Reordering changes the result for any
//! non-uniform scale or compound rotation, so both [`Transform::matrix`] and
//! [`compose_model_matrix`] are contractually `T * Rx * Ry * Rz * S`.

use cgmath::{Deg, Matrix4, Vector3};

/// Per-draw placement parameters
///
/// Transient by design: a transform exists only long enough to compose one
/// model matrix. Nothing in the pipeline retains it between draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Scale factors along each axis
    pub scale: Vector3<f32>,
    /// Euler rotation in degrees, applied in X, Y, Z order
    pub rotation: Vector3<f32>,
    /// World-space translation
    pub position: Vector3<f32>,
}

impl Transform {
    pub fn new(
        scale: impl Into<Vector3<f32>>,
        rotation: impl Into<Vector3<f32>>,
        position: impl Into<Vector3<f32>>,
    ) -> Self {
        Self {
            scale: scale.into(),
            rotation: rotation.into(),
            position: position.into(),
        }
    }

    /// Compose the model matrix for these parameters
    pub fn matrix(&self) -> Matrix4<f32> {
        compose_model_matrix(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Compose a model matrix as `Translation * Rx * Ry * Rz * Scale`
///
/// Applied right-to-left to a column vector: scale first, then the axis
/// rotations in X, Y, Z order, then translation last.
pub fn compose_model_matrix(
    scale: Vector3<f32>,
    rotation_degrees: Vector3<f32>,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    let translation = Matrix4::from_translation(position);
    let rotation_x = Matrix4::from_angle_x(Deg(rotation_degrees.x));
    let rotation_y = Matrix4::from_angle_y(Deg(rotation_degrees.y));
    let rotation_z = Matrix4::from_angle_z(Deg(rotation_degrees.z));
    let scale = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);

    translation * rotation_x * rotation_y * rotation_z * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::{Point3, Transform as _};

    #[test]
    fn identity_for_default_parameters() {
        let matrix = Transform::default().matrix();
        assert_eq!(matrix, Matrix4::from_scale(1.0));
    }

    #[test]
    fn matches_explicit_composition() {
        let scale = Vector3::new(2.0, 3.0, 0.5);
        let rotation = Vector3::new(30.0, -45.0, 12.5);
        let position = Vector3::new(-10.5, -9.4, -33.5);

        let expected = Matrix4::from_translation(position)
            * Matrix4::from_angle_x(Deg(rotation.x))
            * Matrix4::from_angle_y(Deg(rotation.y))
            * Matrix4::from_angle_z(Deg(rotation.z))
            * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);

        assert_eq!(compose_model_matrix(scale, rotation, position), expected);
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        // scale (2,1,1), rotate 90 degrees about Y, translate (1,0,0):
        // the unit X axis point scales to (2,0,0), rotates to (0,0,-2),
        // then translates to (1,0,-2).
        let matrix = compose_model_matrix(
            Vector3::new(2.0, 1.0, 1.0),
            Vector3::new(0.0, 90.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        );

        let transformed = matrix.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(transformed.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(transformed.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(transformed.z, -2.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation_order_is_x_then_y() {
        // X and Y rotations do not commute; swapping the order must change
        // the composed matrix.
        let rotation = Vector3::new(90.0, 45.0, 0.0);
        let composed = compose_model_matrix(
            Vector3::new(1.0, 1.0, 1.0),
            rotation,
            Vector3::new(0.0, 0.0, 0.0),
        );

        let swapped = Matrix4::from_angle_y(Deg(rotation.y)) * Matrix4::from_angle_x(Deg(rotation.x));

        let point = Point3::new(0.0, 0.0, 1.0);
        let a = composed.transform_point(point);
        let b = swapped.transform_point(point);
        let delta = (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs();
        assert!(delta > 1e-3, "swapping X/Y rotation order should change the result");
    }
}
