//! # Primitive Shape Generation
//!
//! This module contains functions to generate the primitive shapes used by
//! the scene composer. All shapes are generated with proper normals and
//! texture coordinates in a Y-up coordinate system.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a flat plane in the XZ plane
///
/// Returns a rectangle centered at the origin with its normal pointing up
/// (positive Y) and UV coordinates from 0 to 1 across the surface.
///
/// # Arguments
/// * `width` - Extent along the X axis
/// * `depth` - Extent along the Z axis
pub fn generate_plane(width: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let hw = width * 0.5;
    let hd = depth * 0.5;

    data.vertices = vec![
        [-hw, 0.0, hd],
        [hw, 0.0, hd],
        [hw, 0.0, -hd],
        [-hw, 0.0, -hd],
    ];
    data.normals = vec![[0.0, 1.0, 0.0]; 4];
    data.tex_coords = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    // Counter-clockwise when viewed from above
    data.indices = vec![0, 1, 2, 2, 3, 0];

    data
}

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes.
/// Each face has proper normals pointing outward and UV coordinates from 0 to 1.
pub fn generate_box() -> GeometryData {
    let mut data = GeometryData::new();

    // Cube faces (4 vertices each)
    let positions = [
        // Front face
        [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5],
        // Back face
        [0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5],
        // Left face
        [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5],
        // Right face
        [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5],
        // Top face
        [-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5],
        // Bottom face
        [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5],
    ];

    // Same UV layout on every face
    let face_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    for normal in face_normals {
        for _ in 0..4 {
            data.normals.push(normal);
            data.tex_coords.push(face_uvs[data.tex_coords.len() % 4]);
        }
    }

    // Two counter-clockwise triangles per face
    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a capped cylinder with its base at the origin
///
/// Returns a cylinder of radius 1.0 extending from y = 0 to y = 1 so that a
/// non-uniform Y scale sets the final height directly.
///
/// # Arguments
/// * `segments` - Number of circular segments (minimum 3)
pub fn generate_cylinder(segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);

    // Side vertices, duplicated per row for smooth side normals
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        let u = i as f32 / segs as f32;

        data.vertices.push([cos_a, 0.0, sin_a]);
        data.normals.push([cos_a, 0.0, sin_a]);
        data.tex_coords.push([u, 0.0]);

        data.vertices.push([cos_a, 1.0, sin_a]);
        data.normals.push([cos_a, 0.0, sin_a]);
        data.tex_coords.push([u, 1.0]);
    }

    // Side faces wound counter-clockwise from the outside
    for i in 0..segs {
        let bottom_current = i * 2;
        let top_current = bottom_current + 1;
        let bottom_next = (i + 1) * 2;
        let top_next = bottom_next + 1;

        data.indices.push(bottom_current);
        data.indices.push(top_current);
        data.indices.push(bottom_next);

        data.indices.push(top_current);
        data.indices.push(top_next);
        data.indices.push(bottom_next);
    }

    // Cap rims get their own vertices with axial normals
    let bottom_rim = data.vertices.len() as u32;
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (cos_a, sin_a) = (angle.cos(), angle.sin());
        data.vertices.push([cos_a, 0.0, sin_a]);
        data.normals.push([0.0, -1.0, 0.0]);
        data.tex_coords.push([cos_a * 0.5 + 0.5, sin_a * 0.5 + 0.5]);
    }

    let top_rim = data.vertices.len() as u32;
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (cos_a, sin_a) = (angle.cos(), angle.sin());
        data.vertices.push([cos_a, 1.0, sin_a]);
        data.normals.push([0.0, 1.0, 0.0]);
        data.tex_coords.push([cos_a * 0.5 + 0.5, sin_a * 0.5 + 0.5]);
    }

    let center_bottom = data.vertices.len() as u32;
    data.vertices.push([0.0, 0.0, 0.0]);
    data.normals.push([0.0, -1.0, 0.0]);
    data.tex_coords.push([0.5, 0.5]);

    let center_top = data.vertices.len() as u32;
    data.vertices.push([0.0, 1.0, 0.0]);
    data.normals.push([0.0, 1.0, 0.0]);
    data.tex_coords.push([0.5, 0.5]);

    // Bottom cap faces down, top cap faces up
    for i in 0..segs {
        data.indices.push(center_bottom);
        data.indices.push(bottom_rim + i);
        data.indices.push(bottom_rim + i + 1);

        data.indices.push(center_top);
        data.indices.push(top_rim + i + 1);
        data.indices.push(top_rim + i);
    }

    data
}

/// Generate a torus lying in the XY plane
///
/// Returns a ring with major radius 1.0 and tube radius 0.25 whose axis is
/// positive Z, matching the convention that a 90 degree X rotation lays the
/// ring flat on the ground.
///
/// # Arguments
/// * `major_segments` - Subdivisions around the ring (minimum 3)
/// * `tube_segments` - Subdivisions around the tube (minimum 3)
pub fn generate_torus(major_segments: u32, tube_segments: u32) -> GeometryData {
    const MAJOR_RADIUS: f32 = 1.0;
    const TUBE_RADIUS: f32 = 0.25;

    let mut data = GeometryData::new();

    let major_segs = major_segments.max(3);
    let tube_segs = tube_segments.max(3);

    for i in 0..=major_segs {
        let u = i as f32 * 2.0 * PI / major_segs as f32;
        let (cos_u, sin_u) = (u.cos(), u.sin());

        for j in 0..=tube_segs {
            let v = j as f32 * 2.0 * PI / tube_segs as f32;
            let (cos_v, sin_v) = (v.cos(), v.sin());

            let x = (MAJOR_RADIUS + TUBE_RADIUS * cos_v) * cos_u;
            let y = (MAJOR_RADIUS + TUBE_RADIUS * cos_v) * sin_u;
            let z = TUBE_RADIUS * sin_v;

            data.vertices.push([x, y, z]);
            data.normals.push([cos_v * cos_u, cos_v * sin_u, sin_v]);
            data.tex_coords.push([
                i as f32 / major_segs as f32,
                j as f32 / tube_segs as f32,
            ]);
        }
    }

    for i in 0..major_segs {
        for j in 0..tube_segs {
            let first = i * (tube_segs + 1) + j;
            let second = first + tube_segs + 1;

            data.indices.push(first);
            data.indices.push(second);
            data.indices.push(first + 1);

            data.indices.push(second);
            data.indices.push(second + 1);
            data.indices.push(first + 1);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(data: &GeometryData) {
        for normal in &data.normals {
            let len =
                (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "normal {:?} not unit length", normal);
        }
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0);
        assert_eq!(plane.vertices.len(), 4);
        assert_eq!(plane.indices.len(), 6);
        assert_eq!(plane.triangle_count(), 2);
        for normal in &plane.normals {
            assert_eq!(*normal, [0.0, 1.0, 0.0]);
        }
        for vertex in &plane.vertices {
            assert_eq!(vertex[1], 0.0);
        }
    }

    #[test]
    fn test_box_generation() {
        let cube = generate_box();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_unit_normals(&cube);
    }

    #[test]
    fn test_cylinder_generation() {
        let segs = 12u32;
        let cylinder = generate_cylinder(segs);

        // 2 side rows + 2 cap rims + 2 centers
        assert_eq!(cylinder.vertices.len() as u32, (segs + 1) * 4 + 2);
        // sides + both caps
        assert_eq!(cylinder.triangle_count() as u32, segs * 2 + segs * 2);
        assert_unit_normals(&cylinder);

        // Base at the origin, top at unit height
        for vertex in &cylinder.vertices {
            assert!(vertex[1] >= 0.0 && vertex[1] <= 1.0);
        }
    }

    #[test]
    fn test_torus_generation() {
        let torus = generate_torus(24, 12);
        assert_eq!(torus.vertices.len(), 25 * 13);
        assert_eq!(torus.triangle_count(), 24 * 12 * 2);
        assert_unit_normals(&torus);

        // Ring lies in the XY plane: Z stays within the tube radius
        for vertex in &torus.vertices {
            assert!(vertex[2].abs() <= 0.25 + 1e-5);
        }
    }

    #[test]
    fn test_default_resolutions() {
        for kind in super::super::PrimitiveKind::ALL {
            let data = kind.generate();
            assert!(data.vertex_count() > 0, "{} has no vertices", kind.name());
            assert_eq!(data.vertices.len(), data.normals.len());
            assert_eq!(data.vertices.len(), data.tex_coords.len());
            assert!(data.indices.iter().all(|&i| (i as usize) < data.vertex_count()));
        }
    }
}
