//! GPU mesh buffers for the primitive shapes

use wgpu::util::DeviceExt;

use crate::gfx::geometry::GeometryData;

use super::vertex::Vertex3D;

/// Vertex and index buffers for one primitive, uploaded once and drawn many
/// times
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload generated geometry into GPU buffers
    pub fn from_geometry(device: &wgpu::Device, data: &GeometryData, label: &str) -> Self {
        let vertices: Vec<Vertex3D> = (0..data.vertex_count())
            .map(|i| Vertex3D {
                position: data.vertices[i],
                normal: data.normals[i],
                uv: data.tex_coords[i],
            })
            .collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vertices")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }
}
