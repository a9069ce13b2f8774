// src/wgpu_utils/binding_builder.rs
//! Builders for bind group layouts and bind groups
//!
//! Keeps layout and bind group creation in lockstep: the layout builder
//! remembers its entries so the matching bind group builder can fill
//! bindings positionally without repeating binding indices.

/// A bind group layout together with the entries it was created from
pub struct BindGroupLayoutWithDesc {
    pub layout: wgpu::BindGroupLayout,
    pub entries: Vec<wgpu::BindGroupLayoutEntry>,
}

/// Builder for bind group layouts with sequential binding indices
pub struct BindGroupLayoutBuilder {
    entries: Vec<wgpu::BindGroupLayoutEntry>,
    next_binding: u32,
}

impl BindGroupLayoutBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_binding: 0,
        }
    }

    /// Add the next binding with explicit shader stage visibility
    pub fn next_binding(
        mut self,
        visibility: wgpu::ShaderStages,
        ty: wgpu::BindingType,
    ) -> Self {
        self.entries.push(wgpu::BindGroupLayoutEntry {
            binding: self.next_binding,
            visibility,
            ty,
            count: None,
        });
        self.next_binding += 1;
        self
    }

    /// Add the next binding, visible to vertex and fragment stages
    pub fn next_binding_rendering(self, ty: wgpu::BindingType) -> Self {
        self.next_binding(
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty,
        )
    }

    /// Add the next binding, visible to the fragment stage only
    pub fn next_binding_fragment(self, ty: wgpu::BindingType) -> Self {
        self.next_binding(wgpu::ShaderStages::FRAGMENT, ty)
    }

    /// Add the next binding, visible to the vertex stage only
    pub fn next_binding_vertex(self, ty: wgpu::BindingType) -> Self {
        self.next_binding(wgpu::ShaderStages::VERTEX, ty)
    }

    pub fn create(self, device: &wgpu::Device, label: &str) -> BindGroupLayoutWithDesc {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &self.entries,
        });
        BindGroupLayoutWithDesc {
            layout,
            entries: self.entries,
        }
    }
}

impl Default for BindGroupLayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for bind groups matching a [`BindGroupLayoutWithDesc`]
///
/// Resources are filled positionally in the order the layout declared them.
pub struct BindGroupBuilder<'a> {
    layout: &'a BindGroupLayoutWithDesc,
    entries: Vec<wgpu::BindGroupEntry<'a>>,
}

impl<'a> BindGroupBuilder<'a> {
    pub fn new(layout: &'a BindGroupLayoutWithDesc) -> Self {
        Self {
            layout,
            entries: Vec::with_capacity(layout.entries.len()),
        }
    }

    /// Bind the next resource in layout order
    pub fn resource(mut self, resource: wgpu::BindingResource<'a>) -> Self {
        let binding = self.layout.entries[self.entries.len()].binding;
        self.entries.push(wgpu::BindGroupEntry { binding, resource });
        self
    }

    /// Bind the next resource as a texture view
    pub fn texture(self, view: &'a wgpu::TextureView) -> Self {
        self.resource(wgpu::BindingResource::TextureView(view))
    }

    /// Bind the next resource as a sampler
    pub fn sampler(self, sampler: &'a wgpu::Sampler) -> Self {
        self.resource(wgpu::BindingResource::Sampler(sampler))
    }

    pub fn create(self, device: &wgpu::Device, label: &str) -> wgpu::BindGroup {
        debug_assert_eq!(self.entries.len(), self.layout.entries.len());
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.layout.layout,
            entries: &self.entries,
        })
    }
}
