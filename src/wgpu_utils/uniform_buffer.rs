// src/wgpu_utils/uniform_buffer.rs
use std::marker::PhantomData;
use std::num::NonZeroU64;

/// Generic wrapper for a single-value uniform buffer
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    previous_content: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    fn name() -> &'static str {
        let type_name = std::any::type_name::<Content>();
        let pos = type_name.rfind(':').unwrap_or(0);
        if pos > 0 {
            &type_name[(pos + 1)..]
        } else {
            type_name
        }
    }

    /// Create a new uniform buffer
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", Self::name())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            previous_content: Vec::new(),
        }
    }

    /// Create buffer with initial data
    pub fn new_with_data(device: &wgpu::Device, initial_content: &Content) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", Self::name())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });

        let mapped_memory = buffer.slice(..);
        mapped_memory
            .get_mapped_range_mut()
            .clone_from_slice(bytemuck::bytes_of(initial_content));
        buffer.unmap();

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            previous_content: bytemuck::bytes_of(initial_content).to_vec(),
        }
    }

    /// Update buffer content (optimized to skip unnecessary writes)
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let new_content = bytemuck::bytes_of(&content);
        if self.previous_content == new_content {
            return;
        }
        queue.write_buffer(&self.buffer, 0, new_content);
        self.previous_content = new_content.to_vec();
    }

    /// Get binding resource
    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }

    /// Get the underlying buffer
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Get buffer size
    pub fn size(&self) -> u64 {
        self.buffer.size()
    }
}

/// Uniform buffer holding many instances of the same type, addressed with
/// dynamic offsets.
///
/// Each instance occupies one aligned slot; a bind group created against the
/// dynamic-uniform binding type selects a slot per draw call by passing the
/// slot's byte offset. Contents are staged on the CPU and uploaded once per
/// frame with [`upload`](Self::upload).
pub struct DynamicUniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    stride: u64,
    capacity: usize,
    staged: Vec<u8>,
}

impl<Content: bytemuck::Pod> DynamicUniformBuffer<Content> {
    fn name() -> &'static str {
        let type_name = std::any::type_name::<Content>();
        let pos = type_name.rfind(':').unwrap_or(0);
        if pos > 0 {
            &type_name[(pos + 1)..]
        } else {
            type_name
        }
    }

    /// Create a dynamic uniform buffer with room for `capacity` instances
    ///
    /// The per-instance stride is the content size rounded up to the device's
    /// minimum uniform-buffer offset alignment.
    pub fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let content_size = std::mem::size_of::<Content>() as u64;
        let stride = content_size.div_ceil(alignment) * alignment;

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("DynamicUniformBuffer: {}", Self::name())),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        DynamicUniformBuffer {
            buffer,
            content_type: PhantomData,
            stride,
            capacity,
            staged: Vec::with_capacity((stride * capacity as u64) as usize),
        }
    }

    /// Discard all staged instances (start of a new frame)
    pub fn clear(&mut self) {
        self.staged.clear();
    }

    /// Stage one instance, returning the dynamic offset that selects it
    ///
    /// Returns `None` when the buffer is full; the caller decides whether to
    /// skip or report.
    pub fn push(&mut self, content: Content) -> Option<u32> {
        if self.len() >= self.capacity {
            return None;
        }
        let offset = self.staged.len() as u32;
        self.staged.extend_from_slice(bytemuck::bytes_of(&content));
        self.staged.resize(offset as usize + self.stride as usize, 0);
        Some(offset)
    }

    /// Upload all staged instances to the GPU
    pub fn upload(&self, queue: &wgpu::Queue) {
        if !self.staged.is_empty() {
            queue.write_buffer(&self.buffer, 0, &self.staged);
        }
    }

    /// Number of staged instances
    pub fn len(&self) -> usize {
        (self.staged.len() as u64 / self.stride) as usize
    }

    /// True when no instances are staged
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Get binding resource sized to a single instance
    ///
    /// Bind groups built from this resource must use a dynamic-uniform
    /// binding type so the per-draw offset can select the slot.
    pub fn binding_resource(&self) -> wgpu::BindingResource {
        wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer: &self.buffer,
            offset: 0,
            size: NonZeroU64::new(std::mem::size_of::<Content>() as u64),
        })
    }

    /// Maximum number of instances
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
