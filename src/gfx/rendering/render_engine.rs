//! WGPU-based rendering engine for the scene composer
//!
//! Implements the graphics backend traits on top of one forward pipeline.
//! The composer's immediate-mode calls mutate a CPU-side snapshot of the
//! per-draw uniform state; each `draw_mesh` captures that snapshot into a
//! dynamic-offset uniform buffer, and `end_frame` replays the recorded
//! draws in one render pass.

use std::collections::HashMap;
use std::sync::Arc;

use cgmath::Matrix4;
use wgpu::TextureFormat;

use crate::gfx::backend::{MeshLibrary, ShaderInterface, TextureHandle, TextureUnits};
use crate::gfx::geometry::PrimitiveKind;
use crate::gfx::lighting::{LightSource, MAX_LIGHTS};
use crate::gfx::resources::{
    ImageData, MaterialPreset, TextureError, TextureResource, MAX_TEXTURE_SLOTS,
};
use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::{DynamicUniformBuffer, UniformBuffer},
};

use super::camera::Camera;
use super::mesh::GpuMesh;
use super::pipeline::create_forward_pipeline;
use super::uniforms::{DrawUniform, FrameUniform, LightUniform, LightsUniform};

/// Per-draw uniform slots available within a single frame
const MAX_DRAWS_PER_FRAME: usize = 512;

/// One recorded draw: which mesh, which uniform slot, which texture unit
struct DrawRecord {
    kind: PrimitiveKind,
    uniform_offset: u32,
    texture_slot: Option<u32>,
}

/// Core rendering engine managing GPU resources and draw calls
///
/// Owns the surface, device, and queue, the forward pipeline, the uniform
/// buffers, and every uploaded texture and primitive mesh. The engine is
/// the concrete implementation of all three backend traits the scene
/// composer draws through.
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    pipeline: wgpu::RenderPipeline,

    frame_ubo: UniformBuffer<FrameUniform>,
    lights_ubo: UniformBuffer<LightsUniform>,
    draw_ubo: DynamicUniformBuffer<DrawUniform>,
    global_bind_group: wgpu::BindGroup,
    draw_bind_group: wgpu::BindGroup,
    texture_layout: BindGroupLayoutWithDesc,

    textures: HashMap<TextureHandle, TextureResource>,
    next_texture_id: u32,
    slot_bindings: HashMap<u32, (TextureHandle, wgpu::BindGroup)>,
    default_texture_bind_group: wgpu::BindGroup,
    // Kept alive for the lifetime of its bind group
    _default_texture: TextureResource,

    meshes: HashMap<PrimitiveKind, GpuMesh>,

    camera: Camera,
    current_draw: DrawUniform,
    current_slot: Option<u32>,
    lights_state: LightsUniform,
    draw_list: Vec<DrawRecord>,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Panics
    /// Panics if unable to create a wgpu adapter or device.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> RenderEngine {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window).unwrap();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to request adapter!");

        let (device, queue) = {
            adapter
                .request_device(&wgpu::DeviceDescriptor {
                    label: Some("WGPU Device"),
                    required_features: wgpu::Features::default(),
                    required_limits: wgpu::Limits {
                        max_texture_dimension_2d: 4096,
                        ..wgpu::Limits::downlevel_defaults()
                    },
                    memory_hints: wgpu::MemoryHints::default(),
                    trace: wgpu::Trace::Off,
                })
                .await
                .expect("Failed to request a device!")
        };

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_capabilities.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        // Global bindings: frame camera data and the light array
        let global_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .next_binding_fragment(binding_types::uniform())
            .create(&device, "Global Bind Group Layout");

        let frame_ubo = UniformBuffer::new_with_data(&device, &FrameUniform::default());
        let lights_ubo = UniformBuffer::new_with_data(&device, &LightsUniform::default());

        let global_bind_group = BindGroupBuilder::new(&global_layout)
            .resource(frame_ubo.binding_resource())
            .resource(lights_ubo.binding_resource())
            .create(&device, "Global Bind Group");

        // Per-draw state selected by dynamic offset
        let draw_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform_dynamic())
            .create(&device, "Draw Bind Group Layout");

        let draw_ubo = DynamicUniformBuffer::new(&device, MAX_DRAWS_PER_FRAME);
        let draw_bind_group = BindGroupBuilder::new(&draw_layout)
            .resource(draw_ubo.binding_resource())
            .create(&device, "Draw Bind Group");

        // One texture unit bound per draw
        let texture_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::texture_2d())
            .next_binding_fragment(binding_types::sampler(wgpu::SamplerBindingType::Filtering))
            .create(&device, "Texture Bind Group Layout");

        // Untextured draws sample this white texel and keep the layout uniform.
        let default_texture =
            TextureResource::solid_color(&device, &queue, [255, 255, 255, 255], "default_white");
        let default_texture_bind_group = BindGroupBuilder::new(&texture_layout)
            .texture(&default_texture.view)
            .sampler(&default_texture.sampler)
            .create(&device, "Default Texture Bind Group");

        let pipeline = create_forward_pipeline(
            &device,
            format,
            &[
                &global_layout.layout,
                &draw_layout.layout,
                &texture_layout.layout,
            ],
        );

        RenderEngine {
            surface,
            device: Arc::new(device),
            queue: Arc::new(queue),
            config,
            depth_texture,
            format,
            pipeline,
            frame_ubo,
            lights_ubo,
            draw_ubo,
            global_bind_group,
            draw_bind_group,
            texture_layout,
            textures: HashMap::new(),
            next_texture_id: 0,
            slot_bindings: HashMap::new(),
            default_texture_bind_group,
            _default_texture: default_texture,
            meshes: HashMap::new(),
            camera: Camera::default(),
            current_draw: DrawUniform::default(),
            current_slot: None,
            lights_state: LightsUniform::default(),
            draw_list: Vec::new(),
        }
    }

    /// Resizes the rendering surface and depth buffer
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    /// Replace the viewpoint used for subsequent frames
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> TextureFormat {
        self.format
    }

    /// Start recording a frame
    ///
    /// Clears the draw list and pushes the camera state for this frame.
    pub fn begin_frame(&mut self) {
        self.draw_ubo.clear();
        self.draw_list.clear();

        let aspect = self.config.width as f32 / self.config.height.max(1) as f32;
        self.frame_ubo.update_content(
            &self.queue,
            FrameUniform {
                view_position: self.camera.position(),
                view_proj: self.camera.view_projection(aspect).into(),
            },
        );
    }

    /// Encode and present every draw recorded since `begin_frame`
    pub fn end_frame(&mut self) {
        self.lights_ubo.update_content(&self.queue, self.lights_state);
        self.draw_ubo.upload(&self.queue);

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(err) => {
                log::error!("skipping frame: {err}");
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.2,
                            b: 0.3,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.global_bind_group, &[]);

            for record in &self.draw_list {
                let Some(mesh) = self.meshes.get(&record.kind) else {
                    log::warn!(
                        "skipping draw of {} mesh that was never loaded",
                        record.kind.name()
                    );
                    continue;
                };

                let texture_bind_group = record
                    .texture_slot
                    .and_then(|slot| self.slot_bindings.get(&slot))
                    .map(|(_, bind_group)| bind_group)
                    .unwrap_or(&self.default_texture_bind_group);

                render_pass.set_bind_group(1, &self.draw_bind_group, &[record.uniform_offset]);
                render_pass.set_bind_group(2, texture_bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }
}

impl ShaderInterface for RenderEngine {
    fn set_model_matrix(&mut self, model: Matrix4<f32>) {
        self.current_draw.model = model.into();
    }

    fn set_flat_color(&mut self, color: [f32; 4]) {
        self.current_draw.flat_color = color;
        self.current_draw.use_texture = 0;
        self.current_slot = None;
    }

    fn set_texture_slot(&mut self, slot: u32) {
        self.current_draw.use_texture = 1;
        self.current_slot = Some(slot);
    }

    fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.current_draw.uv_scale = [u, v];
    }

    fn set_material(&mut self, preset: &MaterialPreset) {
        self.current_draw.apply_material(preset);
    }

    fn set_lighting_enabled(&mut self, enabled: bool) {
        self.lights_state.enabled = enabled as u32;
    }

    fn set_light(&mut self, index: usize, light: &LightSource) {
        if index >= MAX_LIGHTS {
            log::warn!("light index {index} is out of range, ignoring");
            return;
        }
        self.lights_state.lights[index] = LightUniform::from(light);
        self.lights_state.count = self.lights_state.count.max(index as u32 + 1);
    }
}

impl TextureUnits for RenderEngine {
    fn upload_texture(
        &mut self,
        image: &ImageData,
        label: &str,
    ) -> Result<TextureHandle, TextureError> {
        let resource = TextureResource::from_image(&self.device, &self.queue, image, label);
        let handle = TextureHandle(self.next_texture_id);
        self.next_texture_id += 1;
        self.textures.insert(handle, resource);
        Ok(handle)
    }

    fn bind_texture(&mut self, slot: u32, handle: TextureHandle) {
        if slot as usize >= MAX_TEXTURE_SLOTS {
            log::warn!("texture slot {slot} is out of range, ignoring");
            return;
        }
        let Some(resource) = self.textures.get(&handle) else {
            log::warn!("cannot bind unknown texture handle {handle:?}");
            return;
        };

        let bind_group = BindGroupBuilder::new(&self.texture_layout)
            .texture(&resource.view)
            .sampler(&resource.sampler)
            .create(&self.device, &format!("Texture Slot {slot}"));
        self.slot_bindings.insert(slot, (handle, bind_group));
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        self.slot_bindings
            .retain(|_, (bound_handle, _)| *bound_handle != handle);
        if let Some(resource) = self.textures.remove(&handle) {
            resource.texture.destroy();
        } else {
            log::warn!("cannot release unknown texture handle {handle:?}");
        }
    }
}

impl MeshLibrary for RenderEngine {
    fn load_mesh(&mut self, kind: PrimitiveKind) {
        if self.meshes.contains_key(&kind) {
            log::warn!("{} mesh is already loaded", kind.name());
            return;
        }
        let mesh = GpuMesh::from_geometry(&self.device, &kind.generate(), kind.name());
        self.meshes.insert(kind, mesh);
    }

    fn draw_mesh(&mut self, kind: PrimitiveKind) {
        let Some(uniform_offset) = self.draw_ubo.push(self.current_draw) else {
            log::error!(
                "draw list is full ({MAX_DRAWS_PER_FRAME} draws per frame), skipping {}",
                kind.name()
            );
            return;
        };

        self.draw_list.push(DrawRecord {
            kind,
            uniform_offset,
            texture_slot: self.current_slot,
        });
    }
}
