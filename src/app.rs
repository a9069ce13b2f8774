//! Windowed viewer application
//!
//! A thin winit wrapper that owns the render engine and a scene. The scene
//! definition handed to [`ViewerApp::set_scene`] is prepared once when the
//! window comes up; every redraw replays it through the engine.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::gfx::{
    rendering::{Camera, RenderEngine},
    scene::{Scene, SceneDefinition},
};

pub struct ViewerApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    definition: Option<SceneDefinition>,
    camera: Option<Camera>,
}

impl ViewerApp {
    /// Create a new viewer application with default settings
    pub fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                scene: Scene::new(),
                definition: None,
                camera: None,
            },
        }
    }

    /// Set the scene to prepare and render
    pub fn set_scene(&mut self, definition: SceneDefinition) {
        self.app_state.definition = Some(definition);
    }

    /// Override the default viewpoint
    pub fn set_camera(&mut self, camera: Camera) {
        self.app_state.camera = Some(camera);
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl Default for ViewerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            Window::default_attributes()
                .with_title("bureau")
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();

            let window_clone = window_handle.clone();
            let mut renderer = pollster::block_on(async move {
                RenderEngine::new(window_clone, width, height).await
            });

            if let Some(camera) = self.camera {
                renderer.set_camera(camera);
            }

            if let Some(definition) = self.definition.take() {
                if !self.scene.prepare(&mut renderer, definition) {
                    log::warn!("some textures failed to load; affected objects render untextured");
                }
            }

            self.render_engine = Some(renderer);
            window_handle.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(engine) = &mut self.render_engine {
                    self.scene.teardown(engine);
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.render_engine {
                    engine.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.render_engine {
                    engine.begin_frame();
                    self.scene.render(engine);
                    engine.end_frame();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
