use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cad_viewer::cli::Cli;
use cad_viewer::config::ViewerConfig;
use cad_viewer::core::clock::MonotonicClock;
use cad_viewer::core::input::PointerInput;
use cad_viewer::frame::FrameScheduler;
use cad_viewer::loaders::{load_model, LoadedModel, ModelMesh};
use cad_viewer::projects::ProjectList;
use cad_viewer::renderer::Renderer;
use cad_viewer::ui::{self, ProjectStep};
use cad_viewer::viewer::Viewer;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 800;
const WINDOW_TITLE: &str = "CAD Viewer";

struct App {
    config: ViewerConfig,
    show_overlays: bool,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scheduler: FrameScheduler<MonotonicClock>,
    viewer: Viewer,
    projects: ProjectList,
    model: LoadedModel,
    input: PointerInput,
    scene_height: f32,
}

impl App {
    fn new(cli: &Cli, config: ViewerConfig) -> Self {
        let viewer = Viewer::new(&config);
        let mut app = Self {
            config,
            show_overlays: !cli.no_ui,
            window: None,
            renderer: None,
            scheduler: FrameScheduler::new(MonotonicClock::new()),
            viewer,
            projects: ProjectList::from_paths(&cli.models),
            model: LoadedModel::Placeholder(ModelMesh::unit_cube()),
            input: PointerInput::new(),
            scene_height: INITIAL_WINDOW_HEIGHT as f32,
        };
        app.load_current_project();
        app
    }

    /// Load the selected model and start over with a camera framed on it
    fn load_current_project(&mut self) {
        self.model = match self.projects.current() {
            Some(project) => {
                log::info!("Opening project {} ({})", project.name, self.projects.position());
                load_model(&project.path)
            }
            None => {
                log::info!("No model files given, showing placeholder");
                LoadedModel::Placeholder(ModelMesh::unit_cube())
            }
        }
        .recentered();

        let radius = self.model.mesh().bounds.radius();
        let position = self
            .config
            .staging
            .framing_position(radius, &self.config.camera);
        self.viewer.reset(position, Vec3::ZERO);
        self.update_title();
    }

    fn step_project(&mut self, step: ProjectStep) {
        let moved = match step {
            ProjectStep::Stay => false,
            ProjectStep::Previous => self.projects.previous(),
            ProjectStep::Next => self.projects.next(),
        };
        if moved {
            self.load_current_project();
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            match self.projects.current() {
                Some(project) => window.set_title(&format!("{} - {}", WINDOW_TITLE, project.name)),
                None => window.set_title(WINDOW_TITLE),
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.scheduler.tick();

        let motion = self.input.take_motion();
        if !motion.is_empty() {
            self.viewer.rotate(motion.rotate.0, motion.rotate.1, self.scene_height);
            self.viewer.pan(motion.pan.0, motion.pan.1, self.scene_height);
            self.viewer.zoom(motion.wheel);
        }
        self.viewer.frame(frame.time);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let mut output = None;
        let result = renderer.render(window, |ctx| {
            output = Some(ui::draw_frame(
                ctx,
                &mut self.viewer,
                &self.model,
                &self.projects,
                self.show_overlays,
                frame.time,
            ));
        });

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("Render error: {}", e),
        }

        if let Some(output) = output {
            // Pointer deltas are physical pixels, egui rects are logical points
            self.scene_height = output.scene_rect.height() * window.scale_factor() as f32;
            self.step_project(output.project_step);
        }
    }

    /// Events that keep the pointer tracker consistent even when egui handles them
    fn always_tracked(event: &WindowEvent) -> bool {
        matches!(
            event,
            WindowEvent::CursorMoved { .. }
                | WindowEvent::CursorLeft { .. }
                | WindowEvent::Focused(_)
                | WindowEvent::MouseInput {
                    state: ElementState::Released,
                    ..
                }
        )
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.update_title();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        let consumed = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) => renderer.handle_event(window, &event),
            _ => false,
        };
        if !consumed || Self::always_tracked(&event) {
            self.input.process_event(&event);
        }
        if consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli, config);

    log::info!("CAD Viewer - left drag rotates, right drag pans, scroll zooms, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
