use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use image::RgbaImage;
use tracing::{info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};
use crate::input::InputState;
use crate::playground::Playground;
use crate::renderer::Renderer;
use crate::sprite::ImageQuad;

/// Fixed update rate; the shake effect counts frames at this rate.
const UPDATES_PER_SECOND: u32 = 60;

/// Everything that only exists once the window is up.
struct Engine {
    renderer: Renderer,
    playground: Playground,
    /// Unified input state (keyboard, mouse).
    input: InputState,
    /// Quad from the most recent update, redrawn every frame.
    quad: ImageQuad,
}

impl Engine {
    fn new(renderer: Renderer, config: &PlaygroundConfig, shake_speed: i32) -> Self {
        let (w, h) = renderer.texture_size();
        let playground = Playground::new(config, shake_speed, Vec2::new(w as f32, h as f32));
        let quad = playground.image().quad();

        let mut engine = Self { renderer, playground, input: InputState::new(), quad };
        let initial = engine.playground.camera().combined();
        engine.renderer.update_camera(&initial);
        engine
    }

    /// One fixed-rate tick. Returns `true` when the playground asked to exit.
    fn tick(&mut self) -> bool {
        let frame = self.playground.update(&self.input);
        // Edge-triggered input is consumed by the first tick that sees it.
        self.input.clear_frame_state();

        if let Some(projection) = frame.projection {
            self.renderer.update_camera(&projection);
        }
        self.quad = frame.quad;
        frame.exit
    }

    fn render(&mut self) {
        match self.renderer.render(&self.quad) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let size = self.renderer.window.inner_size();
                self.renderer.resize(size);
            }
            Err(e) => warn!("render error: {e}"),
        }
    }
}

/// Open the window and run the playground until exit.
pub fn run(config: PlaygroundConfig, shake_speed: i32, image: RgbaImage) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App {
        config,
        shake_speed,
        image,
        engine: None,
        last_instant: None,
        accumulator: 0.0,
        fixed_dt: 1.0 / UPDATES_PER_SECOND as f32,
        error: None,
    };
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: PlaygroundConfig,
    shake_speed: i32,
    image: RgbaImage,
    engine: Option<Engine>,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
    /// Startup failure raised inside the event loop, returned from `run`.
    error: Option<PlaygroundError>,
}

impl App {
    fn create_engine(&self, event_loop: &ActiveEventLoop) -> Result<Engine> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(&self.config.window.title)
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        self.config.window.width,
                        self.config.window.height,
                    ))
                    .with_resizable(false),
            )
            .map_err(|e| PlaygroundError::Surface(e.to_string()))?;

        let renderer = pollster::block_on(Renderer::new(Arc::new(window), &self.image))?;
        Ok(Engine::new(renderer, &self.config, self.shake_speed))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_some() {
            return;
        }
        match self.create_engine(event_loop) {
            Ok(engine) => {
                info!("window opened");
                self.engine = Some(engine);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(engine) = self.engine.as_ref() {
            engine.renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(engine) = self.engine.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                engine.renderer.resize(size);
                engine.playground.resize(size.width as f32, size.height as f32);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let [x, y] = [position.x as f32, position.y as f32];
                engine.input.mouse_pos = [x, y];
                if engine.input.is_mouse_held(MouseButton::Left) {
                    engine.playground.pointer_drag(&engine.input, x, y);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => match state {
                ElementState::Pressed => {
                    engine.input.press_mouse(button);
                    if button == MouseButton::Left {
                        let [x, y] = engine.input.mouse_pos;
                        engine.playground.pointer_down(&engine.input, x, y);
                    }
                }
                ElementState::Released => {
                    engine.input.release_mouse(button);
                    if button == MouseButton::Left {
                        engine.playground.pointer_up();
                    }
                }
            },

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let elapsed = match self.last_instant {
                    Some(prev) => now.duration_since(prev).as_secs_f32().min(0.25),
                    None => self.fixed_dt,
                };
                self.last_instant = Some(now);
                self.accumulator += elapsed;

                while self.accumulator >= self.fixed_dt {
                    if engine.tick() {
                        event_loop.exit();
                        return;
                    }
                    self.accumulator -= self.fixed_dt;
                }

                engine.render();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => engine.input.press_key(code),
                ElementState::Released => engine.input.release_key(code),
            },

            _ => {}
        }
    }
}
