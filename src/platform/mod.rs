//! Platform layer: winit window, event loop and frame pacing
//!
//! Handles:
//! - Window and drawing surface lifetime
//! - Keyboard events
//! - Waking up once per frame budget

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::consts::*;
use crate::game_loop::Game;
use crate::input::{Key, KeyState};
use crate::renderer::RenderState;

/// Translate a physical key into one the game cares about
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::Space => Some(Key::Space),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Top-left position that centers a window on a monitor
pub fn centered_position(
    monitor_pos: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (monitor as i64 - window as i64) / 2;
    PhysicalPosition::new(
        monitor_pos.x + offset(monitor_size.width, window_size.width) as i32,
        monitor_pos.y + offset(monitor_size.height, window_size.height) as i32,
    )
}

fn create_window(event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
    let mut attributes = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(FIELD_WIDTH, FIELD_HEIGHT))
        .with_resizable(false)
        .with_active(true);

    if let Some(monitor) = event_loop.primary_monitor() {
        let window_size: PhysicalSize<u32> =
            LogicalSize::new(FIELD_WIDTH, FIELD_HEIGHT).to_physical(monitor.scale_factor());
        let position = centered_position(monitor.position(), monitor.size(), window_size);
        attributes = attributes.with_position(position);
    }

    let window = event_loop
        .create_window(attributes)
        .context("Error creating window")?;
    Ok(Arc::new(window))
}

/// Application state driven by the winit event loop
///
/// Field order matters for teardown: the renderer's surface is dropped
/// before the window it draws into.
pub struct App {
    seed: u64,
    game: Option<Game>,
    renderer: Option<RenderState>,
    window: Option<Arc<Window>>,
    init_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            game: None,
            renderer: None,
            window: None,
            init_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        log::info!("Window:create");
        let window = create_window(event_loop)?;
        let renderer = RenderState::for_window(window.clone())?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.game = Some(Game::new(self.seed, crate::frame_time(), Instant::now()));
        Ok(())
    }

    /// Render the current state, recovering from a lost surface
    fn draw(&mut self) {
        let (Some(game), Some(renderer)) = (self.game.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        match renderer.render(&game.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Error that stopped initialisation, if any
    pub fn take_init_error(&mut self) -> Option<anyhow::Error> {
        self.init_error.take()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            // Skip the loop entirely; teardown still runs in `exiting`
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => game.request_quit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        let key_state = match event.state {
                            ElementState::Pressed => KeyState::Down,
                            ElementState::Released => KeyState::Up,
                        };
                        game.handle_key(key, key_state);
                    }
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                // Expose redraws between frames just repaint
                if game.is_frame_due(now) {
                    game.frame(now);
                }
                let deadline = game.deadline();
                self.draw();
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }

            _ => {}
        }

        if self.game.as_ref().is_some_and(Game::should_quit) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(game), Some(window)) = (self.game.as_ref(), self.window.as_ref()) else {
            return;
        };
        if game.is_frame_due(Instant::now()) {
            window.request_redraw();
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(game.deadline()));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Window:destroy");
        self.renderer = None;
        self.window = None;
    }
}

/// Open the window and run until quit
///
/// Returns the initialisation error if the window or drawing surface could
/// not be created; the loop never starts in that case.
pub fn run(seed: u64) -> Result<()> {
    let event_loop = EventLoop::new().context("Error initialising the windowing system")?;
    let mut app = App::new(seed);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated abnormally")?;

    match app.take_init_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
