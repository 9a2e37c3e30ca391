//! Paddle Ball - A single-screen ball and paddle arcade game
//!
//! Core modules:
//! - `sim`: Simulation (objects, collisions, update step, restart)
//! - `input`: Key events to gameplay intents
//! - `game_loop`: Frame clock and per-frame orchestration
//! - `renderer`: wgpu rectangle pipeline
//! - `platform`: winit window and event loop

pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

use std::time::Duration;

/// Game configuration constants
pub mod consts {
    /// Playing field (and window) dimensions in pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Frame cap
    pub const TARGET_FPS: u32 = 60;

    /// Ball size
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;

    /// Paddle size
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle's bottom edge and the field's bottom edge
    pub const WINDOW_PADDING: f32 = 20.0;

    /// Starting speed in pixels/s
    pub const SPEED_INITIAL: f32 = 200.0;
    /// Speed multiplier applied on every wall bounce
    pub const SPEED_INCREASE_FACTOR: f32 = 1.05;

    pub const WINDOW_TITLE: &str = "Paddle Ball";
}

/// Target duration of one frame (1 / TARGET_FPS)
#[inline]
pub fn frame_time() -> Duration {
    Duration::from_secs_f64(1.0 / consts::TARGET_FPS as f64)
}
