//! Per-frame simulation step
//!
//! Integrates both objects, handles the game-over edge, clamps the paddle,
//! bounces the ball off the other three walls and resolves the paddle hit.

use super::collision::{CollisionAxis, handle_collision};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Wall bounces this tick (each one multiplied the speed)
    pub wall_bounces: u8,
    /// Axis of the paddle hit, if any
    pub paddle_hit: Option<CollisionAxis>,
    /// The ball reached the bottom edge this tick
    pub game_over: bool,
}

/// Advance the game state by `dt` seconds
///
/// Does nothing unless the phase is [`GamePhase::Playing`].
pub fn tick(state: &mut GameState, dt: f32) -> TickEvents {
    let mut events = TickEvents::default();

    if state.phase != GamePhase::Playing {
        return events;
    }

    state.ball.integrate(state.speed, dt);
    // Paddle only ever slides horizontally
    state.paddle.pos.x += state.paddle.dir.x * state.speed * dt;

    if state.ball.bottom() >= FIELD_HEIGHT {
        log::info!("GameState: Game over");
        state.ball.pos.y = FIELD_HEIGHT - state.ball.size.y;
        state.phase = GamePhase::GameOver;
        events.game_over = true;
        if let Ok(snapshot) = serde_json::to_string(&*state) {
            log::debug!("Final state: {}", snapshot);
        }
        return events;
    }

    let paddle = &mut state.paddle;
    if paddle.pos.x <= 0.0 {
        paddle.pos.x = 0.0;
    }
    if paddle.right() >= FIELD_WIDTH {
        paddle.pos.x = FIELD_WIDTH - paddle.size.x;
    }

    let ball = &mut state.ball;
    if ball.pos.x <= 0.0 {
        ball.pos.x = 0.0;
        ball.dir.x = -ball.dir.x;
        state.speed *= SPEED_INCREASE_FACTOR;
        events.wall_bounces += 1;
    }
    if ball.right() >= FIELD_WIDTH {
        ball.pos.x = FIELD_WIDTH - ball.size.x;
        ball.dir.x = -ball.dir.x;
        state.speed *= SPEED_INCREASE_FACTOR;
        events.wall_bounces += 1;
    }
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.dir.y = -ball.dir.y;
        state.speed *= SPEED_INCREASE_FACTOR;
        events.wall_bounces += 1;
    }

    events.paddle_hit = handle_collision(&mut state.ball, &state.paddle);

    events
}
