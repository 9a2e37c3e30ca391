//! Game state and core simulation types
//!
//! Everything the update step, input handling and renderer touch lives in
//! [`GameState`], which is owned by the game loop and passed by reference.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen by the player
    Paused,
    /// Ball reached the bottom edge; only a restart leaves this phase
    GameOver,
}

/// An axis-aligned rectangle moving in a unit direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    /// Top-left corner in pixels
    pub pos: Vec2,
    /// Direction per axis, each component in {-1, 0, 1}
    pub dir: Vec2,
    /// Width and height, fixed after creation
    pub size: Vec2,
}

impl GameObject {
    pub const fn new(pos: Vec2, dir: Vec2, size: Vec2) -> Self {
        Self { pos, dir, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Advance position by direction * speed * dt
    #[inline]
    pub fn integrate(&mut self, speed: f32, dt: f32) {
        self.pos += self.dir * speed * dt;
    }
}

/// RNG state wrapper for serialization
///
/// Each restart draws from a fresh PCG stream so rounds differ while a seed
/// stays reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out the generator for the next round
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: GameObject,
    pub paddle: GameObject,
    /// Shared speed multiplier for ball and paddle (pixels/s)
    pub speed: f32,
    pub phase: GamePhase,
    pub rng_state: RngState,
}

impl GameState {
    /// Create a new game state with the given seed, ready to play
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            ball: GameObject::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO),
            paddle: GameObject::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO),
            speed: SPEED_INITIAL,
            phase: GamePhase::Playing,
            rng_state: RngState::new(seed),
        };
        state.restart();
        state
    }

    /// Reset both objects, the speed and the phase for a new round
    pub fn restart(&mut self) {
        log::info!("GameState: Game started");

        let mut rng = self.rng_state.next_rng();

        self.phase = GamePhase::Playing;
        self.speed = SPEED_INITIAL;

        self.ball = GameObject::new(
            Vec2::new(
                rng.random_range(0.0..FIELD_WIDTH),
                rng.random_range(0.0..FIELD_HEIGHT / 3.0),
            ),
            Vec2::ONE,
            Vec2::new(BALL_WIDTH, BALL_HEIGHT),
        );

        self.paddle = GameObject::new(
            Vec2::new(
                FIELD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                FIELD_HEIGHT - WINDOW_PADDING - PADDLE_HEIGHT,
            ),
            Vec2::ZERO,
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        );
    }

    /// True while motion is frozen (paused or game over)
    pub fn is_paused(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Flip between Playing and Paused. A finished round restarts instead.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => self.phase = GamePhase::Paused,
            GamePhase::Paused => self.phase = GamePhase::Playing,
            GamePhase::GameOver => self.restart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_invariants() {
        let mut state = GameState::new(7);
        state.speed = 999.0;
        state.phase = GamePhase::GameOver;
        state.paddle.dir.x = 1.0;
        state.paddle.pos.x = 3.0;

        state.restart();

        assert_eq!(state.paddle.pos.x, FIELD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0);
        assert_eq!(
            state.paddle.pos.y,
            FIELD_HEIGHT - WINDOW_PADDING - PADDLE_HEIGHT
        );
        assert_eq!(state.paddle.dir, Vec2::ZERO);
        assert_eq!(state.paddle.size, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
        assert_eq!(state.speed, SPEED_INITIAL);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.is_paused());
        assert!(!state.is_game_over());
        assert_eq!(state.ball.dir, Vec2::ONE);
        assert_eq!(state.ball.size, Vec2::new(BALL_WIDTH, BALL_HEIGHT));
    }

    #[test]
    fn test_restart_ball_in_spawn_band() {
        let mut state = GameState::new(42);
        for _ in 0..500 {
            state.restart();
            assert!(state.ball.pos.x >= 0.0 && state.ball.pos.x < FIELD_WIDTH);
            assert!(state.ball.pos.y >= 0.0 && state.ball.pos.y < FIELD_HEIGHT / 3.0);
        }
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        for _ in 0..5 {
            assert_eq!(a.ball.pos, b.ball.pos);
            a.restart();
            b.restart();
        }
    }

    #[test]
    fn test_rounds_differ_within_a_run() {
        let mut state = GameState::new(99);
        let first = state.ball.pos;
        state.restart();
        assert_ne!(state.ball.pos, first);
    }

    #[test]
    fn test_toggle_pause_cycle() {
        let mut state = GameState::new(1);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.is_paused());
        assert!(!state.is_game_over());

        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_toggle_pause_from_game_over_restarts() {
        let mut state = GameState::new(1);
        state.speed = 500.0;
        state.phase = GamePhase::GameOver;
        assert!(state.is_paused());

        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.speed, SPEED_INITIAL);
    }

    #[test]
    fn test_object_edges() {
        let obj = GameObject::new(Vec2::new(10.0, 20.0), Vec2::ZERO, Vec2::new(4.0, 6.0));
        assert_eq!(obj.right(), 14.0);
        assert_eq!(obj.bottom(), 26.0);
        assert_eq!(obj.center(), Vec2::new(12.0, 23.0));
    }
}
