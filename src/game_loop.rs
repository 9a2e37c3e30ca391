//! Frame-capped game loop
//!
//! One iteration: dispatch queued input, tick once with the measured frame
//! delta, render, then wait until the frame budget is used up. Overrunning a
//! frame just starts the next one immediately; there is no catch-up.

use std::time::{Duration, Instant};

use crate::input::{Intent, Key, KeyState, apply_intent, intent_for};
use crate::sim::{GameState, TickEvents, tick};

/// Measures frame deltas and tracks when the next frame is due
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_time: Duration,
    last_start: Instant,
    next_deadline: Instant,
}

impl FrameClock {
    /// The first frame is due immediately
    pub fn new(frame_time: Duration, now: Instant) -> Self {
        Self {
            frame_time,
            last_start: now,
            next_deadline: now,
        }
    }

    /// Start a frame at `now`, returning seconds since the previous start
    pub fn begin_frame(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last_start).as_secs_f32();
        self.last_start = now;
        self.next_deadline = now + self.frame_time;
        dt
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// When the current frame's budget runs out
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Time left to wait at `now` (zero after an overrun)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }
}

/// Game instance: state, quit flag and frame timing
pub struct Game {
    pub state: GameState,
    clock: FrameClock,
    quit: bool,
}

impl Game {
    pub fn new(seed: u64, frame_time: Duration, now: Instant) -> Self {
        Self {
            state: GameState::new(seed),
            clock: FrameClock::new(frame_time, now),
            quit: false,
        }
    }

    /// Route a key transition through to the game state
    pub fn handle_key(&mut self, key: Key, key_state: KeyState) {
        if let Some(intent) = intent_for(key, key_state) {
            self.handle_intent(intent);
        }
    }

    pub fn handle_intent(&mut self, intent: Intent) {
        if !apply_intent(&mut self.state, intent) {
            self.quit = true;
        }
    }

    /// Quit signal from outside the input mapping (window close)
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    #[inline]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[inline]
    pub fn is_frame_due(&self, now: Instant) -> bool {
        self.clock.is_due(now)
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.clock.deadline()
    }

    /// Run the update step for the frame starting at `now`
    pub fn frame(&mut self, now: Instant) -> TickEvents {
        let dt = self.clock.begin_frame(now);
        tick(&mut self.state, dt)
    }
}
