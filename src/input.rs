//! Keyboard input to gameplay intents
//!
//! Platform code translates raw key codes into [`Key`]; everything after that
//! is platform-independent.

use crate::sim::GameState;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    R,
    Escape,
}

/// Whether a key went down or came back up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Down,
    Up,
}

/// Something the player wants to happen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Set the paddle's horizontal direction (-1, 0 or 1)
    MovePaddle(f32),
    /// Pause/resume, or start over after game over
    TogglePause,
    Restart,
    Quit,
}

/// Map a key transition to an intent
///
/// Movement starts on key-down and stops on key-up; pause and restart fire
/// on release so holding the key doesn't repeat them.
pub fn intent_for(key: Key, key_state: KeyState) -> Option<Intent> {
    match (key_state, key) {
        (KeyState::Down, Key::Escape) => Some(Intent::Quit),
        (KeyState::Down, Key::Right) => Some(Intent::MovePaddle(1.0)),
        (KeyState::Down, Key::Left) => Some(Intent::MovePaddle(-1.0)),
        (KeyState::Up, Key::Right | Key::Left) => Some(Intent::MovePaddle(0.0)),
        (KeyState::Up, Key::Space) => Some(Intent::TogglePause),
        (KeyState::Up, Key::R) => Some(Intent::Restart),
        _ => None,
    }
}

/// Apply an intent to the game state
///
/// Returns `false` when the intent asks the loop to stop.
pub fn apply_intent(state: &mut GameState, intent: Intent) -> bool {
    match intent {
        Intent::MovePaddle(dir) => state.paddle.dir.x = dir,
        Intent::TogglePause => state.toggle_pause(),
        Intent::Restart => state.restart(),
        Intent::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPEED_INITIAL;
    use crate::sim::GamePhase;

    #[test]
    fn test_movement_keys() {
        assert_eq!(intent_for(Key::Right, KeyState::Down), Some(Intent::MovePaddle(1.0)));
        assert_eq!(intent_for(Key::Left, KeyState::Down), Some(Intent::MovePaddle(-1.0)));
        assert_eq!(intent_for(Key::Right, KeyState::Up), Some(Intent::MovePaddle(0.0)));
        assert_eq!(intent_for(Key::Left, KeyState::Up), Some(Intent::MovePaddle(0.0)));
    }

    #[test]
    fn test_release_triggered_keys() {
        assert_eq!(intent_for(Key::Space, KeyState::Down), None);
        assert_eq!(intent_for(Key::Space, KeyState::Up), Some(Intent::TogglePause));
        assert_eq!(intent_for(Key::R, KeyState::Down), None);
        assert_eq!(intent_for(Key::R, KeyState::Up), Some(Intent::Restart));
    }

    #[test]
    fn test_escape_quits_on_press() {
        assert_eq!(intent_for(Key::Escape, KeyState::Down), Some(Intent::Quit));
        assert_eq!(intent_for(Key::Escape, KeyState::Up), None);

        let mut state = GameState::new(3);
        assert!(!apply_intent(&mut state, Intent::Quit));
    }

    #[test]
    fn test_releasing_either_arrow_stops_paddle() {
        let mut state = GameState::new(3);
        apply_intent(&mut state, Intent::MovePaddle(1.0));
        assert_eq!(state.paddle.dir.x, 1.0);

        // Releasing Left while Right is held still stops the paddle
        let stop = intent_for(Key::Left, KeyState::Up).unwrap();
        assert!(apply_intent(&mut state, stop));
        assert_eq!(state.paddle.dir.x, 0.0);
    }

    #[test]
    fn test_space_pauses_and_restarts_after_game_over() {
        let mut state = GameState::new(3);
        apply_intent(&mut state, Intent::TogglePause);
        assert_eq!(state.phase, GamePhase::Paused);
        apply_intent(&mut state, Intent::TogglePause);
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::GameOver;
        state.speed = 321.0;
        apply_intent(&mut state, Intent::TogglePause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.speed, SPEED_INITIAL);
    }

    #[test]
    fn test_restart_from_any_phase() {
        for phase in [GamePhase::Playing, GamePhase::Paused, GamePhase::GameOver] {
            let mut state = GameState::new(5);
            state.phase = phase;
            state.speed = 400.0;
            assert!(apply_intent(&mut state, Intent::Restart));
            assert_eq!(state.phase, GamePhase::Playing);
            assert_eq!(state.speed, SPEED_INITIAL);
        }
    }

    #[test]
    fn test_paddle_intent_applies_while_paused() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Paused;
        apply_intent(&mut state, Intent::MovePaddle(-1.0));
        assert_eq!(state.paddle.dir.x, -1.0);
    }
}
