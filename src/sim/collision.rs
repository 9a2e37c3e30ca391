//! AABB collision detection and response
//!
//! Penetration-based: the axis with the smaller overlap is the one the ball
//! is pushed out along, and only that axis's direction is inverted.

use serde::{Deserialize, Serialize};

use super::state::GameObject;

/// Axis along which a collision was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionAxis {
    /// Ball hit the paddle's left or right side
    X,
    /// Ball hit the paddle's top or bottom
    Y,
}

/// Check whether two boxes overlap. Touching edges do not count.
#[inline]
pub fn detect_collision(a: &GameObject, b: &GameObject) -> bool {
    a.pos.x < b.right()
        && a.right() > b.pos.x
        && a.pos.y < b.bottom()
        && a.bottom() > b.pos.y
}

/// Push the ball out of the paddle and bounce it
///
/// Returns the axis that was resolved, or `None` when the boxes don't
/// overlap. Equal overlaps resolve on Y.
pub fn handle_collision(ball: &mut GameObject, paddle: &GameObject) -> Option<CollisionAxis> {
    if !detect_collision(ball, paddle) {
        return None;
    }

    log::info!("GameState: collision detected");

    let delta = ball.center() - paddle.center();
    let half_extents = (ball.size + paddle.size) / 2.0;
    let overlap = half_extents - delta.abs();

    if overlap.x < overlap.y {
        ball.dir.x = -ball.dir.x;
        ball.pos.x = if delta.x > 0.0 {
            paddle.right()
        } else {
            paddle.pos.x - ball.size.x
        };
        Some(CollisionAxis::X)
    } else {
        ball.dir.y = -ball.dir.y;
        ball.pos.y = if delta.y > 0.0 {
            paddle.bottom()
        } else {
            paddle.pos.y - ball.size.y
        };
        Some(CollisionAxis::Y)
    }
}
