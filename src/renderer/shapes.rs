//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{GameObject, GameState};

/// Vertices per filled rectangle (two triangles)
pub const RECT_VERTICES: usize = 6;
/// Ball + paddle
pub const SCENE_VERTICES: usize = 2 * RECT_VERTICES;

/// Convert field pixels (origin top-left, y down) to normalized device
/// coordinates (origin center, y up)
#[inline]
pub fn field_to_ndc(p: Vec2) -> Vec2 {
    Vec2::new(p.x / FIELD_WIDTH * 2.0 - 1.0, 1.0 - p.y / FIELD_HEIGHT * 2.0)
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; RECT_VERTICES] {
    let tl = field_to_ndc(pos);
    let br = field_to_ndc(pos + size);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

#[inline]
fn object(obj: &GameObject) -> [Vertex; RECT_VERTICES] {
    rect(obj.pos, obj.size, colors::FOREGROUND)
}

/// Ball then paddle, both in the foreground color
pub fn scene(state: &GameState) -> [Vertex; SCENE_VERTICES] {
    let mut vertices = [Vertex::new(0.0, 0.0, colors::FOREGROUND); SCENE_VERTICES];
    vertices[..RECT_VERTICES].copy_from_slice(&object(&state.ball));
    vertices[RECT_VERTICES..].copy_from_slice(&object(&state.paddle));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_corners_map_to_ndc_corners() {
        assert_eq!(field_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(
            field_to_ndc(Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            field_to_ndc(Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_rect_covers_its_bounds() {
        let half_field = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        let verts = rect(Vec2::ZERO, half_field, [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();

        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 0.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), 0.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
    }

    #[test]
    fn test_rect_triangles_share_a_winding() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        let cross = |a: &Vertex, b: &Vertex, c: &Vertex| {
            let ab = Vec2::from(b.position) - Vec2::from(a.position);
            let ac = Vec2::from(c.position) - Vec2::from(a.position);
            ab.perp_dot(ac)
        };
        let first = cross(&verts[0], &verts[1], &verts[2]);
        let second = cross(&verts[3], &verts[4], &verts[5]);
        assert!(first != 0.0);
        assert_eq!(first.signum(), second.signum());
    }

    #[test]
    fn test_scene_is_ball_then_paddle() {
        let state = GameState::new(11);
        let verts = scene(&state);

        assert_eq!(verts[..RECT_VERTICES], object(&state.ball));
        assert_eq!(verts[RECT_VERTICES..], object(&state.paddle));
        assert!(verts.iter().all(|v| v.color == colors::FOREGROUND));
    }
}
