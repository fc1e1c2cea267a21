// Clamped linear ship movement.
use crate::config::ControlScheme;
use crate::model::{Position, Viewport};

use super::input::InputState;

/// Distance kept between the ship and every viewport edge.
pub const EDGE_MARGIN: f64 = 20.0;

pub fn clamp_to_viewport(pos: Position, viewport: Viewport) -> Position {
    let max_x = viewport.width as f64 - EDGE_MARGIN;
    let max_y = viewport.height as f64 - EDGE_MARGIN;
    // max before min: a viewport narrower than 2*margin pins to the margin
    Position::new(
        pos.x.min(max_x).max(EDGE_MARGIN),
        pos.y.min(max_y).max(EDGE_MARGIN),
    )
}

/// Position after one tick of held input. Opposing keys cancel out.
pub fn step(
    pos: Position,
    input: &InputState,
    scheme: ControlScheme,
    speed: f64,
    viewport: Viewport,
) -> Position {
    let (mut dx, mut dy) = (0.0, 0.0);
    for dir in input.directions(scheme) {
        let (ux, uy) = dir.unit();
        dx += ux * speed;
        dy += uy * speed;
    }
    clamp_to_viewport(Position::new(pos.x + dx, pos.y + dy), viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[&str]) -> InputState {
        let mut input = InputState::default();
        for k in keys {
            input.press(k);
        }
        input
    }

    const VP: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    #[test]
    fn diagonal_is_vector_sum() {
        let p = step(Position::new(100.0, 100.0), &held(&["d", "s"]), ControlScheme::Wasd, 5.0, VP);
        assert_eq!(p, Position::new(105.0, 105.0));
    }

    #[test]
    fn opposing_keys_cancel() {
        let p = step(Position::new(100.0, 100.0), &held(&["a", "d"]), ControlScheme::Wasd, 5.0, VP);
        assert_eq!(p, Position::new(100.0, 100.0));
    }

    #[test]
    fn pinned_at_boundary() {
        let mut p = Position::new(30.0, 300.0);
        let input = held(&["a"]);
        for _ in 0..10 {
            p = step(p, &input, ControlScheme::Wasd, 5.0, VP);
        }
        assert_eq!(p.x, EDGE_MARGIN);

        let mut p = Position::new(400.0, 570.0);
        let input = held(&["ArrowDown"]);
        for _ in 0..10 {
            p = step(p, &input, ControlScheme::Arrows, 5.0, VP);
        }
        assert_eq!(p.y, 580.0);
    }

    #[test]
    fn unbound_keys_do_not_move() {
        let p = step(
            Position::new(100.0, 100.0),
            &held(&["q", "Enter"]),
            ControlScheme::Wasd,
            5.0,
            VP,
        );
        assert_eq!(p, Position::new(100.0, 100.0));
    }
}
