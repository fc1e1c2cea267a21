// Pressed-key tracking and key → direction mapping.
use std::collections::HashSet;

use crate::config::ControlScheme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction, screen coordinates (y grows downwards).
    pub fn unit(&self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    pub fn from_key(scheme: ControlScheme, key: &str) -> Option<Self> {
        match scheme {
            ControlScheme::Wasd => match key {
                "w" | "W" => Some(Direction::Up),
                "s" | "S" => Some(Direction::Down),
                "a" | "A" => Some(Direction::Left),
                "d" | "D" => Some(Direction::Right),
                _ => None,
            },
            ControlScheme::Arrows => match key {
                "ArrowUp" => Some(Direction::Up),
                "ArrowDown" => Some(Direction::Down),
                "ArrowLeft" => Some(Direction::Left),
                "ArrowRight" => Some(Direction::Right),
                _ => None,
            },
        }
    }
}

pub fn is_pause_key(key: &str) -> bool {
    matches!(key, " " | "Space" | "Spacebar")
}

/// Single-character keys are held lower-case: Shift may change between keydown and keyup.
fn normalize(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}

/// Set of currently held key identifiers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pressed: HashSet<String>,
}

impl InputState {
    pub fn press(&mut self, key: &str) {
        self.pressed.insert(normalize(key));
    }

    pub fn release(&mut self, key: &str) {
        self.pressed.remove(&normalize(key));
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&normalize(key))
    }

    pub fn any_active(&self) -> bool {
        !self.pressed.is_empty()
    }

    /// Active directions under `scheme`, each reported once.
    pub fn directions(&self, scheme: ControlScheme) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| {
                self.pressed
                    .iter()
                    .any(|k| Direction::from_key(scheme, k) == Some(*d))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_is_membership_only() {
        let mut input = InputState::default();
        input.press("w");
        input.press("w");
        assert!(input.is_pressed("w"));
        input.release("w");
        assert!(!input.any_active());
    }

    #[test]
    fn shifted_letter_maps_to_same_direction() {
        let mut input = InputState::default();
        input.press("w");
        input.press("W");
        assert_eq!(input.directions(ControlScheme::Wasd), vec![Direction::Up]);
    }

    #[test]
    fn release_ignores_shift_state() {
        let mut input = InputState::default();
        input.press("w");
        input.release("W");
        assert!(!input.any_active());

        input.press("D");
        assert!(input.is_pressed("d"));
        input.release("d");
        assert!(!input.any_active());
    }

    #[test]
    fn named_keys_keep_their_case() {
        let mut input = InputState::default();
        input.press("ArrowUp");
        assert!(input.is_pressed("ArrowUp"));
        assert!(!input.is_pressed("arrowup"));
    }

    #[test]
    fn scheme_filters_keys() {
        let mut input = InputState::default();
        input.press("ArrowLeft");
        input.press("d");
        assert_eq!(input.directions(ControlScheme::Wasd), vec![Direction::Right]);
        assert_eq!(input.directions(ControlScheme::Arrows), vec![Direction::Left]);
    }

    #[test]
    fn pause_key_variants() {
        assert!(is_pause_key(" "));
        assert!(is_pause_key("Spacebar"));
        assert!(!is_pause_key("p"));
    }
}
