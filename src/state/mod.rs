pub mod input;
pub mod player;

pub use input::{Direction, InputState};
pub use player::{EDGE_MARGIN, clamp_to_viewport, step};
