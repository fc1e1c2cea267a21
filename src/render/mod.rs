pub mod canvas;
pub mod planets;
pub mod recording;
pub mod starfield;
pub mod surface;

pub use planets::{draw_hover_ring, draw_moon, draw_planet, draw_saturn, draw_venus};
pub use recording::{DrawOp, RecordingSurface};
pub use starfield::Starfield;
pub use surface::{ColorStop, Gradient, Paint, Surface, TextAlign};
