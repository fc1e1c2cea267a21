// Randomly scattered background stars, redrawn every frame.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::surface::{Gradient, Surface};

/// Viewport area, in square pixels, per star.
const AREA_PER_STAR: u64 = 6000;

pub fn star_count(width: u32, height: u32) -> usize {
    (width as u64 * height as u64 / AREA_PER_STAR) as usize
}

pub struct Starfield {
    rng: SmallRng,
}

impl Starfield {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Scatters a fresh set of stars; positions differ on every call.
    pub fn paint(&mut self, s: &mut dyn Surface, width: u32, height: u32) {
        let (w, h) = (width as f64, height as f64);
        for _ in 0..star_count(width, height) {
            let x = self.rng.gen_range(0.0..w);
            let y = self.rng.gen_range(0.0..h);
            let size = self.rng.gen_range(0.5..2.5);
            let alpha = self.rng.gen_range(0.3..0.8);
            let glow = Gradient::radial(x, y, 0.0, x, y, size)
                .stop(0.0, format!("rgba(235, 235, 245, {alpha})"))
                .stop(1.0, "transparent");
            s.set_fill(glow.into());
            s.circle(x, y, size);
            s.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawOp, RecordingSurface};

    #[test]
    fn count_scales_with_area() {
        assert_eq!(star_count(1000, 800), 133);
        assert_eq!(star_count(50, 50), 0);
        assert_eq!(star_count(0, 800), 0);
    }

    #[test]
    fn stars_stay_in_bounds() {
        let mut field = Starfield::new(42);
        let mut s = RecordingSurface::new();
        field.paint(&mut s, 600, 400);
        let arcs = s.arcs();
        assert_eq!(arcs.len(), star_count(600, 400));
        for (x, y, r) in arcs {
            assert!((0.0..600.0).contains(&x));
            assert!((0.0..400.0).contains(&y));
            assert!((0.5..2.5).contains(&r));
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        Starfield::new(7).paint(&mut a, 300, 300);
        Starfield::new(7).paint(&mut b, 300, 300);
        assert_eq!(a.ops, b.ops);
    }

    #[test]
    fn consecutive_frames_differ() {
        let mut field = Starfield::new(7);
        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        field.paint(&mut a, 300, 300);
        field.paint(&mut b, 300, 300);
        assert_ne!(a.ops, b.ops);
        assert!(b.count(|op| matches!(op, DrawOp::Fill)) > 0);
    }
}
