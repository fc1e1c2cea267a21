//! Procedural planet glyphs for stations.
//!
//! Each renderer is stateless and brackets its work in `save`/`restore`, so
//! fill, stroke, line width and glow settings never leak to the caller.

use std::f64::consts::PI;

use super::surface::{Gradient, Surface};
use crate::model::PlanetStyle;

const BODY_GLOW_BLUR: f64 = 20.0;
const HOVER_RING_GAP: f64 = 10.0;

/// Crater offsets and sizes as fractions of the moon radius.
const CRATERS: [(f64, f64, f64); 4] = [
    (-0.3, -0.2, 0.2),
    (0.2, 0.3, 0.25),
    (-0.1, 0.2, 0.15),
    (0.3, -0.3, 0.18),
];

fn body_glow(s: &mut dyn Surface, unlocked: bool, hovered: bool, accent: &str) {
    if unlocked || hovered {
        s.set_glow(accent, BODY_GLOW_BLUR);
    }
}

/// Accent outline drawn `HOVER_RING_GAP` outside `radius`.
pub fn draw_hover_ring(
    s: &mut dyn Surface,
    x: f64,
    y: f64,
    radius: f64,
    hovered: bool,
    accent: &str,
) {
    if !hovered {
        return;
    }
    s.circle(x, y, radius + HOVER_RING_GAP);
    s.set_stroke(accent.into());
    s.set_line_width(2.0);
    s.stroke();
}

/// Grey cratered sphere.
pub fn draw_moon(
    s: &mut dyn Surface,
    x: f64,
    y: f64,
    radius: f64,
    unlocked: bool,
    hovered: bool,
    accent: &str,
) {
    s.save();
    body_glow(s, unlocked, hovered, accent);

    s.circle(x, y, radius);
    s.set_fill("#CFCFCF".into());
    s.fill();

    s.clear_glow();
    for (cx, cy, size) in CRATERS {
        s.circle(x + cx * radius, y + cy * radius, size * radius);
        s.set_fill("#AFAFAF".into());
        s.fill();
    }

    // soft highlight from the upper left
    let shade = Gradient::radial(x - radius * 0.5, y - radius * 0.5, 0.0, x, y, radius)
        .stop(0.0, "rgba(255, 255, 255, 0.2)")
        .stop(1.0, "rgba(0, 0, 0, 0.1)");
    s.circle(x, y, radius);
    s.set_fill(shade.into());
    s.fill();

    draw_hover_ring(s, x, y, radius, hovered, accent);
    s.restore();
}

/// Golden sphere with a tilted ring; the ring reaches out to `1.5 * radius`.
pub fn draw_saturn(
    s: &mut dyn Surface,
    x: f64,
    y: f64,
    radius: f64,
    unlocked: bool,
    hovered: bool,
    accent: &str,
) {
    s.save();
    body_glow(s, unlocked, hovered, accent);

    s.circle(x, y, radius * 0.8);
    let body = Gradient::linear(x - radius, y - radius, x + radius, y + radius)
        .stop(0.0, "#DAA520")
        .stop(1.0, "#CD853F");
    s.set_fill(body.into());
    s.fill();

    s.clear_glow();
    s.begin_path();
    s.ellipse(x, y, radius * 1.5, radius * 0.3, PI / 8.0, 0.0, PI * 2.0);
    let ring = Gradient::linear(x - radius * 1.5, y, x + radius * 1.5, y)
        .stop(0.0, "rgba(210, 180, 140, 0.2)")
        .stop(0.5, "rgba(210, 180, 140, 0.6)")
        .stop(1.0, "rgba(210, 180, 140, 0.2)");
    s.set_stroke(ring.into());
    s.set_line_width(radius * 0.2);
    s.stroke();

    draw_hover_ring(s, x, y, radius * 1.5, hovered, accent);
    s.restore();
}

/// Peach sphere with three pale atmospheric swirls.
pub fn draw_venus(
    s: &mut dyn Surface,
    x: f64,
    y: f64,
    radius: f64,
    unlocked: bool,
    hovered: bool,
    accent: &str,
) {
    s.save();
    body_glow(s, unlocked, hovered, accent);

    s.circle(x, y, radius);
    let body = Gradient::radial(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
        .stop(0.0, "#FFE5B4")
        .stop(1.0, "#FFA07A");
    s.set_fill(body.into());
    s.fill();

    s.clear_glow();
    s.set_stroke("rgba(255, 228, 196, 0.3)".into());
    s.set_line_width(radius * 0.1);
    for i in 0..3 {
        let start = i as f64 * PI / 2.0;
        s.begin_path();
        s.arc(x, y, radius * 0.7, start, start + PI * 1.2);
        s.stroke();
    }

    draw_hover_ring(s, x, y, radius, hovered, accent);
    s.restore();
}

#[allow(clippy::too_many_arguments)]
pub fn draw_planet(
    s: &mut dyn Surface,
    style: PlanetStyle,
    x: f64,
    y: f64,
    radius: f64,
    unlocked: bool,
    hovered: bool,
    accent: &str,
) {
    match style {
        PlanetStyle::Cratered => draw_moon(s, x, y, radius, unlocked, hovered, accent),
        PlanetStyle::Ringed => draw_saturn(s, x, y, radius, unlocked, hovered, accent),
        PlanetStyle::Swirled => draw_venus(s, x, y, radius, unlocked, hovered, accent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawOp, RecordingSurface};

    const ACCENT: &str = "#64D2FFFF";

    fn all_styles() -> [PlanetStyle; 3] {
        [PlanetStyle::Cratered, PlanetStyle::Ringed, PlanetStyle::Swirled]
    }

    #[test]
    fn renderers_restore_state() {
        for style in all_styles() {
            let mut s = RecordingSurface::new();
            draw_planet(&mut s, style, 100.0, 100.0, 40.0, true, true, ACCENT);
            assert_eq!(s.open_saves(), 0, "{style:?}");
            assert!(!s.glow_active(), "{style:?}");
            assert_eq!(s.ops.first(), Some(&DrawOp::Save));
            assert_eq!(s.ops.last(), Some(&DrawOp::Restore));
        }
    }

    #[test]
    fn glow_only_when_unlocked_or_hovered() {
        for style in all_styles() {
            let mut s = RecordingSurface::new();
            draw_planet(&mut s, style, 0.0, 0.0, 10.0, false, false, ACCENT);
            assert_eq!(s.count(|op| matches!(op, DrawOp::Glow { .. })), 0);

            let mut s = RecordingSurface::new();
            draw_planet(&mut s, style, 0.0, 0.0, 10.0, true, false, ACCENT);
            let glows = s.count(|op| matches!(op, DrawOp::Glow { blur, .. } if *blur == 20.0));
            assert_eq!(glows, 1);
        }
    }

    fn indices_of(s: &RecordingSurface, wanted: &DrawOp) -> Vec<usize> {
        s.ops
            .iter()
            .enumerate()
            .filter(|(_, op)| *op == wanted)
            .map(|(i, _)| i)
            .collect()
    }

    fn clear_glow_at(s: &RecordingSurface) -> usize {
        s.ops.iter().position(|op| *op == DrawOp::ClearGlow).unwrap()
    }

    #[test]
    fn saturn_ring_drawn_without_glow() {
        let mut s = RecordingSurface::new();
        draw_saturn(&mut s, 0.0, 0.0, 20.0, true, false, ACCENT);
        let clear_at = clear_glow_at(&s);
        let fills = indices_of(&s, &DrawOp::Fill);
        let strokes = indices_of(&s, &DrawOp::Stroke);
        assert_eq!(fills.len(), 1);
        assert!(fills[0] < clear_at);
        assert_eq!(strokes.len(), 1);
        assert!(strokes[0] > clear_at);
    }

    #[test]
    fn venus_swirls_drawn_without_glow() {
        let mut s = RecordingSurface::new();
        draw_venus(&mut s, 0.0, 0.0, 20.0, true, false, ACCENT);
        let clear_at = clear_glow_at(&s);
        let fills = indices_of(&s, &DrawOp::Fill);
        let strokes = indices_of(&s, &DrawOp::Stroke);
        assert_eq!(fills.len(), 1);
        assert!(fills[0] < clear_at);
        assert_eq!(strokes.len(), 3);
        assert!(strokes.iter().all(|i| *i > clear_at));
    }

    #[test]
    fn glow_cleared_before_detail() {
        let mut s = RecordingSurface::new();
        draw_moon(&mut s, 0.0, 0.0, 10.0, true, false, ACCENT);
        let clear_at = clear_glow_at(&s);
        let fills = indices_of(&s, &DrawOp::Fill);
        // body first, then four craters and the shading after the glow is off
        assert_eq!(fills.len(), 6);
        assert!(fills[0] < clear_at);
        assert!(fills[1..].iter().all(|i| *i > clear_at));
    }

    #[test]
    fn hover_ring_sits_outside_radius() {
        let mut s = RecordingSurface::new();
        draw_venus(&mut s, 50.0, 60.0, 30.0, false, true, ACCENT);
        assert_eq!(s.arcs().last(), Some(&(50.0, 60.0, 40.0)));
        assert!(s.ops.contains(&DrawOp::SetStroke(ACCENT.into())));

        let mut s = RecordingSurface::new();
        draw_saturn(&mut s, 50.0, 60.0, 30.0, false, true, ACCENT);
        assert_eq!(s.arcs().last(), Some(&(50.0, 60.0, 55.0)));
    }

    #[test]
    fn no_ring_without_hover() {
        let mut s = RecordingSurface::new();
        draw_venus(&mut s, 50.0, 60.0, 30.0, true, false, ACCENT);
        assert!(!s.arcs().contains(&(50.0, 60.0, 40.0)));
    }

    #[test]
    fn saturn_ring_is_tilted_ellipse() {
        let mut s = RecordingSurface::new();
        draw_saturn(&mut s, 0.0, 0.0, 20.0, false, false, ACCENT);
        assert!(s.ops.contains(&DrawOp::Ellipse {
            x: 0.0,
            y: 0.0,
            rx: 30.0,
            ry: 6.0,
            rotation: PI / 8.0
        }));
    }
}
