use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::surface::{Gradient, Paint, Surface, TextAlign};

fn build_gradient(ctx: &CanvasRenderingContext2d, g: &Gradient) -> Option<CanvasGradient> {
    let grad = match g {
        Gradient::Linear { x0, y0, x1, y1, .. } => ctx.create_linear_gradient(*x0, *y0, *x1, *y1),
        Gradient::Radial {
            x0,
            y0,
            r0,
            x1,
            y1,
            r1,
            ..
        } => ctx
            .create_radial_gradient(*x0, *y0, *r0, *x1, *y1, *r1)
            .ok()?,
    };
    for s in g.stops() {
        grad.add_color_stop(s.offset as f32, &s.color).ok();
    }
    Some(grad)
}

// JS-side failures (bad radius, malformed color) leave the previous state in place.
impl Surface for CanvasRenderingContext2d {
    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn set_fill(&mut self, paint: Paint) {
        match paint {
            Paint::Color(c) => self.set_fill_style_str(&c),
            Paint::Gradient(g) => {
                if let Some(grad) = build_gradient(self, &g) {
                    self.set_fill_style_canvas_gradient(&grad);
                }
            }
        }
    }

    fn set_stroke(&mut self, paint: Paint) {
        match paint {
            Paint::Color(c) => self.set_stroke_style_str(&c),
            Paint::Gradient(g) => {
                if let Some(grad) = build_gradient(self, &g) {
                    self.set_stroke_style_canvas_gradient(&grad);
                }
            }
        }
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end).ok();
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64, start: f64, end: f64) {
        CanvasRenderingContext2d::ellipse(self, x, y, rx, ry, rotation, start, end).ok();
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        CanvasRenderingContext2d::set_text_align(self, align.as_css());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }

    fn set_glow(&mut self, color: &str, blur: f64) {
        self.set_shadow_color(color);
        self.set_shadow_blur(blur);
    }

    fn clear_glow(&mut self) {
        self.set_shadow_blur(0.0);
    }
}
