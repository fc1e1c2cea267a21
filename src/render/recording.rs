//! Headless surface that records every call, used to inspect frames in tests.

use super::surface::{Paint, Surface, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    SetFill(Paint),
    SetStroke(Paint),
    LineWidth(f64),
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Ellipse { x: f64, y: f64, rx: f64, ry: f64, rotation: f64 },
    Fill,
    Stroke,
    Font(String),
    Align(TextAlign),
    Text { text: String, x: f64, y: f64 },
    Glow { color: String, blur: f64 },
    ClearGlow,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    depth: usize,
    glow_active: bool,
    /// Glow flag saved per `save()` level.
    glow_stack: Vec<bool>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unbalanced `save`/`restore` nesting at the end of the recording.
    pub fn open_saves(&self) -> usize {
        self.depth
    }

    pub fn glow_active(&self) -> bool {
        self.glow_active
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Arc { x, y, radius, .. } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.glow_stack.push(self.glow_active);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if let Some(g) = self.glow_stack.pop() {
            self.glow_active = g;
        }
        self.ops.push(DrawOp::Restore);
    }

    fn set_fill(&mut self, paint: Paint) {
        self.ops.push(DrawOp::SetFill(paint));
    }

    fn set_stroke(&mut self, paint: Paint) {
        self.ops.push(DrawOp::SetStroke(paint));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::FillRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(DrawOp::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
    }

    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        _start: f64,
        _end: f64,
    ) {
        self.ops.push(DrawOp::Ellipse {
            x,
            y,
            rx,
            ry,
            rotation,
        });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(DrawOp::Align(align));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_glow(&mut self, color: &str, blur: f64) {
        self.glow_active = blur > 0.0;
        self.ops.push(DrawOp::Glow {
            color: color.to_string(),
            blur,
        });
    }

    fn clear_glow(&mut self) {
        self.glow_active = false;
        self.ops.push(DrawOp::ClearGlow);
    }
}
