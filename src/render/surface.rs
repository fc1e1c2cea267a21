//! Immediate-mode 2D drawing surface.
//!
//! The scene and planet renderers only talk to [`Surface`]; the browser
//! canvas and the headless [`RecordingSurface`](super::RecordingSurface)
//! both implement it.

/// Ordered gradient color stop, `offset` in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: Vec<ColorStop>,
    },
    Radial {
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
        stops: Vec<ColorStop>,
    },
}

impl Gradient {
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Gradient::Linear {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    pub fn radial(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
        Gradient::Radial {
            x0,
            y0,
            r0,
            x1,
            y1,
            r1,
            stops: Vec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: impl Into<String>) -> Self {
        let s = ColorStop {
            offset,
            color: color.into(),
        };
        match &mut self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops.push(s),
        }
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Color(String),
    Gradient(Gradient),
}

impl From<&str> for Paint {
    fn from(c: &str) -> Self {
        Paint::Color(c.to_string())
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill(&mut self, paint: Paint);
    fn set_stroke(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64, start: f64, end: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Glow around everything filled or stroked until [`Surface::clear_glow`].
    fn set_glow(&mut self, color: &str, blur: f64);
    fn clear_glow(&mut self);

    /// Full circle as a fresh path.
    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
    }
}
