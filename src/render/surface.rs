//! The host-facing drawing contract.
//!
//! Annotations measure themselves with [`FontMetrics`] and paint onto a
//! [`DrawSurface`]. The surface is translated by the host so that `(0, 0)` is
//! the top-left corner of the annotation's slot on the line.
//!
//! [`MonospaceMetrics`] and [`DisplayList`] are headless implementations for
//! hosts that lay out in character cells or replay drawing later.

use super::Color;

/// Measurements of the editor font.
pub trait FontMetrics {
    /// Advance width of `text` when drawn on one line.
    fn text_width(&self, text: &str) -> f64;

    fn space_width(&self) -> f64 {
        self.text_width(" ")
    }

    /// Distance from the top of the line to the text baseline.
    fn ascent(&self) -> f64;
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A painter provided by the host.
///
/// `None` for the pen or brush means "do not stroke" / "do not fill".
pub trait DrawSurface {
    type Font;

    fn set_font(&mut self, font: &Self::Font);
    fn set_pen(&mut self, color: Option<Color>);
    fn set_brush(&mut self, color: Option<Color>);
    fn draw_rect(&mut self, rect: Rect);
    fn draw_rounded_rect(&mut self, rect: Rect, radius: f64);
    /// Draw `text` with its baseline at `baseline`.
    fn draw_text(&mut self, x: f64, baseline: f64, text: &str);
    fn translate(&mut self, dx: f64, dy: f64);
}

/// Fixed-advance metrics, e.g. for terminal hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f64,
    pub ascent: f64,
}

impl MonospaceMetrics {
    pub fn new(advance: f64, ascent: f64) -> Self {
        Self { advance, ascent }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }

    fn ascent(&self) -> f64 {
        self.ascent
    }
}

/// A recorded drawing operation, in untranslated surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        /// 0 for square corners
        radius: f64,
        pen: Option<Color>,
        brush: Option<Color>,
    },
    Text {
        x: f64,
        baseline: f64,
        text: String,
        pen: Option<Color>,
    },
}

impl DrawCommand {
    /// Horizontal extent `(left, right)` of the command.
    pub fn horizontal_extent(&self, metrics: &dyn FontMetrics) -> (f64, f64) {
        match self {
            DrawCommand::Rect { rect, .. } => (rect.x, rect.right()),
            DrawCommand::Text { x, text, .. } => (*x, *x + metrics.text_width(text)),
        }
    }
}

/// A [`DrawSurface`] that records every operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    pen: Option<Color>,
    brush: Option<Color>,
    dx: f64,
    dy: f64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rightmost x coordinate touched by any command.
    pub fn right_edge(&self, metrics: &dyn FontMetrics) -> Option<f64> {
        self.commands
            .iter()
            .map(|cmd| cmd.horizontal_extent(metrics).1)
            .reduce(f64::max)
    }

    /// Leftmost x coordinate touched by any command.
    pub fn left_edge(&self, metrics: &dyn FontMetrics) -> Option<f64> {
        self.commands
            .iter()
            .map(|cmd| cmd.horizontal_extent(metrics).0)
            .reduce(f64::min)
    }

    /// Text of every text command, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }

    fn push_rect(&mut self, rect: Rect, radius: f64) {
        let rect = Rect::new(rect.x + self.dx, rect.y + self.dy, rect.width, rect.height);
        self.commands.push(DrawCommand::Rect {
            rect,
            radius,
            pen: self.pen,
            brush: self.brush,
        });
    }
}

impl DrawSurface for DisplayList {
    type Font = ();

    fn set_font(&mut self, _font: &()) {}

    fn set_pen(&mut self, color: Option<Color>) {
        self.pen = color;
    }

    fn set_brush(&mut self, color: Option<Color>) {
        self.brush = color;
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.push_rect(rect, 0.0);
    }

    fn draw_rounded_rect(&mut self, rect: Rect, radius: f64) {
        self.push_rect(rect, radius);
    }

    fn draw_text(&mut self, x: f64, baseline: f64, text: &str) {
        self.commands.push(DrawCommand::Text {
            x: x + self.dx,
            baseline: baseline + self.dy,
            text: text.to_string(),
            pen: self.pen,
        });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.dx += dx;
        self.dy += dy;
    }
}
