//! Plain text annotations (`= int`, `count:`, ` = 3`).

use super::{Color, DrawSurface, FontMetrics, Rect};

/// Margin used when a style does not set one.
pub const DEFAULT_MARGIN: f64 = 1.0;

/// A text label with an optional rounded background box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    column: usize,
    text: String,
    text_color: Color,
    background: Option<Color>,
    corner_radius: f64,
    margin: f64,
    space_left: bool,
    space_right: bool,
}

impl TextAnnotation {
    pub fn new(column: usize, text: impl Into<String>, text_color: Color) -> Self {
        Self {
            column,
            text: text.into(),
            text_color,
            background: None,
            corner_radius: 0.0,
            margin: DEFAULT_MARGIN,
            space_left: false,
            space_right: false,
        }
    }

    /// Fill a box behind the text; rounded when `corner_radius > 0`.
    pub fn with_background(mut self, color: Color, corner_radius: f64) -> Self {
        self.background = Some(color);
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Reserve one space of padding before the note.
    pub fn with_space_left(mut self, space_left: bool) -> Self {
        self.space_left = space_left;
        self
    }

    /// Reserve one space of padding after the note, so it does not touch the
    /// text that follows it.
    pub fn with_space_right(mut self, space_right: bool) -> Self {
        self.space_right = space_right;
        self
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn space_left(&self) -> bool {
        self.space_left
    }

    pub fn space_right(&self) -> bool {
        self.space_right
    }

    fn paddings(&self, metrics: &dyn FontMetrics) -> (f64, f64) {
        let space = metrics.space_width();
        (
            if self.space_left { space } else { 0.0 },
            if self.space_right { space } else { 0.0 },
        )
    }

    pub fn width(&self, _line_height: f64, metrics: &dyn FontMetrics) -> f64 {
        let (left, right) = self.paddings(metrics);
        metrics.text_width(&self.text) + self.margin * 2.0 + left + right
    }

    pub fn paint<S: DrawSurface>(
        &self,
        line_height: f64,
        metrics: &dyn FontMetrics,
        font: &S::Font,
        surface: &mut S,
    ) {
        let width = self.width(line_height, metrics);
        let (left, right) = self.paddings(metrics);

        if let Some(background) = self.background {
            let rect = Rect::new(
                self.margin / 2.0 + left,
                0.0,
                width - self.margin - left - right,
                line_height,
            );
            surface.set_pen(None);
            surface.set_brush(Some(background));
            if self.corner_radius > 0.0 {
                surface.draw_rounded_rect(rect, self.corner_radius);
            } else {
                surface.draw_rect(rect);
            }
        }

        surface.set_pen(Some(self.text_color));
        surface.set_font(font);
        surface.draw_text(self.margin + left, metrics.ascent(), &self.text);
    }
}
