//! Annotation entities and the render contract the host drives.
//!
//! The host asks each annotation for its [`width`](Annotation::width) so it
//! can reserve room on the line, then calls [`paint`](Annotation::paint)
//! with a surface translated to the annotation's slot. `paint` never draws
//! outside `[0, width) × [0, line_height)`.

mod byte_grid;
mod color;
mod surface;
mod text_note;

pub use byte_grid::{ByteGridAnnotation, GridItem, GridLayout, MAX_CELLS};
pub use color::Color;
pub use surface::{DisplayList, DrawCommand, DrawSurface, FontMetrics, MonospaceMetrics, Rect};
pub use text_note::{DEFAULT_MARGIN, TextAnnotation};

/// A renderable, non-editable overlay at a source position.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Text(TextAnnotation),
    ByteGrid(ByteGridAnnotation),
}

impl Annotation {
    /// Column the annotation sits at. Columns past the end of the line place
    /// it behind the text as if the line were padded with spaces.
    pub fn column(&self) -> usize {
        match self {
            Annotation::Text(note) => note.column(),
            Annotation::ByteGrid(grid) => grid.column(),
        }
    }

    pub fn width(&self, line_height: f64, metrics: &dyn FontMetrics) -> f64 {
        match self {
            Annotation::Text(note) => note.width(line_height, metrics),
            Annotation::ByteGrid(grid) => grid.width(line_height, metrics),
        }
    }

    pub fn paint<S: DrawSurface>(
        &self,
        line_height: f64,
        metrics: &dyn FontMetrics,
        font: &S::Font,
        surface: &mut S,
    ) {
        match self {
            Annotation::Text(note) => note.paint(line_height, metrics, font, surface),
            Annotation::ByteGrid(grid) => grid.paint(line_height, metrics, font, surface),
        }
    }

    pub fn as_text(&self) -> Option<&TextAnnotation> {
        match self {
            Annotation::Text(note) => Some(note),
            Annotation::ByteGrid(_) => None,
        }
    }

    pub fn as_byte_grid(&self) -> Option<&ByteGridAnnotation> {
        match self {
            Annotation::ByteGrid(grid) => Some(grid),
            Annotation::Text(_) => None,
        }
    }
}

impl From<TextAnnotation> for Annotation {
    fn from(note: TextAnnotation) -> Self {
        Annotation::Text(note)
    }
}

impl From<ByteGridAnnotation> for Annotation {
    fn from(grid: ByteGridAnnotation) -> Self {
        Annotation::ByteGrid(grid)
    }
}
