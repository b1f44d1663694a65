//! Byte-grid annotations showing the size and trailing padding of a field.
//!
//! Each byte is a square cell one line-height wide: filled for bytes the
//! field occupies, empty for padding up to the next field. A half-cell gap
//! is left after every `byte_grouping`-th byte of the record so that words
//! line up visually across fields.
//!
//! Runs longer than [`MAX_CELLS`] are collapsed into three overlapping sample
//! cells followed by a `×N` label.
//!
//! Measuring and painting both go through [`ByteGridAnnotation::layout`].

use super::{Color, DrawSurface, FontMetrics, Rect};

/// Longest run that is drawn cell by cell.
pub const MAX_CELLS: u64 = 16;

const BORDER: Color = Color::BLACK;
const EMPTY_FILL: Color = Color::WHITE;
const FILLED_FILL: Color = Color::FIELD_FILL;

/// Offsets of the three sample cells of a collapsed run.
const SAMPLE_OFFSETS: [f64; 3] = [1.0, 4.0, 7.0];
/// Extra advance after the sample cells, before the label.
const COLLAPSED_LABEL_GAP: f64 = 10.0;

/// One positioned element of a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridItem {
    Cell {
        x: f64,
        filled: bool,
    },
    Collapsed {
        x: f64,
        count: u64,
        filled: bool,
        label_x: f64,
        label: String,
    },
}

/// Result of laying out a grid for a given line height and font.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub items: Vec<GridItem>,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteGridAnnotation {
    column: usize,
    size: u64,
    padding: u64,
    offset_in_parent: u64,
    byte_grouping: u16,
}

impl ByteGridAnnotation {
    /// A grid for a field of `size` bytes at byte `offset_in_parent`.
    ///
    /// `byte_grouping == 0` disables the grouping gaps.
    pub fn new(
        column: usize,
        size: u64,
        padding: u64,
        offset_in_parent: u64,
        byte_grouping: u16,
    ) -> Self {
        Self {
            column,
            size,
            padding,
            offset_in_parent,
            byte_grouping,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn set_column(&mut self, column: usize) {
        self.column = column;
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn padding(&self) -> u64 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: u64) {
        self.padding = padding;
    }

    pub fn offset_in_parent(&self) -> u64 {
        self.offset_in_parent
    }

    pub fn byte_grouping(&self) -> u16 {
        self.byte_grouping
    }

    pub fn layout(&self, line_height: f64, metrics: &dyn FontMetrics) -> GridLayout {
        let mut items = Vec::new();
        let mut x = 0.0;
        let mut byte_counter = 0u64;

        let mut place_run = |amount: u64, filled: bool, x: &mut f64, items: &mut Vec<GridItem>| {
            if amount > MAX_CELLS {
                let label = format!("×{amount}");
                let label_x = *x + line_height + COLLAPSED_LABEL_GAP;
                items.push(GridItem::Collapsed {
                    x: *x,
                    count: amount,
                    filled,
                    label_x,
                    label: label.clone(),
                });
                *x = label_x + metrics.text_width(&label);
                byte_counter += amount;
                return;
            }
            for _ in 0..amount {
                items.push(GridItem::Cell { x: *x, filled });
                *x += line_height;
                let grouping = u64::from(self.byte_grouping);
                if grouping != 0 && (self.offset_in_parent + byte_counter + 1) % grouping == 0 {
                    *x += line_height / 2.0;
                }
                byte_counter += 1;
            }
        };

        place_run(self.size, true, &mut x, &mut items);
        place_run(self.padding, false, &mut x, &mut items);

        GridLayout { items, width: x }
    }

    pub fn width(&self, line_height: f64, metrics: &dyn FontMetrics) -> f64 {
        self.layout(line_height, metrics).width
    }

    pub fn paint<S: DrawSurface>(
        &self,
        line_height: f64,
        metrics: &dyn FontMetrics,
        font: &S::Font,
        surface: &mut S,
    ) {
        let side = (line_height - 3.0).max(0.0);
        surface.set_pen(Some(BORDER));
        surface.set_font(font);

        for item in self.layout(line_height, metrics).items {
            match item {
                GridItem::Cell { x, filled } => {
                    surface.set_brush(Some(fill(filled)));
                    surface.draw_rect(Rect::new(x + 1.0, 1.0, side, side));
                }
                GridItem::Collapsed {
                    x,
                    filled,
                    label_x,
                    label,
                    ..
                } => {
                    surface.set_brush(Some(fill(filled)));
                    for offset in SAMPLE_OFFSETS {
                        surface.draw_rect(Rect::new(x + offset, 1.0, side, side));
                    }
                    surface.draw_text(label_x, line_height - 3.0, &label);
                }
            }
        }
    }
}

fn fill(filled: bool) -> Color {
    if filled { FILLED_FILL } else { EMPTY_FILL }
}
