//! Text window access for the rules that peek at raw source.
//!
//! The host owns the character buffer. Rules only ever ask for small,
//! bounded windows of it through [`TextWindow`].

use super::{Position, Span};

/// Read-only access to a range of the host's text buffer.
///
/// Implementations clamp the range to the buffer: columns past the end of a
/// line and lines past the end of the document yield no characters. Lines
/// inside a multi-line range are joined with `\n`.
pub trait TextWindow {
    fn text_in_range(&self, span: Span) -> String;
}

impl<T: TextWindow + ?Sized> TextWindow for &T {
    fn text_in_range(&self, span: Span) -> String {
        (**self).text_in_range(span)
    }
}

/// An in-memory document split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Position of the `nth` (0-based) occurrence of `needle`, in characters.
    ///
    /// Handy for hosts and tests that need to address a token by its text.
    pub fn find(&self, needle: &str, nth: usize) -> Option<Position> {
        let mut seen = 0;
        for (line_no, line) in self.lines.iter().enumerate() {
            for (byte_idx, _) in line.match_indices(needle) {
                if seen == nth {
                    return Some(Position::new(line_no, line[..byte_idx].chars().count()));
                }
                seen += 1;
            }
        }
        None
    }
}

impl TextWindow for SourceText {
    fn text_in_range(&self, span: Span) -> String {
        let Span { start, end } = span;
        if end < start || start.line >= self.lines.len() {
            return String::new();
        }

        let last_line = end.line.min(self.lines.len() - 1);
        let mut out = String::new();
        for line_no in start.line..=last_line {
            let line = &self.lines[line_no];
            let from = if line_no == start.line { start.column } else { 0 };
            let chars = line.chars().skip(from);
            if line_no == end.line {
                out.extend(chars.take(end.column.saturating_sub(from)));
            } else {
                out.extend(chars);
                if line_no < last_line {
                    out.push('\n');
                }
            }
        }
        out
    }
}
