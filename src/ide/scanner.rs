//! Call-site argument scanner.
//!
//! Finds where each argument of a call starts by tracking bracket depth over
//! the raw text following the callee. This is not a parser: string and
//! character literals, comments and macros are not recognized, so brackets
//! or commas inside them misdirect the scan. The result then has missing or
//! misplaced boundaries, never a panic.

use crate::base::Position;

/// Argument boundaries found in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallScan {
    /// First character of each argument, in argument order
    pub boundaries: Vec<Position>,
    /// Position of the call's closing parenthesis, if the scan reached it
    pub close: Option<Position>,
}

impl CallScan {
    pub fn argument_count(&self) -> usize {
        self.boundaries.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Boundary(Position),
    End(Position),
}

/// Bracket-depth state machine over the characters of a call.
#[derive(Debug, Clone)]
struct ArgumentScanner {
    /// -1 before the opening parenthesis, 0 inside the argument list
    stack_depth: i32,
    argument_index: usize,
    argument_pending: bool,
    cursor: Position,
}

impl ArgumentScanner {
    fn new(cursor: Position) -> Self {
        Self {
            stack_depth: -1,
            argument_index: 0,
            argument_pending: false,
            cursor,
        }
    }

    fn feed(&mut self, c: char) -> Step {
        match c {
            '(' | '{' | '[' => self.stack_depth += 1,
            ')' | '}' | ']' => self.stack_depth -= 1,
            _ => {}
        }

        if c == ')' && self.stack_depth == -1 {
            return Step::End(self.cursor);
        }

        let mut step = Step::Continue;
        if self.argument_pending && !c.is_whitespace() {
            step = Step::Boundary(self.cursor);
            self.argument_index += 1;
            self.argument_pending = false;
        }

        if self.stack_depth == 0 && (c == '(' || c == ',') {
            self.argument_pending = true;
        }

        self.cursor.advance(c);
        step
    }
}

/// Scan the text that follows a callee for up to `parameter_count` arguments.
///
/// `text` must start right after the callee, at `start`. Leading whitespace
/// is skipped; if the next character is not `(` the use is not a call (a
/// function reference, say) and `None` is returned.
///
/// The scan stops at the closing parenthesis, at the end of `text`, or once
/// `parameter_count` boundaries have been found.
pub fn scan_call(text: &str, start: Position, parameter_count: usize) -> Option<CallScan> {
    let mut cursor = start;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next_if(|c| c.is_whitespace()) {
        cursor.advance(c);
    }
    if chars.peek() != Some(&'(') {
        return None;
    }

    let mut scanner = ArgumentScanner::new(cursor);
    let mut scan = CallScan::default();
    for c in chars {
        if scanner.argument_index >= parameter_count {
            break;
        }
        match scanner.feed(c) {
            Step::Continue => {}
            Step::Boundary(position) => scan.boundaries.push(position),
            Step::End(position) => {
                scan.close = Some(position);
                break;
            }
        }
    }
    Some(scan)
}
