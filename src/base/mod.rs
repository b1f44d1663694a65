//! Foundation types for the source-info engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/column positions (0-indexed, character columns)
//! - [`TextWindow`] - Bounded read access to the host's text buffer
//! - [`SourceText`] - In-memory [`TextWindow`] over a string
//!
//! This module has NO dependencies on other sourceinfo modules.

mod position;
mod text;

pub use position::{Position, Span};
pub use text::{SourceText, TextWindow};
