//! IDE features: inline source annotations for a host editor.
//!
//! This module turns the semantic model (HIR) into annotations and keeps
//! them queryable for the host's renderer.
//!
//! ## Design Principles
//!
//! 1. **Rebuild, don't patch**: every update regenerates the whole set
//! 2. **Absence is not an error**: missing data means no annotation
//! 3. **No host types**: the host adapts [`TextWindow`](crate::base::TextWindow),
//!    [`FontMetrics`](crate::render::FontMetrics) and
//!    [`DrawSurface`](crate::render::DrawSurface)
//!
//! ## Usage
//!
//! The recommended way to use this module is through `InlineNoteProvider`:
//!
//! ```ignore
//! use sourceinfo::ide::{InlineNoteProvider, SourceInfoConfig};
//!
//! let mut provider = InlineNoteProvider::new(config, model);
//! provider.semantic_update(&text);
//! let columns = provider.inline_notes(line);
//! ```

mod config;
mod error;
mod provider;
mod rules;
mod scanner;
mod store;

pub use config::SourceInfoConfig;
pub use error::{SourceInfoError, SourceInfoResult};
pub use provider::{InlineNoteProvider, NotesReset};
pub use rules::collect_annotations;
pub use scanner::{CallScan, scan_call};
pub use store::AnnotationStore;
