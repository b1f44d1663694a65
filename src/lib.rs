//! # sourceinfo-base
//!
//! Inline source annotations computed from a semantic model: inferred
//! types, call-site argument names, omitted default arguments, enum
//! constant values and record field layouts.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Rules, call-site scanner, annotation store, host provider
//!   ↓
//! render    → Annotation entities, width/paint contract
//!   ↓
//! hir       → Semantic model (contexts, declarations, uses)
//!   ↓
//! base      → Primitives (Position, Span, TextWindow)
//! ```

// ============================================================================
// MODULES (dependency order: base → hir → render → ide)
// ============================================================================

/// Foundation types: Position, Span, TextWindow
pub mod base;

/// High-level IR: the semantic model the rules read
pub mod hir;

/// Annotation entities and the render contract
pub mod render;

/// IDE features: annotation rules, store and provider
pub mod ide;

// Re-export foundation types
pub use base::{Position, SourceText, Span, TextWindow};
pub use ide::{AnnotationStore, InlineNoteProvider, SourceInfoConfig, SourceInfoError};
pub use render::Annotation;
