//! High-level IR (HIR): the semantic model consumed by the annotation rules.
//!
//! The analysis that builds this model runs elsewhere (typically in the
//! background). The engine only reads it, always under a read lock held for
//! a whole rebuild.
//!
//! ## Key Types
//!
//! - [`SemanticModel`]: Arena of contexts and declarations for one file
//! - [`Context`]: A scope with local declarations, uses and child contexts
//! - [`Declaration`]: A named entity (variable, field, enumerator, function)
//! - [`Use`]: A reference to a resolved declaration
//! - [`SharedSemanticModel`]: The model behind a `parking_lot` lock
//!
//! ## Shape
//!
//! ```text
//! Global
//!   ├── Enum      { RED, GREEN = 5 }
//!   ├── Class     { fields with FieldLayout }
//!   └── Function  (argument context: parameters)
//!         └── Other (body: locals, uses)
//! ```

mod model;

use std::sync::Arc;

use parking_lot::RwLock;

pub use model::{
    Context, ContextId, ContextKind, DeclId, Declaration, DeclarationKind, FieldLayout,
    FunctionInfo, SemanticModel, Use,
};

/// A semantic model shared with the analysis that keeps it up to date.
pub type SharedSemanticModel = Arc<RwLock<SemanticModel>>;

/// Wrap a model so it can be shared with a background analysis.
pub fn share(model: SemanticModel) -> SharedSemanticModel {
    Arc::new(RwLock::new(model))
}
