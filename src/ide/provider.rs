//! InlineNoteProvider: per-document annotation state for a host editor.
//!
//! The provider owns the annotation store of one document. It rebuilds it
//! from the shared semantic model whenever the model is updated or the
//! config changes, and answers the host's per-line queries in between.
//!
//! ## Usage
//!
//! ```ignore
//! let config = Arc::new(RwLock::new(SourceInfoConfig::default()));
//! let mut provider = InlineNoteProvider::new(config, model.clone());
//! provider.subscribe(|event| view.invalidate_inline_notes(event.generation));
//!
//! // after every reparse
//! provider.semantic_update(&document_text);
//!
//! // while rendering line 12
//! for column in provider.inline_notes(12) {
//!     let position = Position::new(12, column);
//!     let (w, h) = provider.note_size(position, line_height, &metrics)?;
//!     provider.paint_note(position, line_height, &metrics, &font, &mut painter)?;
//! }
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::base::{Position, TextWindow};
use crate::hir::SharedSemanticModel;
use crate::render::{Annotation, DrawSurface, FontMetrics};

use super::rules::collect_annotations;
use super::{AnnotationStore, SourceInfoConfig, SourceInfoError, SourceInfoResult};

/// Sent to subscribers after every rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesReset {
    /// Generation of the store after the rebuild
    pub generation: u64,
    pub annotation_count: usize,
}

type ResetListener = Box<dyn Fn(&NotesReset) + Send + Sync>;

/// Owns the annotations of one document.
pub struct InlineNoteProvider {
    /// Shared between all documents of a session
    config: Arc<RwLock<SourceInfoConfig>>,
    model: SharedSemanticModel,
    store: AnnotationStore,
    listeners: Vec<ResetListener>,
}

impl std::fmt::Debug for InlineNoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineNoteProvider")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl InlineNoteProvider {
    /// Create a provider with an empty store. Call
    /// [`semantic_update`](Self::semantic_update) once the text is available.
    pub fn new(config: Arc<RwLock<SourceInfoConfig>>, model: SharedSemanticModel) -> Self {
        Self {
            config,
            model,
            store: AnnotationStore::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener for [`NotesReset`] notifications.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&NotesReset) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Discard all annotations and regenerate them from the current model.
    ///
    /// The model's read lock is held for the whole traversal, so a
    /// concurrent re-analysis cannot change the tree mid-walk. The new
    /// generation replaces the old one in a single step.
    pub fn rebuild(&mut self, text: &dyn TextWindow) {
        let config = self.config.read().clone();
        let annotations = {
            let model = self.model.read();
            collect_annotations(&model, text, &config)
        };
        self.store.replace(annotations);

        let event = NotesReset {
            generation: self.store.generation(),
            annotation_count: self.store.len(),
        };
        debug!(
            "rebuilt inline notes: generation {}, {} annotations",
            event.generation, event.annotation_count
        );
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// The semantic model was updated by the analysis.
    pub fn semantic_update(&mut self, text: &dyn TextWindow) {
        self.rebuild(text);
    }

    /// The shared config was changed by someone else.
    pub fn config_changed(&mut self, text: &dyn TextWindow) {
        self.rebuild(text);
    }

    /// Validate and store a new config, then rebuild.
    ///
    /// An invalid config is rejected and the previous one stays in effect.
    pub fn set_config(
        &mut self,
        config: SourceInfoConfig,
        text: &dyn TextWindow,
    ) -> SourceInfoResult<()> {
        if let Err(err) = config.validate() {
            warn!("rejected source-info config: {err}");
            return Err(err);
        }
        *self.config.write() = config;
        self.rebuild(text);
        Ok(())
    }

    /// Apply `change` to a copy of the current config and install it.
    pub fn update_config(
        &mut self,
        text: &dyn TextWindow,
        change: impl FnOnce(&mut SourceInfoConfig),
    ) -> SourceInfoResult<()> {
        let mut config = self.config.read().clone();
        change(&mut config);
        self.set_config(config, text)
    }

    /// Columns on `line` that carry annotations, ascending.
    pub fn inline_notes(&self, line: usize) -> Vec<usize> {
        self.store.columns_on_line(line)
    }

    /// Size of everything at `position`, laid out left to right.
    pub fn note_size(
        &self,
        position: Position,
        line_height: f64,
        metrics: &dyn FontMetrics,
    ) -> SourceInfoResult<(f64, f64)> {
        let mut found = false;
        let mut width = 0.0;
        for annotation in self.store.lookup(position) {
            found = true;
            width += annotation.width(line_height, metrics);
        }
        if !found {
            return Err(SourceInfoError::no_annotation(position));
        }
        Ok((width, line_height))
    }

    /// Paint everything at `position`, left to right, starting at the
    /// surface's current origin. The surface translation is restored before
    /// returning.
    pub fn paint_note<S: DrawSurface>(
        &self,
        position: Position,
        line_height: f64,
        metrics: &dyn FontMetrics,
        font: &S::Font,
        surface: &mut S,
    ) -> SourceInfoResult<()> {
        let mut offset = 0.0;
        let mut found = false;
        for annotation in self.store.lookup(position) {
            found = true;
            annotation.paint(line_height, metrics, font, surface);
            let width = annotation.width(line_height, metrics);
            surface.translate(width, 0.0);
            offset += width;
        }
        surface.translate(-offset, 0.0);
        if !found {
            return Err(SourceInfoError::no_annotation(position));
        }
        Ok(())
    }

    /// Annotations at `position`, borrowed until the next rebuild.
    pub fn annotations_at(&self, position: Position) -> impl Iterator<Item = &Annotation> + '_ {
        self.store.lookup(position)
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn config(&self) -> SourceInfoConfig {
        self.config.read().clone()
    }
}
