//! Assertion helpers for annotation stores and providers.

use std::sync::Arc;

use parking_lot::RwLock;
use sourceinfo::hir::share;
use sourceinfo::render::{DisplayList, FontMetrics};
use sourceinfo::{Annotation, AnnotationStore, InlineNoteProvider, Position, SourceInfoConfig};

use super::source_fixtures::Fixture;

/// `(line, column, text)` of every text annotation, in store order.
pub fn text_notes(store: &AnnotationStore) -> Vec<(usize, usize, String)> {
    store
        .iter()
        .filter_map(|(pos, a)| {
            a.as_text()
                .map(|t| (pos.line, pos.column, t.text().to_string()))
        })
        .collect()
}

/// `(line, column, size, padding)` of every byte grid, in store order.
pub fn grid_notes(store: &AnnotationStore) -> Vec<(usize, usize, u64, u64)> {
    store
        .iter()
        .filter_map(|(pos, a)| {
            a.as_byte_grid()
                .map(|g| (pos.line, pos.column, g.size(), g.padding()))
        })
        .collect()
}

/// Owned copy of the store contents, for comparing two rebuilds.
pub fn snapshot(store: &AnnotationStore) -> Vec<(Position, Annotation)> {
    store.iter().map(|(pos, a)| (pos, a.clone())).collect()
}

/// A provider over `fixture` with `config`, already rebuilt once.
pub fn provider_for(fixture: &Fixture, config: SourceInfoConfig) -> InlineNoteProvider {
    let mut provider = InlineNoteProvider::new(
        Arc::new(RwLock::new(config)),
        share(fixture.model.clone()),
    );
    provider.semantic_update(&fixture.text);
    provider
}

/// Paint `annotation` alone and check it stays inside its reported width.
pub fn assert_paints_within_width(
    annotation: &Annotation,
    line_height: f64,
    metrics: &dyn FontMetrics,
) {
    let width = annotation.width(line_height, metrics);
    let mut list = DisplayList::new();
    annotation.paint(line_height, metrics, &(), &mut list);

    assert!(!list.is_empty(), "{annotation:?} painted nothing");
    let left = list.left_edge(metrics).unwrap_or_default();
    let right = list.right_edge(metrics).unwrap_or_default();
    assert!(left >= 0.0, "{annotation:?} paints left of its slot ({left})");
    assert!(
        right <= width + 1e-9,
        "{annotation:?} paints {right} but reports width {width}"
    );
}
