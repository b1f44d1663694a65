//! Position-indexed storage for one generation of annotations.
//!
//! Several rules may target the same position (an argument-name tag and a
//! default-value note, for instance), so the store is a multimap: entries
//! are keyed by `(position, insertion sequence)` and nothing is ever
//! overwritten.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::base::Position;
use crate::render::Annotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct EntryKey {
    position: Position,
    seq: u64,
}

/// Ordered multimap from [`Position`] to [`Annotation`].
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    entries: BTreeMap<EntryKey, Annotation>,
    next_seq: u64,
    generation: u64,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every annotation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }

    /// Add an annotation; earlier annotations at `position` are kept.
    pub fn insert(&mut self, position: Position, annotation: Annotation) {
        let key = EntryKey {
            position,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.insert(key, annotation);
    }

    /// Replace the whole content with a new generation.
    pub fn replace(&mut self, annotations: impl IntoIterator<Item = (Position, Annotation)>) {
        self.clear();
        for (position, annotation) in annotations {
            self.insert(position, annotation);
        }
        self.generation += 1;
    }

    /// Distinct columns on `line` that hold annotations, ascending.
    pub fn columns_on_line(&self, line: usize) -> Vec<usize> {
        let mut columns: Vec<usize> = self
            .line_entries(line)
            .map(|(key, _)| key.position.column)
            .collect();
        columns.dedup();
        columns
    }

    /// All annotations at `position`, in insertion order.
    pub fn lookup(&self, position: Position) -> impl Iterator<Item = &Annotation> + '_ {
        let from = EntryKey { position, seq: 0 };
        let to = EntryKey {
            position,
            seq: u64::MAX,
        };
        self.entries.range(from..=to).map(|(_, annotation)| annotation)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.lookup(position).next().is_some()
    }

    /// Every annotation with its position, in position then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Annotation)> + '_ {
        self.entries.iter().map(|(key, annotation)| (key.position, annotation))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of completed rebuilds.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn line_entries(&self, line: usize) -> impl Iterator<Item = (&EntryKey, &Annotation)> + '_ {
        let from = EntryKey {
            position: Position::new(line, 0),
            seq: 0,
        };
        let to = match line.checked_add(1) {
            Some(next) => Bound::Excluded(EntryKey {
                position: Position::new(next, 0),
                seq: 0,
            }),
            None => Bound::Unbounded,
        };
        self.entries.range((Bound::Included(from), to))
    }
}
