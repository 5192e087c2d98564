//! The labeling pass: attaching display labels to entity references.

use crate::expression::{Entity, Expression};
use rustc_hash::FxHashMap;

/// Entity identifier -> display label.
///
/// The lookup collaborator is expected to enforce one label per identifier;
/// if it supplies several, [`insert`](Self::insert) keeps the
/// lexicographically smallest so that the pass stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap(FxHashMap<String, String>);

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a label for `id`. On conflict the lexicographically smallest
    /// label wins; this is a defined tie-break, not an error.
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let label = label.into();
        self.0
            .entry(id.into())
            .and_modify(|existing| {
                if label < *existing {
                    *existing = label.clone();
                }
            })
            .or_insert(label);
    }

    /// Returns the label recorded for `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I: Into<String>, L: Into<String>> FromIterator<(I, L)> for LabelMap {
    fn from_iter<T: IntoIterator<Item = (I, L)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (id, label) in iter {
            map.insert(id, label);
        }
        map
    }
}

/// Attaches labels to every entity reference present in `labels`.
///
/// The attachment is never destructive: the machine identifier is retained
/// alongside the label, because the RDFa emitter needs both at once.
/// Unlabeled entities and everything else pass through unchanged.
pub fn apply_labeling(expr: &Expression, labels: &LabelMap) -> Expression {
    match expr {
        Expression::Entity(e) => match labels.get(e.id()) {
            Some(label) => Expression::Entity(Entity::with_label(e.id(), label)),
            None => expr.clone(),
        },
        Expression::Literal(_) => expr.clone(),
        Expression::Operator(tag, args) => Expression::Operator(
            *tag,
            args.iter().map(|arg| apply_labeling(arg, labels)).collect(),
        ),
    }
}
