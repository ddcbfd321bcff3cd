//! Change records and the linear undo/redo history.

use std::collections::VecDeque;

use eastlight_rc0::ElementKind;

/// One applied field mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Kind of the element holding the section.
    pub element: ElementKind,
    /// Section name.
    pub section: String,
    /// Field tag.
    pub tag: String,
    /// Parameter name, when the section has a schema naming the tag.
    pub param: Option<String>,
    /// Value before the change.
    pub old_value: i64,
    /// Value after the change.
    pub new_value: i64,
}

impl FieldChange {
    /// The parameter name if known, otherwise the tag.
    pub fn label(&self) -> &str {
        self.param.as_deref().unwrap_or(&self.tag)
    }

    /// The change that reverses this one.
    pub fn inverse(&self) -> FieldChange {
        FieldChange {
            old_value: self.new_value,
            new_value: self.old_value,
            ..self.clone()
        }
    }
}

/// Position of a section in the bound tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SectionAt {
    pub(crate) element: usize,
    pub(crate) section: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) at: SectionAt,
    pub(crate) change: FieldChange,
}

/// Bounded undo list plus redo list.
#[derive(Debug)]
pub(crate) struct History {
    undo: VecDeque<Entry>,
    redo: Vec<Entry>,
    depth: usize,
}

impl History {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(depth.min(256)),
            redo: Vec::new(),
            depth,
        }
    }

    /// Push a fresh change, discarding pending redo entries.
    pub(crate) fn record(&mut self, at: SectionAt, change: FieldChange) {
        self.redo.clear();
        self.undo.push_back(Entry { at, change });
        while self.undo.len() > self.depth {
            if let Some(evicted) = self.undo.pop_front() {
                tracing::trace!(
                    section = %evicted.change.section,
                    tag = %evicted.change.tag,
                    "evicted oldest undo entry"
                );
            }
        }
    }

    /// Move the newest undo entry to the redo list.
    pub(crate) fn take_undo(&mut self) -> Option<Entry> {
        let entry = self.undo.pop_back()?;
        self.redo.push(entry.clone());
        Some(entry)
    }

    /// Move the newest redo entry back to the undo list.
    pub(crate) fn take_redo(&mut self) -> Option<Entry> {
        let entry = self.redo.pop()?;
        self.undo.push_back(entry.clone());
        Some(entry)
    }

    pub(crate) fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub(crate) fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
