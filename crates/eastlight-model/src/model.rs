//! The resolved model: a record tree bound to a schema registry.

use serde::Deserialize;
use std::sync::Arc;

use eastlight_rc0::{Element, ElementKind, RecordTree};
use eastlight_schema::SchemaRegistry;

use crate::change::{FieldChange, History, SectionAt};
use crate::section::{ResolvedSection, ResolvedSectionMut, Slot};

/// Default number of undoable changes kept.
pub const DEFAULT_UNDO_DEPTH: usize = 100;

/// Model configuration.
///
/// Deserializable so it can sit in an application's TOML config:
///
/// ```toml
/// undo_depth = 250
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelOptions {
    /// Maximum undo entries; the oldest are dropped past this.
    pub undo_depth: usize,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }
}

impl ModelOptions {
    /// Set the undo depth.
    pub fn with_undo_depth(mut self, undo_depth: usize) -> Self {
        self.undo_depth = undo_depth;
        self
    }
}

/// A record tree with every section bound to its schema.
///
/// The model owns the tree for the length of an edit session. Edits write
/// straight into it, so [`Model::tree`] can be handed to the writer at any
/// point and untouched data comes out unchanged.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use eastlight_model::Model;
/// use eastlight_rc0::{Element, ElementKind, RecordTree, Section};
/// use eastlight_schema::SchemaRegistry;
///
/// let tree = RecordTree::new("RC-505MK2", 0).with_element(
///     Element::new(ElementKind::Mem, Some(0))
///         .with_section(Section::new("TRACK1").with_field("C", 50)),
/// );
/// let registry = Arc::new(SchemaRegistry::builtin().unwrap());
/// let mut model = Model::new(tree, registry);
///
/// let mut track = model.track_mut(1).unwrap();
/// track.set_by_name("pan", 75).unwrap();
/// assert!(track.set_by_name("pan", 200).is_err());
/// assert_eq!(track.get_by_tag("C"), Some(75));
///
/// model.undo();
/// assert_eq!(model.track(1).unwrap().get_by_name("pan"), Some(50));
/// ```
#[derive(Debug)]
pub struct Model {
    tree: RecordTree,
    registry: Arc<SchemaRegistry>,
    slots: Vec<Vec<Slot>>,
    history: History,
}

impl Model {
    /// Bind a tree with default options.
    pub fn new(tree: RecordTree, registry: Arc<SchemaRegistry>) -> Self {
        Self::with_options(tree, registry, ModelOptions::default())
    }

    /// Bind a tree, resolving every section once.
    pub fn with_options(
        tree: RecordTree,
        registry: Arc<SchemaRegistry>,
        options: ModelOptions,
    ) -> Self {
        let mut unresolved = 0usize;
        let slots = tree
            .elements
            .iter()
            .map(|element| {
                element
                    .sections()
                    .iter()
                    .map(|section| {
                        let schema = registry.resolve(section.name()).cloned();
                        if schema.is_none() {
                            unresolved += 1;
                            tracing::debug!(
                                element = %element.kind,
                                section = section.name(),
                                "no schema for section"
                            );
                        }
                        Slot {
                            schema,
                            ..Slot::default()
                        }
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(
            sections = tree.section_count(),
            unresolved,
            undo_depth = options.undo_depth,
            "bound record to schemas"
        );

        Self {
            tree,
            registry,
            slots,
            history: History::new(options.undo_depth),
        }
    }

    /// The bound tree.
    pub fn tree(&self) -> &RecordTree {
        &self.tree
    }

    /// Release the tree, dropping bindings and history.
    pub fn into_tree(self) -> RecordTree {
        self.tree
    }

    /// The registry sections were resolved against.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Identifier of the memory element.
    pub fn memory_id(&self) -> Option<u32> {
        self.tree.memory_id()
    }

    /// First section with this name, in tree order.
    pub fn section(&self, name: &str) -> Option<ResolvedSection<'_>> {
        let at = self.find(None, name)?;
        Some(self.view(at))
    }

    /// Mutable access to the first section with this name.
    pub fn section_mut(&mut self, name: &str) -> Option<ResolvedSectionMut<'_>> {
        let at = self.find(None, name)?;
        Some(self.view_mut(at))
    }

    /// Section by name within the first element of `kind`.
    ///
    /// Needed for names that repeat across elements, such as `SETUP` in
    /// both effect chains.
    pub fn section_in(&self, kind: ElementKind, name: &str) -> Option<ResolvedSection<'_>> {
        let at = self.find(Some(kind), name)?;
        Some(self.view(at))
    }

    /// Mutable section by name within the first element of `kind`.
    pub fn section_in_mut(
        &mut self,
        kind: ElementKind,
        name: &str,
    ) -> Option<ResolvedSectionMut<'_>> {
        let at = self.find(Some(kind), name)?;
        Some(self.view_mut(at))
    }

    /// Track section `TRACK<n>`.
    pub fn track(&self, n: u8) -> Option<ResolvedSection<'_>> {
        self.section(&format!("TRACK{n}"))
    }

    /// Mutable track section `TRACK<n>`.
    pub fn track_mut(&mut self, n: u8) -> Option<ResolvedSectionMut<'_>> {
        self.section_mut(&format!("TRACK{n}"))
    }

    /// All sections in tree order.
    pub fn sections(&self) -> impl Iterator<Item = ResolvedSection<'_>> {
        self.tree
            .elements
            .iter()
            .zip(&self.slots)
            .flat_map(|(element, slots)| {
                element
                    .sections()
                    .iter()
                    .zip(slots)
                    .map(move |(raw, slot)| ResolvedSection::new(element.kind, raw, slot))
            })
    }

    /// All section names in tree order. Names may repeat across elements.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections().map(|s| s.name()).collect()
    }

    /// Names of sections with no schema, in tree order.
    pub fn unresolved_sections(&self) -> Vec<&str> {
        self.sections()
            .filter(|s| s.schema().is_none())
            .map(|s| s.name())
            .collect()
    }

    /// Revert the most recent change by applying its inverse.
    ///
    /// Listeners are not notified. Returns the reverted change, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<FieldChange> {
        let entry = self.history.take_undo()?;
        self.restore(entry.at, &entry.change.inverse());
        tracing::debug!(
            section = %entry.change.section,
            field = entry.change.label(),
            value = entry.change.old_value,
            "undo"
        );
        Some(entry.change)
    }

    /// Reapply the most recently undone change.
    pub fn redo(&mut self) -> Option<FieldChange> {
        let entry = self.history.take_redo()?;
        self.restore(entry.at, &entry.change);
        tracing::debug!(
            section = %entry.change.section,
            field = entry.change.label(),
            value = entry.change.new_value,
            "redo"
        );
        Some(entry.change)
    }

    /// Whether [`Model::undo`] has anything to revert.
    pub fn can_undo(&self) -> bool {
        self.history.undo_len() > 0
    }

    /// Whether [`Model::redo`] has anything to reapply.
    pub fn can_redo(&self) -> bool {
        self.history.redo_len() > 0
    }

    /// Forget all undo and redo entries.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn find(&self, kind: Option<ElementKind>, name: &str) -> Option<SectionAt> {
        let mut elements = self.tree.elements.iter().enumerate();
        let search = |(e, element): (usize, &Element)| {
            element
                .sections()
                .iter()
                .position(|s| s.name() == name)
                .map(|section| SectionAt {
                    element: e,
                    section,
                })
        };
        match kind {
            Some(kind) => elements.find(|(_, el)| el.kind == kind).and_then(search),
            None => elements.find_map(search),
        }
    }

    fn view(&self, at: SectionAt) -> ResolvedSection<'_> {
        let element = &self.tree.elements[at.element];
        ResolvedSection::new(
            element.kind,
            &element.sections()[at.section],
            &self.slots[at.element][at.section],
        )
    }

    fn view_mut(&mut self, at: SectionAt) -> ResolvedSectionMut<'_> {
        let element = &mut self.tree.elements[at.element];
        let kind = element.kind;
        ResolvedSectionMut::new(
            kind,
            at,
            &mut element.sections_mut()[at.section],
            &mut self.slots[at.element][at.section],
            &mut self.history,
        )
    }

    /// Write `change.new_value` back without recording or notifying.
    fn restore(&mut self, at: SectionAt, change: &FieldChange) {
        if let Some(section) = self
            .tree
            .elements
            .get_mut(at.element)
            .and_then(|e| e.sections_mut().get_mut(at.section))
        {
            section.set(&change.tag, change.new_value);
        }
    }
}
