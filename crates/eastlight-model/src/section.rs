//! Resolved sections: a record section paired with its schema.

use std::sync::Arc;

use eastlight_rc0::{ElementKind, Section};
use eastlight_schema::{FieldDef, SectionSchema};

use crate::change::{FieldChange, History, SectionAt};
use crate::error::ModelError;
use crate::listener::{ListenerId, Listeners};

/// Binding state kept per section of the tree.
#[derive(Debug, Default)]
pub(crate) struct Slot {
    pub(crate) schema: Option<Arc<SectionSchema>>,
    pub(crate) listeners: Listeners,
}

/// Read-only view of one section.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSection<'a> {
    element: ElementKind,
    raw: &'a Section,
    schema: Option<&'a SectionSchema>,
}

impl<'a> ResolvedSection<'a> {
    pub(crate) fn new(element: ElementKind, raw: &'a Section, slot: &'a Slot) -> Self {
        Self {
            element,
            raw,
            schema: slot.schema.as_deref(),
        }
    }

    /// Section name.
    pub fn name(&self) -> &'a str {
        self.raw.name()
    }

    /// Kind of the element holding the section.
    pub fn element(&self) -> ElementKind {
        self.element
    }

    /// The resolved schema, if any.
    pub fn schema(&self) -> Option<&'a SectionSchema> {
        self.schema
    }

    /// The underlying record section.
    pub fn raw(&self) -> &'a Section {
        self.raw
    }

    /// Raw value by tag.
    pub fn get_by_tag(&self, tag: &str) -> Option<i64> {
        self.raw.get(tag)
    }

    /// Value by parameter name; `None` without a schema or such a name.
    pub fn get_by_name(&self, param: &str) -> Option<i64> {
        let tag = self.schema?.name_to_tag(param)?;
        self.raw.get(tag)
    }

    /// Field definition by parameter name.
    pub fn field(&self, param: &str) -> Option<&'a FieldDef> {
        self.schema?.field_by_name(param)
    }

    /// Display text for a named parameter's current value.
    pub fn format_by_name(&self, param: &str) -> Option<String> {
        let def = self.field(param)?;
        self.raw.get(&def.tag).map(|v| def.format_value(v))
    }

    /// Every field as `(name, value)` in tag order.
    ///
    /// Tags without a schema name are reported under the tag itself.
    pub fn as_named_map(&self) -> Vec<(&'a str, i64)> {
        self.raw
            .fields()
            .iter()
            .map(|f| {
                let name = self
                    .schema
                    .and_then(|s| s.tag_to_name(&f.tag))
                    .unwrap_or(&f.tag);
                (name, f.value)
            })
            .collect()
    }
}

/// Editable view of one section.
///
/// Every successful `set_*` records exactly one [`FieldChange`] in the
/// model's history and passes it to the section's listeners.
#[derive(Debug)]
pub struct ResolvedSectionMut<'a> {
    element: ElementKind,
    at: SectionAt,
    raw: &'a mut Section,
    slot: &'a mut Slot,
    history: &'a mut History,
}

impl<'a> ResolvedSectionMut<'a> {
    pub(crate) fn new(
        element: ElementKind,
        at: SectionAt,
        raw: &'a mut Section,
        slot: &'a mut Slot,
        history: &'a mut History,
    ) -> Self {
        Self {
            element,
            at,
            raw,
            slot,
            history,
        }
    }

    /// Read-only view of the same section.
    pub fn as_resolved(&self) -> ResolvedSection<'_> {
        ResolvedSection::new(self.element, self.raw, self.slot)
    }

    /// Section name.
    pub fn name(&self) -> &str {
        self.raw.name()
    }

    /// The resolved schema, if any.
    pub fn schema(&self) -> Option<&SectionSchema> {
        self.slot.schema.as_deref()
    }

    /// Raw value by tag.
    pub fn get_by_tag(&self, tag: &str) -> Option<i64> {
        self.raw.get(tag)
    }

    /// Value by parameter name.
    pub fn get_by_name(&self, param: &str) -> Option<i64> {
        self.as_resolved().get_by_name(param)
    }

    /// Every field as `(name, value)` in tag order.
    pub fn as_named_map(&self) -> Vec<(&str, i64)> {
        self.as_resolved().as_named_map()
    }

    /// Write a raw value by tag, bypassing schema checks.
    ///
    /// Fails if the section has no such tag; new fields are never added.
    pub fn set_by_tag(&mut self, tag: &str, value: i64) -> Result<FieldChange, ModelError> {
        let param = self
            .schema()
            .and_then(|s| s.tag_to_name(tag))
            .map(str::to_string);
        self.apply(tag, param, value)
    }

    /// Write a value by parameter name, enforcing read-only, computed and
    /// range.
    ///
    /// Enumerated parameters accept any code.
    pub fn set_by_name(&mut self, param: &str, value: i64) -> Result<FieldChange, ModelError> {
        let section = self.raw.name();
        let schema = self
            .slot
            .schema
            .as_deref()
            .ok_or_else(|| ModelError::NoSchema {
                section: section.to_string(),
            })?;
        let def = schema
            .field_by_name(param)
            .ok_or_else(|| ModelError::UnknownParameter {
                section: section.to_string(),
                param: param.to_string(),
            })?;
        if !def.is_writable() {
            let (section, param) = (section.to_string(), param.to_string());
            return Err(if def.read_only {
                ModelError::ReadOnly { section, param }
            } else {
                ModelError::Computed { section, param }
            });
        }
        if !def.accepts(value)
            && let Some((min, max)) = def.range
        {
            return Err(ModelError::OutOfRange {
                section: section.to_string(),
                param: param.to_string(),
                value,
                min,
                max,
            });
        }
        let tag = def.tag.clone();
        self.apply(&tag, Some(param.to_string()), value)
    }

    /// Register a listener for changes to this section.
    pub fn add_listener(&mut self, listener: impl FnMut(&FieldChange) + 'static) -> ListenerId {
        self.slot.listeners.add(Box::new(listener))
    }

    /// Remove a listener; returns whether it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.slot.listeners.remove(id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.slot.listeners.len()
    }

    fn apply(
        &mut self,
        tag: &str,
        param: Option<String>,
        value: i64,
    ) -> Result<FieldChange, ModelError> {
        let old_value = self.raw.set(tag, value).ok_or_else(|| ModelError::UnknownTag {
            section: self.raw.name().to_string(),
            tag: tag.to_string(),
        })?;
        let change = FieldChange {
            element: self.element,
            section: self.raw.name().to_string(),
            tag: tag.to_string(),
            param,
            old_value,
            new_value: value,
        };
        tracing::debug!(
            element = %change.element,
            section = %change.section,
            field = change.label(),
            old = old_value,
            new = value,
            "field changed"
        );
        self.history.record(self.at, change.clone());
        self.slot.listeners.notify(&change);
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eastlight_schema::FieldKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    const AT: SectionAt = SectionAt {
        element: 0,
        section: 0,
    };

    fn track_slot() -> Slot {
        let schema = SectionSchema::new(
            "TRACK",
            vec!["TRACK1".into()],
            vec![
                FieldDef::new("A", "reverse", FieldKind::Enum).with_choices([(0, "OFF"), (1, "ON")]),
                FieldDef::new("C", "pan", FieldKind::Int).with_range(0, 100),
                FieldDef::new("W", "has_audio", FieldKind::Bool)
                    .with_range(0, 1)
                    .read_only(),
                FieldDef::new("V", "loop_length", FieldKind::Int).computed(),
            ],
        )
        .unwrap();
        Slot {
            schema: Some(Arc::new(schema)),
            listeners: Listeners::default(),
        }
    }

    fn track() -> Section {
        Section::new("TRACK1")
            .with_field("A", 0)
            .with_field("C", 50)
            .with_field("W", 1)
            .with_field("V", 4800)
            .with_field("Z", 9)
    }

    #[test]
    fn named_and_tagged_reads_agree() {
        let raw = track();
        let slot = track_slot();
        let view = ResolvedSection::new(ElementKind::Mem, &raw, &slot);
        assert_eq!(view.get_by_name("pan"), Some(50));
        assert_eq!(view.get_by_tag("C"), Some(50));
        assert_eq!(view.get_by_name("tempo"), None);
        assert_eq!(view.format_by_name("reverse").as_deref(), Some("OFF"));
        assert_eq!(
            view.as_named_map(),
            [("reverse", 0), ("pan", 50), ("has_audio", 1), ("loop_length", 4800), ("Z", 9)]
        );
    }

    #[test]
    fn set_by_name_validates() {
        let mut raw = track();
        let mut slot = track_slot();
        let mut history = History::new(10);
        let mut section =
            ResolvedSectionMut::new(ElementKind::Mem, AT, &mut raw, &mut slot, &mut history);

        let change = section.set_by_name("pan", 100).unwrap();
        assert_eq!((change.old_value, change.new_value), (50, 100));
        assert_eq!(change.param.as_deref(), Some("pan"));

        assert!(matches!(
            section.set_by_name("pan", 101),
            Err(ModelError::OutOfRange { min: 0, max: 100, .. })
        ));
        assert!(matches!(
            section.set_by_name("has_audio", 0),
            Err(ModelError::ReadOnly { .. })
        ));
        assert!(matches!(
            section.set_by_name("loop_length", 9600),
            Err(ModelError::Computed { .. })
        ));
        assert!(matches!(
            section.set_by_name("volume", 0),
            Err(ModelError::UnknownParameter { .. })
        ));
        section.set_by_name("reverse", 7).unwrap();

        assert_eq!(section.get_by_tag("C"), Some(100));
        assert_eq!(section.get_by_tag("W"), Some(1));
        assert_eq!(section.get_by_tag("V"), Some(4800));
        assert_eq!(section.get_by_tag("A"), Some(7));
        drop(section);
        assert_eq!(history.undo_len(), 2);
    }

    #[test]
    fn set_by_tag_requires_existing_tag() {
        let mut raw = track();
        let mut slot = track_slot();
        let mut history = History::new(10);
        let mut section =
            ResolvedSectionMut::new(ElementKind::Mem, AT, &mut raw, &mut slot, &mut history);

        let change = section.set_by_tag("W", 0).unwrap();
        assert_eq!(change.param.as_deref(), Some("has_audio"));
        let change = section.set_by_tag("Z", 3).unwrap();
        assert_eq!(change.param, None);
        assert!(matches!(
            section.set_by_tag("Q", 1),
            Err(ModelError::UnknownTag { ref tag, .. }) if tag == "Q"
        ));
        drop(section);
        assert_eq!(raw.len(), 5);
    }

    #[test]
    fn schemaless_section() {
        let mut raw = Section::new("MYSTERY").with_field("A", 1);
        let mut slot = Slot::default();
        let mut history = History::new(10);
        let mut section =
            ResolvedSectionMut::new(ElementKind::Sys, AT, &mut raw, &mut slot, &mut history);

        assert_eq!(section.get_by_name("a"), None);
        assert!(matches!(
            section.set_by_name("a", 2),
            Err(ModelError::NoSchema { .. })
        ));
        section.set_by_tag("A", 2).unwrap();
        assert_eq!(section.as_named_map(), [("A", 2)]);
    }

    #[test]
    fn listeners_see_each_change() {
        let mut raw = track();
        let mut slot = track_slot();
        let mut history = History::new(10);
        let mut section =
            ResolvedSectionMut::new(ElementKind::Mem, AT, &mut raw, &mut slot, &mut history);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = section.add_listener(move |c| sink.borrow_mut().push(c.new_value));

        section.set_by_name("pan", 60).unwrap();
        let _ = section.set_by_name("pan", 500);
        section.set_by_tag("C", 70).unwrap();
        assert!(section.remove_listener(id));
        section.set_by_tag("C", 80).unwrap();

        assert_eq!(*seen.borrow(), [60, 70]);
        assert_eq!(section.listener_count(), 0);
    }
}
