//! In-memory record tree: elements, sections, fields.
//!
//! The tree holds no schema knowledge. Iteration order everywhere is the
//! order the parser encountered things in, which is also the order the
//! writer emits them in. Nothing here sorts.

use std::fmt;
use std::str::FromStr;

/// Kind of a top-level element.
///
/// The set is closed: memory files carry `mem`, `ifx` and `tfx`; system
/// files carry `sys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Memory settings (name, tracks, master, assigns, ...).
    Mem,
    /// Input effect chain.
    Ifx,
    /// Track effect chain.
    Tfx,
    /// System settings.
    Sys,
}

impl ElementKind {
    /// All element kinds, in the order they appear in device files.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Mem,
        ElementKind::Ifx,
        ElementKind::Tfx,
        ElementKind::Sys,
    ];

    /// The tag keyword used in the file (`"mem"`, `"ifx"`, ...).
    pub const fn keyword(self) -> &'static str {
        match self {
            ElementKind::Mem => "mem",
            ElementKind::Ifx => "ifx",
            ElementKind::Tfx => "tfx",
            ElementKind::Sys => "sys",
        }
    }

    /// Look up a kind by its keyword. Case-sensitive, like the file format.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == keyword)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| format!("unknown element kind: {s}"))
    }
}

/// A single positional value: `<tag>value</tag>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Positional identifier (`"A"`, `"0"`, `"#"`, ...).
    pub tag: String,
    /// Stored value.
    pub value: i64,
}

impl Field {
    /// Create a field.
    pub fn new(tag: impl Into<String>, value: i64) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }
}

/// A named group of fields inside an element.
///
/// Tags are unique within a section. Field order is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    name: String,
    fields: Vec<Field>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Assemble a section from fields already known to carry unique tags.
    pub(crate) fn from_fields(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_field(mut self, tag: impl Into<String>, value: i64) -> Self {
        self.insert(tag, value);
        self
    }

    /// Section name (`"TRACK1"`, `"AA_DELAY"`, ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value stored under `tag`.
    pub fn get(&self, tag: &str) -> Option<i64> {
        self.fields.iter().find(|f| f.tag == tag).map(|f| f.value)
    }

    /// Overwrite the value of an existing tag in place.
    ///
    /// Returns the previous value, or `None` (and changes nothing) when the
    /// tag is not present. Position of the field is never affected.
    pub fn set(&mut self, tag: &str, value: i64) -> Option<i64> {
        let field = self.fields.iter_mut().find(|f| f.tag == tag)?;
        Some(std::mem::replace(&mut field.value, value))
    }

    /// Overwrite `tag` if present, otherwise append it at the end.
    ///
    /// Returns the previous value if there was one.
    pub fn insert(&mut self, tag: impl Into<String>, value: i64) -> Option<i64> {
        let tag = tag.into();
        if let Some(old) = self.set(&tag, value) {
            return Some(old);
        }
        self.fields.push(Field { tag, value });
        None
    }

    /// Whether `tag` is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.fields.iter().any(|f| f.tag == tag)
    }

    /// Fields in file order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Tags in file order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.tag.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the section has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A top-level element holding sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element kind.
    pub kind: ElementKind,
    /// Numeric `id` attribute (absent for `sys`).
    pub id: Option<u32>,
    sections: Vec<Section>,
}

impl Element {
    /// Create an empty element.
    pub fn new(kind: ElementKind, id: Option<u32>) -> Self {
        Self {
            kind,
            id,
            sections: Vec::new(),
        }
    }

    /// Element from sections already known to have distinct names.
    pub(crate) fn from_sections(kind: ElementKind, id: Option<u32>, sections: Vec<Section>) -> Self {
        Self { kind, id, sections }
    }

    /// Builder form of [`insert_section`](Self::insert_section).
    pub fn with_section(mut self, section: Section) -> Self {
        self.insert_section(section);
        self
    }

    /// Insert a section, replacing (in place) any existing one of the same name.
    ///
    /// Returns the replaced section if there was one.
    pub fn insert_section(&mut self, section: Section) -> Option<Section> {
        match self.sections.iter_mut().find(|s| s.name == section.name) {
            Some(existing) => Some(std::mem::replace(existing, section)),
            None => {
                self.sections.push(section);
                None
            }
        }
    }

    /// Section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Mutable section by name.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Whether a section of this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }

    /// Sections in file order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Mutable sections in file order.
    ///
    /// Values may be changed freely; names are not exposed mutably so the
    /// uniqueness invariant holds.
    pub fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    /// Section names in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }
}

/// One parsed RC0 file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTree {
    /// Device name from the `<database>` header (e.g. `"RC-505MK2"`).
    pub device_name: String,
    /// Revision from the `<database>` header.
    pub revision: u32,
    /// Top-level elements in file order.
    pub elements: Vec<Element>,
    /// Save counter from the `<count>` footer (0 when absent).
    pub count: u32,
}

impl RecordTree {
    /// Create an empty tree.
    pub fn new(device_name: impl Into<String>, revision: u32) -> Self {
        Self {
            device_name: device_name.into(),
            revision,
            elements: Vec::new(),
            count: 0,
        }
    }

    /// Builder: append an element.
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// First element of the given kind.
    pub fn element(&self, kind: ElementKind) -> Option<&Element> {
        self.elements.iter().find(|e| e.kind == kind)
    }

    /// First element of the given kind, mutably.
    pub fn element_mut(&mut self, kind: ElementKind) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.kind == kind)
    }

    /// The `<mem>` element.
    pub fn mem(&self) -> Option<&Element> {
        self.element(ElementKind::Mem)
    }

    /// The `<ifx>` element.
    pub fn ifx(&self) -> Option<&Element> {
        self.element(ElementKind::Ifx)
    }

    /// The `<tfx>` element.
    pub fn tfx(&self) -> Option<&Element> {
        self.element(ElementKind::Tfx)
    }

    /// The `<sys>` element.
    pub fn sys(&self) -> Option<&Element> {
        self.element(ElementKind::Sys)
    }

    /// The `<mem>` element, mutably.
    pub fn mem_mut(&mut self) -> Option<&mut Element> {
        self.element_mut(ElementKind::Mem)
    }

    /// The `<ifx>` element, mutably.
    pub fn ifx_mut(&mut self) -> Option<&mut Element> {
        self.element_mut(ElementKind::Ifx)
    }

    /// The `<tfx>` element, mutably.
    pub fn tfx_mut(&mut self) -> Option<&mut Element> {
        self.element_mut(ElementKind::Tfx)
    }

    /// The `<sys>` element, mutably.
    pub fn sys_mut(&mut self) -> Option<&mut Element> {
        self.element_mut(ElementKind::Sys)
    }

    /// 0-based memory id taken from the `<mem id="..">` attribute.
    pub fn memory_id(&self) -> Option<u32> {
        self.mem().and_then(|m| m.id)
    }

    /// Total number of sections across all elements.
    pub fn section_count(&self) -> usize {
        self.elements.iter().map(|e| e.sections.len()).sum()
    }
}
