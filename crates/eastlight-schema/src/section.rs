//! Section schemas: the field layout of one section type.

use crate::error::SchemaError;
use crate::field::FieldDef;

/// Field layout shared by every section of one type.
///
/// A type may govern several concrete sections (`TRACK` governs `TRACK1`
/// through `TRACK6`); those names are its instances. Effect schemas are
/// named by effect (`DELAY`) and have no instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSchema {
    section: String,
    instances: Vec<String>,
    fields: Vec<FieldDef>,
}

impl SectionSchema {
    /// Build a schema, rejecting repeated tags and names and empty ranges.
    pub fn new(
        section: impl Into<String>,
        instances: Vec<String>,
        fields: Vec<FieldDef>,
    ) -> Result<Self, SchemaError> {
        let section = section.into();
        for (i, field) in fields.iter().enumerate() {
            let earlier = &fields[..i];
            if earlier.iter().any(|f| f.tag == field.tag) {
                return Err(SchemaError::DuplicateTag {
                    section,
                    tag: field.tag.clone(),
                });
            }
            if earlier.iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateName {
                    section,
                    name: field.name.clone(),
                });
            }
            if let Some((min, max)) = field.range
                && min > max
            {
                return Err(SchemaError::InvalidRange {
                    section,
                    tag: field.tag.clone(),
                    min,
                    max,
                });
            }
        }
        Ok(Self {
            section,
            instances,
            fields,
        })
    }

    /// Type name (`"TRACK"`, `"DELAY"`).
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Concrete section names governed by this type.
    pub fn instances(&self) -> &[String] {
        &self.instances
    }

    /// Field definitions in tag order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Definition for a tag.
    pub fn field(&self, tag: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    /// Definition for a parameter name.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Parameter name for a tag.
    pub fn tag_to_name(&self, tag: &str) -> Option<&str> {
        self.field(tag).map(|f| f.name.as_str())
    }

    /// Tag for a parameter name.
    pub fn name_to_tag(&self, name: &str) -> Option<&str> {
        self.field_by_name(name).map(|f| f.tag.as_str())
    }

    /// Parameter names in tag order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema defines no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
