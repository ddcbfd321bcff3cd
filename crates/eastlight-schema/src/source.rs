//! Declarative TOML schema documents.
//!
//! # Section document
//!
//! ```toml
//! section = "TRACK"
//! instances = ["TRACK1", "TRACK2"]
//!
//! [[fields]]
//! tag = "A"
//! name = "reverse"
//! kind = "enum"
//! choices = { "0" = "OFF", "1" = "ON" }
//!
//! [[fields]]
//! tag = "C"
//! name = "pan"
//! display = "Pan"
//! range = [0, 100]
//! default = 50
//! ```
//!
//! Effect documents use the same shape; their `section` is the effect name.
//!
//! # Effect-type document
//!
//! ```toml
//! [ifx]
//! 0 = "LPF"
//! 35 = "DELAY"
//!
//! [tfx]
//! 66 = "BEAT_SCATTER"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::SchemaError;
use crate::field::{FieldDef, FieldKind};
use crate::fx::{FxChain, FxTypes};
use crate::section::SectionSchema;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionDoc {
    section: String,
    #[serde(default)]
    instances: Vec<String>,
    #[serde(default)]
    fields: Vec<FieldDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDoc {
    tag: String,
    name: String,
    #[serde(default)]
    kind: FieldKind,
    display: Option<String>,
    #[serde(default)]
    default: i64,
    range: Option<[i64; 2]>,
    choices: Option<BTreeMap<String, String>>,
    unit: Option<String>,
    #[serde(default)]
    computed: bool,
    #[serde(default)]
    read_only: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FxTypesDoc {
    #[serde(default)]
    ifx: BTreeMap<String, String>,
    #[serde(default)]
    tfx: BTreeMap<String, String>,
}

impl FieldDoc {
    fn into_def(self, section: &str) -> Result<FieldDef, SchemaError> {
        let choices = match self.choices {
            Some(raw) => Some(
                raw.into_iter()
                    .map(|(key, label)| match key.trim().parse::<i64>() {
                        Ok(code) => Ok((code, label)),
                        Err(_) => Err(SchemaError::InvalidChoiceKey {
                            section: section.to_string(),
                            tag: self.tag.clone(),
                            key,
                        }),
                    })
                    .collect::<Result<BTreeMap<_, _>, _>>()?,
            ),
            None => None,
        };

        Ok(FieldDef {
            display: self.display.unwrap_or_else(|| self.name.clone()),
            tag: self.tag,
            name: self.name,
            kind: self.kind,
            default: self.default,
            range: self.range.map(|[min, max]| (min, max)),
            choices,
            unit: self.unit.filter(|u| !u.is_empty()),
            computed: self.computed,
            read_only: self.read_only,
        })
    }
}

impl SectionSchema {
    /// Parse a section (or effect) document.
    ///
    /// `origin` names the document in errors.
    pub fn from_toml(text: &str, origin: &str) -> Result<Self, SchemaError> {
        let doc: SectionDoc =
            toml::from_str(text).map_err(|e| SchemaError::toml_parse(origin, e))?;
        let fields = doc
            .fields
            .into_iter()
            .map(|f| f.into_def(&doc.section))
            .collect::<Result<Vec<_>, _>>()?;
        SectionSchema::new(doc.section, doc.instances, fields)
    }

    /// Load a section (or effect) document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SchemaError::read_file(path, e))?;
        Self::from_toml(&text, &path.display().to_string())
    }
}

impl FxTypes {
    /// Parse an effect-type document.
    pub fn from_toml(text: &str, origin: &str) -> Result<Self, SchemaError> {
        let doc: FxTypesDoc =
            toml::from_str(text).map_err(|e| SchemaError::toml_parse(origin, e))?;
        let mut types = FxTypes::default();
        for (chain, raw) in [(FxChain::Input, doc.ifx), (FxChain::Track, doc.tfx)] {
            let table = types.table_mut(chain);
            for (key, name) in raw {
                let index = key
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|&i| i >= 0)
                    .ok_or_else(|| SchemaError::InvalidFxIndex {
                        chain,
                        key: key.clone(),
                    })?;
                if table.name(index).is_some() {
                    return Err(SchemaError::DuplicateFxIndex { chain, index });
                }
                table.insert(index, name);
            }
        }
        Ok(types)
    }

    /// Load an effect-type document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SchemaError::read_file(path, e))?;
        Self::from_toml(&text, &path.display().to_string())
    }
}
