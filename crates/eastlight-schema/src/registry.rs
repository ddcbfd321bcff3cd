//! Schema registry: section-name to schema resolution.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use crate::builtin;
use crate::error::SchemaError;
use crate::fx::{FxTypes, Subslot};
use crate::section::SectionSchema;

/// How a section name matched the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaMatch<'a> {
    /// The name is a registered section type.
    Type(&'a Arc<SectionSchema>),
    /// The name is a registered instance of a type.
    Instance(&'a Arc<SectionSchema>),
    /// The name is `<subslot>_<EFFECT>` with a registered effect.
    Effect {
        /// Subslot address from the prefix.
        subslot: Subslot,
        /// Effect name from the suffix, as written in the section name.
        effect: &'a str,
        /// The effect's schema.
        schema: &'a Arc<SectionSchema>,
    },
}

impl<'a> SchemaMatch<'a> {
    /// The matched schema.
    pub fn schema(&self) -> &'a Arc<SectionSchema> {
        match *self {
            SchemaMatch::Type(schema) | SchemaMatch::Instance(schema) => schema,
            SchemaMatch::Effect { schema, .. } => schema,
        }
    }
}

/// Catalogue of section and effect schemas.
///
/// Built once, then shared read-only (usually behind an `Arc`) by every
/// model bound to a record.
///
/// # Example
///
/// ```rust
/// use eastlight_schema::SchemaRegistry;
///
/// let registry = SchemaRegistry::builtin().unwrap();
/// let track = registry.resolve("TRACK3").unwrap();
/// assert_eq!(track.name_to_tag("pan"), Some("C"));
///
/// let delay = registry.resolve("BC_DELAY").unwrap();
/// assert_eq!(delay.section(), "DELAY");
/// assert!(registry.resolve("EE_DELAY").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: BTreeMap<String, Arc<SectionSchema>>,
    instances: HashMap<String, Arc<SectionSchema>>,
    fx_effects: BTreeMap<String, Arc<SectionSchema>>,
    fx_types: FxTypes,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalogue compiled into the crate.
    pub fn builtin() -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        for (origin, text) in builtin::SECTIONS {
            registry.register(SectionSchema::from_toml(text, origin)?);
        }
        for (origin, text) in builtin::EFFECTS {
            registry.register_fx_effect(SectionSchema::from_toml(text, origin)?);
        }
        let (origin, text) = builtin::FX_TYPES;
        registry.set_fx_types(FxTypes::from_toml(text, origin)?);
        registry.log_loaded("builtin");
        Ok(registry)
    }

    /// Load a catalogue laid out like the built-in one.
    ///
    /// Every `*.toml` in `dir` is a section document except
    /// `fx_types.toml`, which holds the effect-type tables; every `*.toml`
    /// in `dir/effects` is an effect document. Files load in name order.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let dir = dir.as_ref();
        let mut registry = Self::new();

        for path in toml_files(dir)? {
            if path.file_name().is_some_and(|n| n == "fx_types.toml") {
                registry.set_fx_types(FxTypes::load(&path)?);
            } else {
                registry.register(SectionSchema::load(&path)?);
            }
        }

        let effects = dir.join("effects");
        if effects.is_dir() {
            for path in toml_files(&effects)? {
                registry.register_fx_effect(SectionSchema::load(&path)?);
            }
        }

        registry.log_loaded(&dir.display().to_string());
        Ok(registry)
    }

    /// Register a section type and its instances.
    ///
    /// Replaces any earlier type or instance registered under the same names.
    pub fn register(&mut self, schema: SectionSchema) {
        let schema = Arc::new(schema);
        for instance in schema.instances() {
            self.instances.insert(instance.clone(), Arc::clone(&schema));
        }
        self.types.insert(schema.section().to_string(), schema);
    }

    /// Register an effect schema under its effect name (uppercased).
    pub fn register_fx_effect(&mut self, schema: SectionSchema) {
        let key = schema.section().to_ascii_uppercase();
        self.fx_effects.insert(key, Arc::new(schema));
    }

    /// Replace the effect-type tables.
    pub fn set_fx_types(&mut self, fx_types: FxTypes) {
        self.fx_types = fx_types;
    }

    /// Effect-type tables.
    pub fn fx_types(&self) -> &FxTypes {
        &self.fx_types
    }

    /// Resolve a concrete section name, reporting how it matched.
    ///
    /// Tries the type name, then the instance name, then
    /// `<subslot>_<EFFECT>` against the effect table.
    pub fn resolve_match<'a>(&'a self, name: &'a str) -> Option<SchemaMatch<'a>> {
        if let Some(schema) = self.types.get(name) {
            return Some(SchemaMatch::Type(schema));
        }
        if let Some(schema) = self.instances.get(name) {
            return Some(SchemaMatch::Instance(schema));
        }
        let (subslot, effect) = Subslot::split_effect_section(name)?;
        let schema = self.fx_effect(effect)?;
        Some(SchemaMatch::Effect {
            subslot,
            effect,
            schema,
        })
    }

    /// Resolve a concrete section name to its schema.
    pub fn resolve(&self, name: &str) -> Option<&Arc<SectionSchema>> {
        self.types
            .get(name)
            .or_else(|| self.instances.get(name))
            .or_else(|| {
                let (_, effect) = Subslot::split_effect_section(name)?;
                self.fx_effect(effect)
            })
    }

    /// Registered section type by its type name.
    pub fn section_type(&self, name: &str) -> Option<&Arc<SectionSchema>> {
        self.types.get(name)
    }

    /// Effect schema by effect name, compared case-insensitively.
    pub fn fx_effect(&self, effect: &str) -> Option<&Arc<SectionSchema>> {
        self.fx_effects.get(&effect.to_ascii_uppercase())
    }

    /// Registered section type names, sorted.
    pub fn section_types(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Registered effect names, sorted.
    pub fn fx_effect_names(&self) -> Vec<&str> {
        self.fx_effects.keys().map(String::as_str).collect()
    }

    fn log_loaded(&self, origin: &str) {
        tracing::debug!(
            origin,
            types = self.types.len(),
            instances = self.instances.len(),
            effects = self.fx_effects.len(),
            ifx = self.fx_types.ifx.len(),
            tfx = self.fx_types.tfx.len(),
            "loaded schema registry"
        );
    }
}

fn toml_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, SchemaError> {
    let entries = std::fs::read_dir(dir).map_err(|e| SchemaError::read_file(dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SchemaError::read_file(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
