//! Field definitions: what one positional tag means.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Switch stored as 0/1.
    Bool,
    /// Plain integer, usually with a range.
    #[default]
    Int,
    /// Enumerated code with labels. Never range-checked on write.
    Enum,
}

/// Static metadata for one tag of a section.
///
/// # Example
///
/// ```rust
/// use eastlight_schema::{FieldDef, FieldKind};
///
/// let pan = FieldDef::new("C", "pan", FieldKind::Int).with_range(0, 100);
/// assert!(pan.accepts(100));
/// assert!(!pan.accepts(101));
///
/// let tempo = FieldDef::new("U", "tempo", FieldKind::Int).with_unit("BPM");
/// assert_eq!(tempo.format_value(70), "70 BPM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Positional tag (`"A"`, `"0"`, `"#"`).
    pub tag: String,
    /// Parameter name (`"pan"`, `"play_level"`).
    pub name: String,
    /// Value kind.
    pub kind: FieldKind,
    /// Label for user interfaces (`"Pan"`).
    pub display: String,
    /// Device default.
    pub default: i64,
    /// Inclusive `(min, max)` bounds.
    pub range: Option<(i64, i64)>,
    /// Code to label table.
    pub choices: Option<BTreeMap<i64, String>>,
    /// Display unit (`"BPM"`, `"dB"`).
    pub unit: Option<String>,
    /// Derived from other state rather than edited directly.
    pub computed: bool,
    /// May be read but never written by name.
    pub read_only: bool,
}

impl FieldDef {
    /// Create a definition with no range, choices or unit. The display
    /// label defaults to the name.
    pub fn new(tag: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            tag: tag.into(),
            display: name.clone(),
            name,
            kind,
            default: 0,
            range: None,
            choices: None,
            unit: None,
            computed: false,
            read_only: false,
        }
    }

    /// Set the inclusive range.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Set the label table.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(|(k, v)| (k, v.into())).collect());
        self
    }

    /// Set the display unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the display label.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = default;
        self
    }

    /// Mark the field read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Mark the field as derived.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Whether named writes are allowed at all. Read-only and computed
    /// fields are not.
    pub fn is_writable(&self) -> bool {
        !self.read_only && !self.computed
    }

    /// Whether a named write of `value` passes the range check.
    ///
    /// Enumerated fields accept any code; unknown codes are displayed as
    /// their numeral.
    pub fn accepts(&self, value: i64) -> bool {
        match (self.kind, self.range) {
            (FieldKind::Enum, _) | (_, None) => true,
            (_, Some((min, max))) => (min..=max).contains(&value),
        }
    }

    /// Label for a code, if the table has one.
    pub fn label(&self, value: i64) -> Option<&str> {
        self.choices.as_ref()?.get(&value).map(String::as_str)
    }

    /// Code for a label, compared case-insensitively.
    pub fn code_for(&self, label: &str) -> Option<i64> {
        self.choices
            .as_ref()?
            .iter()
            .find(|(_, l)| l.eq_ignore_ascii_case(label))
            .map(|(&code, _)| code)
    }

    /// Human-readable value.
    ///
    /// The label when one exists; `ON`/`OFF` for unlabeled switches;
    /// otherwise the numeral followed by the unit, if any.
    pub fn format_value(&self, value: i64) -> String {
        if let Some(label) = self.label(value) {
            return label.to_string();
        }
        if self.kind == FieldKind::Bool && self.choices.is_none() {
            return String::from(if value == 0 { "OFF" } else { "ON" });
        }
        match &self.unit {
            Some(unit) => format!("{value} {unit}"),
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_applies_to_int_and_bool_only() {
        let level = FieldDef::new("D", "play_level", FieldKind::Int).with_range(0, 200);
        assert!(level.accepts(0));
        assert!(level.accepts(200));
        assert!(!level.accepts(-1));
        assert!(!level.accepts(201));

        let sw = FieldDef::new("A", "sw", FieldKind::Bool).with_range(0, 1);
        assert!(!sw.accepts(2));

        let mode = FieldDef::new("E", "start_mode", FieldKind::Enum)
            .with_range(0, 1)
            .with_choices([(0, "IMMEDIATE"), (1, "FADE")]);
        assert!(mode.accepts(7));
    }

    #[test]
    fn unbounded_int_accepts_anything() {
        let f = FieldDef::new("V", "loop_length", FieldKind::Int);
        assert!(f.accepts(i64::MIN));
        assert!(f.accepts(i64::MAX));
    }

    #[test]
    fn computed_and_read_only_are_not_writable() {
        assert!(FieldDef::new("C", "pan", FieldKind::Int).is_writable());
        assert!(!FieldDef::new("W", "has_audio", FieldKind::Bool).read_only().is_writable());
        assert!(!FieldDef::new("V", "loop_length", FieldKind::Int).computed().is_writable());
    }

    #[test]
    fn format_prefers_labels() {
        let f = FieldDef::new("A", "reverse", FieldKind::Enum).with_choices([(0, "OFF"), (1, "ON")]);
        assert_eq!(f.format_value(1), "ON");
        assert_eq!(f.format_value(5), "5");
    }

    #[test]
    fn format_unlabeled_bool() {
        let f = FieldDef::new("W", "has_audio", FieldKind::Bool);
        assert_eq!(f.format_value(0), "OFF");
        assert_eq!(f.format_value(1), "ON");
    }

    #[test]
    fn format_with_unit() {
        let f = FieldDef::new("A", "time", FieldKind::Int).with_unit("ms");
        assert_eq!(f.format_value(400), "400 ms");
        let plain = FieldDef::new("C", "pan", FieldKind::Int);
        assert_eq!(plain.format_value(50), "50");
    }

    #[test]
    fn code_lookup_ignores_case() {
        let f = FieldDef::new("K", "pref_eq", FieldKind::Enum)
            .with_choices([(0, "SYSTEM"), (1, "MEMORY")]);
        assert_eq!(f.code_for("memory"), Some(1));
        assert_eq!(f.code_for("track"), None);
    }

    #[test]
    fn kind_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Doc {
            kind: FieldKind,
        }
        let doc: Doc = toml::from_str("kind = \"enum\"").unwrap();
        assert_eq!(doc.kind, FieldKind::Enum);
        assert!(toml::from_str::<Doc>("kind = \"Enum\"").is_err());
    }
}
