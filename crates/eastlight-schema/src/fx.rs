//! Effect chains, subslot addresses and effect-type tables.
//!
//! Each chain has four groups (`A`..`D`) of four subslots, addressed by
//! two letters: `AA`, `AB`, ..., `DD`. A subslot's header section (named
//! by its address) stores the selected effect-type index; the parameters
//! of that effect live in a section named `<address>_<EFFECT>`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Subslot group letters.
pub const GROUPS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Header tag holding the subslot's on/off switch.
pub const SWITCH_TAG: &str = "A";

/// Header tag holding the selected effect-type index.
pub const FX_TYPE_TAG: &str = "C";

/// An effect chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FxChain {
    /// Input effects (`ifx`).
    Input,
    /// Track effects (`tfx`).
    Track,
}

impl FxChain {
    /// Both chains.
    pub const ALL: [FxChain; 2] = [FxChain::Input, FxChain::Track];

    /// Element keyword of the chain (`"ifx"` / `"tfx"`).
    pub const fn keyword(self) -> &'static str {
        match self {
            FxChain::Input => "ifx",
            FxChain::Track => "tfx",
        }
    }
}

impl fmt::Display for FxChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for FxChain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ifx" | "input" => Ok(FxChain::Input),
            "tfx" | "track" => Ok(FxChain::Track),
            _ => Err(format!("unknown effect chain: {s} (expected ifx or tfx)")),
        }
    }
}

/// Two-letter subslot address, `AA` through `DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subslot {
    group: u8,
    slot: u8,
}

impl Subslot {
    /// Address from group and slot letters; both must be `A`..`D`.
    pub fn new(group: char, slot: char) -> Option<Self> {
        let index = |c: char| GROUPS.iter().position(|&g| g == c);
        Some(Self {
            group: index(group)? as u8,
            slot: index(slot)? as u8,
        })
    }

    /// All sixteen addresses in group-major order.
    pub fn all() -> impl Iterator<Item = Subslot> {
        (0..4u8).flat_map(|group| (0..4u8).map(move |slot| Subslot { group, slot }))
    }

    /// Group letter.
    pub fn group(self) -> char {
        GROUPS[usize::from(self.group)]
    }

    /// Slot letter within the group.
    pub fn slot(self) -> char {
        GROUPS[usize::from(self.slot)]
    }

    /// Name of the section holding `effect`'s parameters in this subslot.
    pub fn effect_section(self, effect: &str) -> String {
        format!("{self}_{effect}")
    }

    /// Split `AA_DELAY` into its address and effect suffix.
    ///
    /// The split happens at the first `_`; the prefix must be a valid
    /// address and the suffix non-empty.
    pub fn split_effect_section(name: &str) -> Option<(Subslot, &str)> {
        let (prefix, suffix) = name.split_once('_')?;
        let subslot = prefix.parse().ok()?;
        (!suffix.is_empty()).then_some((subslot, suffix))
    }
}

impl fmt::Display for Subslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.group(), self.slot())
    }
}

impl FromStr for Subslot {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let subslot = match (chars.next(), chars.next(), chars.next()) {
            (Some(group), Some(slot), None) => Subslot::new(group, slot),
            _ => None,
        };
        subslot.ok_or_else(|| SchemaError::InvalidSubslot(s.to_string()))
    }
}

/// Effect-type index to name table for one chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FxTypeTable {
    names: BTreeMap<i64, String>,
    reverse: HashMap<String, i64>,
}

impl FxTypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Names are stored as given and indexed uppercase.
    pub fn insert(&mut self, index: i64, name: impl Into<String>) -> Option<String> {
        let name = name.into();
        self.reverse.insert(name.to_ascii_uppercase(), index);
        self.names.insert(index, name)
    }

    /// Effect name for an index.
    pub fn name(&self, index: i64) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    /// Index for an effect name, compared case-insensitively.
    pub fn index(&self, name: &str) -> Option<i64> {
        self.reverse.get(&name.to_ascii_uppercase()).copied()
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.names.iter().map(|(&i, n)| (i, n.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Effect-type tables for both chains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FxTypes {
    /// Input chain table.
    pub ifx: FxTypeTable,
    /// Track chain table.
    pub tfx: FxTypeTable,
}

impl FxTypes {
    /// Table for a chain.
    pub fn table(&self, chain: FxChain) -> &FxTypeTable {
        match chain {
            FxChain::Input => &self.ifx,
            FxChain::Track => &self.tfx,
        }
    }

    /// Mutable table for a chain.
    pub fn table_mut(&mut self, chain: FxChain) -> &mut FxTypeTable {
        match chain {
            FxChain::Input => &mut self.ifx,
            FxChain::Track => &mut self.tfx,
        }
    }

    /// Effect name for an index in a chain.
    pub fn name(&self, chain: FxChain, index: i64) -> Option<&str> {
        self.table(chain).name(index)
    }

    /// Index for an effect name in a chain.
    pub fn index(&self, chain: FxChain, name: &str) -> Option<i64> {
        self.table(chain).index(name)
    }

    /// Input effect name for an index.
    pub fn ifx_name(&self, index: i64) -> Option<&str> {
        self.ifx.name(index)
    }

    /// Track effect name for an index.
    pub fn tfx_name(&self, index: i64) -> Option<&str> {
        self.tfx.name(index)
    }

    /// Input effect index for a name.
    pub fn ifx_index(&self, name: &str) -> Option<i64> {
        self.ifx.index(name)
    }

    /// Track effect index for a name.
    pub fn tfx_index(&self, name: &str) -> Option<i64> {
        self.tfx.index(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_subslots() {
        let all: Vec<String> = Subslot::all().map(|s| s.to_string()).collect();
        assert_eq!(all.len(), 16);
        assert_eq!(all.first().map(String::as_str), Some("AA"));
        assert_eq!(all.last().map(String::as_str), Some("DD"));
        assert_eq!(all[5], "BB");
    }

    #[test]
    fn subslot_parse() {
        let s: Subslot = "CD".parse().unwrap();
        assert_eq!((s.group(), s.slot()), ('C', 'D'));
        assert!("AE".parse::<Subslot>().is_err());
        assert!("A".parse::<Subslot>().is_err());
        assert!("AAA".parse::<Subslot>().is_err());
        assert!("aa".parse::<Subslot>().is_err());
    }

    #[test]
    fn split_effect_section_names() {
        let (slot, effect) = Subslot::split_effect_section("AB_LPF_SEQ").unwrap();
        assert_eq!(slot.to_string(), "AB");
        assert_eq!(effect, "LPF_SEQ");
        assert_eq!(slot.effect_section(effect), "AB_LPF_SEQ");

        assert!(Subslot::split_effect_section("AA").is_none());
        assert!(Subslot::split_effect_section("AA_").is_none());
        assert!(Subslot::split_effect_section("EE_DELAY").is_none());
        assert!(Subslot::split_effect_section("TRACK_1").is_none());
    }

    #[test]
    fn table_reverse_lookup_ignores_case() {
        let mut table = FxTypeTable::new();
        table.insert(0, "LPF");
        table.insert(35, "DELAY");
        assert_eq!(table.name(35), Some("DELAY"));
        assert_eq!(table.index("delay"), Some(35));
        assert_eq!(table.index("Lpf"), Some(0));
        assert_eq!(table.index("REVERB"), None);
        assert_eq!(table.name(1), None);
    }

    #[test]
    fn chain_keywords() {
        assert_eq!(FxChain::Input.to_string(), "ifx");
        assert_eq!("TFX".parse::<FxChain>(), Ok(FxChain::Track));
        assert!("mem".parse::<FxChain>().is_err());
    }
}
