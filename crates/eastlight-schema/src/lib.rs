//! Parameter schemas for RC-505 MK2 record sections.
//!
//! RC0 fields are positional: `<C>50</C>` in `TRACK1` means nothing until a
//! schema says tag `C` of a track is `pan`, ranged 0 to 100. This crate holds
//! those schemas and resolves concrete section names to them.
//!
//! # Resolution
//!
//! [`SchemaRegistry::resolve`] tries, in order:
//!
//! 1. the section type name (`TRACK`, `MASTER`),
//! 2. an instance name registered by a type (`TRACK1`..`TRACK6`),
//! 3. `<subslot>_<EFFECT>` for effect sections (`AA_DELAY`, `DC_LPF_SEQ`),
//!    where the subslot is `AA`..`DD` and the effect is looked up in a
//!    separate table keyed by effect name.
//!
//! Names that match none of these resolve to `None`; callers fall back to
//! raw tag access.
//!
//! # Sources
//!
//! Schemas are TOML documents (see [`SectionSchema::from_toml`]). The full
//! device catalogue is compiled in and loaded with
//! [`SchemaRegistry::builtin`]; [`SchemaRegistry::load_dir`] reads the same
//! layout from disk.
//!
//! # Example
//!
//! ```rust
//! use eastlight_schema::{FxChain, SchemaRegistry};
//!
//! let registry = SchemaRegistry::builtin().unwrap();
//!
//! let pan = registry.resolve("TRACK1").and_then(|s| s.field_by_name("pan")).unwrap();
//! assert_eq!(pan.range, Some((0, 100)));
//!
//! let fx = registry.fx_types();
//! assert_eq!(fx.name(FxChain::Input, 35), Some("DELAY"));
//! assert_eq!(fx.index(FxChain::Track, "beat_scatter"), Some(66));
//! ```

mod builtin;
mod error;
mod field;
mod fx;
mod registry;
mod section;
mod source;

pub use error::SchemaError;
pub use field::{FieldDef, FieldKind};
pub use fx::{FX_TYPE_TAG, FxChain, FxTypeTable, FxTypes, GROUPS, SWITCH_TAG, Subslot};
pub use registry::{SchemaMatch, SchemaRegistry};
pub use section::SectionSchema;
