//! Schema-resolved editing of RC-505 MK2 records.
//!
//! [`Model`] binds a parsed [`RecordTree`](eastlight_rc0::RecordTree) to a
//! shared [`SchemaRegistry`](eastlight_schema::SchemaRegistry) and offers two
//! ways into every section:
//!
//! - **by tag**: raw positional access, available whether or not the section
//!   has a schema;
//! - **by name**: through the schema, with read-only and range checks.
//!
//! Every successful write produces one [`FieldChange`], pushed onto a
//! bounded linear undo history and passed to the section's listeners.
//! Writes go straight into the tree, so serializing it at any point yields
//! the edited record with everything else byte-identical.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use eastlight_model::Model;
//! use eastlight_rc0::parse_memory;
//! use eastlight_schema::{FxChain, SchemaRegistry, Subslot};
//!
//! let text = concat!(
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
//!     "<database name=\"RC-505MK2\" revision=\"0\">\n",
//!     "<mem id=\"0\">\n<TRACK1>\n\t<C>50</C>\n</TRACK1>\n</mem>\n",
//!     "<ifx id=\"0\">\n<AA>\n\t<A>1</A>\n\t<C>35</C>\n</AA>\n",
//!     "<AA_DELAY>\n\t<A>400</A>\n</AA_DELAY>\n</ifx>\n",
//!     "<tfx id=\"0\">\n<SETUP>\n\t<A>0</A>\n</SETUP>\n</tfx>\n",
//!     "</database>\n<count>0001</count>",
//! );
//!
//! let registry = Arc::new(SchemaRegistry::builtin().unwrap());
//! let mut model = Model::new(parse_memory(text).unwrap(), registry);
//!
//! let aa: Subslot = "AA".parse().unwrap();
//! let delay = model.effect_section(FxChain::Input, aa).unwrap();
//! assert_eq!(delay.get_by_name("time"), Some(400));
//!
//! model.track_mut(1).unwrap().set_by_name("pan", 75).unwrap();
//! let out = eastlight_rc0::write(model.tree());
//! assert_eq!(out, text.replace("<C>50</C>", "<C>75</C>"));
//! ```

mod change;
mod error;
mod fx;
mod listener;
mod model;
mod name;
mod section;

pub use change::FieldChange;
pub use error::ModelError;
pub use fx::{ActiveEffect, chain_element};
pub use listener::{Listener, ListenerId};
pub use model::{DEFAULT_UNDO_DEPTH, Model, ModelOptions};
pub use name::{NAME_LEN, NAME_SECTION, NAME_TAGS, decode_name, encode_name};
pub use section::{ResolvedSection, ResolvedSectionMut};
