//! RC0 record files for the RC-505 MK2 loop station.
//!
//! RC0 is the device's settings format: almost XML, but with field tags
//! that are bare digits or punctuation (`<0>`, `<#>`), which markup parsers
//! reject. This crate reads it with a purpose-built span scanner and writes
//! it back byte-for-byte in the device's own layout, so untouched data
//! survives an edit unchanged.
//!
//! The tree carries no schema. Names, ranges and enumerations live in
//! `eastlight-schema`; named editing lives in `eastlight-model`.
//!
//! # Example
//!
//! ```rust
//! use eastlight_rc0::{parse_memory, write};
//!
//! let text = concat!(
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
//!     "<database name=\"RC-505MK2\" revision=\"0\">\n",
//!     "<mem id=\"0\">\n<TRACK1>\n\t<C>50</C>\n</TRACK1>\n</mem>\n",
//!     "<ifx id=\"0\">\n<SETUP>\n\t<A>0</A>\n</SETUP>\n</ifx>\n",
//!     "<tfx id=\"0\">\n<SETUP>\n\t<A>0</A>\n</SETUP>\n</tfx>\n",
//!     "</database>\n<count>0013</count>",
//! );
//!
//! let mut tree = parse_memory(text).unwrap();
//! assert_eq!(write(&tree), text);
//!
//! let track = tree.mem_mut().and_then(|m| m.section_mut("TRACK1")).unwrap();
//! track.set("C", 75);
//! assert!(write(&tree).contains("\t<C>75</C>\n"));
//! ```

mod diff;
mod error;
mod parser;
mod scan;
mod tree;
mod writer;

pub use diff::{FieldDiff, SectionDiff, diff_sections, diff_trees};
pub use error::FormatError;
pub use parser::{
    MEMORY_ELEMENTS, SYSTEM_ELEMENTS, parse, parse_file, parse_memory, parse_memory_file,
    parse_system, parse_system_file,
};
pub use tree::{Element, ElementKind, Field, RecordTree, Section};
pub use writer::{XML_DECLARATION, write, write_file, write_to};
