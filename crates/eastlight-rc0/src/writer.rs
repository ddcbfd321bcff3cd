//! Record writer: [`RecordTree`] to device-compatible text.
//!
//! Layout, exactly as the device writes it:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <database name="RC-505MK2" revision="0">
//! <mem id="0">
//! <NAME>
//! 	<A>77</A>
//! </NAME>
//! </mem>
//! </database>
//! <count>0013</count>
//! ```
//!
//! Fields are tab-indented, everything else starts at column 0, and the
//! footer is not followed by a newline. Order is the tree's order.

use std::fmt;
use std::path::Path;

use crate::error::FormatError;
use crate::tree::{Element, RecordTree, Section};

/// First line of every record file.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

impl fmt::Display for RecordTree {
    /// Formats the tree as RC0 text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{XML_DECLARATION}")?;
        writeln!(
            f,
            r#"<database name="{}" revision="{}">"#,
            self.device_name, self.revision
        )?;
        for element in &self.elements {
            write_element(f, element)?;
        }
        writeln!(f, "</database>")?;
        write!(f, "<count>{:04}</count>", self.count)
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &Element) -> fmt::Result {
    match element.id {
        Some(id) => writeln!(f, r#"<{} id="{id}">"#, element.kind)?,
        None => writeln!(f, "<{}>", element.kind)?,
    }
    for section in element.sections() {
        write_section(f, section)?;
    }
    writeln!(f, "</{}>", element.kind)
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    writeln!(f, "<{}>", section.name())?;
    for field in section.fields() {
        writeln!(f, "\t<{tag}>{}</{tag}>", field.value, tag = field.tag)?;
    }
    writeln!(f, "</{}>", section.name())
}

/// Serialize a tree to RC0 text.
pub fn write(tree: &RecordTree) -> String {
    let text = tree.to_string();
    tracing::debug!(
        device = %tree.device_name,
        bytes = text.len(),
        "serialized record"
    );
    text
}

/// Serialize a tree into any [`fmt::Write`] sink.
pub fn write_to<W: fmt::Write>(tree: &RecordTree, out: &mut W) -> fmt::Result {
    write!(out, "{tree}")
}

/// Serialize a tree and write it to `path` in one blocking call.
pub fn write_file(tree: &RecordTree, path: impl AsRef<Path>) -> Result<(), FormatError> {
    let path = path.as_ref();
    std::fs::write(path, write(tree)).map_err(|e| FormatError::write_file(path, e))?;
    tracing::debug!(path = %path.display(), "wrote record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementKind;

    fn small_tree() -> RecordTree {
        let mut tree = RecordTree::new("RC-505MK2", 0).with_element(
            Element::new(ElementKind::Mem, Some(0))
                .with_section(Section::new("NAME").with_field("A", 77).with_field("B", 101)),
        );
        tree.count = 13;
        tree
    }

    #[test]
    fn exact_layout() {
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<database name=\"RC-505MK2\" revision=\"0\">\n",
            "<mem id=\"0\">\n",
            "<NAME>\n",
            "\t<A>77</A>\n",
            "\t<B>101</B>\n",
            "</NAME>\n",
            "</mem>\n",
            "</database>\n",
            "<count>0013</count>",
        );
        assert_eq!(write(&small_tree()), expected);
    }

    #[test]
    fn element_without_id() {
        let tree = RecordTree::new("RC-505MK2", 0).with_element(
            Element::new(ElementKind::Sys, None).with_section(Section::new("SETUP").with_field("D", -3)),
        );
        let text = write(&tree);
        assert!(text.contains("\n<sys>\n<SETUP>\n\t<D>-3</D>\n</SETUP>\n</sys>\n"));
        assert!(text.ends_with("<count>0000</count>"));
    }

    #[test]
    fn write_to_matches_write() {
        let tree = small_tree();
        let mut out = String::new();
        write_to(&tree, &mut out).unwrap();
        assert_eq!(out, write(&tree));
    }

    #[test]
    fn wide_counts_are_not_truncated() {
        let mut tree = small_tree();
        tree.count = 123_456;
        assert!(write(&tree).ends_with("<count>123456</count>"));
    }
}
