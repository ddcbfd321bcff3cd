//! Record parser: text to [`RecordTree`].

use std::path::Path;

use crate::error::FormatError;
use crate::scan;
use crate::tree::{Element, ElementKind, RecordTree, Section};

/// Element kinds a memory file must contain.
pub const MEMORY_ELEMENTS: [ElementKind; 3] = [ElementKind::Mem, ElementKind::Ifx, ElementKind::Tfx];

/// Element kinds a system file must contain.
pub const SYSTEM_ELEMENTS: [ElementKind; 1] = [ElementKind::Sys];

/// Parse RC0 text into a record tree.
///
/// Fails if the `<database>` header is absent or any span is malformed.
/// A missing `<count>` footer yields a count of 0.
///
/// # Example
///
/// ```rust
/// let text = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
///             <database name=\"RC-505MK2\" revision=\"0\">\n\
///             <sys>\n<SETUP>\n\t<D>10</D>\n</SETUP>\n</sys>\n\
///             </database>\n<count>0002</count>";
/// let tree = eastlight_rc0::parse(text).unwrap();
/// let setup = tree.sys().and_then(|s| s.section("SETUP")).unwrap();
/// assert_eq!(setup.get("D"), Some(10));
/// assert_eq!(tree.count, 2);
/// ```
pub fn parse(text: &str) -> Result<RecordTree, FormatError> {
    let header = scan::scan_header(text)?;
    let mut tree = RecordTree::new(header.device_name, header.revision);
    tree.count = scan::scan_footer(text)?;

    for span in scan::scan_elements(text)? {
        let spans = scan::scan_sections(text, span.body, span.body_line)?;
        let mut sections = Vec::with_capacity(spans.len());
        for section in spans {
            let fields = scan::scan_fields(text, &section.name, section.body, section.body_line)?;
            tracing::trace!(
                element = %span.kind,
                section = %section.name,
                line = section.line,
                fields = fields.len(),
                "section"
            );
            sections.push(Section::from_fields(section.name, fields));
        }
        // section names are unique per element; the scan rejects repeats
        let element = Element::from_sections(span.kind, span.id, sections);
        tracing::trace!(
            element = %span.kind,
            id = ?span.id,
            line = span.line,
            sections = element.sections().len(),
            "element"
        );
        tree.elements.push(element);
    }

    tracing::debug!(
        device = %tree.device_name,
        elements = tree.elements.len(),
        sections = tree.section_count(),
        count = tree.count,
        "parsed record"
    );
    Ok(tree)
}

/// Parse a memory record, requiring `<mem>`, `<ifx>` and `<tfx>`.
pub fn parse_memory(text: &str) -> Result<RecordTree, FormatError> {
    require(parse(text)?, &MEMORY_ELEMENTS)
}

/// Parse a system record, requiring `<sys>`.
pub fn parse_system(text: &str) -> Result<RecordTree, FormatError> {
    require(parse(text)?, &SYSTEM_ELEMENTS)
}

/// Read and parse a record file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RecordTree, FormatError> {
    parse(&read(path.as_ref())?)
}

/// Read and parse a memory file (`MEMORY001A.RC0` etc.).
pub fn parse_memory_file(path: impl AsRef<Path>) -> Result<RecordTree, FormatError> {
    parse_memory(&read(path.as_ref())?)
}

/// Read and parse a system file (`SYSTEM1.RC0` etc.).
pub fn parse_system_file(path: impl AsRef<Path>) -> Result<RecordTree, FormatError> {
    parse_system(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, FormatError> {
    tracing::debug!(path = %path.display(), "reading record");
    std::fs::read_to_string(path).map_err(|e| FormatError::read_file(path, e))
}

fn require(tree: RecordTree, kinds: &[ElementKind]) -> Result<RecordTree, FormatError> {
    if let Some(&kind) = kinds.iter().find(|&&k| tree.element(k).is_none()) {
        return Err(FormatError::MissingElement { kind });
    }
    Ok(tree)
}
