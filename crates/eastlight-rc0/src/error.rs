//! Error types for record parsing and serialization.

use std::path::PathBuf;
use thiserror::Error;

use crate::tree::ElementKind;

/// Errors that can occur while reading or writing an RC0 record.
///
/// Variants that point into the source text carry a 1-based line number.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No `<database name=".." revision="..">` header was found.
    #[error("no <database> header found")]
    MissingHeader,

    /// A `<database` header was found but could not be read.
    #[error("malformed <database> header at line {line}: {reason}")]
    MalformedHeader {
        /// Line of the header.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A `<count>` footer was present but did not hold a counter.
    #[error("malformed <count> footer at line {line}")]
    MalformedFooter {
        /// Line of the footer.
        line: usize,
    },

    /// A required top-level element was absent.
    #[error("missing <{kind}> element")]
    MissingElement {
        /// The element kind that was expected.
        kind: ElementKind,
    },

    /// A top-level element opener carried an unreadable attribute.
    #[error("malformed <{kind}> element opener at line {line}")]
    MalformedElement {
        /// Kind of the element.
        kind: ElementKind,
        /// Line of the opener.
        line: usize,
    },

    /// A top-level element had no closing tag.
    #[error("element <{kind}> opened at line {line} is never closed")]
    UnterminatedElement {
        /// Kind of the element.
        kind: ElementKind,
        /// Line of the opener.
        line: usize,
    },

    /// A section had no matching closing tag.
    #[error("section <{section}> opened at line {line} is never closed")]
    UnterminatedSection {
        /// Name of the section.
        section: String,
        /// Line of the opener.
        line: usize,
    },

    /// A section name appeared twice within one element.
    #[error("duplicate section <{section}> at line {line}")]
    DuplicateSection {
        /// Name of the section.
        section: String,
        /// Line of the second occurrence.
        line: usize,
    },

    /// A field body could not be read as a `<tag>integer</tag>` token.
    #[error("malformed field in <{section}> at line {line}: {reason}")]
    MalformedField {
        /// Section holding the field.
        section: String,
        /// Line of the field.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A tag appeared twice within one section.
    #[error("duplicate tag <{tag}> in <{section}> at line {line}")]
    DuplicateTag {
        /// Section holding the field.
        section: String,
        /// The repeated tag.
        tag: String,
        /// Line of the second occurrence.
        line: usize,
    },

    /// Failed to read a record file.
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a record file.
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl FormatError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormatError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormatError::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed_field(section: &str, line: usize, reason: impl Into<String>) -> Self {
        FormatError::MalformedField {
            section: section.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = FormatError::read_file("/data/MEMORY001A.RC0", mock_io_err());
        assert!(
            matches!(err, FormatError::ReadFile { ref path, .. } if path == std::path::Path::new("/data/MEMORY001A.RC0"))
        );
        assert!(err.source().is_some(), "ReadFile must expose I/O source");
    }

    #[test]
    fn write_file_display() {
        let err = FormatError::write_file("/out/SYSTEM1.RC0", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("SYSTEM1.RC0"), "got: {msg}");
    }

    #[test]
    fn missing_element_display() {
        let err = FormatError::MissingElement {
            kind: ElementKind::Mem,
        };
        assert_eq!(err.to_string(), "missing <mem> element");
        assert!(err.source().is_none());
    }

    #[test]
    fn malformed_field_display() {
        let err = FormatError::malformed_field("TRACK1", 7, "body 'abc' is not an integer");
        assert_eq!(
            err.to_string(),
            "malformed field in <TRACK1> at line 7: body 'abc' is not an integer"
        );
    }
}
