//! Span scanners for the RC0 pseudo-markup.
//!
//! The format cannot be fed to a markup parser: field tags may be bare
//! digits or `#`. Instead the text is read by three independent passes,
//! each working on a byte range of the full document so line numbers in
//! errors stay absolute:
//!
//! ```text
//! element ::= '<' kind ( ws+ 'id="' digits '"' )? '>' body '</' kind '>'
//! section ::= '<' [A-Z][A-Z0-9_]* '>' newline body '</' name '>'
//! field   ::= '<' tag '>' '-'? digits '</' tag '>'
//! ```
//!
//! Element and section scans skip text that does not open a span. The field
//! scan is strict: anything between fields other than whitespace is an
//! error.
//!
//! Each pass is told the line its range starts on and counts newlines as
//! its cursor moves forward, so locating spans stays linear in the input.

use std::collections::HashSet;
use std::ops::Range;

use crate::error::FormatError;
use crate::tree::{ElementKind, Field};

// ---------------------------------------------------------------------------
// Span types
// ---------------------------------------------------------------------------

/// Device name and revision from the `<database>` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub device_name: String,
    pub revision: u32,
}

/// A top-level element located in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ElementSpan {
    pub kind: ElementKind,
    pub id: Option<u32>,
    pub line: usize,
    pub body: Range<usize>,
    pub body_line: usize,
}

/// A section located inside an element body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionSpan {
    pub name: String,
    pub line: usize,
    pub body: Range<usize>,
    pub body_line: usize,
}

/// 1-based line number of a byte offset.
pub(crate) fn line_at(src: &str, offset: usize) -> usize {
    let end = offset.min(src.len());
    src.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Byte cursor bounded to a range of the source text.
///
/// Every position the cursor stops on is either the range end or just past
/// an ASCII byte, so slicing `src` at `pos` is always on a char boundary.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    end: usize,
    /// Line of `counted`.
    line: usize,
    /// Offset up to which newlines have been counted.
    counted: usize,
}

impl<'a> Scanner<'a> {
    /// Cursor over `range`, whose first byte sits on `first_line`.
    fn new(src: &'a str, range: Range<usize>, first_line: usize) -> Self {
        Self {
            src,
            pos: range.start,
            end: range.end.min(src.len()),
            line: first_line,
            counted: range.start,
        }
    }

    /// 1-based line of `offset`.
    ///
    /// Only counts the text since the previous call, so offsets must be
    /// asked for in increasing order.
    fn line_of(&mut self, offset: usize) -> usize {
        let offset = offset.min(self.src.len());
        if offset > self.counted {
            self.line += self.src.as_bytes()[self.counted..offset]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.counted = offset;
        }
        self.line
    }

    fn peek(&self) -> Option<u8> {
        if self.pos < self.end {
            self.src.as_bytes().get(self.pos).copied()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn rest(&self) -> &'a str {
        if self.pos < self.end {
            &self.src[self.pos..self.end]
        } else {
            ""
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.advance();
        }
    }

    /// Consume `lit` if the input continues with it.
    fn eat(&mut self, lit: &str) -> bool {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Absolute offset of the next occurrence of `needle`, without moving.
    fn find(&self, needle: &str) -> Option<usize> {
        self.rest().find(needle).map(|i| self.pos + i)
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    /// Short excerpt of the remaining text for error messages.
    fn snippet(&self) -> String {
        self.rest()
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(24)
            .collect()
    }

    /// `kind` keyword directly at the cursor.
    fn element_keyword(&mut self) -> Option<ElementKind> {
        let kind = ElementKind::ALL
            .into_iter()
            .find(|k| self.rest().starts_with(k.keyword()))?;
        self.pos += kind.keyword().len();
        Some(kind)
    }

    /// `ws+ 'id="' digits '"' '>'`, after the keyword.
    fn element_id(&mut self) -> Option<u32> {
        self.skip_ws();
        if !self.eat("id=\"") {
            return None;
        }
        let digits = self.take_while(|b| b.is_ascii_digit());
        let id = digits.parse().ok()?;
        (self.eat("\"") && self.eat(">")).then_some(id)
    }

    /// `[A-Z][A-Z0-9_]*` at the cursor.
    fn section_name(&mut self) -> Option<&'a str> {
        if !self.peek().is_some_and(|b| b.is_ascii_uppercase()) {
            return None;
        }
        Some(self.take_while(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'))
    }
}

/// Field tags are any run of bytes up to `>`, except `<`, `/` and whitespace.
fn is_tag_byte(b: u8) -> bool {
    !matches!(b, b'<' | b'>' | b'/') && !b.is_ascii_whitespace()
}

// ---------------------------------------------------------------------------
// Header and footer
// ---------------------------------------------------------------------------

/// Read `<database name=".." revision="..">`.
pub(crate) fn scan_header(src: &str) -> Result<Header, FormatError> {
    const OPEN: &str = "<database";

    let open = src.find(OPEN).ok_or(FormatError::MissingHeader)?;
    let line = line_at(src, open);
    let malformed = |reason: &str| FormatError::MalformedHeader {
        line,
        reason: reason.to_string(),
    };

    let mut s = Scanner::new(src, open + OPEN.len()..src.len(), line);
    s.skip_ws();
    if !s.eat("name=\"") {
        return Err(malformed("expected name attribute"));
    }
    let device_name = s.take_while(|b| b != b'"' && b != b'\n');
    if device_name.is_empty() {
        return Err(malformed("empty device name"));
    }
    if !s.eat("\"") {
        return Err(malformed("unterminated name attribute"));
    }

    s.skip_ws();
    if !s.eat("revision=\"") {
        return Err(malformed("expected revision attribute"));
    }
    let digits = s.take_while(|b| b.is_ascii_digit());
    if digits.is_empty() || !s.eat("\"") {
        return Err(malformed("revision is not an integer"));
    }
    let revision = digits
        .parse()
        .map_err(|_| malformed("revision out of range"))?;
    if !s.eat(">") {
        return Err(malformed("expected '>'"));
    }

    Ok(Header {
        device_name: device_name.to_string(),
        revision,
    })
}

/// Read the `<count>NNNN</count>` save counter. Absent means 0.
pub(crate) fn scan_footer(src: &str) -> Result<u32, FormatError> {
    const OPEN: &str = "<count>";

    let Some(open) = src.find(OPEN) else {
        return Ok(0);
    };
    let malformed = || FormatError::MalformedFooter {
        line: line_at(src, open),
    };

    let mut s = Scanner::new(src, open + OPEN.len()..src.len(), 1);
    let digits = s.take_while(|b| b.is_ascii_digit());
    if digits.is_empty() || !s.eat("</count>") {
        return Err(malformed());
    }
    digits.parse().map_err(|_| malformed())
}

// ---------------------------------------------------------------------------
// Span passes
// ---------------------------------------------------------------------------

/// Locate every top-level element, in order.
pub(crate) fn scan_elements(src: &str) -> Result<Vec<ElementSpan>, FormatError> {
    let mut s = Scanner::new(src, 0..src.len(), 1);
    let mut spans = Vec::new();

    while let Some(open) = s.find("<") {
        s.pos = open + 1;
        let Some(kind) = s.element_keyword() else {
            continue;
        };
        let line = s.line_of(open);
        let id = match s.peek() {
            Some(b'>') => {
                s.advance();
                None
            }
            Some(b) if b.is_ascii_whitespace() => Some(
                s.element_id()
                    .ok_or(FormatError::MalformedElement { kind, line })?,
            ),
            // `<memory>` and friends are not element openers
            _ => continue,
        };

        let closer = format!("</{kind}>");
        let body_start = s.pos;
        let body_line = s.line_of(body_start);
        let close = s
            .find(&closer)
            .ok_or(FormatError::UnterminatedElement { kind, line })?;
        spans.push(ElementSpan {
            kind,
            id,
            line,
            body: body_start..close,
            body_line,
        });
        s.pos = close + closer.len();
    }

    Ok(spans)
}

/// Locate every section inside `within`, in order. `first_line` is the
/// line `within` starts on.
pub(crate) fn scan_sections(
    src: &str,
    within: Range<usize>,
    first_line: usize,
) -> Result<Vec<SectionSpan>, FormatError> {
    let mut s = Scanner::new(src, within, first_line);
    let mut spans = Vec::new();
    let mut seen = HashSet::new();

    while let Some(open) = s.find("<") {
        s.pos = open + 1;
        let Some(name) = s.section_name() else {
            continue;
        };
        // A section opener ends its line; `<A>12</A>` is a field.
        if !(s.eat(">") && (s.eat("\n") || s.eat("\r\n"))) {
            continue;
        }

        let line = s.line_of(open);
        if !seen.insert(name) {
            return Err(FormatError::DuplicateSection {
                section: name.to_string(),
                line,
            });
        }

        let closer = format!("</{name}>");
        let body_start = s.pos;
        let body_line = s.line_of(body_start);
        let close = s
            .find(&closer)
            .ok_or_else(|| FormatError::UnterminatedSection {
                section: name.to_string(),
                line,
            })?;
        spans.push(SectionSpan {
            name: name.to_string(),
            line,
            body: body_start..close,
            body_line,
        });
        s.pos = close + closer.len();
    }

    Ok(spans)
}

/// Read every `<tag>value</tag>` field inside `within`, in order. `first_line`
/// is the line `within` starts on.
pub(crate) fn scan_fields(
    src: &str,
    section: &str,
    within: Range<usize>,
    first_line: usize,
) -> Result<Vec<Field>, FormatError> {
    let mut s = Scanner::new(src, within, first_line);
    let mut fields: Vec<Field> = Vec::new();

    loop {
        s.skip_ws();
        let Some(b) = s.peek() else {
            break;
        };
        let line = s.line_of(s.pos);
        let malformed = |reason: String| FormatError::malformed_field(section, line, reason);

        if b != b'<' {
            return Err(malformed(format!("unexpected text '{}'", s.snippet())));
        }
        s.advance();

        let tag = s.take_while(is_tag_byte);
        if tag.is_empty() {
            return Err(malformed(format!("expected a tag at '<{}'", s.snippet())));
        }
        if !s.eat(">") {
            return Err(malformed(format!("unterminated tag <{tag}")));
        }

        let body_start = s.pos;
        s.eat("-");
        let digits = s.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            s.pos = body_start;
            return Err(malformed(format!(
                "body of <{tag}> is not an integer: '{}'",
                s.snippet()
            )));
        }
        let value: i64 = src[body_start..s.pos]
            .parse()
            .map_err(|_| malformed(format!("value of <{tag}> is out of range")))?;

        if !(s.eat("</") && s.eat(tag) && s.eat(">")) {
            return Err(malformed(format!("expected </{tag}>")));
        }
        if fields.iter().any(|f| f.tag == tag) {
            return Err(FormatError::DuplicateTag {
                section: section.to_string(),
                tag: tag.to_string(),
                line,
            });
        }
        fields.push(Field::new(tag, value));
    }

    Ok(fields)
}
