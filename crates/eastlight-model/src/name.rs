//! Memory display name, stored as twelve character codes in `NAME`.

use crate::change::FieldChange;
use crate::error::ModelError;
use crate::model::Model;

/// Section holding the memory name.
pub const NAME_SECTION: &str = "NAME";

/// Tags of the name positions, first to last.
pub const NAME_TAGS: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

/// Name length in characters.
pub const NAME_LEN: usize = NAME_TAGS.len();

const SPACE: i64 = b' ' as i64;
const UNKNOWN: i64 = b'?' as i64;

/// Decode character codes into a display name.
///
/// Stops at the first 0, treats missing positions as spaces, shows codes
/// outside printable ASCII as `?`, and trims trailing spaces.
pub fn decode_name<I>(codes: I) -> String
where
    I: IntoIterator<Item = Option<i64>>,
{
    let mut name = String::with_capacity(NAME_LEN);
    for code in codes.into_iter().take(NAME_LEN) {
        match code.unwrap_or(SPACE) {
            0 => break,
            c @ 0x20..=0x7e => name.push(char::from(c as u8)),
            _ => name.push('?'),
        }
    }
    name.truncate(name.trim_end_matches(' ').len());
    name
}

/// Encode a name into exactly twelve character codes.
///
/// Longer names are truncated, shorter ones space-padded; characters
/// outside printable ASCII become `?`.
pub fn encode_name(name: &str) -> [i64; NAME_LEN] {
    let mut codes = [SPACE; NAME_LEN];
    for (slot, c) in codes.iter_mut().zip(name.chars()) {
        *slot = match c {
            ' '..='~' => c as i64,
            _ => UNKNOWN,
        };
    }
    codes
}

impl Model {
    /// Memory display name; empty when the record has no `NAME` section.
    pub fn name(&self) -> String {
        match self.section(NAME_SECTION) {
            Some(section) => decode_name(NAME_TAGS.iter().map(|tag| section.get_by_tag(tag))),
            None => String::new(),
        }
    }

    /// Store a new display name.
    ///
    /// Each position whose code changes is recorded as its own change, so
    /// a rename takes one undo per changed character.
    pub fn set_name(&mut self, name: &str) -> Result<Vec<FieldChange>, ModelError> {
        let mut section = self
            .section_mut(NAME_SECTION)
            .ok_or_else(|| ModelError::UnknownSection {
                section: NAME_SECTION.to_string(),
            })?;

        if let Some(tag) = NAME_TAGS.iter().find(|tag| section.get_by_tag(tag).is_none()) {
            return Err(ModelError::UnknownTag {
                section: NAME_SECTION.to_string(),
                tag: (*tag).to_string(),
            });
        }

        let mut changes = Vec::new();
        for (tag, code) in NAME_TAGS.iter().zip(encode_name(name)) {
            if section.get_by_tag(tag) != Some(code) {
                changes.push(section.set_by_tag(tag, code)?);
            }
        }
        tracing::debug!(name, changed = changes.len(), "renamed memory");
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(s: &str) -> Vec<Option<i64>> {
        s.bytes().map(|b| Some(i64::from(b))).collect()
    }

    #[test]
    fn decode_trims_and_stops_at_zero() {
        assert_eq!(decode_name(codes("Memory 1    ")), "Memory 1");
        let mut with_nul = codes("AB");
        with_nul.extend([Some(0), Some(i64::from(b'C'))]);
        assert_eq!(decode_name(with_nul), "AB");
        assert_eq!(decode_name(Vec::new()), "");
    }

    #[test]
    fn decode_marks_bad_codes() {
        assert_eq!(decode_name([Some(65), Some(300), Some(-1), Some(66)]), "A??B");
        assert_eq!(decode_name([Some(65), None, Some(66)]), "A B");
    }

    #[test]
    fn encode_pads_and_truncates() {
        assert_eq!(encode_name("Hi")[..3], [72, 105, 32]);
        assert_eq!(encode_name("").iter().filter(|&&c| c == SPACE).count(), 12);
        let long = encode_name("ABCDEFGHIJKLMNOP");
        assert_eq!(long[11], i64::from(b'L'));
        assert_eq!(encode_name("é")[0], UNKNOWN);
    }

    #[test]
    fn encode_then_decode() {
        let codes = encode_name("Loop  A");
        assert_eq!(decode_name(codes.map(Some)), "Loop  A");
    }
}
