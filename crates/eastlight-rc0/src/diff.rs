//! Field-level comparison of two record trees.
//!
//! Used to compare two memories, or a memory before and after an edit.
//! Output follows the left tree's order, with right-only entries appended.

use crate::tree::{ElementKind, RecordTree, Section};

/// One differing field. `None` means the tag is absent on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    /// Field tag.
    pub tag: String,
    /// Value in the left section.
    pub left: Option<i64>,
    /// Value in the right section.
    pub right: Option<i64>,
}

/// All differing fields of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDiff {
    /// Element holding the section.
    pub element: ElementKind,
    /// Section name.
    pub section: String,
    /// Differing fields, left tag order first.
    pub fields: Vec<FieldDiff>,
}

/// Compare two sections tag by tag.
///
/// Either side may be absent, in which case every field of the other side
/// is reported.
pub fn diff_sections(left: Option<&Section>, right: Option<&Section>) -> Vec<FieldDiff> {
    let mut out = Vec::new();
    if let Some(l) = left {
        for field in l.fields() {
            let other = right.and_then(|r| r.get(&field.tag));
            if other != Some(field.value) {
                out.push(FieldDiff {
                    tag: field.tag.clone(),
                    left: Some(field.value),
                    right: other,
                });
            }
        }
    }
    if let Some(r) = right {
        for field in r.fields() {
            if left.is_some_and(|l| l.contains(&field.tag)) {
                continue;
            }
            out.push(FieldDiff {
                tag: field.tag.clone(),
                left: None,
                right: Some(field.value),
            });
        }
    }
    out
}

/// Compare two trees element kind by element kind.
///
/// Elements are paired by kind (the first of each kind on either side);
/// identifiers are ignored so that two different memories can be
/// compared. Sections present on only one side are reported in full.
pub fn diff_trees(left: &RecordTree, right: &RecordTree) -> Vec<SectionDiff> {
    let mut out = Vec::new();
    for kind in ElementKind::ALL {
        let (l, r) = (left.element(kind), right.element(kind));
        if l.is_none() && r.is_none() {
            continue;
        }

        let mut names: Vec<&str> = l.map(|e| e.section_names().collect()).unwrap_or_default();
        if let Some(r) = r {
            for name in r.section_names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        for name in names {
            let fields = diff_sections(
                l.and_then(|e| e.section(name)),
                r.and_then(|e| e.section(name)),
            );
            if !fields.is_empty() {
                out.push(SectionDiff {
                    element: kind,
                    section: name.to_string(),
                    fields,
                });
            }
        }
    }
    out
}
