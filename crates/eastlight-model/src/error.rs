//! Error types for model edits.

use eastlight_schema::FxChain;
use thiserror::Error;

/// Errors from named and tagged edits.
///
/// A failed edit leaves the record untouched and records no change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The parameter is read-only.
    #[error("parameter '{param}' in {section} is read-only")]
    ReadOnly {
        /// Section name.
        section: String,
        /// Parameter name.
        param: String,
    },

    /// The parameter is derived from other state.
    #[error("parameter '{param}' in {section} is computed and cannot be set")]
    Computed {
        /// Section name.
        section: String,
        /// Parameter name.
        param: String,
    },

    /// The value lies outside the parameter's inclusive range.
    #[error("value {value} out of range [{min}, {max}] for '{param}' in {section}")]
    OutOfRange {
        /// Section name.
        section: String,
        /// Parameter name.
        param: String,
        /// Rejected value.
        value: i64,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// The section's schema has no parameter by this name.
    #[error("unknown parameter '{param}' in {section}")]
    UnknownParameter {
        /// Section name.
        section: String,
        /// Requested name.
        param: String,
    },

    /// Named access on a section with no schema.
    #[error("no schema loaded for section {section}")]
    NoSchema {
        /// Section name.
        section: String,
    },

    /// The record has no section by this name.
    #[error("no section named {section}")]
    UnknownSection {
        /// Requested section name.
        section: String,
    },

    /// The section has no field with this tag.
    #[error("section {section} has no field <{tag}>")]
    UnknownTag {
        /// Section name.
        section: String,
        /// Requested tag.
        tag: String,
    },

    /// The effect name or index is not in the chain's effect-type table.
    #[error("unknown {chain} effect type '{effect}'")]
    UnknownEffectType {
        /// Chain whose table was consulted.
        chain: FxChain,
        /// Effect name, or the stored index as text.
        effect: String,
    },
}
