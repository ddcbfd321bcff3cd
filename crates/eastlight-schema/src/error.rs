//! Error types for schema loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::fx::FxChain;

/// Errors that can occur while loading or registering schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read a schema file or directory.
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A schema document is not valid TOML or does not match the document shape.
    #[error("failed to parse schema '{origin}': {source}")]
    TomlParse {
        /// File name or label of the document.
        origin: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// An enumeration key is not an integer.
    #[error("choice key '{key}' of <{tag}> in {section} is not an integer")]
    InvalidChoiceKey {
        /// Section type.
        section: String,
        /// Field tag.
        tag: String,
        /// The offending key.
        key: String,
    },

    /// A range has its bounds reversed.
    #[error("range [{min}, {max}] of <{tag}> in {section} is empty")]
    InvalidRange {
        /// Section type.
        section: String,
        /// Field tag.
        tag: String,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// Two fields share a tag.
    #[error("duplicate tag <{tag}> in {section}")]
    DuplicateTag {
        /// Section type.
        section: String,
        /// Repeated tag.
        tag: String,
    },

    /// Two fields share a parameter name.
    #[error("duplicate parameter name '{name}' in {section}")]
    DuplicateName {
        /// Section type.
        section: String,
        /// Repeated name.
        name: String,
    },

    /// An effect-type index key is not a non-negative integer.
    #[error("effect-type index '{key}' in [{chain}] is not a non-negative integer")]
    InvalidFxIndex {
        /// Chain table holding the key.
        chain: FxChain,
        /// The offending key.
        key: String,
    },

    /// Two keys of an effect-type table map to the same index.
    #[error("duplicate effect-type index {index} in [{chain}]")]
    DuplicateFxIndex {
        /// Chain table holding the index.
        chain: FxChain,
        /// Repeated index.
        index: i64,
    },

    /// A subslot address is not one of `AA`..`DD`.
    #[error("invalid subslot '{0}' (expected AA..DD)")]
    InvalidSubslot(String),
}

impl SchemaError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SchemaError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a TOML parse error for a named document.
    pub fn toml_parse(origin: impl Into<String>, source: toml::de::Error) -> Self {
        SchemaError::TomlParse {
            origin: origin.into(),
            source,
        }
    }
}
