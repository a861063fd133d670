//! Error types for schema validation.

use thiserror::Error;

/// Errors raised while validating a style schema.
///
/// Resolution itself is total and never errors; the only failures worth
/// surfacing are misconfigured schema entries, caught once at
/// construction time rather than per call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty path in style definition `{0}`")]
    EmptyPath(String),

    #[error("empty property key in style definition `{0}`")]
    EmptyPropertyKey(String),

    #[error("invalid classname template `{1}` in style definition `{0}`: expected exactly one %s placeholder")]
    InvalidTemplate(String, String),

    #[error("unknown expander `{1}` in style definition `{0}`")]
    UnknownExpander(String, String),

    #[error("duplicate style definition `{1}` in category `{0}`")]
    DuplicateDefinition(String, String),
}

pub type Result<T> = std::result::Result<T, Error>;
