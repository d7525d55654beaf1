//! Error type for document decoding.

use thiserror::Error;

/// Failure to read a surface document.
///
/// Unsupported shape/bounds combinations are *not* errors; the decoder
/// reports them as `Ok(None)`.
#[derive(Debug, Error)]
pub enum SurfaceJsonError {
    /// A required field is absent.
    #[error("missing field `{field}`")]
    MissingField {
        /// Dotted path of the field.
        field: String,
    },
    /// A field is present but holds the wrong kind of value.
    #[error("field `{field}` is not {expected}")]
    WrongKind {
        /// Dotted path of the field.
        field: String,
        /// Human-readable description of the expected kind.
        expected: &'static str,
    },
    /// A bounds parameter vector has the wrong length for its kind.
    #[error("{kind} expects {expected} values, got {got}")]
    ValueCount {
        /// Bounds tag as written in the document.
        kind: &'static str,
        /// Required number of parameters.
        expected: usize,
        /// Provided number of parameters.
        got: usize,
    },
    /// A typed sub-document (tag, material) failed to deserialize.
    #[error("invalid `{field}`: {source}")]
    Json {
        /// Dotted path of the field.
        field: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl SurfaceJsonError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn wrong_kind(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongKind {
            field: field.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, SurfaceJsonError>;
