//! Error types for cardbase.
//!
//! Every fallible operation in the crate returns [`Result`]. Callers that
//! only need to choose a message family (an interactive front-end, say) can
//! use [`CardbaseError::category`] instead of matching every variant.
//!
//! Reported no-ops are not errors: removing a card that is not present, or
//! removing a non-positive amount, returns `Ok(0)`.

use thiserror::Error;

/// Main cardbase error type.
#[derive(Debug, Error)]
pub enum CardbaseError {
    /// Required input was missing or out of range.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A sort or filter named an attribute that cards do not have.
    #[error("unknown card field '{field}'")]
    UnknownField { field: String },

    /// A predicate cannot be applied to the field, or its value is unusable.
    #[error("cannot apply {predicate} to field '{field}': {reason}")]
    InvalidPredicate {
        field: String,
        predicate: String,
        reason: String,
    },

    /// A REGEX filter pattern failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The document is not valid JSON.
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    MalformedSyntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The document is valid JSON but does not have the expected shape.
    #[error("malformed collection structure: {message}")]
    MalformedStructure { message: String },

    /// Reading or writing a collection file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream catalog could not be reached or returned garbage.
    #[error("catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CardbaseError>;

/// Coarse grouping of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input to a container operation.
    Argument,
    /// Bad sort or filter request.
    Query,
    /// Loading or saving a collection failed.
    Persistence,
    /// The catalog could not answer.
    Catalog,
}

impl CardbaseError {
    /// Which family this error belongs to.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardbaseError::InvalidArgument { .. } => ErrorCategory::Argument,

            CardbaseError::UnknownField { .. }
            | CardbaseError::InvalidPredicate { .. }
            | CardbaseError::InvalidPattern { .. } => ErrorCategory::Query,

            CardbaseError::MalformedSyntax { .. }
            | CardbaseError::MalformedStructure { .. }
            | CardbaseError::Io(_) => ErrorCategory::Persistence,

            CardbaseError::CatalogUnavailable { .. } => ErrorCategory::Catalog,
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        CardbaseError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_field(field: impl Into<String>) -> Self {
        CardbaseError::UnknownField {
            field: field.into(),
        }
    }

    pub(crate) fn malformed_structure(message: impl Into<String>) -> Self {
        CardbaseError::MalformedStructure {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CardbaseError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Syntax | Category::Eof => CardbaseError::MalformedSyntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
            Category::Data => CardbaseError::MalformedStructure {
                message: err.to_string(),
            },
            Category::Io => CardbaseError::Io(err.into()),
        }
    }
}
