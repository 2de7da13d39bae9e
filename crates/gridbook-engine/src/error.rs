//! Engine boundary error types

use thiserror::Error;

/// Errors from named-expression registration.
///
/// These are swallowed at the synchronization layer; the local named-range
/// registry remains the source of truth.
#[derive(Debug, Error)]
pub enum NamedExpressionError {
    /// A named expression with this name already exists in the scope
    #[error("named expression already exists: {0}")]
    DuplicateName(String),

    /// The name or reference is not acceptable to the engine
    #[error("invalid named expression '{name}': {reason}")]
    InvalidExpression { name: String, reason: String },
}
