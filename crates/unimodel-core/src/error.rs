//! Error types for the unified model.
//!
//! Only structural contract violations are errors here. Missing optional
//! pieces (no return type, no superclass, no body) are normalized by the
//! adapter and never surface as failures.

use thiserror::Error;

/// Structural problems detected by [`crate::model::UnifiedModel::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An attribute or operation names an owning class that is not in the model.
    #[error("{element} '{name}' references unknown owning class '{owner}'")]
    UnknownOwner {
        element: &'static str,
        name: String,
        owner: String,
    },

    /// An attribute or operation is stored in a class other than the one it names.
    #[error("{element} '{name}' is stored in '{holder}' but names '{owner}' as its owner")]
    OwnerMismatch {
        element: &'static str,
        name: String,
        owner: String,
        holder: String,
    },

    /// One file contributes two classes with the same qualified name.
    #[error("class '{name}' is defined twice in {file}")]
    DuplicateClass { name: String, file: String },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
