//! Error types for model extraction.
//!
//! Heuristic misses and missing optional pieces are not errors: the adapter
//! degrades them to empty values. What remains is input the adapter cannot
//! work with at all.

use thiserror::Error;
use unimodel_ast::AstError;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// No language profile matches the file name.
    #[error("unsupported language for file: {path}")]
    UnsupportedLanguage { path: String },

    #[error("AST error: {0}")]
    Ast(#[from] AstError),

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
