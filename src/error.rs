//! Error type for the unimodel front end.
//!
//! `UnimodelError` bridges the library errors (AST, adapter, model
//! validation) with the I/O and JSON failures of reading input and writing
//! output. Each variant maps to a stable process exit code.

use std::path::PathBuf;

use thiserror::Error;

use unimodel_adapter::AdapterError;
use unimodel_ast::AstError;
use unimodel_core::error::ModelError;

/// Exit codes reported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCodeKind {
    /// Bad input: unreadable file, malformed JSON or TOML.
    InvalidInput = 2,
    /// The sources could not be processed.
    ExtractionFailed = 3,
    /// The built model failed validation.
    ValidationFailed = 4,
    /// Logging or other process setup failed.
    Internal = 10,
}

impl ExitCodeKind {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, Error)]
pub enum UnimodelError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Ast(#[from] AstError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("model validation failed: {0}")]
    Model(#[from] ModelError),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl UnimodelError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UnimodelError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> ExitCodeKind {
        match self {
            UnimodelError::Io { .. } | UnimodelError::Json(_) => ExitCodeKind::InvalidInput,
            UnimodelError::Adapter(AdapterError::Config { .. })
            | UnimodelError::Adapter(AdapterError::Toml(_)) => ExitCodeKind::InvalidInput,
            UnimodelError::Ast(_) | UnimodelError::Adapter(_) => ExitCodeKind::ExtractionFailed,
            UnimodelError::Model(_) => ExitCodeKind::ValidationFailed,
            UnimodelError::Logging(_) => ExitCodeKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_invalid_input() {
        let err: UnimodelError = AdapterError::Config {
            message: "bad marker".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCodeKind::InvalidInput);
        assert_eq!(err.exit_code().code(), 2);
    }

    #[test]
    fn unsupported_language_is_extraction_failure() {
        let err: UnimodelError = AdapterError::UnsupportedLanguage {
            path: "README.md".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCodeKind::ExtractionFailed);
        assert!(err.to_string().contains("README.md"));
    }

    #[test]
    fn io_error_names_the_path() {
        let err = UnimodelError::io(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.exit_code().code(), 2);
        assert!(err.to_string().starts_with("cannot access missing.json"));
    }
}
