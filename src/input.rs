//! JSON input for the CLI.
//!
//! Parsers run out of process and hand over their ASTs as one JSON document:
//!
//! ```json
//! { "files": [ { "path": "src/pkg/a.py", "text": "...", "unit": { ... } } ] }
//! ```
//!
//! Files are inserted in document order, so the unit of the n-th file must be
//! stamped with `FileId(n)`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use unimodel_ast::{CompilationUnit, SourceSet};

use crate::error::UnimodelError;

/// One parsed source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    pub path: String,
    pub text: String,
    pub unit: CompilationUnit,
}

/// The whole input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBundle {
    pub files: Vec<InputFile>,
}

impl InputBundle {
    pub fn into_sources(self) -> Result<SourceSet, UnimodelError> {
        let mut sources = SourceSet::new();
        for file in self.files {
            sources.insert(file.path, file.text, file.unit)?;
        }
        Ok(sources)
    }
}

/// Parse an input document into a [`SourceSet`].
pub fn load_sources(json: &str) -> Result<SourceSet, UnimodelError> {
    let bundle: InputBundle = serde_json::from_str(json)?;
    debug!(files = bundle.files.len(), "loaded input bundle");
    bundle.into_sources()
}

/// Read and parse an input document from disk.
pub fn read_sources(path: &Path) -> Result<SourceSet, UnimodelError> {
    let json = fs::read_to_string(path).map_err(|e| UnimodelError::io(path, e))?;
    load_sources(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unimodel_ast::{AstError, FileId, NodeFactory};

    fn file(id: u32, path: &str, text: &str) -> InputFile {
        let unit = NodeFactory::new(FileId::new(id), text).compilation_unit();
        InputFile {
            path: path.to_string(),
            text: text.to_string(),
            unit,
        }
    }

    #[test]
    fn files_keep_document_order() {
        let bundle = InputBundle {
            files: vec![file(0, "src/b.py", "b = 1\n"), file(1, "src/a.py", "")],
        };
        let json = serde_json::to_string(&bundle).unwrap();
        let sources = load_sources(&json).unwrap();
        let paths: Vec<&str> = sources.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/b.py", "src/a.py"]);
    }

    #[test]
    fn misnumbered_unit_is_rejected() {
        let bundle = InputBundle {
            files: vec![file(1, "src/a.py", "")],
        };
        let json = serde_json::to_string(&bundle).unwrap();
        let err = load_sources(&json).unwrap_err();
        assert!(matches!(
            err,
            UnimodelError::Ast(AstError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = load_sources("{ \"files\": [ }").unwrap_err();
        assert!(matches!(err, UnimodelError::Json(_)));
    }

    #[test]
    fn empty_bundle_loads_empty_set() {
        let sources = load_sources(r#"{ "files": [] }"#).unwrap();
        assert!(sources.is_empty());
    }
}
