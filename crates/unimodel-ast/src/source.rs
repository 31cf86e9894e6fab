// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Compilation-unit table.
//!
//! Nodes never point back into their tree. They carry a [`FileId`], and a
//! [`SourceSet`] resolves that id to the file's path, text and root node.
//!
//! # Usage
//!
//! ```
//! use unimodel_ast::{NodeFactory, SourceSet};
//!
//! let mut sources = SourceSet::new();
//! let id = sources
//!     .add_with("src/app/main.py", "pass\n", |id, text| {
//!         let f = NodeFactory::new(id, text);
//!         let mut unit = f.compilation_unit();
//!         unit.statements.push(f.pass_statement(0..4).into());
//!         unit
//!     })
//!     .unwrap();
//! let file = sources.get(id).unwrap();
//! assert_eq!(file.path, "src/app/main.py");
//! assert_eq!(file.unit.statements.len(), 1);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AstError, AstResult};
use crate::nodes::{CompilationUnit, Node};

// ============================================================================
// FileId
// ============================================================================

/// Key of a compilation unit in a [`SourceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(id: u32) -> Self {
        FileId(id)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file_{}", self.0)
    }
}

// ============================================================================
// SourceSet
// ============================================================================

/// One parsed file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub id: FileId,
    /// Path with forward slashes.
    pub path: String,
    pub text: String,
    pub unit: CompilationUnit,
}

impl SourceFile {
    /// Source text covered by `node`, if it belongs to this file.
    pub fn text_of<N: Node + ?Sized>(&self, node: &N) -> Option<&str> {
        if node.unit() != self.id {
            return None;
        }
        node.position().slice(&self.text)
    }
}

/// All compilation units of one extraction run, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    files: Vec<SourceFile>,
    by_path: HashMap<String, FileId>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next inserted file will get. Parsers stamp it on every node.
    pub fn next_id(&self) -> FileId {
        FileId(self.files.len() as u32)
    }

    /// Insert a parsed file.
    ///
    /// The unit must have been built with [`SourceSet::next_id`] and the path
    /// must not be present yet.
    pub fn insert(
        &mut self,
        path: impl AsRef<str>,
        text: impl Into<String>,
        unit: CompilationUnit,
    ) -> AstResult<FileId> {
        let path = path.as_ref().replace('\\', "/");
        if self.by_path.contains_key(&path) {
            return Err(AstError::DuplicatePath { path });
        }
        let id = self.next_id();
        if unit.meta.unit != id {
            return Err(AstError::UnitMismatch {
                path,
                expected: id,
                found: unit.meta.unit,
            });
        }
        self.by_path.insert(path.clone(), id);
        self.files.push(SourceFile {
            id,
            path,
            text: text.into(),
            unit,
        });
        Ok(id)
    }

    /// Build a unit with the right id and insert it.
    pub fn add_with<F>(&mut self, path: impl AsRef<str>, text: &str, build: F) -> AstResult<FileId>
    where
        F: FnOnce(FileId, &str) -> CompilationUnit,
    {
        let unit = build(self.next_id(), text);
        self.insert(path, text, unit)
    }

    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    pub fn get_mut(&mut self, id: FileId) -> Option<&mut SourceFile> {
        self.files.get_mut(id.index())
    }

    pub fn lookup(&self, path: &str) -> Option<&SourceFile> {
        self.by_path.get(path).and_then(|id| self.get(*id))
    }

    /// Resolve a node's back-reference to its file.
    pub fn file_of<N: Node + ?Sized>(&self, node: &N) -> Option<&SourceFile> {
        self.get(node.unit())
    }

    /// Source text covered by `node`.
    pub fn text_of<N: Node + ?Sized>(&self, node: &N) -> Option<&str> {
        self.file_of(node).and_then(|file| file.text_of(node))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SourceFile> {
        self.files.iter_mut()
    }

    /// Files as a mutable slice, for callers that split work across threads.
    pub fn files_mut(&mut self) -> &mut [SourceFile] {
        &mut self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::NodeFactory;

    fn unit(id: FileId, text: &str) -> CompilationUnit {
        NodeFactory::new(id, text).compilation_unit()
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let mut sources = SourceSet::new();
        let a = sources.add_with("a.py", "", unit).unwrap();
        let b = sources.add_with("b.py", "", unit).unwrap();
        assert_eq!(a, FileId::new(0));
        assert_eq!(b, FileId::new(1));
        assert_eq!(sources.len(), 2);
        assert_eq!(sources.lookup("b.py").map(|f| f.id), Some(b));
    }

    #[test]
    fn duplicate_path_rejected() {
        let mut sources = SourceSet::new();
        sources.add_with("src\\a.py", "", unit).unwrap();
        let err = sources.add_with("src/a.py", "", unit).unwrap_err();
        assert!(matches!(err, AstError::DuplicatePath { ref path } if path == "src/a.py"));
    }

    #[test]
    fn unit_mismatch_rejected() {
        let mut sources = SourceSet::new();
        let stray = unit(FileId::new(5), "");
        let err = sources.insert("a.py", "", stray).unwrap_err();
        assert_eq!(
            err,
            AstError::UnitMismatch {
                path: "a.py".to_string(),
                expected: FileId::new(0),
                found: FileId::new(5),
            }
        );
        assert!(sources.is_empty());
    }

    #[test]
    fn back_reference_resolves_text() {
        let text = "def f(): pass\n";
        let mut sources = SourceSet::new();
        let id = sources
            .add_with("m.py", text, |id, text| {
                let f = NodeFactory::new(id, text);
                let mut unit = f.compilation_unit();
                let method = f.method_declaration(0..13, f.simple_name(4..5));
                unit.methods.push(method);
                unit
            })
            .unwrap();
        let file = sources.get(id).unwrap();
        let method = &file.unit.methods[0];
        assert_eq!(sources.text_of(method), Some("def f(): pass"));
        assert_eq!(sources.text_of(&method.name), Some("f"));
    }
}
