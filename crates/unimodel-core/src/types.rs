//! Common types shared between the AST and the unified model.
//!
//! This module contains types used by both the AST node model and the model
//! entities, avoiding a dependency from the model on AST internals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::PositionInfo;

// ============================================================================
// Code Element Type
// ============================================================================

/// Kind of source element a [`LocationInfo`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeElementType {
    TypeDeclaration,
    MethodDeclaration,
    FieldDeclaration,
    SingleVariableDeclaration,
    ImportDeclaration,
    Annotation,
    Type,
    LineComment,
    BlockComment,
    /// A statement inside an operation body or a class/module container.
    Statement,
}

impl CodeElementType {
    /// Returns the human-readable tag used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeElementType::TypeDeclaration => "type declaration",
            CodeElementType::MethodDeclaration => "method declaration",
            CodeElementType::FieldDeclaration => "field declaration",
            CodeElementType::SingleVariableDeclaration => "single variable declaration",
            CodeElementType::ImportDeclaration => "import declaration",
            CodeElementType::Annotation => "annotation",
            CodeElementType::Type => "type",
            CodeElementType::LineComment => "line comment",
            CodeElementType::BlockComment => "block comment",
            CodeElementType::Statement => "statement",
        }
    }
}

impl fmt::Display for CodeElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LocationInfo
// ============================================================================

/// Location of a model element, precise enough to map it back to a source range.
///
/// - `source_folder`: inferred source root (`""` for the project root)
/// - `file_path`: path with forward slashes regardless of host convention
/// - `position`: the originating node's span
/// - `element_type`: what kind of element this is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationInfo {
    pub source_folder: String,
    pub file_path: String,
    pub position: PositionInfo,
    pub element_type: CodeElementType,
}

impl LocationInfo {
    /// Create a new location. Backslashes in `file_path` are normalized to `/`.
    pub fn new(
        source_folder: impl Into<String>,
        file_path: impl AsRef<str>,
        position: PositionInfo,
        element_type: CodeElementType,
    ) -> Self {
        LocationInfo {
            source_folder: source_folder.into(),
            file_path: file_path.as_ref().replace('\\', "/"),
            position,
            element_type,
        }
    }

    /// Same file and folder, different node and element kind.
    pub fn sibling(&self, position: PositionInfo, element_type: CodeElementType) -> Self {
        LocationInfo {
            source_folder: self.source_folder.clone(),
            file_path: self.file_path.clone(),
            position,
            element_type,
        }
    }

    /// Comparison key for deterministic sorting: (file, start offset, end offset).
    fn sort_key(&self) -> (&str, usize, usize) {
        (
            &self.file_path,
            self.position.start_offset,
            self.position.end_offset,
        )
    }
}

impl PartialOrd for LocationInfo {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocationInfo {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.element_type.as_str().cmp(other.element_type.as_str()))
    }
}

// ============================================================================
// Visibility
// ============================================================================

/// Language-agnostic access level of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Package => "package",
            Visibility::Private => "private",
        }
    }
}

// ============================================================================
// CommentKind
// ============================================================================

/// The three comment forms the AST distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    Line,
    Block,
    /// Documentation comment (docstring, `///`, `/** */`).
    Doc,
}

impl CommentKind {
    /// Element kind used for the location of a converted comment.
    ///
    /// Doc comments are reported as block comments.
    pub fn element_type(&self) -> CodeElementType {
        match self {
            CommentKind::Line => CodeElementType::LineComment,
            CommentKind::Block | CommentKind::Doc => CodeElementType::BlockComment,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
