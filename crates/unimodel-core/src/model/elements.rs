//! Leaf model elements: annotations, comments, imports, generalizations,
//! variable declarations and statement containers.

use serde::{Deserialize, Serialize};

use crate::types::{CommentKind, LocationInfo};

// ============================================================================
// Annotations
// ============================================================================

/// A decorator or attribute attached to a class or operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAnnotation {
    pub name: String,
    /// Positional argument texts, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
    /// Named `key=value` pairs, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_values: Vec<(String, String)>,
    pub location: LocationInfo,
}

impl ModelAnnotation {
    pub fn new(name: impl Into<String>, location: LocationInfo) -> Self {
        ModelAnnotation {
            name: name.into(),
            arguments: Vec::new(),
            member_values: Vec::new(),
            location,
        }
    }

    /// True for a marker annotation (no arguments at all).
    pub fn is_marker(&self) -> bool {
        self.arguments.is_empty() && self.member_values.is_empty()
    }
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelComment {
    pub text: String,
    pub kind: CommentKind,
    pub location: LocationInfo,
}

impl ModelComment {
    pub fn new(text: impl Into<String>, kind: CommentKind, location: LocationInfo) -> Self {
        ModelComment {
            text: text.into(),
            kind,
            location,
        }
    }
}

// ============================================================================
// Imports
// ============================================================================

/// One imported name, already flattened from its import statement.
///
/// `from a import b, c` yields two imports (`a.b` and `a.c`); a wildcard
/// import yields one on-demand import named after the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelImport {
    /// Qualified name of the imported module or item.
    pub name: String,
    /// Wildcard import (`from a import *`, `using a;`).
    pub on_demand: bool,
    /// Static import. Always false for languages without static imports.
    pub is_static: bool,
    pub location: LocationInfo,
}

impl ModelImport {
    pub fn new(name: impl Into<String>, location: LocationInfo) -> Self {
        ModelImport {
            name: name.into(),
            on_demand: false,
            is_static: false,
            location,
        }
    }

    pub fn on_demand(mut self) -> Self {
        self.on_demand = true;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Last dotted segment of the imported name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

// ============================================================================
// Generalizations
// ============================================================================

/// Inheritance edge from a class to one of its (resolved) super-type names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelGeneralization {
    /// Qualified name of the subclass.
    pub child: String,
    /// Resolved name of the super type.
    pub parent: String,
    /// Location of the super-type reference in the class header.
    pub location: LocationInfo,
}

// ============================================================================
// Variable declarations
// ============================================================================

/// Declaration metadata behind an attribute or a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    pub type_name: String,
    /// Source text of the initializer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
    pub is_attribute: bool,
    pub is_parameter: bool,
    pub is_varargs: bool,
    pub location: LocationInfo,
}

impl VariableDeclaration {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, location: LocationInfo) -> Self {
        VariableDeclaration {
            name: name.into(),
            type_name: type_name.into(),
            initializer: None,
            is_attribute: false,
            is_parameter: false,
            is_varargs: false,
            location,
        }
    }

    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    pub fn as_attribute(mut self) -> Self {
        self.is_attribute = true;
        self
    }

    pub fn as_parameter(mut self, is_varargs: bool) -> Self {
        self.is_parameter = true;
        self.is_varargs = is_varargs;
        self
    }
}

// ============================================================================
// Statement containers
// ============================================================================

/// One direct statement of a body, kept as source text plus location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFragment {
    /// Statement kind tag (e.g. `"expression_statement"`, `"if"`).
    pub kind: String,
    pub text: String,
    pub location: LocationInfo,
}

/// Ordered body statements of an operation, a class or a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementContainer {
    /// Qualified name of the owning class or operation.
    pub owner: String,
    pub location: LocationInfo,
    pub statements: Vec<CodeFragment>,
}

impl StatementContainer {
    pub fn new(owner: impl Into<String>, location: LocationInfo) -> Self {
        StatementContainer {
            owner: owner.into(),
            location,
            statements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}
