// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Declaration nodes: compilation units, types, methods, parameters, imports.

use serde::{Deserialize, Serialize};
use unimodel_core::types::Visibility;

use super::{
    push_all, Annotation, Assignment, Block, Comment, Expression, NodeMeta, NodeRef, SimpleName,
    Statement, TypeName,
};

// ============================================================================
// CompilationUnit
// ============================================================================

/// Root node for one source file.
///
/// Holds everything declared at file scope. Anything here that is not inside
/// a [`TypeDeclaration`] belongs to the file's module pseudo-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub meta: NodeMeta,
    pub imports: Vec<ImportStatement>,
    pub types: Vec<TypeDeclaration>,
    /// Top-level functions.
    pub methods: Vec<MethodDeclaration>,
    /// Top-level statements other than imports and declarations.
    pub statements: Vec<Statement>,
    pub comments: Vec<Comment>,
}

impl CompilationUnit {
    pub fn new(meta: NodeMeta) -> Self {
        CompilationUnit {
            meta,
            imports: Vec::new(),
            types: Vec::new(),
            methods: Vec::new(),
            statements: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// True when nothing at file scope lives outside a type declaration.
    pub fn has_module_scope_content(&self) -> bool {
        !self.methods.is_empty()
            || !self.statements.is_empty()
            || !self.comments.is_empty()
            || !self.imports.is_empty()
    }

    /// Module-scope assignments: top-level expression statements wrapping an
    /// assignment to a simple name.
    pub fn module_assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.statements
            .iter()
            .filter_map(Statement::as_assignment)
            .filter(|a| a.target_name().is_some())
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        // Source order: merge every child list by start offset.
        let mut children: Vec<NodeRef<'n>> = Vec::new();
        push_all(&mut children, &self.imports);
        push_all(&mut children, &self.types);
        push_all(&mut children, &self.methods);
        children.extend(self.statements.iter().map(Statement::as_node));
        push_all(&mut children, &self.comments);
        children.sort_by_key(|c| c.position().start_offset);
        out.extend(children);
    }
}

// ============================================================================
// TypeDeclaration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TypeModifiers {
    pub is_abstract: bool,
    pub is_interface: bool,
    pub is_final: bool,
    pub is_static: bool,
    pub is_enum: bool,
    pub is_record: bool,
    pub is_annotation: bool,
    pub is_top_level: bool,
}

/// A class, interface, enum or record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub meta: NodeMeta,
    pub name: SimpleName,
    /// Declared super types. The first is the primary superclass.
    pub super_types: Vec<TypeName>,
    pub methods: Vec<MethodDeclaration>,
    /// Side-effecting class-body statements.
    pub statements: Vec<Statement>,
    /// Class-scope assignments (`x = 1` directly in the class body).
    pub assignments: Vec<Assignment>,
    pub annotations: Vec<Annotation>,
    pub comments: Vec<Comment>,
    pub modifiers: TypeModifiers,
    pub visibility: Visibility,
}

impl TypeDeclaration {
    pub fn new(meta: NodeMeta, name: SimpleName) -> Self {
        TypeDeclaration {
            meta,
            name,
            super_types: Vec::new(),
            methods: Vec::new(),
            statements: Vec::new(),
            assignments: Vec::new(),
            annotations: Vec::new(),
            comments: Vec::new(),
            modifiers: TypeModifiers {
                is_top_level: true,
                ..TypeModifiers::default()
            },
            visibility: Visibility::Public,
        }
    }

    pub fn primary_super_type(&self) -> Option<&TypeName> {
        self.super_types.first()
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_all(out, &self.annotations);
        out.push(NodeRef::from(&self.name));
        push_all(out, &self.super_types);
        let mut body: Vec<NodeRef<'n>> = Vec::new();
        push_all(&mut body, &self.assignments);
        push_all(&mut body, &self.methods);
        body.extend(self.statements.iter().map(Statement::as_node));
        push_all(&mut body, &self.comments);
        body.sort_by_key(|c| c.position().start_offset);
        out.extend(body);
    }
}

// ============================================================================
// MethodDeclaration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MethodModifiers {
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub is_native: bool,
    pub is_synchronized: bool,
    pub is_constructor: bool,
    pub is_async: bool,
}

/// A method or a free function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub meta: NodeMeta,
    pub name: SimpleName,
    pub parameters: Vec<SingleVariableDeclaration>,
    /// Declared return type. `None` until normalized.
    pub return_type: Option<TypeName>,
    /// Absent for abstract or bodiless declarations.
    pub body: Option<Block>,
    pub annotations: Vec<Annotation>,
    pub comments: Vec<Comment>,
    pub modifiers: MethodModifiers,
    pub visibility: Visibility,
}

impl MethodDeclaration {
    pub fn new(meta: NodeMeta, name: SimpleName) -> Self {
        MethodDeclaration {
            meta,
            name,
            parameters: Vec::new(),
            return_type: None,
            body: None,
            annotations: Vec::new(),
            comments: Vec::new(),
            modifiers: MethodModifiers::default(),
            visibility: Visibility::Public,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.name.identifier
    }

    /// Check for an annotation by name, ignoring ASCII case.
    pub fn has_annotation_ignore_case(&self, name: &str) -> bool {
        self.annotations
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Direct statements of the body, empty if there is no body.
    pub fn body_statements(&self) -> &[Statement] {
        match &self.body {
            Some(body) => &body.statements,
            None => &[],
        }
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        // Comments may sit anywhere, including inside the body.
        let mut children: Vec<NodeRef<'n>> = Vec::new();
        push_all(&mut children, &self.annotations);
        children.push(NodeRef::from(&self.name));
        push_all(&mut children, &self.parameters);
        children.extend(self.return_type.iter().map(NodeRef::from));
        push_all(&mut children, &self.comments);
        children.extend(self.body.iter().map(NodeRef::from));
        children.sort_by_key(|c| c.position().start_offset);
        out.extend(children);
    }
}

// ============================================================================
// SingleVariableDeclaration
// ============================================================================

/// A parameter (or a lambda parameter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleVariableDeclaration {
    pub meta: NodeMeta,
    pub name: SimpleName,
    pub type_annotation: Option<TypeName>,
    pub default_value: Option<Expression>,
    /// `*args`
    pub varargs: bool,
    /// `**kwargs`
    pub kwargs: bool,
    pub is_final: bool,
}

impl SingleVariableDeclaration {
    pub fn new(meta: NodeMeta, name: SimpleName) -> Self {
        SingleVariableDeclaration {
            meta,
            name,
            type_annotation: None,
            default_value: None,
            varargs: false,
            kwargs: false,
            is_final: false,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.name.identifier
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(NodeRef::from(&self.name));
        out.extend(self.type_annotation.iter().map(NodeRef::from));
        out.extend(self.default_value.iter().map(Expression::as_node));
    }
}

// ============================================================================
// Imports
// ============================================================================

/// One import statement.
///
/// - `import a.b` → `module: None`, items `[a.b]`
/// - `from a import b, c` → `module: Some("a")`, items `[b, c]`
/// - `from a import *` → `module: Some("a")`, `is_wildcard`
/// - `from .. import x` → `module: None`, `relative_level: 2`, items `[x]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    pub meta: NodeMeta,
    pub module: Option<String>,
    pub items: Vec<ImportItem>,
    pub is_wildcard: bool,
    /// Number of leading dots in a relative import.
    pub relative_level: u32,
    pub is_static: bool,
}

impl ImportStatement {
    pub fn new(meta: NodeMeta) -> Self {
        ImportStatement {
            meta,
            module: None,
            items: Vec::new(),
            is_wildcard: false,
            relative_level: 0,
            is_static: false,
        }
    }

    /// True for `from X import ...` forms.
    pub fn is_from_import(&self) -> bool {
        self.module.is_some() || self.relative_level > 0
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_all(out, &self.items);
    }
}

/// One imported name with its optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportItem {
    pub meta: NodeMeta,
    pub name: String,
    pub alias: Option<String>,
}

impl ImportItem {
    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}
