// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Node factory.
//!
//! [`NodeFactory`] builds nodes for one file: it stamps every node with the
//! file's [`FileId`] and computes positions from byte ranges. Names,
//! literals, comments and type names take their text from the source slice,
//! so a range is all a caller supplies.
//!
//! Parsers and tests use it the same way:
//!
//! ```
//! use unimodel_ast::{FileId, NodeFactory};
//!
//! let f = NodeFactory::new(FileId::new(0), "x = 1");
//! let assignment = f.assignment(0..5, f.simple_name(0..1), f.number(4..5));
//! assert_eq!(assignment.target_name().map(|n| n.identifier.as_str()), Some("x"));
//! assert_eq!(assignment.meta.position.end_column, 6);
//! ```

use std::ops::Range;

use unimodel_core::position::LineIndex;
use unimodel_core::types::CommentKind;

use crate::nodes::*;
use crate::source::FileId;

pub struct NodeFactory<'s> {
    unit: FileId,
    text: &'s str,
    lines: LineIndex,
}

impl<'s> NodeFactory<'s> {
    pub fn new(unit: FileId, text: &'s str) -> Self {
        NodeFactory {
            unit,
            text,
            lines: LineIndex::new(text),
        }
    }

    pub fn unit(&self) -> FileId {
        self.unit
    }

    pub fn text(&self) -> &'s str {
        self.text
    }

    /// Metadata for the byte range `range`.
    pub fn meta(&self, range: Range<usize>) -> NodeMeta {
        NodeMeta::new(self.lines.position(range.start, range.end), self.unit)
    }

    /// Source text of `range`, empty if the range is not on char boundaries.
    pub fn slice(&self, range: Range<usize>) -> &'s str {
        self.text.get(range).unwrap_or_default()
    }

    /// Range of the first occurrence of `needle`.
    ///
    /// # Panics
    /// Panics if `needle` does not occur in the source.
    pub fn locate(&self, needle: &str) -> Range<usize> {
        self.locate_from(0, needle)
    }

    /// Range of the first occurrence of `needle` at or after byte `from`.
    ///
    /// # Panics
    /// Panics if `needle` does not occur there.
    pub fn locate_from(&self, from: usize, needle: &str) -> Range<usize> {
        match self.text.get(from..).and_then(|rest| rest.find(needle)) {
            Some(offset) => from + offset..from + offset + needle.len(),
            None => panic!("{:?} not found after byte {} in source", needle, from),
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// A compilation unit spanning the whole source.
    pub fn compilation_unit(&self) -> CompilationUnit {
        CompilationUnit::new(self.meta(0..self.text.len()))
    }

    pub fn type_declaration(&self, range: Range<usize>, name: SimpleName) -> TypeDeclaration {
        TypeDeclaration::new(self.meta(range), name)
    }

    pub fn method_declaration(&self, range: Range<usize>, name: SimpleName) -> MethodDeclaration {
        MethodDeclaration::new(self.meta(range), name)
    }

    /// A parameter whose name is the text of `range`.
    pub fn parameter(&self, range: Range<usize>) -> SingleVariableDeclaration {
        let name = self.simple_name(range.clone());
        SingleVariableDeclaration::new(self.meta(range), name)
    }

    /// `import a.b` style statement for the item at `item`.
    pub fn import(&self, range: Range<usize>, item: Range<usize>) -> ImportStatement {
        let mut import = ImportStatement::new(self.meta(range));
        import.items.push(self.import_item(item));
        import
    }

    /// `from module import items` style statement.
    pub fn from_import(
        &self,
        range: Range<usize>,
        module: Option<&str>,
        items: Vec<ImportItem>,
    ) -> ImportStatement {
        let mut import = ImportStatement::new(self.meta(range));
        import.module = module.map(str::to_string);
        import.items = items;
        import
    }

    /// `from module import *`.
    pub fn wildcard_import(&self, range: Range<usize>, module: &str) -> ImportStatement {
        let mut import = self.from_import(range, Some(module), Vec::new());
        import.is_wildcard = true;
        import
    }

    pub fn import_item(&self, range: Range<usize>) -> ImportItem {
        ImportItem {
            name: self.slice(range.clone()).to_string(),
            meta: self.meta(range),
            alias: None,
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&self, range: Range<usize>, statements: Vec<Statement>) -> Block {
        Block {
            meta: self.meta(range),
            statements,
        }
    }

    /// Wrap an expression; the statement spans the expression.
    pub fn expression_statement(&self, expression: impl Into<Expression>) -> ExpressionStatement {
        let expression = expression.into();
        ExpressionStatement {
            meta: *expression.meta(),
            expression,
        }
    }

    pub fn return_statement(
        &self,
        range: Range<usize>,
        expression: Option<Expression>,
    ) -> ReturnStatement {
        ReturnStatement {
            meta: self.meta(range),
            expression,
        }
    }

    pub fn pass_statement(&self, range: Range<usize>) -> PassStatement {
        PassStatement {
            meta: self.meta(range),
        }
    }

    pub fn if_statement(
        &self,
        range: Range<usize>,
        condition: impl Into<Expression>,
        then_branch: Block,
    ) -> IfStatement {
        IfStatement {
            meta: self.meta(range),
            condition: condition.into(),
            then_branch,
            else_branch: None,
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// A name whose identifier is the text of `range`.
    pub fn simple_name(&self, range: Range<usize>) -> SimpleName {
        SimpleName::new(self.meta(range.clone()), self.slice(range))
    }

    pub fn field_access(
        &self,
        range: Range<usize>,
        receiver: impl Into<Expression>,
        name: SimpleName,
    ) -> FieldAccess {
        FieldAccess {
            meta: self.meta(range),
            receiver: receiver.into(),
            name,
        }
    }

    /// `left = right`
    pub fn assignment(
        &self,
        range: Range<usize>,
        left: impl Into<Expression>,
        right: impl Into<Expression>,
    ) -> Assignment {
        Assignment {
            meta: self.meta(range),
            left: left.into(),
            operator: "=".to_string(),
            right: right.into(),
            type_annotation: None,
        }
    }

    pub fn method_invocation(
        &self,
        range: Range<usize>,
        receiver: Option<Expression>,
        name: SimpleName,
        arguments: Vec<Expression>,
    ) -> MethodInvocation {
        MethodInvocation {
            meta: self.meta(range),
            receiver,
            name,
            arguments,
        }
    }

    pub fn number(&self, range: Range<usize>) -> Literal {
        let value = LiteralValue::Number(self.slice(range.clone()).to_string());
        self.literal(range, value)
    }

    /// A string literal; surrounding quotes are stripped from the value.
    pub fn string(&self, range: Range<usize>) -> Literal {
        let raw = self.slice(range.clone());
        let value = raw.trim_matches(|c| c == '"' || c == '\'').to_string();
        self.literal(range, LiteralValue::String(value))
    }

    pub fn literal(&self, range: Range<usize>, value: LiteralValue) -> Literal {
        Literal {
            meta: self.meta(range),
            value,
        }
    }

    pub fn list_literal(&self, range: Range<usize>, elements: Vec<Expression>) -> ListLiteral {
        ListLiteral {
            meta: self.meta(range),
            elements,
        }
    }

    pub fn dict_literal(&self, range: Range<usize>, entries: Vec<DictEntry>) -> DictLiteral {
        DictLiteral {
            meta: self.meta(range),
            entries,
        }
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// A type name whose text is the source of `range`.
    pub fn type_name(&self, range: Range<usize>) -> TypeName {
        TypeName::new(self.meta(range.clone()), self.slice(range))
    }

    /// A marker annotation named `name`, spanning `range`.
    pub fn annotation(&self, range: Range<usize>, name: &str) -> Annotation {
        Annotation::new(self.meta(range), name)
    }

    /// A comment spanning `range`; the content is the text with markers removed.
    pub fn comment(&self, range: Range<usize>, kind: CommentKind) -> Comment {
        let raw = self.slice(range.clone());
        let content = match kind {
            CommentKind::Line => raw.trim_start_matches(['#', '/']),
            CommentKind::Block => raw.trim_start_matches("/*").trim_end_matches("*/"),
            CommentKind::Doc => raw
                .trim_start_matches("/**")
                .trim_end_matches("*/")
                .trim_matches('"'),
        };
        Comment {
            meta: self.meta(range),
            content: content.trim().to_string(),
            kind,
        }
    }
}
