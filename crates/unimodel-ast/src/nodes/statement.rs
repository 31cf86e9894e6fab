// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement nodes.

use serde::{Deserialize, Serialize};
use unimodel_core::position::PositionInfo;

use super::{
    node_family, push_all, Assignment, Expression, ImportStatement, MethodDeclaration, NodeKind,
    NodeMeta, NodeRef, Pattern, SimpleName, TypeDeclaration,
};

node_family! {
    /// Any statement. Nested declarations are statements too.
    Statement {
        Block,
        IfStatement,
        ForStatement,
        WhileStatement,
        TryStatement,
        ThrowStatement,
        ReturnStatement,
        BreakStatement,
        ContinueStatement,
        PassStatement,
        DelStatement,
        GlobalStatement,
        NonlocalStatement,
        WithStatement,
        AssertStatement,
        SwitchStatement,
        YieldStatement,
        AsyncStatement,
        ExpressionStatement,
        ImportStatement,
        TypeDeclaration,
        MethodDeclaration,
    }
}

impl Statement {
    /// The assignment wrapped by an expression statement, if this is one.
    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            Statement::ExpressionStatement(stmt) => match &stmt.expression {
                Expression::Assignment(assignment) => Some(assignment.as_ref()),
                _ => None,
            },
            _ => None,
        }
    }
}

fn push_statements<'n>(out: &mut Vec<NodeRef<'n>>, statements: &'n [Statement]) {
    out.extend(statements.iter().map(Statement::as_node));
}

fn push_expressions<'n>(out: &mut Vec<NodeRef<'n>>, expressions: &'n [Expression]) {
    out.extend(expressions.iter().map(Expression::as_node));
}

fn push_optional<'n>(out: &mut Vec<NodeRef<'n>>, expression: &'n Option<Expression>) {
    out.extend(expression.iter().map(Expression::as_node));
}

// ============================================================================
// Blocks and control flow
// ============================================================================

/// A sequence of statements. An empty block is a legal empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub meta: NodeMeta,
    pub statements: Vec<Statement>,
}

impl Block {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_statements(out, &self.statements);
    }
}

/// `if` with an optional `else` branch. `elif` chains nest as `else_branch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatement {
    pub meta: NodeMeta,
    pub condition: Expression,
    pub then_branch: Block,
    pub else_branch: Option<Statement>,
}

impl IfStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.condition.as_node());
        out.push(NodeRef::from(&self.then_branch));
        out.extend(self.else_branch.iter().map(Statement::as_node));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForStatement {
    pub meta: NodeMeta,
    pub targets: Vec<Expression>,
    pub iterable: Expression,
    pub body: Block,
    pub else_body: Option<Block>,
    pub is_async: bool,
}

impl ForStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_expressions(out, &self.targets);
        out.push(self.iterable.as_node());
        out.push(NodeRef::from(&self.body));
        out.extend(self.else_body.iter().map(NodeRef::from));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub meta: NodeMeta,
    pub condition: Expression,
    pub body: Block,
    pub else_body: Option<Block>,
}

impl WhileStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.condition.as_node());
        out.push(NodeRef::from(&self.body));
        out.extend(self.else_body.iter().map(NodeRef::from));
    }
}

// ============================================================================
// Exceptions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryStatement {
    pub meta: NodeMeta,
    pub body: Block,
    pub handlers: Vec<CatchClause>,
    pub else_body: Option<Block>,
    pub finally_body: Option<Block>,
}

impl TryStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(NodeRef::from(&self.body));
        push_all(out, &self.handlers);
        out.extend(self.else_body.iter().map(NodeRef::from));
        out.extend(self.finally_body.iter().map(NodeRef::from));
    }
}

/// `except E as e:` / `catch (E e)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchClause {
    pub meta: NodeMeta,
    pub exception_types: Vec<Expression>,
    pub name: Option<SimpleName>,
    pub body: Block,
}

impl CatchClause {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_expressions(out, &self.exception_types);
        out.extend(self.name.iter().map(NodeRef::from));
        out.push(NodeRef::from(&self.body));
    }
}

/// `raise` / `throw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowStatement {
    pub meta: NodeMeta,
    pub expression: Option<Expression>,
    pub cause: Option<Expression>,
}

impl ThrowStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_optional(out, &self.expression);
        push_optional(out, &self.cause);
    }
}

// ============================================================================
// Simple statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub meta: NodeMeta,
    pub expression: Option<Expression>,
}

impl ReturnStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_optional(out, &self.expression);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakStatement {
    pub meta: NodeMeta,
}

impl BreakStatement {
    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueStatement {
    pub meta: NodeMeta,
}

impl ContinueStatement {
    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStatement {
    pub meta: NodeMeta,
}

impl PassStatement {
    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelStatement {
    pub meta: NodeMeta,
    pub targets: Vec<Expression>,
}

impl DelStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_expressions(out, &self.targets);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStatement {
    pub meta: NodeMeta,
    pub names: Vec<SimpleName>,
}

impl GlobalStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_all(out, &self.names);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonlocalStatement {
    pub meta: NodeMeta,
    pub names: Vec<SimpleName>,
}

impl NonlocalStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_all(out, &self.names);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertStatement {
    pub meta: NodeMeta,
    pub condition: Expression,
    pub message: Option<Expression>,
}

impl AssertStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.condition.as_node());
        push_optional(out, &self.message);
    }
}

/// `yield x` / `yield from x` in statement position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldStatement {
    pub meta: NodeMeta,
    pub value: Option<Expression>,
    pub is_from: bool,
}

impl YieldStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_optional(out, &self.value);
    }
}

/// `async` prefix on a compound statement (`async for`, `async with`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncStatement {
    pub meta: NodeMeta,
    pub body: Statement,
}

impl AsyncStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.body.as_node());
    }
}

/// An expression evaluated for its effect (calls, assignments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub meta: NodeMeta,
    pub expression: Expression,
}

impl ExpressionStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.expression.as_node());
    }
}

// ============================================================================
// With
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithStatement {
    pub meta: NodeMeta,
    pub items: Vec<WithItem>,
    pub body: Block,
}

impl WithStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_all(out, &self.items);
        out.push(NodeRef::from(&self.body));
    }
}

/// `ctx as target` inside a `with` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithItem {
    pub meta: NodeMeta,
    pub context: Expression,
    pub target: Option<Expression>,
}

impl WithItem {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.context.as_node());
        push_optional(out, &self.target);
    }
}

// ============================================================================
// Switch / match
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub meta: NodeMeta,
    pub subject: Expression,
    pub cases: Vec<CaseClause>,
}

impl SwitchStatement {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.subject.as_node());
        push_all(out, &self.cases);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseClause {
    pub meta: NodeMeta,
    pub pattern: Pattern,
    pub guard: Option<Expression>,
    pub body: Block,
}

impl CaseClause {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.pattern.as_node());
        push_optional(out, &self.guard);
        out.push(NodeRef::from(&self.body));
    }
}
