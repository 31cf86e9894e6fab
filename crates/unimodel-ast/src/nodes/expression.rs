// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression, literal and pattern nodes.

use serde::{Deserialize, Serialize};
use unimodel_core::position::PositionInfo;

use super::{node_family, push_all, NodeKind, NodeMeta, NodeRef, SingleVariableDeclaration, TypeName};

node_family! {
    /// Any expression.
    Expression {
        SimpleName,
        Literal,
        ListLiteral,
        TupleLiteral,
        DictLiteral,
        MethodInvocation,
        FieldAccess,
        Assignment,
        InfixExpression,
        PrefixExpression,
        PostfixExpression,
        LambdaExpression,
        AwaitExpression,
        Comprehension,
        TernaryExpression,
        SliceExpression,
        IndexAccess,
        ParenthesizedExpression,
    }
}

node_family! {
    /// A pattern in a `case` clause.
    Pattern {
        LiteralPattern,
        VariablePattern,
    }
}

impl Expression {
    /// The identifier, if this is a bare name.
    pub fn as_simple_name(&self) -> Option<&SimpleName> {
        match self {
            Expression::SimpleName(name) => Some(name.as_ref()),
            _ => None,
        }
    }
}

fn push_expressions<'n>(out: &mut Vec<NodeRef<'n>>, expressions: &'n [Expression]) {
    out.extend(expressions.iter().map(Expression::as_node));
}

fn push_optional<'n>(out: &mut Vec<NodeRef<'n>>, expression: &'n Option<Expression>) {
    out.extend(expression.iter().map(Expression::as_node));
}

// ============================================================================
// Names
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleName {
    pub meta: NodeMeta,
    pub identifier: String,
}

impl SimpleName {
    pub fn new(meta: NodeMeta, identifier: impl Into<String>) -> Self {
        SimpleName {
            meta,
            identifier: identifier.into(),
        }
    }

    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}

/// `receiver.name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAccess {
    pub meta: NodeMeta,
    pub receiver: Expression,
    pub name: SimpleName,
}

impl FieldAccess {
    /// True when the receiver is a bare name equal to `receiver_name`.
    pub fn is_access_on(&self, receiver_name: &str) -> bool {
        self.receiver
            .as_simple_name()
            .is_some_and(|n| n.identifier == receiver_name)
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.receiver.as_node());
        out.push(NodeRef::from(&self.name));
    }
}

/// `receiver.name(arguments)` or `name(arguments)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInvocation {
    pub meta: NodeMeta,
    pub receiver: Option<Expression>,
    pub name: SimpleName,
    pub arguments: Vec<Expression>,
}

impl MethodInvocation {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_optional(out, &self.receiver);
        out.push(NodeRef::from(&self.name));
        push_expressions(out, &self.arguments);
    }
}

// ============================================================================
// Literals
// ============================================================================

/// Scalar literal values. Numbers keep their source spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LiteralValue {
    Number(String),
    String(String),
    Boolean(bool),
    Null,
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub meta: NodeMeta,
    pub value: LiteralValue,
}

impl Literal {
    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLiteral {
    pub meta: NodeMeta,
    pub elements: Vec<Expression>,
}

impl ListLiteral {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_expressions(out, &self.elements);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TupleLiteral {
    pub meta: NodeMeta,
    pub elements: Vec<Expression>,
}

impl TupleLiteral {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_expressions(out, &self.elements);
    }
}

/// One `key: value` entry of a dict literal. Not a node of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub key: Expression,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictLiteral {
    pub meta: NodeMeta,
    pub entries: Vec<DictEntry>,
}

impl DictLiteral {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        for entry in &self.entries {
            out.push(entry.key.as_node());
            out.push(entry.value.as_node());
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

/// `left op right` where op is `=`, `+=`, `:=` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub meta: NodeMeta,
    pub left: Expression,
    pub operator: String,
    pub right: Expression,
    /// Annotated assignment (`x: int = 1`).
    pub type_annotation: Option<TypeName>,
}

impl Assignment {
    /// The assigned name when the target is a bare name.
    pub fn target_name(&self) -> Option<&SimpleName> {
        self.left.as_simple_name()
    }

    /// The accessed field when the target is `receiver.field`.
    pub fn target_field(&self) -> Option<&FieldAccess> {
        match &self.left {
            Expression::FieldAccess(access) => Some(access.as_ref()),
            _ => None,
        }
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.left.as_node());
        out.extend(self.type_annotation.iter().map(NodeRef::from));
        out.push(self.right.as_node());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfixExpression {
    pub meta: NodeMeta,
    pub left: Expression,
    pub operator: String,
    pub right: Expression,
}

impl InfixExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.left.as_node());
        out.push(self.right.as_node());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixExpression {
    pub meta: NodeMeta,
    pub operator: String,
    pub operand: Expression,
}

impl PrefixExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.operand.as_node());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostfixExpression {
    pub meta: NodeMeta,
    pub operand: Expression,
    pub operator: String,
}

impl PostfixExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.operand.as_node());
    }
}

/// `cond ? a : b` / `a if cond else b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TernaryExpression {
    pub meta: NodeMeta,
    pub condition: Expression,
    pub then_expression: Expression,
    pub else_expression: Expression,
}

impl TernaryExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        // Python spells the branch before the condition; keep source order.
        let mut children = [
            self.condition.as_node(),
            self.then_expression.as_node(),
            self.else_expression.as_node(),
        ];
        children.sort_by_key(|c| c.position().start_offset);
        out.extend(children);
    }
}

// ============================================================================
// Functions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaExpression {
    pub meta: NodeMeta,
    pub parameters: Vec<SingleVariableDeclaration>,
    pub body: Expression,
}

impl LambdaExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_all(out, &self.parameters);
        out.push(self.body.as_node());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwaitExpression {
    pub meta: NodeMeta,
    pub expression: Expression,
}

impl AwaitExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.expression.as_node());
    }
}

// ============================================================================
// Comprehensions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComprehensionKind {
    List,
    Set,
    Dict,
    Generator,
}

/// `[element for target in iterable if condition]` and its set, dict and
/// generator forms. Dict comprehensions put the key in `element`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comprehension {
    pub meta: NodeMeta,
    pub kind: ComprehensionKind,
    pub element: Expression,
    pub value: Option<Expression>,
    pub clauses: Vec<ComprehensionClause>,
}

impl Comprehension {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.element.as_node());
        push_optional(out, &self.value);
        push_all(out, &self.clauses);
    }
}

/// One `for targets in iterable if ...` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensionClause {
    pub meta: NodeMeta,
    pub targets: Vec<Expression>,
    pub iterable: Expression,
    pub conditions: Vec<Expression>,
    pub is_async: bool,
}

impl ComprehensionClause {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_expressions(out, &self.targets);
        out.push(self.iterable.as_node());
        push_expressions(out, &self.conditions);
    }
}

// ============================================================================
// Subscripts
// ============================================================================

/// `lower:upper:step`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceExpression {
    pub meta: NodeMeta,
    pub lower: Option<Expression>,
    pub upper: Option<Expression>,
    pub step: Option<Expression>,
}

impl SliceExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        push_optional(out, &self.lower);
        push_optional(out, &self.upper);
        push_optional(out, &self.step);
    }
}

/// `target[index]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexAccess {
    pub meta: NodeMeta,
    pub target: Expression,
    pub index: Expression,
}

impl IndexAccess {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.target.as_node());
        out.push(self.index.as_node());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    pub meta: NodeMeta,
    pub expression: Expression,
}

impl ParenthesizedExpression {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.expression.as_node());
    }
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralPattern {
    pub meta: NodeMeta,
    pub literal: Literal,
}

impl LiteralPattern {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(NodeRef::from(&self.literal));
    }
}

/// Capture pattern binding the subject to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablePattern {
    pub meta: NodeMeta,
    pub name: SimpleName,
}

impl VariablePattern {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(NodeRef::from(&self.name));
    }
}
