// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Metadata nodes: annotations, comments and type names.

use serde::{Deserialize, Serialize};
use unimodel_core::types::CommentKind;

use super::{Expression, NodeMeta, NodeRef};

/// A decorator or attribute.
///
/// `@dataclass(frozen=True)` has name `dataclass`, no positional arguments
/// and one member-value pair `frozen = True`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub meta: NodeMeta,
    /// Dotted name as written (`functools.wraps`).
    pub name: String,
    pub arguments: Vec<Expression>,
    pub member_values: Vec<MemberValuePair>,
}

impl Annotation {
    pub fn new(meta: NodeMeta, name: impl Into<String>) -> Self {
        Annotation {
            meta,
            name: name.into(),
            arguments: Vec::new(),
            member_values: Vec::new(),
        }
    }

    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.extend(self.arguments.iter().map(Expression::as_node));
        out.extend(self.member_values.iter().map(NodeRef::from));
    }
}

/// `name = value` inside an annotation's argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberValuePair {
    pub meta: NodeMeta,
    pub name: String,
    pub value: Expression,
}

impl MemberValuePair {
    pub(crate) fn push_children<'n>(&'n self, out: &mut Vec<NodeRef<'n>>) {
        out.push(self.value.as_node());
    }
}

/// A line, block or doc comment. `content` excludes the comment markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub meta: NodeMeta,
    pub content: String,
    pub kind: CommentKind,
}

impl Comment {
    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }

    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Doc
    }

    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}

/// A type as written in an annotation, super-type list or return position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    pub meta: NodeMeta,
    pub name: String,
}

impl TypeName {
    pub fn new(meta: NodeMeta, name: impl Into<String>) -> Self {
        TypeName {
            meta,
            name: name.into(),
        }
    }

    pub(crate) fn push_children<'n>(&'n self, _out: &mut Vec<NodeRef<'n>>) {}
}
