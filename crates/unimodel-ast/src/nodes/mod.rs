// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! AST node definitions.
//!
//! Nodes fall into five families:
//! - declarations ([`CompilationUnit`], [`TypeDeclaration`], [`MethodDeclaration`],
//!   [`SingleVariableDeclaration`], [`ImportStatement`])
//! - statements ([`Statement`])
//! - expressions ([`Expression`])
//! - patterns ([`Pattern`])
//! - metadata ([`Annotation`], [`Comment`], [`TypeName`])
//!
//! Every node owns its children and carries a [`NodeMeta`]: its source span
//! and the [`FileId`] of the compilation unit it belongs to. The file id is a
//! plain key into a [`crate::SourceSet`], never a pointer back into the tree.
//!
//! [`NodeRef`] is a borrowed view of any concrete node. It is what the walk
//! functions and [`Node::children`] hand out.

mod declaration;
mod expression;
mod metadata;
mod statement;

pub use declaration::*;
pub use expression::*;
pub use metadata::*;
pub use statement::*;

use serde::{Deserialize, Serialize};
use unimodel_core::position::PositionInfo;

use crate::source::FileId;
use crate::visitor::{VisitResult, Visitor};

// ============================================================================
// Node metadata
// ============================================================================

/// Data shared by every node: its span and its compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeMeta {
    pub position: PositionInfo,
    /// Back-reference to the owning compilation unit. Set once at construction.
    pub unit: FileId,
}

impl NodeMeta {
    pub fn new(position: PositionInfo, unit: FileId) -> Self {
        NodeMeta { position, unit }
    }
}

// ============================================================================
// Node trait
// ============================================================================

/// Behaviour common to all concrete node types.
pub trait Node {
    fn meta(&self) -> &NodeMeta;

    fn kind(&self) -> NodeKind;

    /// Borrowed view of this node.
    fn as_node(&self) -> NodeRef<'_>;

    /// Invoke exactly one visitor method: the one for this node's type.
    ///
    /// No traversal happens here. Use [`crate::visitor::walk`] to recurse.
    fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) -> VisitResult;

    fn position(&self) -> PositionInfo {
        self.meta().position
    }

    fn unit(&self) -> FileId {
        self.meta().unit
    }

    /// Direct children in source order.
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.as_node().children()
    }
}

/// Generates [`NodeKind`], [`NodeRef`] and the [`Node`] impls from one list.
///
/// Every listed type must have a `meta: NodeMeta` field and an inherent
/// `push_children` method.
macro_rules! define_nodes {
    (
        $(
            $snake:ident : $ty:ident
        ),* $(,)?
    ) => {
        paste::paste! {
            /// Tag naming the concrete type of a node.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(rename_all = "snake_case")]
            pub enum NodeKind {
                $( $ty, )*
            }

            impl NodeKind {
                /// Snake-case tag, e.g. `"expression_statement"`.
                pub fn as_str(&self) -> &'static str {
                    match self {
                        $( NodeKind::$ty => stringify!($snake), )*
                    }
                }
            }

            /// A borrowed reference to any concrete node.
            #[derive(Debug, Clone, Copy)]
            pub enum NodeRef<'a> {
                $( $ty(&'a $ty), )*
            }

            impl<'a> NodeRef<'a> {
                pub fn kind(&self) -> NodeKind {
                    match self {
                        $( NodeRef::$ty(_) => NodeKind::$ty, )*
                    }
                }

                pub fn meta(&self) -> &'a NodeMeta {
                    match *self {
                        $( NodeRef::$ty(node) => &node.meta, )*
                    }
                }

                pub fn position(&self) -> PositionInfo {
                    self.meta().position
                }

                /// Direct children in source order.
                pub fn children(&self) -> Vec<NodeRef<'a>> {
                    let mut out = Vec::new();
                    match *self {
                        $( NodeRef::$ty(node) => node.push_children(&mut out), )*
                    }
                    out
                }

                /// Call the `visit_*` method matching this node's type.
                pub fn accept<V: Visitor<'a> + ?Sized>(self, visitor: &mut V) -> VisitResult {
                    match self {
                        $( NodeRef::$ty(node) => visitor.[<visit_ $snake>](node), )*
                    }
                }

                /// Call the `leave_*` method matching this node's type.
                pub fn leave<V: Visitor<'a> + ?Sized>(self, visitor: &mut V) {
                    match self {
                        $( NodeRef::$ty(node) => visitor.[<leave_ $snake>](node), )*
                    }
                }
            }

            $(
                impl<'a> From<&'a $ty> for NodeRef<'a> {
                    fn from(node: &'a $ty) -> Self {
                        NodeRef::$ty(node)
                    }
                }

                impl Node for $ty {
                    fn meta(&self) -> &NodeMeta {
                        &self.meta
                    }

                    fn kind(&self) -> NodeKind {
                        NodeKind::$ty
                    }

                    fn as_node(&self) -> NodeRef<'_> {
                        NodeRef::$ty(self)
                    }

                    fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) -> VisitResult {
                        visitor.[<visit_ $snake>](self)
                    }
                }
            )*
        }
    };
}

/// Generates a node family enum with one boxed variant per concrete type.
macro_rules! node_family {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "type", content = "node", rename_all = "snake_case")]
        pub enum $name {
            $( $variant(Box<$variant>), )*
        }

        impl $name {
            pub fn as_node(&self) -> NodeRef<'_> {
                match self {
                    $( $name::$variant(node) => NodeRef::$variant(node), )*
                }
            }

            pub fn meta(&self) -> &NodeMeta {
                match self {
                    $( $name::$variant(node) => &node.meta, )*
                }
            }

            pub fn position(&self) -> PositionInfo {
                self.meta().position
            }

            pub fn kind(&self) -> NodeKind {
                self.as_node().kind()
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(node: $variant) -> Self {
                    $name::$variant(Box::new(node))
                }
            }
        )*
    };
}

pub(crate) use node_family;

define_nodes! {
    // Declarations
    compilation_unit: CompilationUnit,
    type_declaration: TypeDeclaration,
    method_declaration: MethodDeclaration,
    single_variable_declaration: SingleVariableDeclaration,
    import_statement: ImportStatement,
    import_item: ImportItem,

    // Statements
    block: Block,
    if_statement: IfStatement,
    for_statement: ForStatement,
    while_statement: WhileStatement,
    try_statement: TryStatement,
    catch_clause: CatchClause,
    throw_statement: ThrowStatement,
    return_statement: ReturnStatement,
    break_statement: BreakStatement,
    continue_statement: ContinueStatement,
    pass_statement: PassStatement,
    del_statement: DelStatement,
    global_statement: GlobalStatement,
    nonlocal_statement: NonlocalStatement,
    with_statement: WithStatement,
    with_item: WithItem,
    assert_statement: AssertStatement,
    switch_statement: SwitchStatement,
    case_clause: CaseClause,
    yield_statement: YieldStatement,
    async_statement: AsyncStatement,
    expression_statement: ExpressionStatement,

    // Expressions
    simple_name: SimpleName,
    literal: Literal,
    list_literal: ListLiteral,
    tuple_literal: TupleLiteral,
    dict_literal: DictLiteral,
    method_invocation: MethodInvocation,
    field_access: FieldAccess,
    assignment: Assignment,
    infix_expression: InfixExpression,
    prefix_expression: PrefixExpression,
    postfix_expression: PostfixExpression,
    lambda_expression: LambdaExpression,
    await_expression: AwaitExpression,
    comprehension: Comprehension,
    comprehension_clause: ComprehensionClause,
    ternary_expression: TernaryExpression,
    slice_expression: SliceExpression,
    index_access: IndexAccess,
    parenthesized_expression: ParenthesizedExpression,

    // Patterns
    literal_pattern: LiteralPattern,
    variable_pattern: VariablePattern,

    // Metadata
    annotation: Annotation,
    member_value_pair: MemberValuePair,
    comment: Comment,
    type_name: TypeName,
}

/// Push each node of an iterator onto a children list.
pub(crate) fn push_all<'n, T: 'n>(out: &mut Vec<NodeRef<'n>>, nodes: impl IntoIterator<Item = &'n T>)
where
    &'n T: Into<NodeRef<'n>>,
{
    out.extend(nodes.into_iter().map(Into::into));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::NodeFactory;
    use unimodel_core::types::CommentKind;

    #[test]
    fn kind_tags_are_snake_case() {
        assert_eq!(NodeKind::ExpressionStatement.as_str(), "expression_statement");
        assert_eq!(NodeKind::CompilationUnit.as_str(), "compilation_unit");
    }

    #[test]
    fn children_are_owned_sub_nodes_in_source_order() {
        let source = "self.value = x";
        let f = NodeFactory::new(FileId::new(0), source);
        let receiver = f.simple_name(f.locate("self"));
        let field = f.field_access(0..10, receiver, f.simple_name(f.locate("value")));
        let assignment = f.assignment(0..14, field, f.simple_name(f.locate("x")));

        let kinds: Vec<_> = assignment.children().iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![NodeKind::FieldAccess, NodeKind::SimpleName]);

        let field_children: Vec<_> = assignment.children()[0]
            .children()
            .iter()
            .map(|c| c.position().start_offset)
            .collect();
        assert_eq!(field_children, vec![0, 5]);
    }

    #[test]
    fn method_comments_follow_source_order() {
        let source = "def f():\n    # note\n    pass\n";
        let f = NodeFactory::new(FileId::new(0), source);
        let mut method = f.method_declaration(0..source.len() - 1, f.simple_name(4..5));
        let pass = f.locate("    # note\n    pass");
        method.body = Some(f.block(pass.start..source.len() - 1, Vec::new()));
        method.comments.push(f.comment(f.locate("# note"), CommentKind::Line));

        let kinds: Vec<_> = method.children().iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![NodeKind::SimpleName, NodeKind::Block, NodeKind::Comment]);
    }

    #[test]
    fn every_node_carries_its_unit() {
        let f = NodeFactory::new(FileId::new(7), "pass");
        let pass = f.pass_statement(0..4);
        assert_eq!(pass.unit(), FileId::new(7));
        assert_eq!(Statement::from(pass).meta().unit, FileId::new(7));
    }
}
