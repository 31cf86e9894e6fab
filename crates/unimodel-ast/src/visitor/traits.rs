// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definition for AST traversal.

use crate::nodes::{
    // Declarations
    CompilationUnit, ImportItem, ImportStatement, MethodDeclaration, SingleVariableDeclaration,
    TypeDeclaration,
    // Statements
    AssertStatement, AsyncStatement, Block, BreakStatement, CaseClause, CatchClause,
    ContinueStatement, DelStatement, ExpressionStatement, ForStatement, GlobalStatement,
    IfStatement, NonlocalStatement, PassStatement, ReturnStatement, SwitchStatement,
    ThrowStatement, TryStatement, WhileStatement, WithItem, WithStatement, YieldStatement,
    // Expressions
    Assignment, AwaitExpression, Comprehension, ComprehensionClause, DictLiteral, FieldAccess,
    IndexAccess, InfixExpression, LambdaExpression, ListLiteral, Literal, MethodInvocation,
    ParenthesizedExpression, PostfixExpression, PrefixExpression, SimpleName, SliceExpression,
    TernaryExpression, TupleLiteral,
    // Patterns
    LiteralPattern, VariablePattern,
    // Metadata
    Annotation, Comment, MemberValuePair, TypeName,
};

/// Result of visiting a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// `leave_*` is still called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_*` or `leave_*` methods will be called.
    Stop,
}

/// Macro to generate visitor trait method signatures.
///
/// Generates pairs of `visit_*` and `leave_*` methods with default
/// implementations that return `VisitResult::Continue` and do nothing.
///
/// # Usage
///
/// ```ignore
/// visitor_methods! {
///     // Generates visit_simple_name and leave_simple_name
///     simple_name: SimpleName,
/// }
/// ```
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called before descending into children. Return `VisitResult` to control traversal."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &'a $node_type) -> VisitResult {
                    VisitResult::Continue
                }

                $(#[$meta])*
                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after all children have been visited. Called even if `SkipChildren` was returned."]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &'a $node_type) {}
            )*
        }
    };
}

/// Read-only AST visitor.
///
/// One `visit_*`/`leave_*` pair per concrete node type. A node's
/// [`accept`](crate::nodes::Node::accept) calls exactly one `visit_*`; the
/// walk functions in this module add traversal on top.
///
/// # Traversal Order
///
/// - `visit_*` is called in **pre-order** (before children)
/// - `leave_*` is called in **post-order** (after children)
/// - Children are visited in source order
///
/// # Example
///
/// ```
/// use unimodel_ast::visitor::{Visitor, VisitResult};
/// use unimodel_ast::SimpleName;
///
/// struct NameCollector<'a> {
///     names: Vec<&'a str>,
/// }
///
/// impl<'a> Visitor<'a> for NameCollector<'a> {
///     fn visit_simple_name(&mut self, node: &'a SimpleName) -> VisitResult {
///         self.names.push(&node.identifier);
///         VisitResult::Continue
///     }
/// }
/// ```
pub trait Visitor<'a> {
    // Declarations
    visitor_methods! {
        compilation_unit: CompilationUnit,
        type_declaration: TypeDeclaration,
        method_declaration: MethodDeclaration,
        single_variable_declaration: SingleVariableDeclaration,
        import_statement: ImportStatement,
        import_item: ImportItem,
    }

    // Statements
    visitor_methods! {
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
    }

    // Expressions
    visitor_methods! {
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
    }

    // Patterns
    visitor_methods! {
        literal_pattern: LiteralPattern,
        variable_pattern: VariablePattern,
    }

    // Metadata
    visitor_methods! {
        annotation: Annotation,
        member_value_pair: MemberValuePair,
        comment: Comment,
        type_name: TypeName,
    }
}
