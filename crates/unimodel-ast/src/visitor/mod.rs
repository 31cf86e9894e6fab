// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for AST traversal.
//!
//! Two layers:
//! - [`Node::accept`](crate::nodes::Node::accept) dispatches exactly once to
//!   the visitor method matching the node's type. It never recurses.
//! - [`walk`] adds depth-first traversal: pre-order `visit_*`, post-order
//!   `leave_*`, children in source order.
//!
//! # Visitor Pattern
//!
//! ```
//! use unimodel_ast::visitor::{walk_compilation_unit, Visitor, VisitResult};
//! use unimodel_ast::{FileId, MethodDeclaration, NodeFactory};
//!
//! struct FunctionCounter {
//!     count: usize,
//! }
//!
//! impl<'a> Visitor<'a> for FunctionCounter {
//!     fn visit_method_declaration(&mut self, _node: &'a MethodDeclaration) -> VisitResult {
//!         self.count += 1;
//!         VisitResult::SkipChildren
//!     }
//! }
//!
//! let source = "def f(): pass";
//! let f = NodeFactory::new(FileId::new(0), source);
//! let mut unit = f.compilation_unit();
//! unit.methods.push(f.method_declaration(0..13, f.simple_name(4..5)));
//!
//! let mut counter = FunctionCounter { count: 0 };
//! walk_compilation_unit(&mut counter, &unit);
//! assert_eq!(counter.count, 1);
//! ```

mod dispatch;
mod traits;

pub use dispatch::{walk, walk_compilation_unit};
pub use traits::{VisitResult, Visitor};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::NodeFactory;
    use crate::nodes::*;
    use crate::source::FileId;

    /// `class A:\n    def __init__(self, x):\n        self.value = x\n`
    fn class_unit(source: &str) -> CompilationUnit {
        let f = NodeFactory::new(FileId::new(0), source);
        let mut unit = f.compilation_unit();

        let mut class = f.type_declaration(0..source.len() - 1, f.simple_name(f.locate("A")));
        let init_range = f.locate_from(13, "def __init__(self, x):\n        self.value = x");
        let mut init = f.method_declaration(init_range, f.simple_name(f.locate("__init__")));
        init.parameters.push(f.parameter(f.locate("self")));
        init.parameters.push(f.parameter(f.locate_from(27, "x")));

        let target_start = f.locate_from(30, "self").start;
        let field = f.field_access(
            target_start..target_start + 10,
            f.simple_name(target_start..target_start + 4),
            f.simple_name(target_start + 5..target_start + 10),
        );
        let value = f.simple_name(source.len() - 2..source.len() - 1);
        let assignment = f.assignment(target_start..source.len() - 1, field, value);
        let body: Vec<Statement> = vec![f.expression_statement(assignment).into()];
        init.body = Some(f.block(target_start..source.len() - 1, body));

        class.methods.push(init);
        unit.types.push(class);
        unit
    }

    const SOURCE: &str = "class A:\n    def __init__(self, x):\n        self.value = x\n";

    #[derive(Default)]
    struct Recorder<'a> {
        events: Vec<String>,
        names: Vec<&'a str>,
        skip_methods: bool,
        stop_at_field: bool,
    }

    impl<'a> Visitor<'a> for Recorder<'a> {
        fn visit_type_declaration(&mut self, node: &'a TypeDeclaration) -> VisitResult {
            self.events.push(format!("visit class {}", node.name.identifier));
            VisitResult::Continue
        }

        fn leave_type_declaration(&mut self, node: &'a TypeDeclaration) {
            self.events.push(format!("leave class {}", node.name.identifier));
        }

        fn visit_method_declaration(&mut self, node: &'a MethodDeclaration) -> VisitResult {
            self.events.push(format!("visit def {}", node.identifier()));
            if self.skip_methods {
                VisitResult::SkipChildren
            } else {
                VisitResult::Continue
            }
        }

        fn leave_method_declaration(&mut self, node: &'a MethodDeclaration) {
            self.events.push(format!("leave def {}", node.identifier()));
        }

        fn visit_field_access(&mut self, _node: &'a FieldAccess) -> VisitResult {
            if self.stop_at_field {
                VisitResult::Stop
            } else {
                VisitResult::Continue
            }
        }

        fn visit_simple_name(&mut self, node: &'a SimpleName) -> VisitResult {
            self.names.push(&node.identifier);
            VisitResult::Continue
        }
    }

    mod accept_tests {
        use super::*;

        #[test]
        fn accept_dispatches_once_without_recursion() {
            let unit = class_unit(SOURCE);
            let mut recorder = Recorder::default();
            let result = unit.types[0].accept(&mut recorder);
            assert_eq!(result, VisitResult::Continue);
            assert_eq!(recorder.events, vec!["visit class A"]);
            assert!(recorder.names.is_empty());
        }

        #[test]
        fn node_ref_accept_matches_type() {
            let unit = class_unit(SOURCE);
            let mut recorder = Recorder::default();
            unit.types[0].methods[0].as_node().accept(&mut recorder);
            assert_eq!(recorder.events, vec!["visit def __init__"]);
        }
    }

    mod walk_tests {
        use super::*;

        #[test]
        fn pre_and_post_order() {
            let unit = class_unit(SOURCE);
            let mut recorder = Recorder::default();
            let result = walk_compilation_unit(&mut recorder, &unit);
            assert_eq!(result, VisitResult::Continue);
            assert_eq!(
                recorder.events,
                vec![
                    "visit class A",
                    "visit def __init__",
                    "leave def __init__",
                    "leave class A",
                ]
            );
            assert_eq!(
                recorder.names,
                vec!["A", "__init__", "self", "x", "self", "value", "x"]
            );
        }

        #[test]
        fn skip_children_still_leaves() {
            let unit = class_unit(SOURCE);
            let mut recorder = Recorder {
                skip_methods: true,
                ..Recorder::default()
            };
            walk_compilation_unit(&mut recorder, &unit);
            assert_eq!(
                recorder.events,
                vec![
                    "visit class A",
                    "visit def __init__",
                    "leave def __init__",
                    "leave class A",
                ]
            );
            assert_eq!(recorder.names, vec!["A"]);
        }

        #[test]
        fn stop_halts_everything() {
            let unit = class_unit(SOURCE);
            let mut recorder = Recorder {
                stop_at_field: true,
                ..Recorder::default()
            };
            let result = walk_compilation_unit(&mut recorder, &unit);
            assert_eq!(result, VisitResult::Stop);
            assert_eq!(recorder.events, vec!["visit class A", "visit def __init__"]);
            assert_eq!(recorder.names, vec!["A", "__init__", "self", "x"]);
        }
    }
}
