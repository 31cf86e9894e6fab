// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions.
//!
//! `walk` visits a node, descends into its children in source order unless
//! told otherwise, then leaves the node. A `Stop` anywhere ends the walk
//! without further `visit_*` or `leave_*` calls.

use super::traits::{VisitResult, Visitor};
use crate::nodes::{CompilationUnit, NodeRef};

/// Walk `node` and its subtree.
///
/// Returns `VisitResult::Stop` if the visitor stopped the walk, otherwise
/// `VisitResult::Continue`.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: NodeRef<'a>) -> VisitResult {
    match node.accept(visitor) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for child in node.children() {
                if walk(visitor, child) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    node.leave(visitor);
    VisitResult::Continue
}

/// Walk a whole compilation unit.
pub fn walk_compilation_unit<'a, V: Visitor<'a> + ?Sized>(
    visitor: &mut V,
    unit: &'a CompilationUnit,
) -> VisitResult {
    walk(visitor, NodeRef::CompilationUnit(unit))
}
