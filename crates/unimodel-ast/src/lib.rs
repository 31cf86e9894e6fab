// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Language-neutral AST for unimodel.
//!
//! Per-language parsers (not part of this crate) produce one
//! [`CompilationUnit`] per file using the node types here, usually through a
//! [`NodeFactory`], and register it in a [`SourceSet`]. The adapter then turns
//! those trees into a unified model.
//!
//! - [`nodes`]: the closed set of node types, grouped into family enums
//! - [`visitor`]: the [`Visitor`] trait, single-dispatch `accept` and `walk`
//! - [`factory`]: position-stamping node construction
//! - [`source`]: the file-id keyed compilation-unit table

pub mod error;
pub mod factory;
pub mod nodes;
pub mod source;
pub mod visitor;

pub use error::{AstError, AstResult};
pub use factory::NodeFactory;
pub use nodes::*;
pub use source::{FileId, SourceFile, SourceSet};
pub use visitor::{walk, walk_compilation_unit, VisitResult, Visitor};
