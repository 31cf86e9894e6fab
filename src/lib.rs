//! unimodel: retargetable source-model extraction
//!
//! Parsers for each source language produce the language-neutral AST from
//! [`ast`]; the [`ModelAdapter`] turns a set of parsed files into one
//! [`UnifiedModel`] that downstream diffing consumes as JSON.
//!
//! This crate re-exports the workspace crates and adds the pieces a front end
//! needs: JSON input loading, logging setup and a unified error type.

// Workspace crates
pub use unimodel_adapter as adapter;
pub use unimodel_ast as ast;
pub use unimodel_core::{error as model_error, hash, model, position, types};

// Front-end plumbing
pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use error::UnimodelError;
pub use input::{load_sources, InputBundle, InputFile};
pub use unimodel_adapter::{AdapterOptions, Language, ModelAdapter};
pub use unimodel_core::model::UnifiedModel;
