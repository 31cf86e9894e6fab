//! Model adapter for unimodel.
//!
//! Turns language-neutral ASTs into a [`UnifiedModel`](unimodel_core::model::UnifiedModel):
//!
//! - [`language`]: language detection and per-language conventions
//! - [`options`]: TOML-loadable adapter configuration
//! - [`resolve`]: qualified names, parameter offsets and path inference
//! - [`imports`]: import flattening
//! - [`attributes`]: attribute discovery and type inference
//! - [`adapter`]: the [`ModelAdapter`] itself
//!
//! ```
//! use unimodel_adapter::ModelAdapter;
//! use unimodel_ast::{NodeFactory, SourceSet};
//!
//! let source = "def main(): pass\n";
//! let mut sources = SourceSet::new();
//! sources
//!     .add_with("src/app/cli.py", source, |id, text| {
//!         let f = NodeFactory::new(id, text);
//!         let mut unit = f.compilation_unit();
//!         unit.methods.push(f.method_declaration(0..16, f.simple_name(4..8)));
//!         unit
//!     })
//!     .unwrap();
//!
//! let model = ModelAdapter::new().build(&mut sources).unwrap();
//! let module = model.class_named("app.cli").unwrap();
//! assert!(module.is_module());
//! assert_eq!(module.operations[0].actual_signature, "def main(): pass");
//! ```

pub mod adapter;
pub mod attributes;
pub mod context;
pub mod error;
pub mod imports;
pub mod language;
pub mod options;
pub mod resolve;

pub use adapter::ModelAdapter;
pub use context::FileContext;
pub use error::{AdapterError, AdapterResult};
pub use language::{Language, LanguageProfile, LiteralTypes};
pub use options::{AdapterOptions, ProfileOverride};
