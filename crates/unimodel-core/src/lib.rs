//! Core infrastructure for unimodel.
//!
//! This crate provides the language-agnostic pieces shared by the AST and the
//! adapter:
//! - Source positions attached to every AST node
//! - Location info carried by every model element
//! - The unified structural model (classes, operations, attributes, imports)
//! - Content hashing for processed files
//! - Error types

pub mod error;
pub mod hash;
pub mod model;
pub mod position;
pub mod types;
