//! Model attributes (fields).

use serde::{Deserialize, Serialize};

use super::elements::VariableDeclaration;
use crate::types::{LocationInfo, Visibility};

/// A field of a class or module pseudo-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAttribute {
    pub name: String,
    /// Inferred type name.
    pub type_name: String,
    /// Qualified name of the owning class.
    pub class_name: String,
    pub visibility: Visibility,
    pub is_final: bool,
    pub is_static: bool,
    pub location: LocationInfo,
    pub variable_declaration: VariableDeclaration,
}

impl ModelAttribute {
    /// Create an attribute from its declaration record.
    pub fn new(
        class_name: impl Into<String>,
        variable_declaration: VariableDeclaration,
        visibility: Visibility,
    ) -> Self {
        ModelAttribute {
            name: variable_declaration.name.clone(),
            type_name: variable_declaration.type_name.clone(),
            class_name: class_name.into(),
            visibility,
            is_final: false,
            is_static: false,
            location: variable_declaration.location.clone(),
            variable_declaration,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}
