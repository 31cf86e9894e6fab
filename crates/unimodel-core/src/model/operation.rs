//! Model operations (methods and functions) and their parameters.

use serde::{Deserialize, Serialize};

use super::elements::{ModelAnnotation, ModelComment, StatementContainer, VariableDeclaration};
use super::type_ref::TypeRef;
use crate::types::{LocationInfo, Visibility};

// ============================================================================
// Parameters
// ============================================================================

/// Whether a parameter is an input or the synthesized return parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    In,
    Return,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelParameter {
    /// Parameter name. The return parameter is named `"return"`.
    pub name: String,
    pub ty: TypeRef,
    pub kind: ParameterKind,
    pub varargs: bool,
    pub kwargs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub location: LocationInfo,
    /// Declaration record. Absent for the return parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_declaration: Option<VariableDeclaration>,
}

impl ModelParameter {
    /// An input parameter backed by its declaration record.
    pub fn input(variable_declaration: VariableDeclaration, ty: TypeRef) -> Self {
        ModelParameter {
            name: variable_declaration.name.clone(),
            ty,
            kind: ParameterKind::In,
            varargs: false,
            kwargs: false,
            default_value: None,
            location: variable_declaration.location.clone(),
            variable_declaration: Some(variable_declaration),
        }
    }

    /// The synthesized return parameter.
    pub fn returning(ty: TypeRef, location: LocationInfo) -> Self {
        ModelParameter {
            name: "return".to_string(),
            ty,
            kind: ParameterKind::Return,
            varargs: false,
            kwargs: false,
            default_value: None,
            location,
            variable_declaration: None,
        }
    }

    pub fn is_return(&self) -> bool {
        self.kind == ParameterKind::Return
    }
}

// ============================================================================
// Operations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OperationFlags {
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub is_native: bool,
    pub is_synchronized: bool,
    pub is_constructor: bool,
    pub is_async: bool,
}

/// A method of a class, or a top-level function of a module pseudo-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOperation {
    pub name: String,
    /// Qualified name of the owning class.
    pub class_name: String,
    pub location: LocationInfo,
    /// Effective parameters (implicit receiver already skipped), followed by
    /// the return parameter when the operation returns something.
    pub parameters: Vec<ModelParameter>,
    pub visibility: Visibility,
    pub flags: OperationFlags,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<ModelAnnotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<ModelComment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<StatementContainer>,
    /// Declaration text from the start of the method through its body opening.
    pub actual_signature: String,
}

impl ModelOperation {
    pub fn new(name: impl Into<String>, class_name: impl Into<String>, location: LocationInfo) -> Self {
        ModelOperation {
            name: name.into(),
            class_name: class_name.into(),
            location,
            parameters: Vec::new(),
            visibility: Visibility::Public,
            flags: OperationFlags::default(),
            annotations: Vec::new(),
            comments: Vec::new(),
            body: None,
            actual_signature: String::new(),
        }
    }

    /// Input parameters in declaration order.
    pub fn input_parameters(&self) -> impl Iterator<Item = &ModelParameter> {
        self.parameters.iter().filter(|p| !p.is_return())
    }

    pub fn return_parameter(&self) -> Option<&ModelParameter> {
        self.parameters.iter().find(|p| p.is_return())
    }

    /// Names of the input parameters, in order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.input_parameters().map(|p| p.name.as_str()).collect()
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::PositionInfo;
    use crate::types::CodeElementType;

    fn loc(kind: CodeElementType) -> LocationInfo {
        LocationInfo::new("", "a.py", PositionInfo::default(), kind)
    }

    #[test]
    fn return_parameter_is_separated_from_inputs() {
        let mut op = ModelOperation::new("f", "a", loc(CodeElementType::MethodDeclaration));
        let var = VariableDeclaration::new("x", "int", loc(CodeElementType::SingleVariableDeclaration))
            .as_parameter(false);
        op.parameters.push(ModelParameter::input(var, TypeRef::simple("int")));
        op.parameters.push(ModelParameter::returning(
            TypeRef::simple("str"),
            loc(CodeElementType::Type),
        ));
        assert_eq!(op.parameter_names(), vec!["x"]);
        assert_eq!(op.return_parameter().map(|p| p.ty.name.as_str()), Some("str"));
    }

    #[test]
    fn operation_serializes_without_empty_collections() {
        let op = ModelOperation::new("f", "a", loc(CodeElementType::MethodDeclaration));
        let json = serde_json::to_value(&op).unwrap();
        assert!(json.get("annotations").is_none());
        assert!(json.get("body").is_none());
        assert_eq!(json["class_name"], "a");
    }
}
