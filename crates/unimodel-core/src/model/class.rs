//! Model classes, including module pseudo-classes.

use serde::{Deserialize, Serialize};

use super::attribute::ModelAttribute;
use super::elements::{ModelAnnotation, ModelComment, ModelImport, StatementContainer};
use super::operation::ModelOperation;
use super::type_ref::TypeRef;
use crate::types::{LocationInfo, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClassFlags {
    pub is_abstract: bool,
    pub is_interface: bool,
    pub is_final: bool,
    pub is_static: bool,
    pub is_annotation: bool,
    pub is_enum: bool,
    pub is_record: bool,
    /// Synthesized file-scope pseudo-class.
    pub is_module: bool,
    pub is_top_level: bool,
}

impl ClassFlags {
    /// Flags of a module pseudo-class: module and static, nothing else.
    pub fn module() -> Self {
        ClassFlags {
            is_module: true,
            is_static: true,
            is_top_level: true,
            ..ClassFlags::default()
        }
    }
}

/// A declared type or a module pseudo-class.
///
/// The qualified name is `package_name + "." + non_qualified_name` for real
/// classes. A module pseudo-class uses the module name as its qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelClass {
    /// Enclosing package or module (dotted). Empty at the project root.
    pub package_name: String,
    pub non_qualified_name: String,
    name: String,
    pub location: LocationInfo,
    pub visibility: Visibility,
    pub flags: ClassFlags,
    /// Primary super type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<TypeRef>,
    pub imports: Vec<ModelImport>,
    pub attributes: Vec<ModelAttribute>,
    pub operations: Vec<ModelOperation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<ModelComment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<ModelAnnotation>,
    /// Side-effecting body statements of the class or module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<StatementContainer>,
    /// Header text of the declaration (empty for module pseudo-classes).
    pub actual_signature: String,
}

impl ModelClass {
    /// A declared class named `non_qualified_name` inside `package_name`.
    pub fn new(
        package_name: impl Into<String>,
        non_qualified_name: impl Into<String>,
        location: LocationInfo,
    ) -> Self {
        let package_name = package_name.into();
        let non_qualified_name = non_qualified_name.into();
        let name = if package_name.is_empty() {
            non_qualified_name.clone()
        } else {
            format!("{}.{}", package_name, non_qualified_name)
        };
        ModelClass {
            package_name,
            non_qualified_name,
            name,
            location,
            visibility: Visibility::Public,
            flags: ClassFlags {
                is_top_level: true,
                ..ClassFlags::default()
            },
            superclass: None,
            imports: Vec::new(),
            attributes: Vec::new(),
            operations: Vec::new(),
            comments: Vec::new(),
            annotations: Vec::new(),
            container: None,
            actual_signature: String::new(),
        }
    }

    /// The pseudo-class for a file's top-level code, named after the module.
    pub fn module(module_name: impl Into<String>, location: LocationInfo) -> Self {
        let module_name = module_name.into();
        let (package_name, simple) = match module_name.rsplit_once('.') {
            Some((package, simple)) => (package.to_string(), simple.to_string()),
            None => (String::new(), module_name.clone()),
        };
        let mut class = ModelClass::new(package_name, simple, location);
        class.name = module_name;
        class.flags = ClassFlags::module();
        class
    }

    /// Qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_module(&self) -> bool {
        self.flags.is_module
    }

    pub fn attribute(&self, name: &str) -> Option<&ModelAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn operation(&self, name: &str) -> Option<&ModelOperation> {
        self.operations.iter().find(|o| o.name == name)
    }

    /// Add an attribute unless one with the same name already exists.
    ///
    /// Returns whether the attribute was added.
    pub fn add_attribute_if_absent(&mut self, attribute: ModelAttribute) -> bool {
        if self.has_attribute(&attribute.name) {
            return false;
        }
        self.attributes.push(attribute);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::elements::VariableDeclaration;
    use crate::position::PositionInfo;
    use crate::types::CodeElementType;

    fn loc() -> LocationInfo {
        LocationInfo::new("src", "src/pkg/shapes.py", PositionInfo::default(), CodeElementType::TypeDeclaration)
    }

    #[test]
    fn qualified_name_joins_package() {
        let class = ModelClass::new("pkg.shapes", "Circle", loc());
        assert_eq!(class.name(), "pkg.shapes.Circle");
        assert!(class.flags.is_top_level);
        assert!(!class.is_module());
    }

    #[test]
    fn module_class_flags() {
        let class = ModelClass::module("pkg.shapes", loc());
        assert_eq!(class.name(), "pkg.shapes");
        assert_eq!(class.non_qualified_name, "shapes");
        assert!(class.flags.is_module);
        assert!(class.flags.is_static);
        assert!(!class.flags.is_abstract);
        assert!(!class.flags.is_interface);
        assert!(!class.flags.is_final);
        assert!(!class.flags.is_enum);
        assert!(!class.flags.is_record);
        assert_eq!(class.visibility, Visibility::Public);
    }

    #[test]
    fn attributes_deduplicate_by_name() {
        let mut class = ModelClass::new("", "A", loc());
        let var = VariableDeclaration::new("x", "Object", loc()).as_attribute();
        assert!(class.add_attribute_if_absent(ModelAttribute::new("A", var.clone(), Visibility::Public)));
        assert!(!class.add_attribute_if_absent(ModelAttribute::new("A", var, Visibility::Public)));
        assert_eq!(class.attributes.len(), 1);
    }
}
