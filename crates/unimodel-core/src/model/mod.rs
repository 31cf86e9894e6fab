//! Unified model: the language-agnostic structural model of a code base.
//!
//! The model is what the adapter produces and what a structural diff engine
//! consumes:
//! - [`ModelClass`]: declared types and module pseudo-classes
//! - [`ModelOperation`]: methods and top-level functions, with [`ModelParameter`]s
//! - [`ModelAttribute`]: fields discovered from class/module scope and initializers
//! - [`ModelImport`]: flattened imports
//! - [`ModelGeneralization`]: inheritance edges
//! - [`FileRecord`]: one entry per processed file
//!
//! Every attribute and operation names exactly one owning class. That
//! invariant is asserted when a class is added and can be re-checked with
//! [`UnifiedModel::validate`] on a deserialized model.
//!
//! # Usage
//!
//! ```
//! use unimodel_core::model::{ModelClass, UnifiedModel};
//! use unimodel_core::position::PositionInfo;
//! use unimodel_core::types::{CodeElementType, LocationInfo};
//!
//! let location = LocationInfo::new("", "a.py", PositionInfo::default(), CodeElementType::TypeDeclaration);
//! let mut model = UnifiedModel::new();
//! model.add_class(ModelClass::new("a", "A", location));
//! assert!(model.class_named("a.A").is_some());
//! ```

mod attribute;
mod class;
mod elements;
mod operation;
mod type_ref;

pub use attribute::ModelAttribute;
pub use class::{ClassFlags, ModelClass};
pub use elements::{
    CodeFragment, ModelAnnotation, ModelComment, ModelGeneralization, ModelImport,
    StatementContainer, VariableDeclaration,
};
pub use operation::{ModelOperation, ModelParameter, OperationFlags, ParameterKind};
pub use type_ref::TypeRef;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ModelError, ModelResult};
use crate::hash::ContentHash;

// ============================================================================
// File records
// ============================================================================

/// A source file that contributed to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Forward-slash path as given to the adapter.
    pub path: String,
    pub source_folder: String,
    /// Module name inferred from the path.
    pub module_name: String,
    /// Language tag (e.g. `"python"`).
    pub language: String,
    pub content_hash: ContentHash,
    /// Number of classes (real and module) extracted from this file.
    pub class_count: usize,
}

// ============================================================================
// UnifiedModel
// ============================================================================

/// The structural model of every processed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedModel {
    classes: Vec<ModelClass>,
    generalizations: Vec<ModelGeneralization>,
    /// Keyed by path for deterministic output.
    files: BTreeMap<String, FileRecord>,
}

impl UnifiedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class.
    ///
    /// # Panics
    /// Panics if an attribute or operation of `class` names a different
    /// owning class. That is a bug in whoever built the class.
    pub fn add_class(&mut self, class: ModelClass) {
        for attribute in &class.attributes {
            assert_eq!(
                attribute.class_name,
                class.name(),
                "attribute '{}' added under the wrong owner",
                attribute.name
            );
        }
        for operation in &class.operations {
            assert_eq!(
                operation.class_name,
                class.name(),
                "operation '{}' added under the wrong owner",
                operation.name
            );
        }
        self.classes.push(class);
    }

    pub fn add_generalization(&mut self, generalization: ModelGeneralization) {
        self.generalizations.push(generalization);
    }

    pub fn add_file(&mut self, record: FileRecord) {
        self.files.insert(record.path.clone(), record);
    }

    /// All classes in registration order.
    pub fn classes(&self) -> &[ModelClass] {
        &self.classes
    }

    pub fn generalizations(&self) -> &[ModelGeneralization] {
        &self.generalizations
    }

    pub fn files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    pub fn file(&self, path: &str) -> Option<&FileRecord> {
        self.files.get(path)
    }

    /// Look up a class by qualified name.
    pub fn class_named(&self, name: &str) -> Option<&ModelClass> {
        self.classes.iter().find(|c| c.name() == name)
    }

    /// Module pseudo-classes only.
    pub fn module_classes(&self) -> impl Iterator<Item = &ModelClass> {
        self.classes.iter().filter(|c| c.is_module())
    }

    /// Generalization edges whose child is `class_name`, in declaration order.
    pub fn generalizations_of<'m>(
        &'m self,
        class_name: &'m str,
    ) -> impl Iterator<Item = &'m ModelGeneralization> + 'm {
        self.generalizations
            .iter()
            .filter(move |g| g.child == class_name)
    }

    /// Names of the direct super types of `class_name`.
    pub fn parents_of(&self, class_name: &str) -> Vec<&str> {
        self.generalizations
            .iter()
            .filter(|g| g.child == class_name)
            .map(|g| g.parent.as_str())
            .collect()
    }

    /// Append another model's contents to this one.
    pub fn merge(&mut self, other: UnifiedModel) {
        trace!(
            classes = other.classes.len(),
            files = other.files.len(),
            "merging model"
        );
        self.classes.extend(other.classes);
        self.generalizations.extend(other.generalizations);
        self.files.extend(other.files);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn operation_count(&self) -> usize {
        self.classes.iter().map(|c| c.operations.len()).sum()
    }

    pub fn attribute_count(&self) -> usize {
        self.classes.iter().map(|c| c.attributes.len()).sum()
    }

    /// Check structural invariants: consistent owners, and no class defined
    /// twice in the same file.
    ///
    /// Equal names from different files are legal: module names drop the
    /// source folder, so `src/__init__.py` and `tests/__init__.py` both yield
    /// a module class named `__init__`.
    pub fn validate(&self) -> ModelResult<()> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for class in &self.classes {
            let file = class.location.file_path.as_str();
            if !seen.insert((class.name(), file)) {
                return Err(ModelError::DuplicateClass {
                    name: class.name().to_string(),
                    file: file.to_string(),
                });
            }
        }
        let names: HashSet<&str> = self.classes.iter().map(|c| c.name()).collect();
        for class in &self.classes {
            let owners = class
                .attributes
                .iter()
                .map(|a| ("attribute", a.name.as_str(), a.class_name.as_str()))
                .chain(
                    class
                        .operations
                        .iter()
                        .map(|o| ("operation", o.name.as_str(), o.class_name.as_str())),
                );
            for (element, name, owner) in owners {
                if owner == class.name() {
                    continue;
                }
                if !names.contains(owner) {
                    return Err(ModelError::UnknownOwner {
                        element,
                        name: name.to_string(),
                        owner: owner.to_string(),
                    });
                }
                return Err(ModelError::OwnerMismatch {
                    element,
                    name: name.to_string(),
                    owner: owner.to_string(),
                    holder: class.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Pretty-printed JSON for handing the model to another process.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::PositionInfo;
    use crate::types::{CodeElementType, LocationInfo, Visibility};

    fn loc(file: &str, kind: CodeElementType) -> LocationInfo {
        LocationInfo::new("", file, PositionInfo::default(), kind)
    }

    fn class(package: &str, name: &str) -> ModelClass {
        ModelClass::new(package, name, loc("a.py", CodeElementType::TypeDeclaration))
    }

    fn attribute(owner: &str, name: &str) -> ModelAttribute {
        let var = VariableDeclaration::new(name, "Object", loc("a.py", CodeElementType::FieldDeclaration))
            .as_attribute();
        ModelAttribute::new(owner, var, Visibility::Public)
    }

    mod registration_tests {
        use super::*;

        #[test]
        fn add_and_lookup() {
            let mut model = UnifiedModel::new();
            let mut a = class("a", "A");
            a.attributes.push(attribute("a.A", "x"));
            model.add_class(a);
            assert_eq!(model.classes().len(), 1);
            assert_eq!(model.attribute_count(), 1);
            assert!(model.class_named("a.A").is_some());
            assert!(model.class_named("A").is_none());
        }

        #[test]
        #[should_panic(expected = "added under the wrong owner")]
        fn add_class_asserts_owner() {
            let mut model = UnifiedModel::new();
            let mut a = class("a", "A");
            a.attributes.push(attribute("a.B", "x"));
            model.add_class(a);
        }

        #[test]
        fn generalizations_by_child() {
            let mut model = UnifiedModel::new();
            for parent in ["Base1", "Base2"] {
                model.add_generalization(ModelGeneralization {
                    child: "a.C".to_string(),
                    parent: parent.to_string(),
                    location: loc("a.py", CodeElementType::Type),
                });
            }
            model.add_generalization(ModelGeneralization {
                child: "a.D".to_string(),
                parent: "Base1".to_string(),
                location: loc("a.py", CodeElementType::Type),
            });
            assert_eq!(model.parents_of("a.C"), vec!["Base1", "Base2"]);
            assert_eq!(model.generalizations_of("a.D").count(), 1);
        }

        #[test]
        fn parents_outlive_the_queried_name() {
            let mut model = UnifiedModel::new();
            model.add_generalization(ModelGeneralization {
                child: "a.C".to_string(),
                parent: "Base".to_string(),
                location: loc("a.py", CodeElementType::Type),
            });
            let parents = {
                let name = format!("{}.{}", "a", "C");
                model.parents_of(&name)
            };
            assert_eq!(parents, vec!["Base"]);
        }

        #[test]
        fn merge_concatenates() {
            let mut left = UnifiedModel::new();
            left.add_class(class("a", "A"));
            let mut right = UnifiedModel::new();
            right.add_class(class("b", "B"));
            left.merge(right);
            let names: Vec<_> = left.classes().iter().map(|c| c.name()).collect();
            assert_eq!(names, vec!["a.A", "b.B"]);
        }
    }

    mod validate_tests {
        use super::*;

        #[test]
        fn valid_model() {
            let mut model = UnifiedModel::new();
            let mut a = class("a", "A");
            a.attributes.push(attribute("a.A", "x"));
            model.add_class(a);
            assert_eq!(model.validate(), Ok(()));
        }

        #[test]
        fn duplicate_class() {
            let mut model = UnifiedModel::new();
            model.add_class(class("a", "A"));
            model.add_class(class("a", "A"));
            assert_eq!(
                model.validate(),
                Err(ModelError::DuplicateClass {
                    name: "a.A".to_string(),
                    file: "a.py".to_string(),
                })
            );
        }

        #[test]
        fn same_name_in_different_files() {
            let mut model = UnifiedModel::new();
            for file in ["src/__init__.py", "tests/__init__.py"] {
                let location = LocationInfo::new("", file, PositionInfo::default(), CodeElementType::TypeDeclaration);
                model.add_class(ModelClass::module("__init__", location));
            }
            assert_eq!(model.validate(), Ok(()));
        }

        #[test]
        fn tampered_owner_detected_after_deserialize() {
            let mut model = UnifiedModel::new();
            let mut a = class("a", "A");
            a.attributes.push(attribute("a.A", "x"));
            model.add_class(a);
            model.add_class(class("a", "B"));

            let json = model.to_json_pretty().unwrap();
            let mismatched = json.replacen("\"class_name\": \"a.A\"", "\"class_name\": \"a.B\"", 1);
            let err = UnifiedModel::from_json(&mismatched).unwrap().validate().unwrap_err();
            assert!(matches!(err, ModelError::OwnerMismatch { .. }));

            let unknown = json.replacen("\"class_name\": \"a.A\"", "\"class_name\": \"zzz\"", 1);
            let err = UnifiedModel::from_json(&unknown).unwrap().validate().unwrap_err();
            assert!(matches!(err, ModelError::UnknownOwner { .. }));
        }
    }
}
