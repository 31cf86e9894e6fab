//! Input bundle → model → JSON through the public facade.
//!
//! # Organization
//!
//! - loading: JSON bundles into source sets
//! - building: options, validation and output

use unimodel::ast::{CompilationUnit, FileId, NodeFactory};
use unimodel::cli::build_model;
use unimodel::output::emit_json;
use unimodel::{load_sources, AdapterOptions, InputBundle, InputFile, UnifiedModel, UnimodelError};

// ============================================================================
// Fixtures
// ============================================================================

const SHAPE: &str = "class Shape:\n    def area(self):\n        pass\n";

fn shape_unit(id: FileId) -> CompilationUnit {
    let f = NodeFactory::new(id, SHAPE);
    let mut unit = f.compilation_unit();
    let mut class = f.type_declaration(0..SHAPE.len() - 1, f.simple_name(f.locate("Shape")));
    let mut area = f.method_declaration(
        f.locate("def area(self):\n        pass"),
        f.simple_name(f.locate("area")),
    );
    area.parameters.push(f.parameter(f.locate("self")));
    class.methods.push(area);
    unit.types.push(class);
    unit
}

const MAIN: &str = "import os\n";

fn main_unit(id: FileId) -> CompilationUnit {
    let f = NodeFactory::new(id, MAIN);
    let mut unit = f.compilation_unit();
    unit.imports.push(f.import(f.locate("import os"), f.locate("os")));
    unit
}

fn bundle_json() -> String {
    let bundle = InputBundle {
        files: vec![
            InputFile {
                path: "src/geo/shape.py".to_string(),
                text: SHAPE.to_string(),
                unit: shape_unit(FileId::new(0)),
            },
            InputFile {
                path: "src/geo/main.py".to_string(),
                text: MAIN.to_string(),
                unit: main_unit(FileId::new(1)),
            },
        ],
    };
    serde_json::to_string(&bundle).unwrap()
}

// ============================================================================
// Loading
// ============================================================================

mod loading {
    //! JSON bundles into source sets.

    use super::*;

    #[test]
    fn bundle_loads_in_order() {
        let sources = load_sources(&bundle_json()).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources.lookup("src/geo/main.py").unwrap().id, FileId::new(1));
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let mut bundle: InputBundle = serde_json::from_str(&bundle_json()).unwrap();
        bundle.files[1].path = "src/geo/shape.py".to_string();
        let json = serde_json::to_string(&bundle).unwrap();
        let err = load_sources(&json).unwrap_err();
        assert!(matches!(err, UnimodelError::Ast(_)));
    }
}

// ============================================================================
// Building
// ============================================================================

mod building {
    //! Options, validation and output.

    use super::*;

    #[test]
    fn bundle_builds_validated_model() {
        let mut sources = load_sources(&bundle_json()).unwrap();
        let model = build_model(&mut sources, AdapterOptions::default(), true).unwrap();

        let shape = model.class_named("geo.shape.Shape").unwrap();
        assert_eq!(shape.operations.len(), 1);
        assert_eq!(shape.operations[0].name, "area");
        // No body: the signature is the whole declaration.
        assert_eq!(
            shape.operations[0].actual_signature,
            "def area(self):\n        pass"
        );

        let main = model.class_named("geo.main").unwrap();
        assert!(main.is_module());
        assert_eq!(main.imports[0].name, "os");
        assert_eq!(model.files().count(), 2);
    }

    #[test]
    fn model_json_round_trips() {
        let mut sources = load_sources(&bundle_json()).unwrap();
        let model = build_model(&mut sources, AdapterOptions::default(), false).unwrap();

        let mut output = Vec::new();
        emit_json(&model, &mut output).unwrap();
        let parsed = UnifiedModel::from_json(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn custom_markers_change_qualified_names() {
        let options = AdapterOptions::from_toml_str("source_folder_markers = [\"geo\"]\n").unwrap();
        let mut sources = load_sources(&bundle_json()).unwrap();
        let model = build_model(&mut sources, options, true).unwrap();
        assert!(model.class_named("shape.Shape").is_some());
    }

    #[test]
    fn bad_config_is_rejected() {
        let err = AdapterOptions::from_toml_str("[profiles.cobol]\n").unwrap_err();
        let err: UnimodelError = err.into();
        assert_eq!(err.exit_code().code(), 2);
    }
}
