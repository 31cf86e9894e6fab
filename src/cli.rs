//! Command implementations shared by the binary and tests.
//!
//! The binary only parses arguments and reports errors; everything that
//! touches sources, options or the model lives here.

use std::fs;
use std::path::Path;

use tracing::info;

use unimodel_adapter::{AdapterOptions, ModelAdapter};
use unimodel_ast::SourceSet;
use unimodel_core::model::UnifiedModel;

use crate::error::UnimodelError;
use crate::input::read_sources;

/// Load adapter options from a TOML file, or the defaults when none is given.
pub fn load_options(path: Option<&Path>) -> Result<AdapterOptions, UnimodelError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| UnimodelError::io(path, e))?;
            Ok(AdapterOptions::from_toml_str(&text)?)
        }
        None => Ok(AdapterOptions::default()),
    }
}

/// Build the unified model for `sources`, optionally checking its structure.
pub fn build_model(
    sources: &mut SourceSet,
    options: AdapterOptions,
    validate: bool,
) -> Result<UnifiedModel, UnimodelError> {
    let model = ModelAdapter::with_options(options).build(sources)?;
    if validate {
        model.validate()?;
        info!(classes = model.classes().len(), "model validated");
    }
    Ok(model)
}

/// `unimodel build`: read an input bundle from disk and build its model.
pub fn run_build(
    input: &Path,
    config: Option<&Path>,
    validate: bool,
) -> Result<UnifiedModel, UnimodelError> {
    let options = load_options(config)?;
    let mut sources = read_sources(input)?;
    build_model(&mut sources, options, validate)
}

/// `unimodel config`: the default options as TOML.
pub fn default_config() -> Result<String, UnimodelError> {
    Ok(AdapterOptions::default().to_toml_string()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips() {
        let text = default_config().unwrap();
        let options = AdapterOptions::from_toml_str(&text).unwrap();
        assert_eq!(options, AdapterOptions::default());
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = load_options(Some(Path::new("/nonexistent/unimodel.toml"))).unwrap_err();
        assert!(matches!(err, UnimodelError::Io { .. }));
    }

    #[test]
    fn empty_sources_build_empty_model() {
        let mut sources = SourceSet::new();
        let model = build_model(&mut sources, AdapterOptions::default(), true).unwrap();
        assert!(model.classes().is_empty());
    }
}
