//! Per-file extraction context.

use unimodel_ast::{Expression, NodeMeta};
use unimodel_core::position::PositionInfo;
use unimodel_core::types::{CodeElementType, LocationInfo};

use crate::language::{Language, LanguageProfile};
use crate::options::AdapterOptions;
use crate::resolve::{extract_file_path, extract_module_name, extract_package_name, extract_source_folder};

/// Facts about one file shared by every extraction step.
#[derive(Debug, Clone)]
pub struct FileContext<'f> {
    pub language: Language,
    pub profile: LanguageProfile,
    pub source_folder: String,
    pub file_path: String,
    pub package_name: String,
    pub module_name: String,
    pub text: &'f str,
}

impl<'f> FileContext<'f> {
    pub fn new(path: &str, text: &'f str, language: Language, options: &AdapterOptions) -> Self {
        let markers = &options.source_folder_markers;
        FileContext {
            language,
            profile: options.profile(language),
            source_folder: extract_source_folder(path, markers),
            file_path: extract_file_path(path),
            package_name: extract_package_name(path, markers),
            module_name: extract_module_name(path, markers),
            text,
        }
    }

    pub fn location(&self, position: PositionInfo, element_type: CodeElementType) -> LocationInfo {
        LocationInfo::new(&self.source_folder, &self.file_path, position, element_type)
    }

    pub fn locate(&self, meta: &NodeMeta, element_type: CodeElementType) -> LocationInfo {
        self.location(meta.position, element_type)
    }

    /// Source text of a node, empty if the span does not fit the text.
    pub fn text_of(&self, meta: &NodeMeta) -> &'f str {
        meta.position.slice(self.text).unwrap_or_default()
    }

    pub fn expression_text(&self, expression: &Expression) -> String {
        self.text_of(expression.meta()).to_string()
    }
}
