//! Source languages and their extraction conventions.
//!
//! A [`LanguageProfile`] captures everything language-specific the adapter
//! needs: implicit receiver names, initializer method names, the
//! no-return-type marker and the type names used for literal initializers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

// ============================================================================
// Language
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Python,
    CSharp,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Python, Language::CSharp];

    /// Detect the language from a file name.
    pub fn from_path(path: &str) -> AdapterResult<Self> {
        let extension = path
            .rsplit(['/', '\\'])
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("py") | Some("pyi") => Ok(Language::Python),
            Some("cs") => Ok(Language::CSharp),
            _ => Err(AdapterError::UnsupportedLanguage {
                path: path.to_string(),
            }),
        }
    }

    /// Tag used in file records and config tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::CSharp => "csharp",
        }
    }

    /// Look up a language by its tag (`"python"`, `"csharp"`).
    pub fn from_tag(tag: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.as_str() == tag)
    }

    /// Built-in profile for this language.
    pub fn default_profile(&self) -> LanguageProfile {
        match self {
            Language::Python => LanguageProfile::python(),
            Language::CSharp => LanguageProfile::csharp(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LanguageProfile
// ============================================================================

/// Type names assigned to attributes initialized from literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralTypes {
    pub integer: String,
    pub float: String,
    pub string: String,
    pub boolean: String,
    pub list: String,
    pub tuple: String,
    pub dict: String,
}

impl Default for LiteralTypes {
    fn default() -> Self {
        LiteralTypes {
            integer: "int".to_string(),
            float: "float".to_string(),
            string: "str".to_string(),
            boolean: "bool".to_string(),
            list: "list".to_string(),
            tuple: "tuple".to_string(),
            dict: "dict".to_string(),
        }
    }
}

/// Per-language extraction conventions.
///
/// Built-in profiles come from [`Language::default_profile`]; configuration
/// adjusts them field by field through
/// [`ProfileOverride`](crate::options::ProfileOverride).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Methods may declare their receiver as an explicit first parameter.
    pub implicit_receivers: bool,
    /// Conventional instance receiver name (`self`).
    pub instance_receiver: String,
    /// Conventional class receiver name (`cls`).
    pub class_receiver: String,
    /// Decorator that makes the class receiver real (`classmethod`).
    /// Matched ignoring ASCII case.
    pub class_method_decorator: String,
    /// Methods whose bodies are scanned for attribute assignments.
    pub initializer_names: Vec<String>,
    /// Receiver names that mark `name.field = ...` as an attribute assignment.
    pub self_names: Vec<String>,
    /// Marker substituted for an absent return type.
    pub no_return_type: String,
    /// Type used when nothing better is known.
    pub default_type: String,
    pub literal_types: LiteralTypes,
}

impl LanguageProfile {
    pub fn python() -> Self {
        LanguageProfile {
            implicit_receivers: true,
            instance_receiver: "self".to_string(),
            class_receiver: "cls".to_string(),
            class_method_decorator: "classmethod".to_string(),
            initializer_names: vec!["__init__".to_string(), "_build".to_string()],
            self_names: vec!["self".to_string()],
            no_return_type: "void".to_string(),
            default_type: "Object".to_string(),
            literal_types: LiteralTypes::default(),
        }
    }

    pub fn csharp() -> Self {
        LanguageProfile {
            implicit_receivers: false,
            instance_receiver: "this".to_string(),
            class_receiver: String::new(),
            class_method_decorator: String::new(),
            initializer_names: Vec::new(),
            self_names: vec!["this".to_string()],
            no_return_type: "void".to_string(),
            default_type: "Object".to_string(),
            literal_types: LiteralTypes {
                integer: "int".to_string(),
                float: "double".to_string(),
                string: "string".to_string(),
                boolean: "bool".to_string(),
                list: "List".to_string(),
                tuple: "Tuple".to_string(),
                dict: "Dictionary".to_string(),
            },
        }
    }

    pub fn is_initializer(&self, method_name: &str) -> bool {
        self.initializer_names.iter().any(|n| n == method_name)
    }

    pub fn is_self_name(&self, name: &str) -> bool {
        self.self_names.iter().any(|n| n == name)
    }

    /// True if `type_name` is the no-return marker (ASCII case-insensitive,
    /// so `void` and `VOID` agree).
    pub fn is_no_return(&self, type_name: &str) -> bool {
        type_name.eq_ignore_ascii_case(&self.no_return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_language_from_extension() {
        assert_eq!(Language::from_path("src/pkg/mod.py").unwrap(), Language::Python);
        assert_eq!(Language::from_path("Lib\\Thing.CS").unwrap(), Language::CSharp);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let err = Language::from_path("README").unwrap_err();
        assert!(matches!(err, AdapterError::UnsupportedLanguage { ref path } if path == "README"));
        assert!(Language::from_path("dir.py/file").is_err());
    }

    #[test]
    fn python_profile_conventions() {
        let profile = Language::Python.default_profile();
        assert!(profile.implicit_receivers);
        assert!(profile.is_initializer("__init__"));
        assert!(profile.is_initializer("_build"));
        assert!(!profile.is_initializer("build"));
        assert!(profile.is_no_return("VOID"));
    }

    #[test]
    fn csharp_has_no_implicit_receivers() {
        let profile = Language::CSharp.default_profile();
        assert!(!profile.implicit_receivers);
        assert!(profile.initializer_names.is_empty());
        assert_eq!(profile.literal_types.string, "string");
    }
}
