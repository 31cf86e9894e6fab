//! Adapter configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};
use crate::language::{Language, LanguageProfile, LiteralTypes};

/// Options controlling model extraction.
///
/// Loaded from TOML:
///
/// ```toml
/// source_folder_markers = ["src", "lib", "tests", "app"]
/// parallel = true
///
/// [profiles.python]
/// initializer_names = ["__init__", "_build", "setup"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterOptions {
    /// Folder names that end a source folder (`src`, `lib`, `tests`)
    #[serde(default = "default_source_folder_markers")]
    pub source_folder_markers: Vec<String>,

    /// Extract files on the rayon pool (needs the `parallel` feature)
    #[serde(default)]
    pub parallel: bool,

    /// Fail the build on a file in an unsupported language instead of
    /// skipping it
    #[serde(default)]
    pub strict: bool,

    /// Per-language adjustments to the built-in profiles, keyed by language tag
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileOverride>,
}

/// Field-by-field adjustments to a built-in [`LanguageProfile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit_receivers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_method_decorator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_return_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_types: Option<LiteralTypes>,
}

fn default_source_folder_markers() -> Vec<String> {
    vec!["src".to_string(), "lib".to_string(), "tests".to_string()]
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            source_folder_markers: default_source_folder_markers(),
            parallel: false,
            strict: false,
            profiles: BTreeMap::new(),
        }
    }
}

impl ProfileOverride {
    /// Apply the fields that are set on top of `profile`.
    pub fn apply(&self, mut profile: LanguageProfile) -> LanguageProfile {
        if let Some(value) = self.implicit_receivers {
            profile.implicit_receivers = value;
        }
        if let Some(value) = &self.instance_receiver {
            profile.instance_receiver = value.clone();
        }
        if let Some(value) = &self.class_receiver {
            profile.class_receiver = value.clone();
        }
        if let Some(value) = &self.class_method_decorator {
            profile.class_method_decorator = value.clone();
        }
        if let Some(value) = &self.initializer_names {
            profile.initializer_names = value.clone();
        }
        if let Some(value) = &self.self_names {
            profile.self_names = value.clone();
        }
        if let Some(value) = &self.no_return_type {
            profile.no_return_type = value.clone();
        }
        if let Some(value) = &self.default_type {
            profile.default_type = value.clone();
        }
        if let Some(value) = &self.literal_types {
            profile.literal_types = value.clone();
        }
        profile
    }
}

impl AdapterOptions {
    /// Parse and validate options from TOML text.
    pub fn from_toml_str(text: &str) -> AdapterResult<Self> {
        let options: AdapterOptions = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> AdapterResult<String> {
        toml::to_string(self).map_err(|e| AdapterError::Config {
            message: format!("failed to serialize options: {}", e),
        })
    }

    /// Check that every profile key names a known language and that the
    /// markers are plain folder names.
    pub fn validate(&self) -> AdapterResult<()> {
        for tag in self.profiles.keys() {
            if Language::from_tag(tag).is_none() {
                return Err(AdapterError::Config {
                    message: format!("unknown language in [profiles]: {}", tag),
                });
            }
        }
        for marker in &self.source_folder_markers {
            if marker.is_empty() || marker.contains(['/', '\\']) {
                return Err(AdapterError::Config {
                    message: format!("source folder marker must be a single folder name: {:?}", marker),
                });
            }
        }
        Ok(())
    }

    /// The effective profile for `language`: built-in conventions plus any
    /// configured override.
    pub fn profile(&self, language: Language) -> LanguageProfile {
        let profile = language.default_profile();
        match self.profiles.get(language.as_str()) {
            Some(adjustment) => adjustment.apply(profile),
            None => profile,
        }
    }

    pub fn with_source_folder_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_folder_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_profile(mut self, language: Language, adjustment: ProfileOverride) -> Self {
        self.profiles.insert(language.as_str().to_string(), adjustment);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
