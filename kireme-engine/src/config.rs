//! Segmenter configuration
//!
//! Read from TOML:
//!
//! ```toml
//! [model]
//! source = "directory"
//! path = "models"
//! bundle = "jaml"
//!
//! [charsets]
//! extra_close_punctuation = ["〆"]
//! ```

use crate::error::{EngineError, Result};
use crate::resources::{BudouxModel, DirectoryResources, EmbeddedResources};
use kireme_core::{ModelStore, MODEL_BUNDLE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the model weights come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSource {
    /// Bundles compiled into the binary
    #[default]
    Embedded,
    /// `<path>/<bundle>.toml`
    Directory,
    /// A BudouX JSON model at `path`
    Budoux,
}

/// `[model]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Resource backend
    pub source: ModelSource,
    /// Bundle identifier
    pub bundle: String,
    /// Directory or file, depending on `source`
    pub path: Option<PathBuf>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            source: ModelSource::Embedded,
            bundle: MODEL_BUNDLE.to_string(),
            path: None,
        }
    }
}

impl ModelConfig {
    /// Load the configured model
    pub fn load(&self) -> Result<ModelStore> {
        let bundle = self.bundle.as_str();
        let model = match (self.source, self.path.as_deref()) {
            (ModelSource::Embedded, _) => ModelStore::load_bundle(&EmbeddedResources, bundle)?,
            (ModelSource::Directory, Some(dir)) => {
                ModelStore::load_bundle(&DirectoryResources::new(dir), bundle)?
            }
            (ModelSource::Budoux, Some(path)) => {
                ModelStore::load_bundle(&BudouxModel::from_file(path)?, bundle)?
            }
            (source, None) => {
                return Err(EngineError::ConfigError(format!(
                    "model source {source:?} requires a path"
                )))
            }
        };
        Ok(model)
    }
}

/// `[charsets]` section: characters added to the default edge-correction sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsetConfig {
    /// Extra members of the digit/open punctuation/alphabet set
    pub extra_open_punctuation: Vec<char>,
    /// Extra members of the close punctuation set
    pub extra_close_punctuation: Vec<char>,
}

/// Full segmenter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Model source
    pub model: ModelConfig,
    /// Set extensions
    pub charsets: CharsetConfig,
}

impl SegmenterConfig {
    /// Parse from a TOML string
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check that the model section is complete
    pub fn validate(&self) -> Result<()> {
        if self.model.bundle.is_empty() {
            return Err(EngineError::ConfigError("model bundle name is empty".into()));
        }
        match self.model.source {
            ModelSource::Embedded => Ok(()),
            ModelSource::Directory | ModelSource::Budoux if self.model.path.is_none() => {
                Err(EngineError::ConfigError(format!(
                    "model source {:?} requires a path",
                    self.model.source
                )))
            }
            _ => Ok(()),
        }
    }
}
