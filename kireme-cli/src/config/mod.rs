//! Configuration module

use crate::commands::process::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use kireme_engine::SegmenterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Model and character set configuration
    #[serde(default)]
    pub segmenter: SegmenterConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Text written between phrases in text output
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            separator: "\n".to_string(),
        }
    }
}

impl CliConfig {
    /// Load `path`, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        config.default_format()?;
        config
            .segmenter
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The configured default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        <OutputFormat as ValueEnum>::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kireme_engine::ModelSource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.output.separator, "\n");
        assert!(matches!(
            config.default_format().unwrap(),
            OutputFormat::Text
        ));
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kireme.toml");
        fs::write(
            &path,
            r#"
[output]
default_format = "json"
separator = " / "

[segmenter.model]
source = "budoux"
path = "model.json"

[segmenter.charsets]
extra_close_punctuation = ["〆"]
"#,
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output.separator, " / ");
        assert!(matches!(
            config.default_format().unwrap(),
            OutputFormat::Json
        ));
        assert_eq!(config.segmenter.model.source, ModelSource::Budoux);
        assert_eq!(config.segmenter.charsets.extra_close_punctuation, vec!['〆']);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kireme.toml");
        fs::write(&path, "[output]\ndefault_format = \"yaml\"\n").unwrap();

        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn test_incomplete_model_section_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kireme.toml");
        fs::write(&path, "[segmenter.model]\nsource = \"directory\"\n").unwrap();

        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/kireme.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
