//! Model source selection for CLI commands

use clap::Args;
use kireme_engine::{ModelSource, SegmenterConfig};
use std::path::PathBuf;

/// Model options shared by the commands that load a model
#[derive(Debug, Clone, Default, Args)]
pub struct ModelArgs {
    /// Directory holding <BUNDLE>.toml model bundles
    #[arg(long, value_name = "DIR", conflicts_with = "budoux_json")]
    pub model_dir: Option<PathBuf>,

    /// BudouX JSON model file
    #[arg(long, value_name = "FILE")]
    pub budoux_json: Option<PathBuf>,

    /// Model bundle name
    #[arg(long, value_name = "NAME")]
    pub bundle: Option<String>,
}

impl ModelArgs {
    /// Override the configured model with the command-line options
    pub fn apply(&self, config: &mut SegmenterConfig) {
        if let Some(dir) = &self.model_dir {
            config.model.source = ModelSource::Directory;
            config.model.path = Some(dir.clone());
        } else if let Some(path) = &self.budoux_json {
            config.model.source = ModelSource::Budoux;
            config.model.path = Some(path.clone());
        }
        if let Some(bundle) = &self.bundle {
            config.model.bundle = bundle.clone();
        }
    }
}

/// Human-readable description of where a model comes from
pub fn display_name(config: &SegmenterConfig) -> String {
    let model = &config.model;
    match (model.source, &model.path) {
        (ModelSource::Embedded, _) => format!("Embedded: {}", model.bundle),
        (ModelSource::Directory, Some(dir)) => {
            format!("Directory: {} (bundle: {})", dir.display(), model.bundle)
        }
        (ModelSource::Budoux, Some(path)) => format!("BudouX: {}", path.display()),
        (source, None) => format!("{source:?}: <no path>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_options_keep_config() {
        let mut config = SegmenterConfig::default();
        ModelArgs::default().apply(&mut config);

        assert_eq!(config, SegmenterConfig::default());
        assert_eq!(display_name(&config), "Embedded: jaml");
    }

    #[test]
    fn test_model_dir_overrides_source() {
        let mut config = SegmenterConfig::default();
        ModelArgs {
            model_dir: Some(PathBuf::from("models")),
            bundle: Some("custom".into()),
            ..ModelArgs::default()
        }
        .apply(&mut config);

        assert_eq!(config.model.source, ModelSource::Directory);
        assert_eq!(display_name(&config), "Directory: models (bundle: custom)");
    }

    #[test]
    fn test_budoux_json_overrides_source() {
        let mut config = SegmenterConfig::default();
        ModelArgs {
            budoux_json: Some(PathBuf::from("ja.json")),
            ..ModelArgs::default()
        }
        .apply(&mut config);

        assert_eq!(config.model.source, ModelSource::Budoux);
        assert_eq!(display_name(&config), "BudouX: ja.json");
    }
}
