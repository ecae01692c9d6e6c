//! Validate command implementation

use crate::{
    config::CliConfig,
    model_source::{self, ModelArgs},
};
use anyhow::Result;
use clap::Args;
use kireme_engine::ModelStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Model selection
    #[command(flatten)]
    pub model: ModelArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        self.model.apply(&mut config.segmenter);

        println!(
            "Validating model: {}",
            model_source::display_name(&config.segmenter)
        );

        match config.segmenter.model.load() {
            Ok(model) => {
                println!("✓ Model is valid!");
                println!("  Features: {}", model.len());
                println!("  Bias: {}", model.bias());
                for (template, count) in template_counts(&model) {
                    println!("  {template}: {count}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Model is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Number of features per template family (`UW`, `BW`, `TW`)
fn template_counts(model: &ModelStore) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for (key, _) in model.iter() {
        let family = key.get(..2).unwrap_or(key);
        *counts.entry(family).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_embedded_model() {
        let args = ValidateArgs {
            model: ModelArgs::default(),
            config: None,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatched_bundle() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("jaml.toml"),
            "modelKeys = [\"UW1:a\", \"UW2:b\"]\nmodelValues = [1]\n",
        )
        .unwrap();

        let args = ValidateArgs {
            model: ModelArgs {
                model_dir: Some(dir.path().to_path_buf()),
                ..ModelArgs::default()
            },
            config: None,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_template_counts() {
        let model = ModelStore::from_pairs(
            vec!["UW1:a", "UW3:b", "BW2:cd", "TW1:efg"],
            vec![1, 2, 3, 4],
        )
        .unwrap();

        let counts = template_counts(&model);
        assert_eq!(counts.get("UW"), Some(&2));
        assert_eq!(counts.get("BW"), Some(&1));
        assert_eq!(counts.get("TW"), Some(&1));
    }
}
