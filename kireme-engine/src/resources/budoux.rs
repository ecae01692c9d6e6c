//! Import of BudouX JSON models
//!
//! BudouX ships its weights grouped by template:
//! `{"UW1": {"の": 123}, "BW2": {"です": -456}, ...}`. Each entry becomes
//! the flat key `"UW1:の"`.

use crate::error::{EngineError, Result};
use kireme_core::{is_template_prefix, ResourceError, ResourceLoader, MODEL_KEYS, MODEL_VALUES};
use std::collections::BTreeMap;
use std::path::Path;

/// A BudouX model flattened into aligned key and weight arrays.
///
/// Serves the arrays for any bundle name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudouxModel {
    keys: Vec<String>,
    values: Vec<i32>,
}

impl BudouxModel {
    /// Read a model file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        from_json(&source).map_err(EngineError::from)
    }

    /// Flattened keys in template then n-gram order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Weights aligned with [`keys`](Self::keys)
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    fn check_key(&self, key: &str) -> std::result::Result<(), ResourceError> {
        if key == MODEL_KEYS || key == MODEL_VALUES {
            Ok(())
        } else {
            Err(ResourceError::Missing {
                bundle: "budoux".to_string(),
                key: key.to_string(),
            })
        }
    }
}

/// Parse a BudouX JSON model.
///
/// Templates this engine does not extract are dropped with a warning.
pub fn from_json(source: &str) -> std::result::Result<BudouxModel, ResourceError> {
    let groups: BTreeMap<String, BTreeMap<String, i32>> =
        serde_json::from_str(source).map_err(|e| ResourceError::Malformed(e.to_string()))?;

    let mut model = BudouxModel::default();
    for (template, weights) in groups {
        let prefix = format!("{template}:");
        if !is_template_prefix(&prefix) {
            log::warn!(
                "skipping {} weights of unknown template {template}",
                weights.len()
            );
            continue;
        }
        for (ngram, weight) in weights {
            model.keys.push(format!("{prefix}{ngram}"));
            model.values.push(weight);
        }
    }

    log::debug!("imported {} BudouX features", model.keys.len());
    Ok(model)
}

impl ResourceLoader for BudouxModel {
    fn string_array(
        &self,
        _bundle: &str,
        key: &str,
    ) -> std::result::Result<Vec<String>, ResourceError> {
        self.check_key(key)?;
        Ok(self.keys.clone())
    }

    fn int_vector(
        &self,
        _bundle: &str,
        key: &str,
    ) -> std::result::Result<Vec<i32>, ResourceError> {
        self.check_key(key)?;
        Ok(self.values.clone())
    }
}
