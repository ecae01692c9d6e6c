//! Model resource bundles
//!
//! A bundle is a TOML document whose top-level arrays are the resource
//! subtables (`modelKeys`, `modelValues`) and whose optional `[metadata]`
//! table describes the model. Bundles are either compiled into the binary
//! or read from a directory.

pub mod budoux;

use kireme_core::{ResourceError, ResourceLoader, MODEL_BUNDLE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

pub use budoux::BudouxModel;

/// Descriptive fields of a bundle's `[metadata]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleMetadata {
    /// Model name
    pub name: Option<String>,
    /// Language the model was trained for
    pub language: Option<String>,
    /// Free-form description
    pub description: Option<String>,
}

/// A parsed resource bundle
#[derive(Debug, Clone, PartialEq)]
pub struct TomlBundle {
    name: String,
    table: toml::Table,
}

impl TomlBundle {
    /// Parse `source` as the bundle called `name`.
    pub fn parse(name: &str, source: &str) -> Result<Self, ResourceError> {
        let table = toml::from_str::<toml::Table>(source)
            .map_err(|e| ResourceError::Malformed(format!("bundle {name}: {e}")))?;
        Ok(Self {
            name: name.to_string(),
            table,
        })
    }

    /// Bundle identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `[metadata]` table, if present
    pub fn metadata(&self) -> Result<Option<BundleMetadata>, ResourceError> {
        match self.table.get("metadata") {
            Some(value) => value
                .clone()
                .try_into()
                .map(Some)
                .map_err(|e| ResourceError::Malformed(format!("{}/metadata: {e}", self.name))),
            None => Ok(None),
        }
    }

    fn array(&self, key: &str) -> Result<&[toml::Value], ResourceError> {
        match self.table.get(key) {
            Some(toml::Value::Array(items)) => Ok(items),
            Some(other) => Err(ResourceError::Malformed(format!(
                "{}/{key} is a {}, expected an array",
                self.name,
                other.type_str()
            ))),
            None => Err(ResourceError::Missing {
                bundle: self.name.clone(),
                key: key.to_string(),
            }),
        }
    }

    /// String array stored under `key`
    pub fn strings(&self, key: &str) -> Result<Vec<String>, ResourceError> {
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    ResourceError::Malformed(format!("{}/{key}[{i}] is not a string", self.name))
                })
            })
            .collect()
    }

    /// Integer array stored under `key`; every entry must fit in an `i32`
    pub fn ints(&self, key: &str) -> Result<Vec<i32>, ResourceError> {
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_integer()
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or_else(|| {
                        ResourceError::Malformed(format!(
                            "{}/{key}[{i}] is not a 32-bit integer",
                            self.name
                        ))
                    })
            })
            .collect()
    }

    fn check_bundle(&self, bundle: &str, key: &str) -> Result<(), ResourceError> {
        if bundle == self.name {
            Ok(())
        } else {
            Err(ResourceError::Missing {
                bundle: bundle.to_string(),
                key: key.to_string(),
            })
        }
    }
}

impl ResourceLoader for TomlBundle {
    fn string_array(&self, bundle: &str, key: &str) -> Result<Vec<String>, ResourceError> {
        self.check_bundle(bundle, key)?;
        self.strings(key)
    }

    fn int_vector(&self, bundle: &str, key: &str) -> Result<Vec<i32>, ResourceError> {
        self.check_bundle(bundle, key)?;
        self.ints(key)
    }
}

/// Bundles compiled into the binary: (name, TOML source)
const EMBEDDED_SOURCES: &[(&str, &str)] =
    &[(MODEL_BUNDLE, include_str!("../../resources/jaml.toml"))];

/// Parsed embedded bundles; a parse failure is kept and reported on lookup
static EMBEDDED: OnceLock<HashMap<&'static str, Result<TomlBundle, ResourceError>>> =
    OnceLock::new();

/// Loader over the bundles compiled into this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    /// Names of the embedded bundles
    pub fn bundle_names() -> impl Iterator<Item = &'static str> {
        EMBEDDED_SOURCES.iter().map(|(name, _)| *name)
    }

    /// The parsed bundle `name`; `key` only labels a miss.
    pub fn bundle(&self, name: &str, key: &str) -> Result<&'static TomlBundle, ResourceError> {
        let bundles = EMBEDDED.get_or_init(|| {
            EMBEDDED_SOURCES
                .iter()
                .map(|(name, source)| (*name, TomlBundle::parse(name, source)))
                .collect()
        });

        match bundles.get(name) {
            Some(Ok(bundle)) => Ok(bundle),
            Some(Err(err)) => Err(err.clone()),
            None => Err(ResourceError::Missing {
                bundle: name.to_string(),
                key: key.to_string(),
            }),
        }
    }
}

impl ResourceLoader for EmbeddedResources {
    fn string_array(&self, bundle: &str, key: &str) -> Result<Vec<String>, ResourceError> {
        self.bundle(bundle, key)?.strings(key)
    }

    fn int_vector(&self, bundle: &str, key: &str) -> Result<Vec<i32>, ResourceError> {
        self.bundle(bundle, key)?.ints(key)
    }
}

/// Loader reading `<root>/<bundle>.toml` on every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File that holds `bundle`
    pub fn bundle_path(&self, bundle: &str) -> PathBuf {
        self.root.join(format!("{bundle}.toml"))
    }

    /// Read and parse `bundle`; `key` only labels a missing file.
    pub fn read_bundle(&self, bundle: &str, key: &str) -> Result<TomlBundle, ResourceError> {
        let path = self.bundle_path(bundle);
        log::debug!("reading bundle {bundle} from {}", path.display());

        let source = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ResourceError::Missing {
                bundle: bundle.to_string(),
                key: key.to_string(),
            },
            _ => ResourceError::Malformed(format!("cannot read {}: {e}", path.display())),
        })?;

        TomlBundle::parse(bundle, &source)
    }
}

impl ResourceLoader for DirectoryResources {
    fn string_array(&self, bundle: &str, key: &str) -> Result<Vec<String>, ResourceError> {
        self.read_bundle(bundle, key)?.strings(key)
    }

    fn int_vector(&self, bundle: &str, key: &str) -> Result<Vec<i32>, ResourceError> {
        self.read_bundle(bundle, key)?.ints(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kireme_core::{ModelStore, MODEL_KEYS, MODEL_VALUES};
    use std::fs;
    use tempfile::TempDir;

    const SMALL_BUNDLE: &str = r#"
modelKeys = ["UW3:は", "BW2:です"]
modelValues = [3000, -2000]

[metadata]
name = "small"
language = "ja"
"#;

    #[test]
    fn test_bundle_arrays() {
        let bundle = TomlBundle::parse("jaml", SMALL_BUNDLE).unwrap();

        assert_eq!(bundle.strings(MODEL_KEYS).unwrap(), vec!["UW3:は", "BW2:です"]);
        assert_eq!(bundle.ints(MODEL_VALUES).unwrap(), vec![3000, -2000]);
        assert_eq!(
            bundle.metadata().unwrap().unwrap().language.as_deref(),
            Some("ja")
        );
    }

    #[test]
    fn test_bundle_missing_subtable() {
        let bundle = TomlBundle::parse("jaml", "modelKeys = []").unwrap();
        assert_eq!(
            bundle.ints(MODEL_VALUES).unwrap_err(),
            ResourceError::Missing {
                bundle: "jaml".into(),
                key: MODEL_VALUES.into(),
            }
        );
        assert_eq!(bundle.metadata().unwrap(), None);
    }

    #[test]
    fn test_bundle_rejects_wrong_types() {
        let bundle = TomlBundle::parse("jaml", "modelKeys = [1]\nmodelValues = \"x\"").unwrap();
        assert!(matches!(
            bundle.strings(MODEL_KEYS),
            Err(ResourceError::Malformed(_))
        ));
        assert!(matches!(
            bundle.ints(MODEL_VALUES),
            Err(ResourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_bundle_rejects_out_of_range_weight() {
        let bundle = TomlBundle::parse("jaml", "modelValues = [3000000000]").unwrap();
        assert!(matches!(
            bundle.ints(MODEL_VALUES),
            Err(ResourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_malformed() {
        assert!(matches!(
            TomlBundle::parse("jaml", "modelKeys = ["),
            Err(ResourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_bundle_loader_checks_name() {
        let bundle = TomlBundle::parse("small", SMALL_BUNDLE).unwrap();
        assert!(matches!(
            ModelStore::load(&bundle),
            Err(ResourceError::Missing { .. })
        ));
        assert_eq!(ModelStore::load_bundle(&bundle, "small").unwrap().len(), 2);
    }

    #[test]
    fn test_embedded_model_loads() {
        let model = ModelStore::load(&EmbeddedResources).unwrap();

        assert!(!model.is_empty());
        assert!(model.contains("UW3:は"));
        // Weights sum to a small positive total
        assert!(model.bias() < 0);
    }

    #[test]
    fn test_embedded_metadata() {
        let bundle = EmbeddedResources.bundle(MODEL_BUNDLE, MODEL_KEYS).unwrap();
        assert_eq!(
            bundle.metadata().unwrap().unwrap().name.as_deref(),
            Some("jaml")
        );
        assert_eq!(EmbeddedResources::bundle_names().collect::<Vec<_>>(), vec!["jaml"]);
    }

    #[test]
    fn test_embedded_unknown_bundle() {
        assert_eq!(
            EmbeddedResources
                .string_array("zhml", MODEL_KEYS)
                .unwrap_err(),
            ResourceError::Missing {
                bundle: "zhml".into(),
                key: MODEL_KEYS.into(),
            }
        );
    }

    #[test]
    fn test_directory_resources() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("jaml.toml"), SMALL_BUNDLE).unwrap();
        let loader = DirectoryResources::new(dir.path());

        let model = ModelStore::load(&loader).unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.bias(), -1000);
    }

    #[test]
    fn test_directory_missing_file() {
        let dir = TempDir::new().unwrap();
        let loader = DirectoryResources::new(dir.path());

        assert_eq!(
            ModelStore::load(&loader).unwrap_err(),
            ResourceError::Missing {
                bundle: MODEL_BUNDLE.into(),
                key: MODEL_VALUES.into(),
            }
        );
    }
}
